pub mod backtracker;

use crate::grids::WallGrid;

pub use backtracker::RecursiveBacktracker;

pub trait Generator {
    /// One carve or one backtrack.
    fn step_generation(&mut self);
    fn is_done(&self) -> bool;
    fn grid(&self) -> &WallGrid;
    fn into_grid(self) -> WallGrid
    where
        Self: Sized;

    fn generate_maze(mut self) -> WallGrid
    where
        Self: Sized,
    {
        while !self.is_done() {
            self.step_generation();
        }

        self.into_grid()
    }
}
