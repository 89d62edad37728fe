pub mod error;
pub mod generators;
pub mod grids;
pub mod maze;
pub mod solvers;

pub use error::{MazeError, Result};
pub use generators::{Generator, RecursiveBacktracker};
pub use grids::{CellStatus, CellView, Coord, WallGrid, Walls};
pub use maze::{Maze, MazeSize};
pub use solvers::{Pathfinder, SolverKind};

/// Carves a perfect maze, ready to be handed to a solver.
pub fn generate_maze(rows: usize, cols: usize) -> Result<WallGrid> {
    Ok(RecursiveBacktracker::new(rows, cols)?.generate_maze())
}

pub fn generate_maze_seeded(rows: usize, cols: usize, seed: u64) -> Result<WallGrid> {
    Ok(RecursiveBacktracker::with_seed(rows, cols, seed)?.generate_maze())
}

pub fn create_solver(kind: SolverKind, grid: &mut WallGrid) -> Box<dyn Pathfinder> {
    solvers::new_solver(kind, grid)
}

/// Clears every status and solver mark, the walls are left alone.
pub fn reset_grid(grid: &mut WallGrid) {
    grid.reset();
}
