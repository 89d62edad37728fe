use log::{debug, trace};
use rand::prelude::*;

use crate::error::Result;
use crate::generators::Generator;
use crate::grids::{CellStatus, Coord, WallGrid};

/// Randomized depth first carving from the top left corner.
pub struct RecursiveBacktracker {
    grid: WallGrid,
    rng: StdRng,
    stack: Vec<Coord>,
    current_cell: Coord,
    pub done: bool,
}

impl RecursiveBacktracker {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::with_rng(rows, cols, StdRng::from_entropy())
    }

    pub fn with_seed(rows: usize, cols: usize, seed: u64) -> Result<Self> {
        Self::with_rng(rows, cols, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rows: usize, cols: usize, rng: StdRng) -> Result<Self> {
        let mut grid = WallGrid::with_dims(rows, cols)?;
        let current_cell = grid.start();
        grid.mark_visited(current_cell);
        grid.set_status(current_cell, CellStatus::Current);

        Ok(Self {
            grid,
            rng,
            stack: Vec::new(),
            current_cell,
            done: false,
        })
    }

    fn move_to(&mut self, next: Coord) {
        self.grid.set_status(self.current_cell, CellStatus::Explored);
        self.current_cell = next;
        self.grid.set_status(next, CellStatus::Current);
    }
}

impl Generator for RecursiveBacktracker {
    fn step_generation(&mut self) {
        if self.done {
            return;
        }

        let neighbors = self.grid.unvisited_neighbors(self.current_cell);
        if let Some(&chosen) = neighbors.choose(&mut self.rng) {
            trace!("carving {:?} -> {:?}", self.current_cell, chosen);
            self.grid.clear_wall_between(self.current_cell, chosen);
            self.stack.push(self.current_cell);
            self.move_to(chosen);
            self.grid.mark_visited(chosen);
        } else if let Some(prev) = self.stack.pop() {
            trace!("backtracking {:?} -> {:?}", self.current_cell, prev);
            self.move_to(prev);
        }

        if self.stack.is_empty() && self.grid.unvisited_neighbors(self.current_cell).is_empty() {
            self.done = true;
            self.grid.clear_generation_flags();
            debug!(
                "generated {}x{} maze with {} passages",
                self.grid.rows(),
                self.grid.columns(),
                self.grid.open_edge_count()
            );
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn grid(&self) -> &WallGrid {
        &self.grid
    }

    fn into_grid(self) -> WallGrid {
        self.grid
    }
}

#[cfg(test)]
mod test_backtracker {
    use super::*;
    use std::collections::HashSet;

    fn reachable_from_start(grid: &WallGrid) -> usize {
        let mut seen = HashSet::new();
        let mut stack = vec![grid.start()];
        seen.insert(grid.start());

        while let Some(cell) = stack.pop() {
            for neighbor in grid.reachable_neighbors(cell) {
                if seen.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        seen.len()
    }

    fn walls_of(grid: &WallGrid) -> Vec<(bool, bool, bool, bool)> {
        grid.cells()
            .map(|cell| {
                (
                    cell.walls.top,
                    cell.walls.right,
                    cell.walls.bottom,
                    cell.walls.left,
                )
            })
            .collect()
    }

    #[test]
    fn carves_a_spanning_tree() {
        for &(rows, cols) in &[(1, 1), (1, 7), (6, 1), (2, 2), (5, 8), (20, 20), (13, 31)] {
            let grid = RecursiveBacktracker::with_seed(rows, cols, 42)
                .unwrap()
                .generate_maze();

            assert_eq!(grid.open_edge_count(), rows * cols - 1, "{}x{}", rows, cols);
            assert_eq!(reachable_from_start(&grid), rows * cols, "{}x{}", rows, cols);
        }
    }

    #[test]
    fn walls_stay_consistent_between_neighbors() {
        let grid = RecursiveBacktracker::with_seed(9, 11, 7)
            .unwrap()
            .generate_maze();

        for row in 0..grid.rows() {
            for col in 0..grid.columns() {
                for (neighbor, _) in grid.neighborhood_of((row, col)) {
                    assert_eq!(
                        grid.has_wall_between((row, col), neighbor),
                        grid.has_wall_between(neighbor, (row, col))
                    );
                }
            }
        }
    }

    #[test]
    fn outer_walls_are_never_carved() {
        let grid = RecursiveBacktracker::with_seed(6, 9, 3)
            .unwrap()
            .generate_maze();

        for cell in grid.cells() {
            if cell.row == 0 {
                assert!(cell.walls.top);
            }
            if cell.row == grid.rows() - 1 {
                assert!(cell.walls.bottom);
            }
            if cell.col == 0 {
                assert!(cell.walls.left);
            }
            if cell.col == grid.columns() - 1 {
                assert!(cell.walls.right);
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let one = RecursiveBacktracker::with_seed(15, 15, 1234)
            .unwrap()
            .generate_maze();
        let two = RecursiveBacktracker::with_seed(15, 15, 1234)
            .unwrap()
            .generate_maze();

        assert_eq!(walls_of(&one), walls_of(&two));
    }

    #[test]
    fn finished_grid_is_solver_ready() {
        let grid = RecursiveBacktracker::with_seed(8, 8, 99)
            .unwrap()
            .generate_maze();

        assert_eq!(grid.count_status(CellStatus::Unvisited), 64);
        assert!(grid.cells().all(|cell| {
            let coord = (cell.row, cell.col);
            !grid.is_visited(coord) && !grid.is_solver_visited(coord)
        }));
    }

    #[test]
    fn single_cell_keeps_all_walls() {
        let mut generator = RecursiveBacktracker::with_seed(1, 1, 0).unwrap();
        assert!(!generator.is_done());

        generator.step_generation();
        assert!(generator.is_done());

        let grid = generator.into_grid();
        let cell = grid.get_cell(0, 0);
        assert!(cell.walls.top && cell.walls.right && cell.walls.bottom && cell.walls.left);
        assert_eq!(cell.status, CellStatus::Unvisited);
    }

    #[test]
    fn stepping_shows_a_single_cursor() {
        let mut generator = RecursiveBacktracker::with_seed(6, 6, 5).unwrap();
        let mut steps = 0;

        while !generator.is_done() {
            generator.step_generation();
            let cursors = generator.grid().count_status(CellStatus::Current);
            steps += 1;
            if generator.is_done() {
                assert_eq!(cursors, 0);
            } else {
                assert_eq!(cursors, 1);
            }
        }

        // every carve is later undone by exactly one backtrack
        assert_eq!(steps, 2 * (36 - 1));

        // extra steps change nothing
        generator.step_generation();
        assert_eq!(generator.grid().open_edge_count(), 35);
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(RecursiveBacktracker::new(0, 3).is_err());
        assert!(RecursiveBacktracker::with_seed(3, 0, 1).is_err());
    }
}
