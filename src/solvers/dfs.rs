use log::{debug, trace};

use crate::grids::{CellStatus, Coord, WallGrid};
use crate::solvers::{Pathfinder, SolverKind};

/// Depth first search over an explicit stack of `(cell, next neighbor)`
/// frames. The stack is the path, so no parent map is kept.
pub struct DFS {
    start: Coord,
    goal: Coord,
    stack: Vec<(Coord, usize)>,
    done: bool,
}

impl DFS {
    pub fn new(grid: &mut WallGrid) -> Self {
        grid.clear_solver_visited();

        let start = grid.start();
        grid.mark_solver_visited(start);

        Self {
            start,
            goal: grid.goal(),
            stack: vec![(start, 0)],
            done: false,
        }
    }

    fn finish(&mut self) -> bool {
        self.done = true;
        false
    }
}

impl Pathfinder for DFS {
    fn step(&mut self, grid: &mut WallGrid) -> bool {
        if self.done {
            return false;
        }

        let (current, next) = match self.stack.last() {
            Some(&frame) => frame,
            None => return self.finish(),
        };

        let top = self.stack.len() - 1;
        for (depth, &(cell, _)) in self.stack.iter().enumerate() {
            let status = if depth == top {
                CellStatus::Current
            } else {
                CellStatus::Explored
            };
            grid.set_status(cell, status);
        }

        if current == self.goal {
            for &(cell, _) in &self.stack {
                grid.set_status(cell, CellStatus::Final);
            }
            debug!("dfs reached goal, path of {} cells", self.stack.len());
            return self.finish();
        }

        let neighbors = grid.reachable_neighbors(current);
        if next < neighbors.len() {
            self.stack[top].1 += 1;

            let neighbor = neighbors[next];
            if !grid.is_solver_visited(neighbor) {
                trace!("dfs deepening {:?} -> {:?}", current, neighbor);
                grid.mark_solver_visited(neighbor);
                self.stack.push((neighbor, 0));
            }
            true
        } else {
            // dead end, hand the cell back to the background
            if current != self.start && current != self.goal {
                grid.set_status(current, CellStatus::Unvisited);
            }
            self.stack.pop();
            trace!("dfs backtracking from {:?}", current);

            if self.stack.is_empty() {
                debug!("dfs exhausted without reaching goal");
                return self.finish();
            }
            true
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn kind(&self) -> SolverKind {
        SolverKind::DFS
    }
}

#[cfg(test)]
mod test_dfs {
    use super::*;

    fn corridor() -> WallGrid {
        // 2x3, S-shaped: (0,0) (0,1) (0,2) down to (1,2), plus a dead end at (1,0)-(1,1)
        let mut grid = WallGrid::with_dims(2, 3).unwrap();
        grid.clear_wall_between((0, 0), (0, 1));
        grid.clear_wall_between((0, 1), (0, 2));
        grid.clear_wall_between((0, 2), (1, 2));
        grid.clear_wall_between((0, 0), (1, 0));
        grid.clear_wall_between((1, 0), (1, 1));
        grid
    }

    fn run(solver: &mut DFS, grid: &mut WallGrid) -> usize {
        let mut steps = 1;
        while solver.step(grid) {
            steps += 1;
        }
        steps
    }

    #[test]
    fn single_cell_completes_on_first_step() {
        let mut grid = WallGrid::with_dims(1, 1).unwrap();
        let mut dfs = DFS::new(&mut grid);

        assert!(!dfs.step(&mut grid));
        assert!(dfs.is_done());
        assert_eq!(grid.count_status(CellStatus::Final), 1);
    }

    #[test]
    fn explores_dead_end_first_and_resets_it() {
        let mut grid = corridor();
        let mut dfs = DFS::new(&mut grid);

        // (0,0) tries south first, into the dead end
        assert!(dfs.step(&mut grid));
        assert!(dfs.step(&mut grid));
        assert!(dfs.step(&mut grid));
        assert_eq!(dfs.stack.len(), 3);
        assert!(dfs.step(&mut grid));
        assert_eq!(grid.status((1, 1)), CellStatus::Current);
        assert_eq!(grid.status((1, 0)), CellStatus::Explored);

        run(&mut dfs, &mut grid);

        assert_eq!(grid.status((1, 0)), CellStatus::Unvisited);
        assert_eq!(grid.status((1, 1)), CellStatus::Unvisited);
        assert_eq!(grid.final_path(), vec![(0, 0), (0, 1), (0, 2), (1, 2)]);
        assert_eq!(grid.count_status(CellStatus::Final), 4);
    }

    #[test]
    fn current_marks_only_top_of_stack() {
        let mut grid = corridor();
        let mut dfs = DFS::new(&mut grid);

        for _ in 0..4 {
            dfs.step(&mut grid);
            assert_eq!(grid.count_status(CellStatus::Current), 1);
        }
    }

    #[test]
    fn walled_off_goal_finishes_without_path() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();
        grid.clear_wall_between((0, 0), (0, 1));
        let mut dfs = DFS::new(&mut grid);

        let steps = run(&mut dfs, &mut grid);

        assert!(dfs.is_done());
        assert!(steps < 10);
        assert_eq!(grid.count_status(CellStatus::Final), 0);
        // start is never handed back
        assert_eq!(grid.status((0, 0)), CellStatus::Current);
        assert!(!dfs.step(&mut grid));
    }

    #[test]
    fn new_clears_stale_visitation() {
        let mut grid = corridor();
        grid.mark_solver_visited((0, 1));

        let mut dfs = DFS::new(&mut grid);
        run(&mut dfs, &mut grid);

        assert_eq!(grid.status((1, 2)), CellStatus::Final);
    }
}
