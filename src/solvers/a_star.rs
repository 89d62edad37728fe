use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};

use crate::grids::{CellStatus, Coord, WallGrid};
use crate::solvers::{manhattan, trace_back, Pathfinder, SolverKind};

/// `(estimated total, insertion sequence, cell)`, the sequence keeps ties
/// first-in first-out and makes every entry unique.
type Entry = Reverse<(usize, u64, Coord)>;

enum Phase {
    Pop,
    Relax {
        current: Coord,
        neighbors: Vec<Coord>,
        next: usize,
    },
    Trace(Coord),
    Done,
}

/// A* with the manhattan distance to the goal as heuristic and unit edges.
pub struct AStarMH {
    goal: Coord,
    columns: usize,
    open_set: BinaryHeap<Entry>,
    g_score: Vec<usize>,
    parents: HashMap<Coord, Coord>,
    counter: u64,
    phase: Phase,
}

impl AStarMH {
    pub fn new(grid: &mut WallGrid) -> Self {
        let start = grid.start();
        let goal = grid.goal();

        let mut g_score = vec![usize::MAX; grid.len()];
        g_score[grid.index_of(start)] = 0;

        let mut open_set = BinaryHeap::new();
        open_set.push(Reverse((manhattan(start, goal), 0, start)));
        grid.set_status(start, CellStatus::Current);

        Self {
            goal,
            columns: grid.columns(),
            open_set,
            g_score,
            parents: HashMap::new(),
            counter: 0,
            phase: Phase::Pop,
        }
    }

    #[inline]
    fn index_of(&self, coord: Coord) -> usize {
        (self.columns * coord.0) + coord.1
    }

    fn g(&self, coord: Coord) -> usize {
        self.g_score[self.index_of(coord)]
    }
}

impl Pathfinder for AStarMH {
    fn step(&mut self, grid: &mut WallGrid) -> bool {
        match std::mem::replace(&mut self.phase, Phase::Done) {
            Phase::Done => false,
            Phase::Pop => {
                // stale entries are popped like any other, the cost check
                // below keeps them from relaxing anything
                let current = match self.open_set.pop() {
                    Some(Reverse((_, _, current))) => current,
                    None => {
                        debug!("a* open set exhausted without reaching goal");
                        return false;
                    }
                };
                grid.set_status(current, CellStatus::Current);

                self.phase = if current == self.goal {
                    debug!("a* reached goal at cost {}", self.g(current));
                    Phase::Trace(current)
                } else {
                    Phase::Relax {
                        current,
                        neighbors: grid.reachable_neighbors(current),
                        next: 0,
                    }
                };
                true
            }
            Phase::Relax {
                current,
                neighbors,
                mut next,
            } => {
                let tentative = self.g(current).saturating_add(1);

                while next < neighbors.len() {
                    let neighbor = neighbors[next];
                    next += 1;

                    if tentative < self.g(neighbor) {
                        let index = self.index_of(neighbor);
                        self.g_score[index] = tentative;
                        self.parents.insert(neighbor, current);

                        self.counter += 1;
                        let f_score = tentative + manhattan(neighbor, self.goal);
                        self.open_set
                            .push(Reverse((f_score, self.counter, neighbor)));
                        trace!("a* relaxed {:?} to g={} f={}", neighbor, tentative, f_score);

                        grid.set_status(neighbor, CellStatus::Current);
                        self.phase = Phase::Relax {
                            current,
                            neighbors,
                            next,
                        };
                        return true;
                    }
                }

                if grid.status(current) != CellStatus::Final {
                    grid.set_status(current, CellStatus::Explored);
                }

                if self.open_set.is_empty() {
                    debug!("a* open set exhausted without reaching goal");
                    return false;
                }
                self.phase = Phase::Pop;
                true
            }
            Phase::Trace(cursor) => match trace_back(grid, &self.parents, cursor) {
                Some(parent) => {
                    self.phase = Phase::Trace(parent);
                    true
                }
                None => false,
            },
        }
    }

    fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    fn kind(&self) -> SolverKind {
        SolverKind::AStar
    }
}

#[cfg(test)]
mod test_a_star {
    use super::*;

    fn run(solver: &mut AStarMH, grid: &mut WallGrid) -> usize {
        let mut steps = 1;
        while solver.step(grid) {
            steps += 1;
        }
        steps
    }

    #[test]
    fn single_cell_completes_on_second_step() {
        let mut grid = WallGrid::with_dims(1, 1).unwrap();
        let mut a_star = AStarMH::new(&mut grid);

        assert_eq!(run(&mut a_star, &mut grid), 2);
        assert!(a_star.is_done());
        assert_eq!(grid.count_status(CellStatus::Final), 1);
    }

    #[test]
    fn ties_go_to_the_first_inserted() {
        let mut grid = WallGrid::with_dims(1, 1).unwrap();
        let mut a_star = AStarMH::new(&mut grid);
        a_star.open_set.clear();
        a_star.open_set.push(Reverse((4, 2, (0, 0))));
        a_star.open_set.push(Reverse((4, 1, (0, 0))));
        a_star.open_set.push(Reverse((3, 9, (0, 0))));

        let order: Vec<_> = std::iter::from_fn(|| a_star.open_set.pop())
            .map(|Reverse((f, seq, _))| (f, seq))
            .collect();
        assert_eq!(order, vec![(3, 9), (4, 1), (4, 2)]);
    }

    #[test]
    fn prefers_the_cell_closer_to_goal() {
        // plus shape around (1,1) on a 3x3, goal (2,2) reachable through (1,2)
        let mut grid = WallGrid::with_dims(3, 3).unwrap();
        grid.clear_wall_between((0, 0), (0, 1));
        grid.clear_wall_between((0, 1), (1, 1));
        grid.clear_wall_between((1, 1), (1, 0));
        grid.clear_wall_between((1, 0), (2, 0));
        grid.clear_wall_between((2, 0), (2, 1));
        grid.clear_wall_between((1, 1), (1, 2));
        grid.clear_wall_between((1, 2), (0, 2));
        grid.clear_wall_between((1, 2), (2, 2));
        let mut a_star = AStarMH::new(&mut grid);
        run(&mut a_star, &mut grid);

        assert_eq!(
            grid.final_path(),
            vec![(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)]
        );
        // the branch towards (2,0) costs more than it promises and is never expanded
        assert_eq!(grid.status((2, 1)), CellStatus::Unvisited);
    }

    #[test]
    fn unreachable_goal_terminates() {
        let mut grid = WallGrid::with_dims(3, 3).unwrap();
        grid.clear_wall_between((0, 0), (0, 1));
        grid.clear_wall_between((0, 1), (1, 1));
        let mut a_star = AStarMH::new(&mut grid);

        let steps = run(&mut a_star, &mut grid);

        assert!(steps < 20);
        assert!(a_star.is_done());
        assert_eq!(grid.count_status(CellStatus::Final), 0);
        assert_eq!(grid.count_status(CellStatus::Explored), 3);
        assert!(!a_star.step(&mut grid));
    }
}
