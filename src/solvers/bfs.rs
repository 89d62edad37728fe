use std::collections::{HashMap, VecDeque};

use log::{debug, trace};

use crate::grids::{CellStatus, Coord, WallGrid};
use crate::solvers::{trace_back, Pathfinder, SolverKind};

enum Phase {
    Dequeue,
    Discover {
        current: Coord,
        neighbors: Vec<Coord>,
        next: usize,
    },
    Trace(Coord),
    Done,
}

/// Breadth first search. A cell counts as discovered as soon as its status
/// leaves `Unvisited`.
pub struct BFS {
    goal: Coord,
    queue: VecDeque<Coord>,
    parents: HashMap<Coord, Coord>,
    phase: Phase,
}

impl BFS {
    pub fn new(grid: &mut WallGrid) -> Self {
        let start = grid.start();
        let mut queue = VecDeque::new();
        queue.push_back(start);
        grid.set_status(start, CellStatus::Current);

        Self {
            goal: grid.goal(),
            queue,
            parents: HashMap::new(),
            phase: Phase::Dequeue,
        }
    }
}

impl Pathfinder for BFS {
    fn step(&mut self, grid: &mut WallGrid) -> bool {
        match std::mem::replace(&mut self.phase, Phase::Done) {
            Phase::Done => false,
            Phase::Dequeue => {
                let current = match self.queue.pop_front() {
                    Some(current) => current,
                    None => {
                        debug!("bfs frontier exhausted without reaching goal");
                        return false;
                    }
                };
                grid.set_status(current, CellStatus::Current);

                self.phase = if current == self.goal {
                    debug!("bfs reached goal after {} parents", self.parents.len());
                    Phase::Trace(current)
                } else {
                    Phase::Discover {
                        current,
                        neighbors: grid.reachable_neighbors(current),
                        next: 0,
                    }
                };
                true
            }
            Phase::Discover {
                current,
                neighbors,
                mut next,
            } => {
                while next < neighbors.len() {
                    let neighbor = neighbors[next];
                    next += 1;

                    if grid.status(neighbor) == CellStatus::Unvisited {
                        trace!("bfs discovered {:?} from {:?}", neighbor, current);
                        grid.set_status(neighbor, CellStatus::Current);
                        self.parents.insert(neighbor, current);
                        self.queue.push_back(neighbor);
                        self.phase = Phase::Discover {
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

                if self.queue.is_empty() {
                    debug!("bfs frontier exhausted without reaching goal");
                    return false;
                }
                self.phase = Phase::Dequeue;
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
        SolverKind::BFS
    }
}
