pub mod a_star;
pub mod bfs;
pub mod dfs;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::grids::{CellStatus, Coord, WallGrid};

pub use a_star::AStarMH;
pub use bfs::BFS;
pub use dfs::DFS;

/// A search that advances one unit of work per `step` so a driver can
/// redraw the grid in between.
pub trait Pathfinder {
    /// Returns `false` once the goal has been reached and traced or the
    /// frontier ran dry. Stepping a finished search is a no-op.
    fn step(&mut self, grid: &mut WallGrid) -> bool;
    fn is_done(&self) -> bool;
    fn kind(&self) -> SolverKind;
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SolverKind {
    DFS,
    BFS,
    AStar,
}

impl SolverKind {
    pub const ALL: [SolverKind; 3] = [SolverKind::DFS, SolverKind::BFS, SolverKind::AStar];
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolverKind::DFS => "DFS",
            SolverKind::BFS => "BFS",
            SolverKind::AStar => "A*",
        };
        f.write_str(name)
    }
}

impl FromStr for SolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(SolverKind::DFS),
            "bfs" => Ok(SolverKind::BFS),
            "astar" | "a*" | "a-star" => Ok(SolverKind::AStar),
            other => Err(format!("unknown solver `{}`", other)),
        }
    }
}

/// Builds fresh run state for `kind` and seeds the grid with its start cell.
pub fn new_solver(kind: SolverKind, grid: &mut WallGrid) -> Box<dyn Pathfinder> {
    debug!(
        "starting {} on {}x{} grid",
        kind,
        grid.rows(),
        grid.columns()
    );

    match kind {
        SolverKind::DFS => Box::new(DFS::new(grid)),
        SolverKind::BFS => Box::new(BFS::new(grid)),
        SolverKind::AStar => Box::new(AStarMH::new(grid)),
    }
}

pub fn manhattan(one: Coord, two: Coord) -> usize {
    let rows = if one.0 > two.0 {
        one.0 - two.0
    } else {
        two.0 - one.0
    };
    let cols = if one.1 > two.1 {
        one.1 - two.1
    } else {
        two.1 - one.1
    };

    rows + cols
}

/// Marks `cursor` as part of the path and hands back its parent, `None` once
/// the start has been reached.
fn trace_back(
    grid: &mut WallGrid,
    parents: &HashMap<Coord, Coord>,
    cursor: Coord,
) -> Option<Coord> {
    grid.set_status(cursor, CellStatus::Final);
    parents.get(&cursor).copied()
}
