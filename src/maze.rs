use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::prelude::*;

use crate::error::Result;
use crate::generators::{Generator, RecursiveBacktracker};
use crate::grids::WallGrid;
use crate::solvers::{new_solver, Pathfinder, SolverKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeSize {
    Small,
    Medium,
    Large,
}

impl MazeSize {
    pub fn dims(self) -> (usize, usize) {
        match self {
            MazeSize::Small => (20, 20),
            MazeSize::Medium => (50, 50),
            MazeSize::Large => (100, 100),
        }
    }
}

impl fmt::Display for MazeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.dims();
        let name = match self {
            MazeSize::Small => "Small",
            MazeSize::Medium => "Medium",
            MazeSize::Large => "Large",
        };
        write!(f, "{} ({}x{})", name, rows, cols)
    }
}

impl FromStr for MazeSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(MazeSize::Small),
            "medium" => Ok(MazeSize::Medium),
            "large" => Ok(MazeSize::Large),
            other => Err(format!("unknown maze size `{}`", other)),
        }
    }
}

/// One maze and the single search running on it.
///
/// Swapping the algorithm only records the choice, it is picked up by the
/// next `restart` or `regenerate`. Both throw away the old run state before
/// building a new one.
pub struct Maze {
    grid: WallGrid,
    solver: Box<dyn Pathfinder>,
    solver_kind: SolverKind,
    rng: StdRng,
    steps: usize,
}

impl Maze {
    pub fn new(rows: usize, cols: usize, solver_kind: SolverKind) -> Result<Self> {
        Self::with_rng(rows, cols, solver_kind, StdRng::from_entropy())
    }

    /// Every maze this session generates follows from `seed`.
    pub fn with_seed(rows: usize, cols: usize, solver_kind: SolverKind, seed: u64) -> Result<Self> {
        Self::with_rng(rows, cols, solver_kind, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rows: usize, cols: usize, solver_kind: SolverKind, mut rng: StdRng) -> Result<Self> {
        let mut grid = RecursiveBacktracker::with_seed(rows, cols, rng.gen())?.generate_maze();
        let solver = new_solver(solver_kind, &mut grid);

        Ok(Self {
            grid,
            solver,
            solver_kind,
            rng,
            steps: 0,
        })
    }

    /// Generator for the next maze, for drivers that want to animate carving
    /// before handing the result to `replace_grid`.
    pub fn next_generator(&mut self, rows: usize, cols: usize) -> Result<RecursiveBacktracker> {
        RecursiveBacktracker::with_seed(rows, cols, self.rng.gen())
    }

    pub fn replace_grid(&mut self, grid: WallGrid) {
        self.grid = grid;
        self.rebuild_solver();
    }

    pub fn regenerate(&mut self) -> Result<()> {
        self.regenerate_with_dims(self.grid.rows(), self.grid.columns())
    }

    pub fn regenerate_with_dims(&mut self, rows: usize, cols: usize) -> Result<()> {
        let grid = self.next_generator(rows, cols)?.generate_maze();
        debug!("new {}x{} maze", rows, cols);
        self.replace_grid(grid);
        Ok(())
    }

    /// Same walls, fresh search.
    pub fn restart(&mut self) {
        self.grid.reset();
        self.rebuild_solver();
    }

    fn rebuild_solver(&mut self) {
        self.steps = 0;
        self.solver = new_solver(self.solver_kind, &mut self.grid);
    }

    pub fn set_solver_kind(&mut self, solver_kind: SolverKind) {
        self.solver_kind = solver_kind;
    }

    /// Advances the active search by one step, `false` once it has finished.
    pub fn step(&mut self) -> bool {
        if self.solver.is_done() {
            return false;
        }

        self.steps += 1;
        self.solver.step(&mut self.grid)
    }

    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn solver_kind(&self) -> SolverKind {
        self.solver_kind
    }

    /// The algorithm actually running, which lags `solver_kind` until the
    /// next restart.
    pub fn active_solver(&self) -> SolverKind {
        self.solver.kind()
    }

    pub fn is_done(&self) -> bool {
        self.solver.is_done()
    }
}
