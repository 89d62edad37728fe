//! Command line options for the terminal driver.

use std::time::Duration;

use clap::{Arg, ArgAction, ArgMatches, Command};

use maze_solver::grids::wall_grid::DEFAULT_DIMS;
use maze_solver::{MazeSize, SolverKind};

pub const DEFAULT_DELAY_MS: u64 = 250;
pub const MIN_DELAY_MS: u64 = 1;
pub const MAX_DELAY_MS: u64 = 1000;
pub const DELAY_STEP_MS: u64 = 50;

fn make_options_parser() -> Command {
    Command::new("maze-solver")
        .version("v0.1.0")
        .about("Generates a perfect maze and animates DFS, BFS or A* solving it")
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("Search to run")
                .default_value("dfs")
                .value_parser(["dfs", "bfs", "astar"]),
        )
        .arg(
            Arg::new("size")
                .short('s')
                .long("size")
                .help("Size preset, overridden by --rows/--cols")
                .value_parser(["small", "medium", "large"]),
        )
        .arg(
            Arg::new("rows")
                .short('r')
                .long("rows")
                .value_name("N")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("cols")
                .short('c')
                .long("cols")
                .value_name("N")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("delay")
                .short('d')
                .long("delay")
                .value_name("MS")
                .help("Milliseconds between solver steps")
                .default_value("250")
                .value_parser(clap::value_parser!(u64).range(MIN_DELAY_MS..=MAX_DELAY_MS)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for reproducible mazes")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("animate-generation")
                .short('g')
                .long("animate-generation")
                .help("Show the maze being carved before solving it")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Debug)]
pub struct Options {
    pub rows: usize,
    pub cols: usize,
    pub solver_kind: SolverKind,
    pub delay: Duration,
    pub seed: Option<u64>,
    pub animate_generation: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            rows: DEFAULT_DIMS.0,
            cols: DEFAULT_DIMS.1,
            solver_kind: SolverKind::DFS,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            seed: None,
            animate_generation: false,
        }
    }
}

impl Options {
    /// Parses the process arguments, printing usage and exiting on bad input.
    pub fn from_args() -> Self {
        Self::from_matches(&make_options_parser().get_matches())
    }

    pub fn parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let mut options = Options::default();

        if let Some(kind) = matches
            .get_one::<String>("algorithm")
            .and_then(|name| name.parse().ok())
        {
            options.solver_kind = kind;
        }

        if let Some(size) = matches
            .get_one::<String>("size")
            .and_then(|name| name.parse::<MazeSize>().ok())
        {
            let (rows, cols) = size.dims();
            options.rows = rows;
            options.cols = cols;
        }
        if let Some(&rows) = matches.get_one::<usize>("rows") {
            options.rows = rows;
        }
        if let Some(&cols) = matches.get_one::<usize>("cols") {
            options.cols = cols;
        }

        if let Some(&delay) = matches.get_one::<u64>("delay") {
            options.delay = Duration::from_millis(delay);
        }
        options.seed = matches.get_one::<u64>("seed").copied();
        options.animate_generation = matches.get_flag("animate-generation");

        options
    }
}
