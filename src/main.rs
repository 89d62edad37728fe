use std::io;
use std::process;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};

use maze_solver::{Generator, Maze, MazeError, RecursiveBacktracker, Result, SolverKind, WallGrid};

mod options;
use options::{Options, DELAY_STEP_MS, MAX_DELAY_MS, MIN_DELAY_MS};

mod renderer;
use renderer::{Renderer, TerminalGuard};

pub struct State {
    pub maze: Maze,
    // carving in progress, handed to `maze` once finished
    pub generator: Option<RecursiveBacktracker>,
    pub animate_generation: bool,

    pub rows: usize,
    pub cols: usize,
    pub delay: Duration,
    pub paused: bool,
    pub quit: bool,
}

impl State {
    fn new(options: &Options) -> Result<Self> {
        let maze = match options.seed {
            Some(seed) => Maze::with_seed(options.rows, options.cols, options.solver_kind, seed)?,
            None => Maze::new(options.rows, options.cols, options.solver_kind)?,
        };

        let mut state = Self {
            maze,
            generator: None,
            animate_generation: options.animate_generation,
            rows: options.rows,
            cols: options.cols,
            delay: options.delay,
            paused: false,
            quit: false,
        };
        if state.animate_generation {
            state.generator = Some(state.maze.next_generator(state.rows, state.cols)?);
        }
        Ok(state)
    }

    fn grid(&self) -> &WallGrid {
        match &self.generator {
            Some(generator) => generator.grid(),
            None => self.maze.grid(),
        }
    }

    fn new_maze(&mut self) -> Result<()> {
        if self.animate_generation {
            self.generator = Some(self.maze.next_generator(self.rows, self.cols)?);
        } else {
            self.generator = None;
            self.maze.regenerate_with_dims(self.rows, self.cols)?;
        }
        Ok(())
    }

    // picked up on the next restart or new maze
    fn select(&mut self, kind: SolverKind) {
        info!("selected {}", kind);
        self.maze.set_solver_kind(kind);
    }

    fn change_delay(&mut self, faster: bool) {
        let millis = self.delay.as_millis() as u64;
        let millis = if faster {
            millis.saturating_sub(DELAY_STEP_MS).max(MIN_DELAY_MS)
        } else {
            (millis + DELAY_STEP_MS).min(MAX_DELAY_MS)
        };
        self.delay = Duration::from_millis(millis);
    }

    // returns false if the key isn't bound
    fn input(&mut self, key: &KeyEvent) -> Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('s') if self.paused => self.advance(),
            KeyCode::Char('r') => {
                if self.generator.is_none() {
                    self.maze.restart();
                }
            }
            KeyCode::Char('n') => self.new_maze()?,
            KeyCode::Char('1') => self.select(SolverKind::DFS),
            KeyCode::Char('2') => self.select(SolverKind::BFS),
            KeyCode::Char('3') => self.select(SolverKind::AStar),
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_delay(false),
            KeyCode::Char('-') => self.change_delay(true),
            _ => return Ok(false),
        }
        debug!("handled {:?}", key.code);
        Ok(true)
    }

    fn advance(&mut self) {
        if let Some(mut generator) = self.generator.take() {
            generator.step_generation();
            if generator.is_done() {
                self.maze.replace_grid(generator.into_grid());
            } else {
                self.generator = Some(generator);
            }
            return;
        }

        let was_done = self.maze.is_done();
        if !self.maze.step() && !was_done {
            debug!("{} finished after {} steps", self.maze.active_solver(), self.maze.steps());
        }
    }

    fn update(&mut self) {
        if !self.paused {
            self.advance();
        }
    }

    fn status_lines(&self) -> Vec<String> {
        let phase = if self.generator.is_some() {
            "generating"
        } else if self.maze.is_done() {
            if self.maze.grid().final_path().is_empty() {
                "no path"
            } else {
                "solved"
            }
        } else {
            "searching"
        };

        let mut running = self.maze.active_solver().to_string();
        if self.maze.solver_kind() != self.maze.active_solver() {
            running = format!("{} (next: {})", running, self.maze.solver_kind());
        }

        vec![
            format!(
                "{} | {}x{} | steps {} | delay {} ms | {}{}",
                running,
                self.grid().rows(),
                self.grid().columns(),
                self.maze.steps(),
                self.delay.as_millis(),
                phase,
                if self.paused { " | paused" } else { "" },
            ),
            "space pause  s step  r restart  n new maze  1/2/3 dfs/bfs/a*  +/- delay  q quit"
                .to_string(),
        ]
    }
}

fn run(options: &Options) -> Result<()> {
    let mut state = State::new(options)?;

    let _guard = TerminalGuard::enter()?;
    let mut renderer = Renderer::new(io::stdout());
    let mut last_tick = Instant::now();

    while !state.quit {
        renderer.draw(state.grid(), &state.status_lines())?;

        let timeout = state.delay.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                state.input(&key)?;
            }
        }

        if last_tick.elapsed() >= state.delay {
            state.update();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let options = Options::from_args();
    info!("starting with {:?}", options);

    if let Err(err) = run(&options) {
        eprintln!("Error: {}", err);
        let code = match err {
            MazeError::InvalidDimension { .. } => 2,
            MazeError::Terminal(_) => 1,
        };
        process::exit(code);
    }
}
