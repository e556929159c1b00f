//! Headless host for the mazewalk solvers: loads a maze, runs one solver
//! under a step budget and reports the outcome.

pub mod budget;
pub mod config;
pub mod error;
pub mod session;

use std::fs;
use std::path::Path;
use std::time::Duration;

use mazewalk_core::{Grid, Layout};
use mazewalk_paths::SolverResult;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use budget::{Budget, Exhausted};
pub use config::AppConfig;
pub use error::AppError;
pub use session::Session;

/// What a finished run looked like.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub result: SolverResult,
    pub steps: usize,
    pub backtracks: usize,
    pub exhausted: Option<Exhausted>,
    pub elapsed: Duration,
}

/// Read a maze in `#.SE` notation from `path`.
pub fn load_layout(path: &Path) -> Result<Layout, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Layout::parse(&text)?)
}

/// Build the session described by `config`.
pub fn session(config: &AppConfig) -> Result<Session, AppError> {
    let layout = match &config.maze {
        Some(path) => load_layout(path)?,
        None => Layout::default_maze(),
    };
    let grid = Grid::from_layout(&layout);
    log::info!(
        "loaded {}x{} maze with {} exit(s)",
        grid.width(),
        grid.height(),
        grid.exits().len()
    );
    Ok(Session::new(grid, config.solve_config()))
}

/// Run the configured solver once on `session`.
pub fn run(session: &mut Session, config: &AppConfig) -> Result<Report, AppError> {
    let mut budget = Budget::unlimited();
    if let Some(n) = config.max_steps {
        budget = budget.with_max_steps(n);
    }
    if let Some(limit) = config.time_limit() {
        budget = budget.with_time_limit(limit);
    }

    let result = match config.seed {
        Some(seed) => session.run(&mut budget, &mut StdRng::seed_from_u64(seed))?,
        None => session.run(&mut budget, &mut rand::rng())?,
    }
    .clone();

    match &result {
        SolverResult::Found(path) => log::info!("route found: {} moves", path.len() - 1),
        SolverResult::NotFound => log::warn!("no route to any exit"),
        SolverResult::Cancelled => log::info!("run cancelled"),
    }

    Ok(Report {
        result,
        steps: budget.steps(),
        backtracks: budget.backtracks(),
        exhausted: budget.exhausted(),
        elapsed: budget.elapsed(),
    })
}
