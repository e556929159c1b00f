//! The host-side context: one grid, the solver settings and the outcome of
//! the last run. Replaces the process-wide maze and flags a GUI host would
//! otherwise keep around.

use mazewalk_core::{CellKind, Grid, Layout, Shade, VisitState};
use mazewalk_paths::{SolveConfig, SolveError, SolverResult, Stepper, solve_with};
use rand::Rng;

pub struct Session {
    grid: Grid,
    config: SolveConfig,
    last: Option<SolverResult>,
}

impl Session {
    pub fn new(grid: Grid, config: SolveConfig) -> Self {
        Self {
            grid,
            config,
            last: None,
        }
    }

    /// A session over the built-in 30 × 30 maze.
    pub fn with_default_maze(config: SolveConfig) -> Self {
        Self::new(Grid::from_layout(&Layout::default_maze()), config)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for editing between runs.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn config(&self) -> SolveConfig {
        self.config
    }

    pub fn last_result(&self) -> Option<&SolverResult> {
        self.last.as_ref()
    }

    /// Reset the grid and run the configured solver on it.
    pub fn run<S, R>(&mut self, stepper: &mut S, rng: &mut R) -> Result<&SolverResult, SolveError>
    where
        S: Stepper + ?Sized,
        R: Rng + ?Sized,
    {
        self.grid.reset();
        let result = solve_with(&mut self.grid, self.config, stepper, rng)?;
        Ok(self.last.insert(result))
    }

    /// Forget the last run, keeping the maze.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.last = None;
    }

    /// Remove every wall and exit, keeping only the start.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.last = None;
    }

    /// The grid in layout notation with the search state overlaid: `o` on the
    /// found route, `x` on dead ends, `+` on other visited cells.
    pub fn snapshot(&self) -> String {
        let w = self.grid.width().max(1) as usize;
        let mut out = String::with_capacity(self.grid.len() + self.grid.height() as usize);
        for (i, c) in self.grid.iter().enumerate() {
            if i > 0 && i % w == 0 {
                out.push('\n');
            }
            let ch = match (c.kind(), c.shade(), c.visit()) {
                (CellKind::Start | CellKind::Exit, _, _) => c.kind().rune(),
                (_, Shade::Found, _) => 'o',
                (_, _, VisitState::Dead) => 'x',
                (_, _, VisitState::Visited) => '+',
                (kind, _, _) => kind.rune(),
            };
            out.push(ch);
        }
        out
    }
}
