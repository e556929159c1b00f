use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use mazewalk_paths::{Algorithm, Moves, SolveConfig};

/// Solver choice as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlgorithmArg {
    Backtracking,
    #[default]
    BreadthFirst,
    AStar,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(a: AlgorithmArg) -> Self {
        match a {
            AlgorithmArg::Backtracking => Algorithm::Backtracking,
            AlgorithmArg::BreadthFirst => Algorithm::BreadthFirst,
            AlgorithmArg::AStar => Algorithm::AStar,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MovesArg {
    Four,
    #[default]
    Eight,
}

impl From<MovesArg> for Moves {
    fn from(m: MovesArg) -> Self {
        match m {
            MovesArg::Four => Moves::Four,
            MovesArg::Eight => Moves::Eight,
        }
    }
}

/// Run a maze solver headless and report what it found.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct AppConfig {
    /// Search strategy.
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::BreadthFirst)]
    pub algorithm: AlgorithmArg,

    /// Neighbourhood used when expanding a cell.
    #[arg(short, long, value_enum, default_value_t = MovesArg::Eight)]
    pub moves: MovesArg,

    /// Maze file in `#.SE` notation. The built-in 30x30 maze is used when
    /// omitted.
    #[arg(long, value_name = "FILE")]
    pub maze: Option<PathBuf>,

    /// Seed for the backtracking shuffle.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cancel after this many solver steps.
    #[arg(long, value_name = "N")]
    pub max_steps: Option<usize>,

    /// Cancel after this many milliseconds.
    #[arg(long, value_name = "MS")]
    pub time_limit: Option<u64>,

    /// Print the grid with the search overlaid after the run.
    #[arg(short, long, default_value_t = false)]
    pub print: bool,
}

impl AppConfig {
    pub fn solve_config(&self) -> SolveConfig {
        SolveConfig::new(self.algorithm.into()).with_moves(self.moves.into())
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit.map(Duration::from_millis)
    }
}
