use std::fmt;
use std::path::PathBuf;

use mazewalk_core::LayoutError;
use mazewalk_paths::SolveError;

/// Anything that stops the host before or during a run.
#[derive(Debug)]
pub enum AppError {
    /// The maze file could not be read.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The maze text is malformed.
    Layout(LayoutError),
    /// The solver refused the grid.
    Solve(SolveError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Layout(e) => write!(f, "bad maze: {e}"),
            Self::Solve(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Layout(e) => Some(e),
            Self::Solve(e) => Some(e),
        }
    }
}

impl From<LayoutError> for AppError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

impl From<SolveError> for AppError {
    fn from(e: SolveError) -> Self {
        Self::Solve(e)
    }
}
