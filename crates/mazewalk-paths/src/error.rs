use std::fmt;

use mazewalk_core::Point;

/// Reasons a solver run could not produce a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The grid has no start cell.
    NoStart,
    /// The grid has no exit cell.
    NoExit,
    /// Parent back-references from this exit do not lead back to the start.
    BrokenPath { at: Point },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStart => write!(f, "maze has no start cell"),
            Self::NoExit => write!(f, "maze has no exit cell"),
            Self::BrokenPath { at } => {
                write!(f, "parent chain from {at} does not reach the start")
            }
        }
    }
}

impl std::error::Error for SolveError {}
