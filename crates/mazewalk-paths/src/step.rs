use mazewalk_core::{Grid, Point};

/// Answer of the host's step hook.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum StepSignal {
    #[default]
    Continue,
    Cancel,
}

impl StepSignal {
    #[inline]
    pub fn is_cancel(self) -> bool {
        self == Self::Cancel
    }
}

/// What a solver just did when it calls the step hook.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepEvent {
    /// Backtracking is about to consider this cell.
    Enter(Point),
    /// Backtracking marked this cell visited.
    Visit(Point),
    /// Backtracking gave up on this cell.
    Backtrack(Point),
    /// Breadth-first or A* finished expanding this cell.
    Expand(Point),
}

impl StepEvent {
    /// The cell the event is about.
    pub fn pos(self) -> Point {
        match self {
            Self::Enter(p) | Self::Visit(p) | Self::Backtrack(p) | Self::Expand(p) => p,
        }
    }
}

/// Host hook invoked synchronously by solvers between steps.
///
/// The grid is handed over read-only so the host can draw it; the hook must
/// not block indefinitely. Returning [`StepSignal::Cancel`] ends the run with
/// `SolverResult::Cancelled` and no further grid changes.
pub trait Stepper {
    fn step(&mut self, grid: &Grid, event: StepEvent) -> StepSignal;
}

impl<F> Stepper for F
where
    F: FnMut(&Grid, StepEvent) -> StepSignal,
{
    #[inline]
    fn step(&mut self, grid: &Grid, event: StepEvent) -> StepSignal {
        self(grid, event)
    }
}

/// A stepper that never cancels.
#[derive(Copy, Clone, Debug, Default)]
pub struct RunToEnd;

impl Stepper for RunToEnd {
    #[inline]
    fn step(&mut self, _grid: &Grid, _event: StepEvent) -> StepSignal {
        StepSignal::Continue
    }
}
