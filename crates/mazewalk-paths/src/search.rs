use mazewalk_core::{Grid, Point};

use crate::moves::Moves;
use crate::step::{StepEvent, Stepper};

/// State shared by every solver during one run: exclusive access to the
/// grid, the host hook and the move set.
pub(crate) struct Search<'a, S: Stepper + ?Sized> {
    pub(crate) grid: &'a mut Grid,
    pub(crate) stepper: &'a mut S,
    pub(crate) moves: Moves,
    pub(crate) start: Point,
    pub(crate) steps: usize,
}

impl<'a, S: Stepper + ?Sized> Search<'a, S> {
    pub(crate) fn new(grid: &'a mut Grid, stepper: &'a mut S, moves: Moves, start: Point) -> Self {
        Self {
            grid,
            stepper,
            moves,
            start,
            steps: 0,
        }
    }

    /// Hand control to the host. Returns `true` if it asked to cancel.
    pub(crate) fn yield_to_host(&mut self, event: StepEvent) -> bool {
        self.steps += 1;
        let signal = self.stepper.step(&*self.grid, event);
        log::trace!("step {}: {event:?} -> {signal:?}", self.steps);
        signal.is_cancel()
    }
}
