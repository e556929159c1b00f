//! A step hook that cancels a run once it exceeds a step count or a
//! wall-clock deadline.

use std::time::{Duration, Instant};

use mazewalk_core::Grid;
use mazewalk_paths::{StepEvent, StepSignal, Stepper};

/// Why a [`Budget`] stopped a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Exhausted {
    Steps(usize),
    Time(Duration),
}

/// Counts hook calls and cancels when a limit is hit.
#[derive(Debug)]
pub struct Budget {
    max_steps: Option<usize>,
    time_limit: Option<Duration>,
    started: Instant,
    steps: usize,
    backtracks: usize,
    exhausted: Option<Exhausted>,
}

impl Budget {
    /// A budget with no limits. The clock starts now.
    pub fn unlimited() -> Self {
        Self {
            max_steps: None,
            time_limit: None,
            started: Instant::now(),
            steps: 0,
            backtracks: 0,
            exhausted: None,
        }
    }

    /// Builder: cancel after `n` hook calls.
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = Some(n);
        self
    }

    /// Builder: cancel once `limit` has elapsed since construction.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Hook calls seen so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Dead ends reported by the backtracking solver.
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// The limit that cancelled the run, if any.
    pub fn exhausted(&self) -> Option<Exhausted> {
        self.exhausted
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn check(&self) -> Option<Exhausted> {
        let over_steps = self.max_steps.filter(|&max| self.steps > max);
        let over_time = self.time_limit.filter(|&t| self.started.elapsed() >= t);
        over_steps
            .map(Exhausted::Steps)
            .or(over_time.map(Exhausted::Time))
    }
}

impl Stepper for Budget {
    fn step(&mut self, _grid: &Grid, event: StepEvent) -> StepSignal {
        self.steps += 1;
        if matches!(event, StepEvent::Backtrack(_)) {
            self.backtracks += 1;
        }
        match self.check() {
            Some(why) => {
                log::info!("budget exhausted at {}: {why:?}", event.pos());
                self.exhausted = Some(why);
                StepSignal::Cancel
            }
            None => StepSignal::Continue,
        }
    }
}
