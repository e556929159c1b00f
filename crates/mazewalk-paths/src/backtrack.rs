//! Randomized depth-first search with backtracking.
//!
//! Each entered cell gets its own random permutation of the allowed moves.
//! The recursion is kept on an explicit stack, so deep mazes cannot overflow
//! the call stack, and the order of hook calls is the one a recursive
//! implementation would produce.

use mazewalk_core::{CellKind, Point, Shade, VisitState};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::SolverResult;
use crate::moves::Direction;
use crate::path;
use crate::search::Search;
use crate::step::{StepEvent, Stepper};

/// One level of the depth-first recursion.
struct Frame {
    pos: Point,
    dirs: [Direction; 8],
    len: usize,
    next: usize,
}

impl Frame {
    fn next_target(&mut self) -> Option<Point> {
        if self.next >= self.len {
            return None;
        }
        let d = self.dirs[self.next];
        self.next += 1;
        Some(d.apply(self.pos))
    }
}

enum Entered {
    Cancelled,
    Blocked,
    Exit,
    Open(Frame),
}

impl<S: Stepper + ?Sized> Search<'_, S> {
    pub(crate) fn backtracking<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SolverResult {
        let mut stack: Vec<Frame> = Vec::new();

        match self.enter(self.start, rng) {
            Entered::Cancelled => return SolverResult::Cancelled,
            Entered::Blocked => return SolverResult::NotFound,
            Entered::Exit => return self.finish(vec![self.start]),
            Entered::Open(frame) => stack.push(frame),
        }

        while let Some(top) = stack.last_mut() {
            if let Some(target) = top.next_target() {
                match self.enter(target, rng) {
                    Entered::Cancelled => return SolverResult::Cancelled,
                    Entered::Blocked => {}
                    Entered::Exit => {
                        let mut route: Vec<Point> = stack.iter().map(|f| f.pos).collect();
                        route.push(target);
                        return self.finish(route);
                    }
                    Entered::Open(frame) => stack.push(frame),
                }
                continue;
            }

            // Every move from here failed.
            let pos = top.pos;
            stack.pop();
            self.grid.mark(pos, VisitState::Dead);
            self.grid.set_shade(pos, Shade::Backtrack);
            if self.yield_to_host(StepEvent::Backtrack(pos)) {
                return SolverResult::Cancelled;
            }
            self.grid.set_shade(pos, Shade::Plain);
        }

        SolverResult::NotFound
    }

    /// Try to step onto `p`.
    fn enter<R: Rng + ?Sized>(&mut self, p: Point, rng: &mut R) -> Entered {
        if self.yield_to_host(StepEvent::Enter(p)) {
            return Entered::Cancelled;
        }

        let Some((kind, visit)) = self.grid.at(p).map(|c| (c.kind(), c.visit())) else {
            return Entered::Blocked;
        };
        if !kind.is_walkable() || visit.is_closed() {
            return Entered::Blocked;
        }

        self.grid.mark_visited(p);
        self.grid.set_shade(p, Shade::Frontier);
        if self.yield_to_host(StepEvent::Visit(p)) {
            return Entered::Cancelled;
        }
        if kind == CellKind::Exit {
            return Entered::Exit;
        }

        let allowed = self.moves.directions();
        let mut dirs = [Direction::Up; 8];
        dirs[..allowed.len()].copy_from_slice(allowed);
        dirs[..allowed.len()].shuffle(rng);
        Entered::Open(Frame {
            pos: p,
            dirs,
            len: allowed.len(),
            next: 0,
        })
    }

    fn finish(&mut self, route: Vec<Point>) -> SolverResult {
        path::mark_found(self.grid, &route);
        SolverResult::Found(route)
    }
}
