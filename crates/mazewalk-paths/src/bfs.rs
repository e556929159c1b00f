//! Breadth-first search over move sequences.
//!
//! The queue holds whole routes (lists of moves from the start) rather than
//! parent links, so memory per entry grows with the route length. Moves are
//! tried in [`Direction::PRIORITY`] order, which favours diagonals.

use std::collections::VecDeque;

use mazewalk_core::{CellKind, Point, Shade};

use crate::SolverResult;
use crate::moves::Direction;
use crate::path;
use crate::search::Search;
use crate::step::{StepEvent, Stepper};

/// A queued route: the moves taken from the start and the cell they end on.
struct Route {
    moves: Vec<Direction>,
    tip: Point,
}

impl Route {
    fn extended(&self, d: Direction) -> Self {
        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(d);
        Self {
            moves,
            tip: d.apply(self.tip),
        }
    }
}

impl<S: Stepper + ?Sized> Search<'_, S> {
    pub(crate) fn breadth_first(&mut self) -> SolverResult {
        let mut queue: VecDeque<Route> = VecDeque::new();
        self.grid.mark_visited(self.start);
        queue.push_back(Route {
            moves: Vec::new(),
            tip: self.start,
        });

        while let Some(route) = queue.pop_front() {
            for &d in self.moves.directions() {
                let np = d.apply(route.tip);
                let Some((kind, visit)) = self.grid.at(np).map(|c| (c.kind(), c.visit())) else {
                    continue;
                };
                if !kind.is_walkable() || visit.is_closed() {
                    continue;
                }

                let next = route.extended(d);
                if kind == CellKind::Exit {
                    let found = path::replay(self.start, &next.moves);
                    path::mark_found(self.grid, &found);
                    return SolverResult::Found(found);
                }

                self.grid.mark_visited(np);
                self.grid.set_shade(np, Shade::Frontier);
                queue.push_back(next);
            }

            if self.yield_to_host(StepEvent::Expand(route.tip)) {
                return SolverResult::Cancelled;
            }
        }

        SolverResult::NotFound
    }
}
