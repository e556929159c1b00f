use std::cmp::Ordering;
use std::collections::BinaryHeap;

use mazewalk_core::{CellKind, Point, SearchMeta, Shade};

use crate::SolverResult;
use crate::distance::nearest_euclidean;
use crate::error::SolveError;
use crate::path;
use crate::search::Search;
use crate::step::{StepEvent, Stepper};

/// Open-list entry, ordered by `f` and then by insertion order.
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    pos: Point,
    f: f64,
    seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest f, earliest first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl<S: Stepper + ?Sized> Search<'_, S> {
    /// A* towards the nearest of `exits`.
    ///
    /// Every move costs 1, diagonals included, and `h` is the Euclidean
    /// distance to the closest exit. There is no closed list: a cell is marked
    /// visited as soon as it enters the open list and is never re-opened, so
    /// a cheaper route found later does not replace the first one.
    pub(crate) fn astar(&mut self, exits: &[Point]) -> Result<SolverResult, SolveError> {
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut seq = 0u64;

        let seed = SearchMeta::new(0, nearest_euclidean(self.start, exits), None);
        self.grid.set_meta(self.start, seed);
        open.push(OpenEntry {
            pos: self.start,
            f: seed.f,
            seq,
        });

        while let Some(current) = open.pop() {
            let cp = current.pos;
            self.grid.mark_visited(cp);
            let Some((kind, g)) = self.grid.at(cp).map(|c| (c.kind(), c.meta().g)) else {
                continue;
            };

            if kind == CellKind::Exit {
                let found = path::follow_parents(self.grid, cp).ok_or_else(|| {
                    log::warn!("parent chain from {cp} is broken");
                    SolveError::BrokenPath { at: cp }
                })?;
                path::mark_found(self.grid, &found);
                return Ok(SolverResult::Found(found));
            }

            for &d in self.moves.directions() {
                let np = d.apply(cp);
                let Some((nkind, visit)) = self.grid.at(np).map(|c| (c.kind(), c.visit())) else {
                    continue;
                };
                if !nkind.is_walkable() || visit.is_closed() {
                    continue;
                }

                let meta = SearchMeta::new(g + 1, nearest_euclidean(np, exits), Some(cp));
                self.grid.set_meta(np, meta);
                self.grid.mark_visited(np);
                self.grid.set_shade(np, Shade::Frontier);
                seq += 1;
                open.push(OpenEntry {
                    pos: np,
                    f: meta.f,
                    seq,
                });
            }

            if self.yield_to_host(StepEvent::Expand(cp)) {
                return Ok(SolverResult::Cancelled);
            }
        }

        Ok(SolverResult::NotFound)
    }
}
