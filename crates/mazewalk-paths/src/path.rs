//! Path reconstruction and marking.

use mazewalk_core::{Grid, Point, Shade};

use crate::moves::Direction;

/// Replay `moves` from `start`, returning every cell passed through
/// (both endpoints included).
pub fn replay(start: Point, moves: &[Direction]) -> Vec<Point> {
    let mut path = Vec::with_capacity(moves.len() + 1);
    let mut pos = start;
    path.push(pos);
    for d in moves {
        pos = d.apply(pos);
        path.push(pos);
    }
    path
}

/// Follow parent back-references from `end` to the cell without a parent.
///
/// The walk is capped at the number of cells in the grid; `None` means the
/// chain left the grid or looped.
pub fn follow_parents(grid: &Grid, end: Point) -> Option<Vec<Point>> {
    let mut path = Vec::new();
    let mut cur = Some(end);
    while let Some(p) = cur {
        if path.len() >= grid.len() {
            return None;
        }
        path.push(p);
        cur = grid.at(p)?.meta().parent;
    }
    path.reverse();
    Some(path)
}

/// Shade every cell of `path` as found and mark it visited.
pub fn mark_found(grid: &mut Grid, path: &[Point]) {
    for &p in path {
        grid.mark_visited(p);
        grid.set_shade(p, Shade::Found);
    }
}
