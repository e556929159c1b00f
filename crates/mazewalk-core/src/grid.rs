//! The [`Grid`] type: a fixed-size, row-major array of [`Cell`]s.
//!
//! Every accessor is bounds-checked and returns `None` or `false` for points
//! outside the grid. Solvers only go through [`set_kind`](Grid::set_kind),
//! [`mark`](Grid::mark), [`set_shade`](Grid::set_shade),
//! [`set_meta`](Grid::set_meta) and
//! [`reset_search_state`](Grid::reset_search_state).

use std::fmt;

use crate::cell::{Cell, CellKind, SearchMeta, Shade, VisitState};
use crate::geom::{Point, Range};
use crate::layout::{Layout, LayoutError};

/// A 2D maze grid owning its cells.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a grid of the given dimensions where every cell is a path.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::sized(width, height);
        let cells = bounds
            .iter()
            .map(|p| Cell::new(p, CellKind::Path))
            .collect();
        Self { cells, bounds }
    }

    /// Create a `size × size` grid of path cells.
    pub fn square(size: i32) -> Self {
        Self::new(size, size)
    }

    /// Build a grid from a parsed [`Layout`].
    pub fn from_layout(layout: &Layout) -> Self {
        let size = layout.size();
        let mut grid = Self::new(size.x, size.y);
        for (p, kind) in layout.iter() {
            grid.set_kind(p, kind);
        }
        grid
    }

    /// Parse a text layout straight into a grid.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        Layout::parse(s).map(|l| Self::from_layout(&l))
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let w = self.bounds.width() as usize;
        Some(p.y as usize * w + p.x as usize)
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Kind of the cell at `p`, or `None` if out of bounds.
    pub fn kind(&self, p: Point) -> Option<CellKind> {
        self.at(p).map(Cell::kind)
    }

    fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    /// Change the kind of the cell at `p`. Returns `false` if out of bounds.
    ///
    /// This does not enforce the single-start rule; see
    /// [`place_start`](Grid::place_start) for that.
    pub fn set_kind(&mut self, p: Point, kind: CellKind) -> bool {
        self.cell_mut(p).map(|c| c.set_kind(kind)).is_some()
    }

    /// Mark the cell at `p` as visited.
    pub fn mark_visited(&mut self, p: Point) -> bool {
        self.mark(p, VisitState::Visited)
    }

    /// Set the visit state of the cell at `p`.
    pub fn mark(&mut self, p: Point, visit: VisitState) -> bool {
        self.cell_mut(p).map(|c| c.set_visit(visit)).is_some()
    }

    /// Set the display state of the cell at `p`.
    pub fn set_shade(&mut self, p: Point, shade: Shade) -> bool {
        self.cell_mut(p).map(|c| c.set_shade(shade)).is_some()
    }

    /// Replace the A* metadata of the cell at `p`.
    pub fn set_meta(&mut self, p: Point, meta: SearchMeta) -> bool {
        self.cell_mut(p).map(|c| c.set_meta(meta)).is_some()
    }

    /// Clear visit state, shade and metadata of the cell at `p`.
    pub fn reset_search_state(&mut self, p: Point) -> bool {
        self.cell_mut(p).map(Cell::reset_search_state).is_some()
    }

    /// Forget every solver run: visitation, metadata and shading are cleared
    /// on all cells while their kinds are kept.
    pub fn reset(&mut self) -> &mut Self {
        for c in &mut self.cells {
            c.reset_search_state();
        }
        self
    }

    /// Like [`reset`](Grid::reset), and additionally turn every cell except
    /// the start into a path, removing walls and exits.
    pub fn clear(&mut self) -> &mut Self {
        for c in &mut self.cells {
            c.reset_search_state();
            if c.kind() != CellKind::Start {
                c.set_kind(CellKind::Path);
            }
        }
        self
    }

    /// Position of the start cell, scanning in row-major order.
    pub fn start(&self) -> Option<Point> {
        self.cells
            .iter()
            .find(|c| c.kind() == CellKind::Start)
            .map(Cell::pos)
    }

    /// Positions of all exit cells in row-major order.
    pub fn exits(&self) -> Vec<Point> {
        self.cells
            .iter()
            .filter(|c| c.kind() == CellKind::Exit)
            .map(Cell::pos)
            .collect()
    }

    /// Count how many cells satisfy a predicate.
    pub fn count(&self, mut f: impl FnMut(&Cell) -> bool) -> usize {
        self.cells.iter().filter(|c| f(c)).count()
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

/// Writes the grid in layout notation, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width().max(1) as usize;
        for (i, row) in self.cells.chunks(w).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c.kind().rune())?;
            }
        }
        Ok(())
    }
}

/// Clear all solver state on `grid`. See [`Grid::reset`].
pub fn reset(grid: &mut Grid) -> &mut Grid {
    grid.reset()
}

/// Reset `grid` and turn everything but the start into path. See
/// [`Grid::clear`].
pub fn clear(grid: &mut Grid) -> &mut Grid {
    grid.clear()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
S.#
.#E
E..";

    #[test]
    fn grid_new_and_at() {
        let g = Grid::new(4, 3);
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.len(), 12);
        let c = g.at(Point::new(3, 2)).unwrap();
        assert_eq!(c.pos(), Point::new(3, 2));
        assert_eq!(c.kind(), CellKind::Path);
    }

    #[test]
    fn out_of_bounds_is_contained() {
        let mut g = Grid::square(3);
        assert!(g.at(Point::new(-1, 0)).is_none());
        assert!(g.at(Point::new(0, 3)).is_none());
        assert!(!g.set_kind(Point::new(3, 0), CellKind::Wall));
        assert!(!g.mark_visited(Point::new(0, -1)));
        assert!(!g.reset_search_state(Point::new(9, 9)));
    }

    #[test]
    fn parse_and_display() {
        let g = Grid::parse(MAZE).unwrap();
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert_eq!(g.exits(), vec![Point::new(2, 1), Point::new(0, 2)]);
        assert_eq!(g.to_string(), MAZE);
    }

    #[test]
    fn reset_preserves_kinds() {
        let mut g = Grid::parse(MAZE).unwrap();
        g.mark_visited(Point::new(1, 0));
        g.mark(Point::new(0, 1), VisitState::Dead);
        g.set_shade(Point::new(2, 1), Shade::Found);
        let meta = SearchMeta::new(2, 0.0, Some(Point::new(1, 0)));
        g.set_meta(Point::new(2, 1), meta);
        g.reset();
        assert_eq!(g.to_string(), MAZE);
        assert_eq!(g.count(|c| c.visit() != VisitState::Unvisited), 0);
        assert_eq!(g.count(|c| c.shade() != Shade::Plain), 0);
        assert!(g.iter().all(|c| c.meta().parent.is_none()));
    }

    #[test]
    fn clear_keeps_only_start() {
        let mut g = Grid::parse(MAZE).unwrap();
        g.mark_visited(Point::new(1, 0));
        reset(&mut g);
        clear(&mut g);
        assert_eq!(g.count(|c| c.kind() == CellKind::Wall), 0);
        assert_eq!(g.count(|c| c.kind() != CellKind::Path), 1);
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert!(g.exits().is_empty());
        assert_eq!(g.count(|c| c.is_visited()), 0);
    }

    #[test]
    fn clear_and_reset_are_idempotent() {
        let mut once = Grid::parse(MAZE).unwrap();
        once.clear();
        let mut twice = once.clone();
        twice.clear();
        assert_eq!(once, twice);

        let mut r = Grid::parse(MAZE).unwrap();
        r.reset();
        let snapshot = r.clone();
        r.reset();
        assert_eq!(r, snapshot);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_serializes_cells() {
        let g = Grid::parse("S.E").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
