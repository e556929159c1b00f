//! Editing helpers used by hosts between solver runs.
//!
//! They keep the single-start invariant the solvers rely on: placing a new
//! start demotes the previous one to a plain path.

use crate::cell::CellKind;
use crate::geom::Point;
use crate::grid::Grid;

impl Grid {
    /// Make `p` the start cell. Any previous start becomes a path.
    ///
    /// Returns `false` (and changes nothing) if `p` is out of bounds.
    pub fn place_start(&mut self, p: Point) -> bool {
        if !self.contains(p) {
            return false;
        }
        if let Some(old) = self.start() {
            self.set_kind(old, CellKind::Path);
        }
        self.set_kind(p, CellKind::Start)
    }

    /// Turn `p` into a wall.
    pub fn place_wall(&mut self, p: Point) -> bool {
        self.set_kind(p, CellKind::Wall)
    }

    /// Turn `p` into a walkable path.
    pub fn place_path(&mut self, p: Point) -> bool {
        self.set_kind(p, CellKind::Path)
    }

    /// Turn `p` into an exit. Any number of exits may exist.
    pub fn place_exit(&mut self, p: Point) -> bool {
        self.set_kind(p, CellKind::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_start() {
        let mut g = Grid::square(4);
        assert!(g.place_start(Point::new(0, 0)));
        assert!(g.place_start(Point::new(3, 2)));
        assert_eq!(g.count(|c| c.kind() == CellKind::Start), 1);
        assert_eq!(g.start(), Some(Point::new(3, 2)));
        assert_eq!(g.kind(Point::new(0, 0)), Some(CellKind::Path));
    }

    #[test]
    fn out_of_bounds_start_keeps_old_one() {
        let mut g = Grid::square(2);
        g.place_start(Point::new(1, 1));
        assert!(!g.place_start(Point::new(2, 0)));
        assert_eq!(g.start(), Some(Point::new(1, 1)));
    }

    #[test]
    fn overwriting_start_removes_it() {
        let mut g = Grid::square(3);
        g.place_start(Point::new(1, 1));
        g.place_wall(Point::new(1, 1));
        assert_eq!(g.start(), None);
        g.place_exit(Point::new(0, 2));
        g.place_exit(Point::new(2, 2));
        assert_eq!(g.exits().len(), 2);
        g.place_path(Point::new(0, 2));
        assert_eq!(g.exits(), vec![Point::new(2, 2)]);
    }
}
