//! Grid and cell model for the mazewalk solvers.
//!
//! This crate holds the state a maze solver works on: geometry primitives,
//! typed cells, the bounds-checked [`Grid`], text [`Layout`]s and the editing
//! helpers hosts use between runs. It has no search logic of its own; see
//! `mazewalk-paths` for the solvers.

pub mod cell;
mod edit;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cell::{Cell, CellKind, SearchMeta, Shade, VisitState};
pub use geom::{Point, Range};
pub use grid::{Grid, clear, reset};
pub use layout::{Layout, LayoutError};
