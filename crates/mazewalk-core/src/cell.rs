//! The [`Cell`] type and the small enums describing its state.

use crate::geom::Point;

/// Semantic role of a maze cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Wall,
    #[default]
    Path,
    Start,
    Exit,
}

impl CellKind {
    /// Layout character for this kind (`#`, `.`, `S`, `E`).
    pub const fn rune(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Path => '.',
            Self::Start => 'S',
            Self::Exit => 'E',
        }
    }

    /// Inverse of [`rune`](Self::rune).
    pub const fn from_rune(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Path),
            'S' => Some(Self::Start),
            'E' => Some(Self::Exit),
            _ => None,
        }
    }

    /// Whether a solver may step onto a cell of this kind.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Search bookkeeping for a cell.
///
/// `Visited` doubles as the closed set for every solver; `Dead` marks a
/// cell the backtracking solver gave up on and is never re-entered either.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisitState {
    #[default]
    Unvisited,
    Frontier,
    Visited,
    Dead,
}

impl VisitState {
    /// Whether a solver must not enter the cell again.
    #[inline]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Visited | Self::Dead)
    }
}

/// Display state a host maps to a colour.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shade {
    #[default]
    Plain,
    Frontier,
    Found,
    Backtrack,
}

/// A* costs and the back-reference to the predecessor cell.
///
/// `parent` is a coordinate, never an owning link, so a malformed chain can
/// at worst loop and is caught by the capped walk in the solver crate.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchMeta {
    pub g: u32,
    pub h: f64,
    pub f: f64,
    pub parent: Option<Point>,
}

impl SearchMeta {
    /// Build the metadata for a cell reached from `parent` with cost `g`.
    #[inline]
    pub fn new(g: u32, h: f64, parent: Option<Point>) -> Self {
        Self {
            g,
            h,
            f: f64::from(g) + h,
            parent,
        }
    }
}

/// A single maze cell.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    kind: CellKind,
    visit: VisitState,
    shade: Shade,
    meta: SearchMeta,
}

impl Cell {
    /// Create a fresh cell at `pos`.
    pub fn new(pos: Point, kind: CellKind) -> Self {
        Self {
            pos,
            kind,
            visit: VisitState::default(),
            shade: Shade::default(),
            meta: SearchMeta::default(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    #[inline]
    pub fn visit(&self) -> VisitState {
        self.visit
    }

    #[inline]
    pub fn shade(&self) -> Shade {
        self.shade
    }

    #[inline]
    pub fn meta(&self) -> &SearchMeta {
        &self.meta
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visit == VisitState::Visited
    }

    pub(crate) fn set_kind(&mut self, kind: CellKind) {
        self.kind = kind;
    }

    pub(crate) fn set_visit(&mut self, visit: VisitState) {
        self.visit = visit;
    }

    pub(crate) fn set_shade(&mut self, shade: Shade) {
        self.shade = shade;
    }

    pub(crate) fn set_meta(&mut self, meta: SearchMeta) {
        self.meta = meta;
    }

    /// Forget everything a solver wrote into this cell.
    pub(crate) fn reset_search_state(&mut self) {
        self.visit = VisitState::Unvisited;
        self.shade = Shade::Plain;
        self.meta = SearchMeta::default();
    }
}
