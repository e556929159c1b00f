//! Text maze layouts.
//!
//! A [`Layout`] is a rectangular block of text where every character is one
//! cell: `#` wall, `.` path, `S` start, `E` exit. Lines are separated by
//! `'\n'` and must all have the same width.

use std::fmt;

use crate::cell::CellKind;
use crate::geom::Point;

const DEFAULT_MAZE: &str = include_str!("default_maze.txt");

/// A parsed text maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    kinds: Vec<CellKind>,
    size: Point,
}

impl Layout {
    /// Parse a layout.
    ///
    /// Leading and trailing whitespace of the whole string is trimmed, but
    /// not of individual lines. At most one `S` is allowed.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut kinds = Vec::with_capacity(s.len());
        let mut width: Option<i32> = None;
        let mut start: Option<Point> = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let y = y as i32;
            let mut x = 0;
            for ch in line.chars() {
                let pos = Point::new(x, y);
                let Some(kind) = CellKind::from_rune(ch) else {
                    return Err(LayoutError::InvalidRune { ch, pos });
                };
                if kind == CellKind::Start {
                    if let Some(first) = start {
                        let second = pos;
                        return Err(LayoutError::MultipleStarts { first, second });
                    }
                    start = Some(pos);
                }
                kinds.push(kind);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(LayoutError::InconsistentSize {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        Ok(Self {
            kinds,
            size: Point::new(width.unwrap_or(0), height),
        })
    }

    /// The 30 × 30 maze a fresh session starts from: start on the top edge,
    /// exit on the bottom edge.
    pub fn default_maze() -> Self {
        Self::parse(DEFAULT_MAZE).unwrap_or_else(|e| unreachable!("built-in maze is valid: {e}"))
    }

    /// Size of the layout (width, height).
    pub fn size(&self) -> Point {
        self.size
    }

    /// Kind at `p`, or `None` when out of range.
    pub fn kind(&self, p: Point) -> Option<CellKind> {
        if p.x < 0 || p.y < 0 || p.x >= self.size.x || p.y >= self.size.y {
            return None;
        }
        self.kinds.get((p.y * self.size.x + p.x) as usize).copied()
    }

    /// Row-major iterator over `(Point, CellKind)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        let w = self.size.x.max(1);
        self.kinds
            .iter()
            .enumerate()
            .map(move |(i, &k)| (Point::new(i as i32 % w, i as i32 / w), k))
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Nothing but whitespace.
    Empty,
    /// A line is wider or narrower than the first one.
    InconsistentSize {
        line: i32,
        expected: i32,
        found: i32,
    },
    /// A character outside `#.SE` was found.
    InvalidRune { ch: char, pos: Point },
    /// More than one start cell.
    MultipleStarts { first: Point, second: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout: empty"),
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => write!(f, "layout: invalid rune {ch:?} at {pos}"),
            Self::MultipleStarts { first, second } => {
                write!(f, "layout: second start at {second}, first at {first}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
#####
#S.E#
#####";

    #[test]
    fn parse_and_size() {
        let l = Layout::parse(ROOM).unwrap();
        assert_eq!(l.size(), Point::new(5, 3));
        assert_eq!(l.kind(Point::new(1, 1)), Some(CellKind::Start));
        assert_eq!(l.kind(Point::new(3, 1)), Some(CellKind::Exit));
        assert_eq!(l.kind(Point::new(5, 1)), None);
        assert_eq!(l.iter().count(), 15);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let l = Layout::parse("\n\n  S.E\n").unwrap();
        assert_eq!(l.size(), Point::new(3, 1));
    }

    #[test]
    fn inconsistent_size_error() {
        let err = Layout::parse("S.\n.E.").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InconsistentSize {
                line: 1,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn invalid_rune_error() {
        let err = Layout::parse("S.\n.x").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn second_start_rejected() {
        let err = Layout::parse("S.S").unwrap_err();
        assert!(matches!(err, LayoutError::MultipleStarts { .. }));
        assert_eq!(Layout::parse("   ").unwrap_err(), LayoutError::Empty);
    }

    #[test]
    fn default_maze_shape() {
        let l = Layout::default_maze();
        assert_eq!(l.size(), Point::new(30, 30));
        assert_eq!(l.kind(Point::at(0, 14)), Some(CellKind::Start));
        assert_eq!(l.kind(Point::at(29, 14)), Some(CellKind::Exit));
    }
}
