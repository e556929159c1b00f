//! Geometry primitives: [`Point`] and [`Range`].
//!
//! `x` is the column and grows right, `y` is the row and grows down. A maze
//! cell at `(row, col)` lives at `Point::new(col, row)`.

use std::fmt;
use std::ops::{Add, Sub};

/// A cell coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point for maze `(row, col)` coordinates.
    #[inline]
    pub const fn at(row: i32, col: i32) -> Self {
        Self { x: col, y: row }
    }

    /// Whether `other` is one of the eight cells around `self`.
    pub fn is_adjacent(self, other: Point) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

/// Row-major: rows first, then columns.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The cells `min.x..max.x` by `min.y..max.y`. An inverted range is empty.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Range from the origin up to `size`, exclusive.
    pub fn sized(width: i32, height: i32) -> Self {
        Self {
            min: Point::ZERO,
            max: Point::new(width.max(0), height.max(0)),
        }
    }

    pub fn size(self) -> Point {
        Point::new(self.width(), self.height())
    }

    pub fn width(self) -> i32 {
        (self.max.x - self.min.x).max(0)
    }

    pub fn height(self) -> i32 {
        (self.max.y - self.min.y).max(0)
    }

    pub fn len(self) -> usize {
        self.width() as usize * self.height() as usize
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Every point of the range, row by row.
    pub fn iter(self) -> impl Iterator<Item = Point> {
        (self.min.y..self.max.y)
            .flat_map(move |y| (self.min.x..self.max.x).map(move |x| Point::new(x, y)))
    }
}
