use mazewalk_core::Point;

/// One of the eight single-cell moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// Breadth-first priority order: diagonals first, then orthogonals.
    pub const PRIORITY: [Direction; 8] = [
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
        Self::Right,
        Self::Left,
        Self::Up,
        Self::Down,
    ];

    /// The orthogonal moves, in the same relative order as [`PRIORITY`](Self::PRIORITY).
    pub const ORTHOGONAL: [Direction; 4] = [Self::Right, Self::Left, Self::Up, Self::Down];

    /// Offset of the move; `y` grows downward.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::UpLeft => Point::new(-1, -1),
            Self::UpRight => Point::new(1, -1),
            Self::DownLeft => Point::new(-1, 1),
            Self::DownRight => Point::new(1, 1),
            Self::Right => Point::new(1, 0),
            Self::Left => Point::new(-1, 0),
            Self::Up => Point::new(0, -1),
            Self::Down => Point::new(0, 1),
        }
    }

    /// The cell reached by taking this move from `p`.
    #[inline]
    pub fn apply(self, p: Point) -> Point {
        p + self.delta()
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::UpLeft | Self::UpRight | Self::DownLeft | Self::DownRight
        )
    }
}

/// Which neighbours a solver may step to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Moves {
    /// Orthogonal moves only.
    Four,
    /// Orthogonal and diagonal moves.
    #[default]
    Eight,
}

impl Moves {
    /// Allowed moves in priority order.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Self::Four => &Direction::ORTHOGONAL,
            Self::Eight => &Direction::PRIORITY,
        }
    }
}
