use mazewalk_core::Point;

/// Straight-line (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy)
}

/// Euclidean distance from `p` to the closest of `targets`.
///
/// Returns `f64::INFINITY` when `targets` is empty.
pub fn nearest_euclidean(p: Point, targets: &[Point]) -> f64 {
    targets
        .iter()
        .map(|&t| euclidean(p, t))
        .fold(f64::INFINITY, f64::min)
}
