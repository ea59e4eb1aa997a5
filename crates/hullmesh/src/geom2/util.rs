use super::types::Point;

/// Coordinate-wise sum of a point list; `None` when empty.
pub fn sum(points: &[Point]) -> Option<Point> {
    let (first, rest) = points.split_first()?;
    Some(rest.iter().fold(*first, |acc, p| acc + p.to_vector()))
}

/// Arithmetic mean of a point list; `None` when empty.
pub fn barycenter(points: &[Point]) -> Option<Point> {
    let s = sum(points)?;
    let n = points.len() as f64;
    Some(Point::new(s.x / n, s.y / n))
}
