// Planar geometry helpers used by swipe detection

use crate::models::pose::Vector2D;

/// Euclidean distance between two image points
pub fn distance(p: Vector2D, q: Vector2D) -> f32 {
    (p.x - q.x).hypot(p.y - q.y)
}

pub fn sum<I>(values: I) -> f32
where
    I: IntoIterator<Item = f32>,
{
    values.into_iter().sum()
}
