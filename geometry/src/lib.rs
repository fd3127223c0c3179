mod fraction;
mod point;

pub use fraction::Fraction;
pub use point::Point;

use std::ops::{Add, Mul, Sub};

/// `q` lies on the infinite line through `a` and `b`. Exact for integer and
/// `Fraction` coordinates.
pub fn point_on_line<T>(q: Point<T>, a: Point<T>, b: Point<T>) -> bool
where
    T: Copy + Default + PartialEq + Sub<Output = T> + Mul<Output = T>,
{
    (b - a).cross(q - a) == T::default()
}

/// `q` lies on the closed segment from `a` to `b`: collinear, and projected
/// inside both endpoints.
pub fn point_on_segment<T>(q: Point<T>, a: Point<T>, b: Point<T>) -> bool
where
    T: Copy + Default + PartialOrd + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    point_on_line(q, a, b)
        && (b - a).dot(q - a) >= T::default()
        && (a - b).dot(q - b) >= T::default()
}

/// Twice the signed area of a polygon, positive when the vertices run
/// counter-clockwise. Accepts convex, concave and self-intersecting input.
pub fn shoelace<T>(polygon: &[Point<T>]) -> T
where
    T: Copy + Default + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(&p, &q)| p.cross(q))
        .fold(T::default(), |acc, x| acc + x)
}

/// The vertices of the given simple polygon are in clockwise order.
pub fn is_clockwise<T>(polygon: &[Point<T>]) -> bool
where
    T: Copy + Default + PartialOrd + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    shoelace(polygon) < T::default()
}
