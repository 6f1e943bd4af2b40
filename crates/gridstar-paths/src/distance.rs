use gridstar_core::Point;

/// Euclidean (L2) distance between two points.
///
/// A cardinal step costs 1.0, a diagonal step √2.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Chebyshev (L∞) distance between two points.
///
/// Two distinct points are 8-connected neighbours exactly when this is 1.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_steps() {
        let o = Point::new(2, 2);
        assert_eq!(euclidean(o, Point::new(2, 3)), 1.0);
        assert!((euclidean(o, Point::new(3, 3)) - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert_eq!(euclidean(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(euclidean(o, o), 0.0);
    }

    #[test]
    fn chebyshev_adjacency() {
        let o = Point::new(5, 5);
        assert_eq!(chebyshev(o, Point::new(6, 4)), 1);
        assert_eq!(chebyshev(o, Point::new(5, 7)), 2);
    }
}
