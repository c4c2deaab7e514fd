//! Planar geometry shared across the engine.
//!
//! Sensor deployments operate on an abstract Cartesian plane, so the
//! straight-line metric is used rather than a geodesic one.

use geo::Coord;

/// Euclidean distance between two planar positions.
///
/// Pure and symmetric; returns `0.0` exactly when the positions coincide.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use watchgrid_core::euclidean_distance;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let corner = Coord { x: 3.0, y: 4.0 };
/// assert_eq!(euclidean_distance(origin, corner), 5.0);
/// ```
#[must_use]
pub fn euclidean_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Coord { x: 0.0, y: 0.0 })]
    #[case(Coord { x: -3.5, y: 12.25 })]
    fn distance_to_self_is_zero(#[case] p: Coord<f64>) {
        assert_eq!(euclidean_distance(p, p), 0.0);
    }

    #[rstest]
    #[case(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 }, 5.0)]
    #[case(Coord { x: 1.0, y: 1.0 }, Coord { x: 4.0, y: 5.0 }, 5.0)]
    #[case(Coord { x: 2.0, y: 2.0 }, Coord { x: 5.0, y: 6.0 }, 5.0)]
    fn known_triangles(#[case] a: Coord<f64>, #[case] b: Coord<f64>, #[case] expected: f64) {
        assert!((euclidean_distance(a, b) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = Coord { x: -2.0, y: 7.0 };
        let b = Coord { x: 9.5, y: -1.25 };
        assert_eq!(euclidean_distance(a, b), euclidean_distance(b, a));
    }
}
