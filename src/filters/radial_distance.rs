//! Radial distance simplification
//!
//! A brute force O(n) algorithm that collapses successive points clustered
//! too closely around a key into that key. Starting at the first point, every
//! consecutive point within `tolerance` metres of the key is dropped; the
//! first point at or beyond the tolerance becomes the next key.

use super::{ensure_non_negative, ensure_not_empty, push_last_if_absent};
use crate::geodesic;
use crate::point::Position;
use crate::Result;

/// Simplify the polyline, dropping every point closer than `tolerance`
/// metres to the current key.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn simplify<T>(points: &[T], tolerance: f64) -> Result<Vec<T>>
where
    T: Position + Clone + PartialEq,
{
    ensure_not_empty(points)?;
    ensure_non_negative("tolerance", tolerance)?;

    let mut retained = vec![points[0].clone()];
    let mut key = &points[0];

    for point in &points[1..] {
        if geodesic::distance(key, point) >= tolerance {
            retained.push(point.clone());
            key = point;
        }
    }

    push_last_if_absent(&mut retained, points);
    Ok(retained)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Coordinate;
    use crate::SimplifyError;

    #[test]
    fn test_empty_input_rejected() {
        let points: Vec<Coordinate> = Vec::new();
        assert!(matches!(
            simplify(&points, 2.0),
            Err(SimplifyError::EmptyInput)
        ));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let points = vec![Coordinate::new(0.0, 0.008)];
        assert!(matches!(
            simplify(&points, -1.0),
            Err(SimplifyError::NegativeParameter { .. })
        ));
    }

    #[test]
    fn test_single_point_passes_through() {
        let points = vec![Coordinate::new(1.0, 2.0)];
        assert_eq!(simplify(&points, 5.0).unwrap(), points);
    }

    #[test]
    fn test_clustered_points_collapse_onto_keys() {
        let a = Coordinate::new(0.0, 0.0);
        let a1 = Coordinate::new(0.0002, 0.00015);
        let a2 = Coordinate::new(0.0, 0.0002);
        let b = Coordinate::new(0.0, 0.00045);
        let b1 = Coordinate::new(0.00015, 0.00068);
        let c = Coordinate::new(0.0003, 0.0007);
        let d = Coordinate::new(-0.00045, 0.0009);
        let e = Coordinate::new(0.0006, 0.001);

        let points = vec![a, a1, a2, b, b1, c, d, e];
        let tolerance = 34.0;

        let result = simplify(&points, tolerance).unwrap();
        assert_eq!(result, vec![a, b, c, d, e]);

        // The dropped points really are within tolerance of their key, and
        // each retained point is at or beyond tolerance from the previous.
        assert!(geodesic::distance(&a, &a1) < tolerance);
        assert!(geodesic::distance(&a, &a2) < tolerance);
        assert!(geodesic::distance(&b, &b1) < tolerance);
        for pair in result.windows(2) {
            assert!(geodesic::distance(&pair[0], &pair[1]) >= tolerance);
        }
    }

    #[test]
    fn test_idempotent() {
        let points = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0002, 0.00015),
            Coordinate::new(0.0, 0.0002),
            Coordinate::new(0.0, 0.00045),
            Coordinate::new(0.00015, 0.00068),
            Coordinate::new(0.0003, 0.0007),
            Coordinate::new(-0.00045, 0.0009),
            Coordinate::new(0.0006, 0.001),
        ];

        let once = simplify(&points, 34.0).unwrap();
        let twice = simplify(&once, 34.0).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_zero_tolerance_keeps_everything() {
        let points = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 0.001),
            Coordinate::new(0.0, 0.002),
        ];
        assert_eq!(simplify(&points, 0.0).unwrap(), points);
    }
}
