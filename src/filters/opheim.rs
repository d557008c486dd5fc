//! Opheim simplification
//!
//! A constrained variant of Reumann-Witkam. From the current key a ray is
//! defined through its successor; successive points are accepted while their
//! perpendicular distance to the ray stays below the minimum tolerance AND
//! their radial distance from the key (measured to the foot of the
//! perpendicular) stays below the maximum tolerance. The point before the
//! first violation becomes the next key.

use super::{ensure_non_negative, ensure_not_empty, push_last_if_absent};
use crate::geodesic;
use crate::point::Position;
use crate::Result;

fn within_tolerances<T: Position>(
    points: &[T],
    key: usize,
    candidate: usize,
    minimum_tolerance: f64,
    maximum_tolerance: f64,
) -> bool {
    let perpendicular =
        geodesic::distance_to_plane(&points[key], &points[key + 1], &points[candidate]);
    let radial = geodesic::distance(&points[key], &perpendicular.foot);

    perpendicular.distance < minimum_tolerance && radial < maximum_tolerance
}

fn seek_next_key<T: Position>(
    points: &[T],
    index: usize,
    minimum_tolerance: f64,
    maximum_tolerance: f64,
) -> Option<usize> {
    for i in (index + 2)..points.len() {
        if !within_tolerances(points, index, i, minimum_tolerance, maximum_tolerance) {
            return Some(i - 1);
        }
    }

    None
}

/// Simplify the polyline using a perpendicular (`minimum_tolerance`) and a
/// radial (`maximum_tolerance`) constraint, both in metres.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn simplify<T>(points: &[T], minimum_tolerance: f64, maximum_tolerance: f64) -> Result<Vec<T>>
where
    T: Position + Clone + PartialEq,
{
    ensure_not_empty(points)?;
    ensure_non_negative("minimum_tolerance", minimum_tolerance)?;
    ensure_non_negative("maximum_tolerance", maximum_tolerance)?;

    let mut retained = vec![points[0].clone()];
    let mut index = 0;

    while let Some(key) = seek_next_key(points, index, minimum_tolerance, maximum_tolerance) {
        retained.push(points[key].clone());
        index = key;
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
            simplify(&points, 5.0, 25.0),
            Err(SimplifyError::EmptyInput)
        ));
    }

    #[test]
    fn test_negative_tolerances_rejected_independently() {
        let points = vec![Coordinate::new(0.0, 0.008)];
        assert!(matches!(
            simplify(&points, -1.0, 2.0),
            Err(SimplifyError::NegativeParameter {
                name: "minimum_tolerance",
                ..
            })
        ));
        assert!(matches!(
            simplify(&points, 2.0, -1.0),
            Err(SimplifyError::NegativeParameter {
                name: "maximum_tolerance",
                ..
            })
        ));
    }

    #[test]
    fn test_radial_constraint_limits_key_line_reach() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.005, 0.003);
        let c = Coordinate::new(0.0045, 0.005);
        let d = Coordinate::new(0.005, 0.006);
        let e = Coordinate::new(0.0045, 0.008);
        let f = Coordinate::new(-0.002, 0.01);
        let g = Coordinate::new(-0.001, 0.02);
        let h = Coordinate::new(-0.002, 0.025);
        let i = Coordinate::new(0.005, 0.03);

        let points = vec![a, b, c, d, e, f, g, h, i];

        // The same layout Reumann-Witkam reduces to A,B,E,F,H,I: here the
        // maximum (radial) tolerance cuts the B-C line's reach before E, so
        // D, and in turn G, also survive.
        let result = simplify(&points, 175.0, 330.0).unwrap();
        assert_eq!(result, vec![a, b, d, e, f, g, h, i]);
    }

    #[test]
    fn test_single_point_passes_through() {
        let points = vec![Coordinate::new(1.0, 2.0)];
        assert_eq!(simplify(&points, 5.0, 25.0).unwrap(), points);
    }
}
