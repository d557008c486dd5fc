//! Index-based decimation
//!
//! No geometry involved: keeps the first point and every `multiple`-th point
//! after it, then the final point. Useful as a cheap pre-pass before one of
//! the distance-based filters.

use super::{ensure_not_empty, push_last_if_absent};
use crate::{Result, SimplifyError};

/// Keep every `multiple`-th point, starting from the first, plus the final
/// point. A multiple of 1 returns the input unchanged.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn simplify<T>(points: &[T], multiple: usize) -> Result<Vec<T>>
where
    T: Clone + PartialEq,
{
    ensure_not_empty(points)?;
    if multiple == 0 {
        return Err(SimplifyError::ZeroMultiple);
    }

    let mut retained: Vec<T> = points.iter().step_by(multiple).cloned().collect();
    push_last_if_absent(&mut retained, points);
    Ok(retained)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Coordinate;
    use crate::SimplifyError;

    fn numbered(count: usize) -> Vec<Coordinate> {
        (0..count)
            .map(|i| Coordinate::new(0.0, i as f64 * 0.001))
            .collect()
    }

    #[test]
    fn test_empty_input_rejected() {
        let points: Vec<Coordinate> = Vec::new();
        assert!(matches!(
            simplify(&points, 3),
            Err(SimplifyError::EmptyInput)
        ));
    }

    #[test]
    fn test_zero_multiple_rejected() {
        let points = numbered(5);
        assert!(matches!(
            simplify(&points, 0),
            Err(SimplifyError::ZeroMultiple)
        ));
    }

    #[test]
    fn test_every_third_point_kept() {
        let points = numbered(10);

        let result = simplify(&points, 3).unwrap();
        assert_eq!(
            result,
            vec![points[0], points[3], points[6], points[9]]
        );
    }

    #[test]
    fn test_final_point_always_kept() {
        let points = numbered(11);

        // 0, 3, 6, 9 fall on the stride; 10 is appended.
        let result = simplify(&points, 3).unwrap();
        assert_eq!(
            result,
            vec![points[0], points[3], points[6], points[9], points[10]]
        );
    }

    #[test]
    fn test_multiple_of_one_is_identity() {
        let points = numbered(4);
        assert_eq!(simplify(&points, 1).unwrap(), points);
    }
}
