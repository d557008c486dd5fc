//! Classification of a simplification run
//!
//! Walks the source polyline alongside the filtered one and labels every
//! source point that was visited as included or excluded. Useful for
//! rendering a before/after overlay or for sanity-checking a filter's
//! output against its input.

use crate::{Result, SimplifyError};

/// Whether a source point survived the simplification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointState {
    Excluded,
    Included,
}

/// A source point paired with its position in the classification and the
/// verdict the filter reached on it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilteredPoint<T> {
    index: usize,
    point: T,
    state: PointState,
}

impl<T> FilteredPoint<T> {
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub fn point(&self) -> &T {
        &self.point
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> PointState {
        self.state
    }
}

/// Label each source point consumed by the filtered polyline as included
/// or excluded.
///
/// `filtered` must be a subsequence of `source` in the `PartialEq` sense.
/// A filtered polyline longer than its source, or containing a point the
/// remaining source does not, is rejected. Source points after the last
/// filtered match are not classified; every filter retains the final point,
/// so for filter output that tail is empty.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn quantify<T>(source: &[T], filtered: &[T]) -> Result<Vec<FilteredPoint<T>>>
where
    T: Clone + PartialEq,
{
    if filtered.len() > source.len() {
        return Err(SimplifyError::FilteredLongerThanSource {
            source_len: source.len(),
            filtered_len: filtered.len(),
        });
    }

    let mut offset = 0;
    let mut result = Vec::with_capacity(source.len());

    for (filtered_index, wanted) in filtered.iter().enumerate() {
        loop {
            let Some(candidate) = source.get(offset) else {
                return Err(SimplifyError::FilteredPointNotInSource {
                    index: filtered_index,
                });
            };
            offset += 1;

            let state = if candidate == wanted {
                PointState::Included
            } else {
                PointState::Excluded
            };
            result.push(FilteredPoint {
                index: result.len(),
                point: candidate.clone(),
                state,
            });

            if state == PointState::Included {
                break;
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Coordinate;

    fn states(result: &[FilteredPoint<Coordinate>]) -> Vec<PointState> {
        result.iter().map(FilteredPoint::state).collect()
    }

    #[test]
    fn test_excluded_points_interleaved() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 0.001);
        let c = Coordinate::new(0.0, 0.002);
        let d = Coordinate::new(0.0, 0.003);
        let e = Coordinate::new(0.0, 0.004);

        let source = vec![a, b, c, d, e];
        let filtered = vec![b, d, e];

        let result = quantify(&source, &filtered).unwrap();
        assert_eq!(
            states(&result),
            vec![
                PointState::Excluded,
                PointState::Included,
                PointState::Excluded,
                PointState::Included,
                PointState::Included,
            ]
        );

        for (index, entry) in result.iter().enumerate() {
            assert_eq!(entry.index(), index);
            assert_eq!(*entry.point(), source[index]);
        }
    }

    #[test]
    fn test_identity_filtering_all_included() {
        let source: Vec<Coordinate> = (0..4)
            .map(|i| Coordinate::new(0.0, f64::from(i) * 0.001))
            .collect();

        let result = quantify(&source, &source).unwrap();
        assert_eq!(result.len(), source.len());
        assert!(result.iter().all(|e| e.state() == PointState::Included));
    }

    #[test]
    fn test_filtered_longer_than_source_rejected() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 0.001);

        let result = quantify(&[a], &[a, b]);
        assert!(matches!(
            result,
            Err(SimplifyError::FilteredLongerThanSource {
                source_len: 1,
                filtered_len: 2,
            })
        ));
    }

    #[test]
    fn test_filtered_point_not_in_source_rejected() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 0.001);
        let c = Coordinate::new(0.0, 0.002);
        let stranger = Coordinate::new(5.0, 5.0);

        let result = quantify(&[a, b, c], &[a, stranger]);
        assert!(matches!(
            result,
            Err(SimplifyError::FilteredPointNotInSource { index: 1 })
        ));
    }

    #[test]
    fn test_empty_filtered_classifies_nothing() {
        let a = Coordinate::new(0.0, 0.0);
        let result = quantify(&[a], &[]).unwrap();
        assert!(result.is_empty());
    }
}
