//! Douglas-Peucker simplification
//!
//! Starts from the single chord joining the first and last points, finds the
//! intermediate point furthest from that chord, and recurses on both halves
//! whenever that furthest distance exceeds the tolerance. Retained points are
//! discovered in subtree order, so each carries its original index and the
//! result is re-sorted before being returned.

use super::{ensure_non_negative, ensure_not_empty};
use crate::geodesic;
use crate::point::Position;
use crate::Result;

/// A point tagged with its index in the source polyline. Working state only;
/// discarded once the retained set has been re-sorted.
struct Sequenced<'a, T> {
    index: usize,
    point: &'a T,
}

fn reduce<'a, T: Position>(
    points: &'a [T],
    first: usize,
    last: usize,
    tolerance: f64,
    retained: &mut Vec<Sequenced<'a, T>>,
) {
    let mut maximum_distance = 0.0_f64;
    let mut index_to_keep = first;

    // Find the intermediate point furthest from the chord.
    for index in (first + 1)..last {
        let distance =
            geodesic::cross_track_distance(&points[index], &points[first], &points[last]).abs();
        if distance > maximum_distance {
            maximum_distance = distance;
            index_to_keep = index;
        }
    }

    if maximum_distance > tolerance && index_to_keep != first {
        retained.push(Sequenced {
            index: index_to_keep,
            point: &points[index_to_keep],
        });

        reduce(points, first, index_to_keep, tolerance, retained);
        reduce(points, index_to_keep, last, tolerance, retained);
    }
}

/// Simplify the polyline, keeping every point further than `tolerance`
/// metres from the chords of the running simplification.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn simplify<T>(points: &[T], tolerance: f64) -> Result<Vec<T>>
where
    T: Position + Clone + PartialEq,
{
    ensure_not_empty(points)?;
    ensure_non_negative("tolerance", tolerance)?;

    let last = points.len() - 1;
    let mut retained = vec![Sequenced {
        index: 0,
        point: &points[0],
    }];

    reduce(points, 0, last, tolerance, &mut retained);

    if !retained.iter().any(|s| s.index == last) {
        retained.push(Sequenced {
            index: last,
            point: &points[last],
        });
    }

    // Recursion discovers keeps out of order; restore the original order.
    retained.sort_by_key(|s| s.index);

    tracing::trace!("douglas-peucker retained {} of {} points", retained.len(), points.len());
    Ok(retained.into_iter().map(|s| s.point.clone()).collect())
}
