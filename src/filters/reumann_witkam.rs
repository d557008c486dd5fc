//! Reumann-Witkam simplification
//!
//! An O(n) routine using a point-to-line (perpendicular) distance tolerance.
//! A line is defined through the current key and its successor; successive
//! points are dropped while they stay within tolerance of that line. The
//! point before the first violation becomes the next key, and the process
//! repeats from there.

use super::{ensure_non_negative, ensure_not_empty, push_last_if_absent};
use crate::geodesic;
use crate::point::Position;
use crate::Result;

/// Find the next key after `index`, or `None` when the rest of the polyline
/// stays within tolerance of the current key line.
fn seek_next_key<T: Position>(points: &[T], index: usize, tolerance: f64) -> Option<usize> {
    for i in (index + 2)..points.len() {
        let perpendicular =
            geodesic::distance_to_plane(&points[index], &points[index + 1], &points[i]);
        if perpendicular.distance >= tolerance {
            return Some(i - 1);
        }
    }

    None
}

/// Simplify the polyline, dropping points within `tolerance` metres of the
/// line through the current key pair.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn simplify<T>(points: &[T], tolerance: f64) -> Result<Vec<T>>
where
    T: Position + Clone + PartialEq,
{
    ensure_not_empty(points)?;
    ensure_non_negative("tolerance", tolerance)?;

    let mut retained = vec![points[0].clone()];
    let mut index = 0;

    while let Some(key) = seek_next_key(points, index, tolerance) {
        retained.push(points[key].clone());
        index = key;
    }

    push_last_if_absent(&mut retained, points);
    Ok(retained)
}
