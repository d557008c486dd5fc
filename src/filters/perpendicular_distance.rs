//! Perpendicular distance simplification
//!
//! An O(n) routine using a point-to-segment distance tolerance. Each point is
//! measured against the segment joining its immediate neighbours; a point
//! within tolerance is dropped together with a skip past its successor, so
//! every point is only ever tested against its direct neighbours.

use super::{ensure_non_negative, ensure_not_empty, push_last_if_absent};
use crate::geodesic;
use crate::point::Position;
use crate::Result;

/// Simplify the polyline, dropping points within `tolerance` metres of the
/// segment joining their neighbours.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn simplify<T>(points: &[T], tolerance: f64) -> Result<Vec<T>>
where
    T: Position + Clone + PartialEq,
{
    ensure_not_empty(points)?;
    ensure_non_negative("tolerance", tolerance)?;

    let mut retained = vec![points[0].clone()];
    let mut index = 1;

    while index + 1 < points.len() {
        let perpendicular =
            geodesic::distance_to_line(&points[index - 1], &points[index + 1], &points[index]);
        match perpendicular {
            // Within tolerance: drop this point, keep its successor, and
            // skip past both.
            Some(p) if p.distance <= tolerance => {
                retained.push(points[index + 1].clone());
                index += 2;
            }
            // Beyond tolerance, or no valid foot of perpendicular.
            _ => {
                retained.push(points[index].clone());
                index += 1;
            }
        }
    }

    push_last_if_absent(&mut retained, points);
    Ok(retained)
}
