//! Direction-change simplification
//!
//! Geometry-free in the radial sense: a point is retained only when the
//! bearing from the last retained point to it differs from the bearing it
//! makes with its successor by more than `variation` degrees. The scan stops
//! two points short of the end, so the points immediately before the final
//! one are never candidates; the final point itself is always kept.

use super::{ensure_non_negative, ensure_not_empty, push_if_absent, push_last_if_absent};
use crate::geodesic;
use crate::point::Position;
use crate::Result;

/// Keep the points where the course changes by more than `variation`
/// degrees.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn simplify<T>(points: &[T], variation: f64) -> Result<Vec<T>>
where
    T: Position + Clone + PartialEq,
{
    ensure_not_empty(points)?;
    ensure_non_negative("variation", variation)?;

    let mut retained = vec![points[0].clone()];
    // Always the last element of the retained set.
    let mut last_kept = &points[0];

    let mut index = 1;
    while index + 2 < points.len() {
        let current = &points[index];
        let next = &points[index + 1];

        let inbound = geodesic::bearing(last_kept, current).abs();
        let outbound = geodesic::bearing(current, next).abs();

        if (inbound < outbound - variation || outbound + variation < inbound)
            && push_if_absent(&mut retained, current)
        {
            last_kept = current;
        }

        index += 1;
    }

    push_last_if_absent(&mut retained, points);
    Ok(retained)
}
