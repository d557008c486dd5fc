//! Lang simplification
//!
//! Defines a fixed-size search region whose first and last points form a
//! segment. Every intermediate point is measured against that segment; on
//! any breach the region shrinks by one from the right and is retested. Once
//! the whole region is within tolerance its interior points are dropped and a
//! new region starts at its last point.

use super::{ensure_non_negative, ensure_not_empty, push_if_absent, push_last_if_absent};
use crate::geodesic;
use crate::point::Position;
use crate::Result;

/// Fixed search region size.
const STEP: usize = 4;

/// Test every intermediate point of the window, scanning from the right.
fn window_breached<T: Position>(points: &[T], tolerance: f64, left: usize, right: usize) -> bool {
    for i in ((left + 1)..right).rev() {
        match geodesic::distance_to_line(&points[left], &points[right], &points[i]) {
            Some(p) if p.distance <= tolerance => continue,
            // Beyond tolerance, or the foot of the perpendicular falls
            // outside the segment.
            _ => return true,
        }
    }

    false
}

/// Simplify the polyline using a fixed search window and a perpendicular
/// distance `tolerance` in metres.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn simplify<T>(points: &[T], tolerance: f64) -> Result<Vec<T>>
where
    T: Position + Clone + PartialEq,
{
    ensure_not_empty(points)?;
    ensure_non_negative("tolerance", tolerance)?;

    let last = points.len() - 1;
    let mut retained = vec![points[0].clone()];
    let mut left = 0;
    let mut right = STEP.min(last);

    loop {
        while left != right && window_breached(points, tolerance, left, right) {
            right -= 1;
        }

        // The window may have collapsed onto an already-retained point.
        push_if_absent(&mut retained, &points[left]);
        push_if_absent(&mut retained, &points[right]);

        left = right;
        right = (left + STEP).min(last);

        if left >= right {
            break;
        }
    }

    push_last_if_absent(&mut retained, points);
    Ok(retained)
}
