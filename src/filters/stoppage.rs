//! Stoppage removal
//!
//! A composite of three passes aimed at recordings where the GPS kept
//! logging while the subject stood still. Duplicate timestamps are collapsed
//! to the first point of each run, nearby points are thinned with the radial
//! distance filter, and finally low-speed clusters are suppressed unless the
//! track has drifted far enough from the last moving point.

use super::{ensure_non_negative, ensure_not_empty, push_if_absent, push_last_if_absent};
use crate::filters::radial_distance;
use crate::geodesic;
use crate::point::Timestamped;
use crate::Result;

/// Metres in a statute mile.
pub const METRES_PER_MILE: f64 = 1609.34;

/// Convert kilometres per hour to metres per second.
#[inline]
#[must_use]
pub fn kph_to_mps(speed: f64) -> f64 {
    speed * 1000.0 / 3600.0
}

/// Convert miles per hour to metres per second.
#[inline]
#[must_use]
pub fn mph_to_mps(speed: f64) -> f64 {
    speed * METRES_PER_MILE / 3600.0
}

/// Keep the first point of every run sharing a timestamp. The final point is
/// kept regardless, so a trailing run does not lose the end of the track.
fn deduplicate_timestamps<T>(points: &[T]) -> Vec<T>
where
    T: Timestamped + Clone + PartialEq,
{
    let mut unique = Vec::with_capacity(points.len());

    let mut current = &points[0];
    for next in &points[1..] {
        if next.timestamp() != current.timestamp() {
            unique.push(current.clone());
            current = next;
        }
    }
    unique.push(current.clone());

    push_last_if_absent(&mut unique, points);
    unique
}

/// Suppress clusters where the speed to the next point falls below
/// `minimum_speed`, unless the track has moved more than `minimum_distance`
/// from the last moving point. At most one suppressed point is held back at
/// a time; it is reinstated if the following interval turns out to be moving.
fn remove_stoppages<T>(points: &[T], minimum_speed: f64, minimum_distance: f64) -> Vec<T>
where
    T: Timestamped + Clone + PartialEq,
{
    let mut retained = vec![points[0].clone()];

    let mut previous = 0;
    let mut ignore: Option<usize> = None;

    for index in 0..points.len() - 1 {
        let current = &points[index];
        let next = &points[index + 1];

        let distance = geodesic::distance(current, next);
        let elapsed = (next.timestamp() - current.timestamp()).as_seconds_f64();
        let speed = distance / elapsed;

        if speed > minimum_speed {
            if ignore != Some(index) {
                push_if_absent(&mut retained, current);
            }
            push_if_absent(&mut retained, next);

            previous = index;
            ignore = None;
        } else {
            let drift = geodesic::distance(&points[previous], next);
            if drift > minimum_distance {
                push_if_absent(&mut retained, current);
                push_if_absent(&mut retained, next);
                ignore = None;
            } else {
                ignore = Some(index + 1);
            }
        }
    }

    retained
}

/// Simplify the track by removing the point clusters recorded while
/// stationary.
///
/// `minimum_proximity` is the radial distance tolerance in metres,
/// `minimum_speed` is in metres per second, and `minimum_distance` bounds in
/// metres how far a low-speed track may drift before its points are kept
/// anyway.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn simplify<T>(
    points: &[T],
    minimum_proximity: f64,
    minimum_speed: f64,
    minimum_distance: f64,
) -> Result<Vec<T>>
where
    T: Timestamped + Clone + PartialEq,
{
    ensure_not_empty(points)?;
    ensure_non_negative("minimum_proximity", minimum_proximity)?;
    ensure_non_negative("minimum_speed", minimum_speed)?;
    ensure_non_negative("minimum_distance", minimum_distance)?;

    let unique = deduplicate_timestamps(points);
    let sparse = radial_distance::simplify(&unique, minimum_proximity)?;
    let retained = remove_stoppages(&sparse, minimum_speed, minimum_distance);

    tracing::debug!(
        "stoppage pipeline: {} points, {} after timestamp dedup, {} after proximity, {} retained",
        points.len(),
        unique.len(),
        sparse.len(),
        retained.len()
    );
    Ok(retained)
}
