//! Great-circle primitives used by the simplification filters
//!
//! All functions are pure and operate on anything implementing [`Position`].
//! Distances are in metres on a spherical earth, bearings in degrees.

use crate::point::{Coordinate, Position};

/// Earth's mean radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// The perpendicular projection of a point onto a great-circle line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perpendicular {
    /// Distance from the point to its foot, in metres.
    pub distance: f64,
    /// The foot of the perpendicular on the line.
    pub foot: Coordinate,
}

/// Haversine distance between two points, in metres.
pub fn distance(a: &impl Position, b: &impl Position) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let delta_lat = (b.latitude() - a.latitude()).to_radians();
    let delta_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Initial bearing from `a` to `b`, in degrees within `[0, 360)`.
pub fn bearing(a: &impl Position, b: &impl Position) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let delta_lon = (b.longitude() - a.longitude()).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// The point reached by travelling `distance_m` metres from `origin` on the
/// given initial bearing.
pub fn destination(origin: &impl Position, bearing_deg: f64, distance_m: f64) -> Coordinate {
    let lat1 = origin.latitude().to_radians();
    let lon1 = origin.longitude().to_radians();
    let theta = bearing_deg.to_radians();
    let delta = distance_m / EARTH_RADIUS_M;

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    Coordinate::new(lat2.to_degrees(), lon2.to_degrees())
}

/// Signed cross-track distance from `point` to the great-circle path through
/// `line_start` and `line_end`, in metres. Points to the left of the path
/// (relative to the direction of travel) are negative.
pub fn cross_track_distance(
    point: &impl Position,
    line_start: &impl Position,
    line_end: &impl Position,
) -> f64 {
    let d13 = distance(line_start, point) / EARTH_RADIUS_M;
    let t13 = bearing(line_start, point).to_radians();
    let t12 = bearing(line_start, line_end).to_radians();

    (d13.sin() * (t13 - t12).sin()).asin() * EARTH_RADIUS_M
}

/// Signed along-track distance of the foot of the perpendicular from
/// `line_start`, in metres. Negative when the foot falls behind the start.
fn along_track_distance(
    point: &impl Position,
    line_start: &impl Position,
    line_end: &impl Position,
) -> f64 {
    let d13 = distance(line_start, point) / EARTH_RADIUS_M;
    let t13 = bearing(line_start, point).to_radians();
    let t12 = bearing(line_start, line_end).to_radians();

    let dxt = (d13.sin() * (t13 - t12).sin()).asin();
    // Rounding can push the ratio marginally outside acos's domain.
    let along = (d13.cos() / dxt.cos()).clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M;

    if (t13 - t12).cos() < 0.0 { -along } else { along }
}

/// Perpendicular distance from `point` to the infinite great-circle line
/// through `line_start` and `line_end`. The foot of the perpendicular always
/// exists on an unbounded line.
pub fn distance_to_plane(
    line_start: &impl Position,
    line_end: &impl Position,
    point: &impl Position,
) -> Perpendicular {
    let along = along_track_distance(point, line_start, line_end);
    Perpendicular {
        distance: cross_track_distance(point, line_start, line_end).abs(),
        foot: destination(line_start, bearing(line_start, line_end), along),
    }
}

/// Perpendicular distance from `point` to the segment between `line_start`
/// and `line_end`. Returns `None` when the foot of the perpendicular falls
/// outside the segment.
pub fn distance_to_line(
    line_start: &impl Position,
    line_end: &impl Position,
    point: &impl Position,
) -> Option<Perpendicular> {
    let along = along_track_distance(point, line_start, line_end);
    if along < 0.0 || along > distance(line_start, line_end) {
        return None;
    }

    Some(Perpendicular {
        distance: cross_track_distance(point, line_start, line_end).abs(),
        foot: destination(line_start, bearing(line_start, line_end), along),
    })
}
