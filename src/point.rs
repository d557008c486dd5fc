//! Point value types for geographic polylines
//!
//! Richer point types embed a [`Coordinate`] rather than extending it, and
//! expose their position through the [`Position`] trait. All three are
//! immutable value types; filters only ever select subsets of them.

use crate::{Result, SimplifyError};
use std::cmp::Ordering;
use time::OffsetDateTime;

/// A point on the earth's surface, in degrees.
pub trait Position {
    /// The angular distance north or south of the equator.
    fn latitude(&self) -> f64;
    /// The angular distance east or west of the Greenwich meridian.
    fn longitude(&self) -> f64;
}

/// A [`Position`] that was travelled through at a known point in time.
pub trait Timestamped: Position {
    fn timestamp(&self) -> OffsetDateTime;
}

/// A 2-dimensional point on the earth's surface.
///
/// Equality is by latitude then longitude; ordering uses the same keys via
/// [`f64::total_cmp`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Position for Coordinate {
    #[inline]
    fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(
            self.latitude
                .total_cmp(&other.latitude)
                .then_with(|| self.longitude.total_cmp(&other.longitude)),
        )
    }
}

impl From<geo::Point<f64>> for Coordinate {
    /// Convert from a `geo` point, which stores longitude as x and latitude as y.
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        geo::Point::new(coordinate.longitude, coordinate.latitude)
    }
}

impl From<&gpx::Waypoint> for Coordinate {
    fn from(waypoint: &gpx::Waypoint) -> Self {
        Self::from(waypoint.point())
    }
}

/// A 3-dimensional point on the earth's surface.
///
/// Elevation participates in both equality and ordering, as the tertiary key.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    coordinate: Coordinate,
    elevation: f64,
}

impl Waypoint {
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            coordinate: Coordinate::new(latitude, longitude),
            elevation,
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// The height above sea level of this location.
    #[inline]
    pub fn elevation(&self) -> f64 {
        self.elevation
    }
}

impl Position for Waypoint {
    #[inline]
    fn latitude(&self) -> f64 {
        self.coordinate.latitude
    }

    #[inline]
    fn longitude(&self) -> f64 {
        self.coordinate.longitude
    }
}

impl PartialOrd for Waypoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let ordering = self
            .coordinate
            .partial_cmp(&other.coordinate)?
            .then_with(|| self.elevation.total_cmp(&other.elevation));
        Some(ordering)
    }
}

impl From<&gpx::Waypoint> for Waypoint {
    /// A missing GPX elevation maps to sea level.
    fn from(waypoint: &gpx::Waypoint) -> Self {
        Self::new(
            waypoint.point().y(),
            waypoint.point().x(),
            waypoint.elevation.unwrap_or(0.0),
        )
    }
}

/// The point-in-time that a specific place was travelled through.
///
/// Equality and ordering are by latitude, longitude, and timestamp; elevation
/// is carried but deliberately excluded from the equality contract, matching
/// how recorded tracks are compared (two fixes at the same place and instant
/// are the same fix even when the altimeter disagrees).
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trackpoint {
    coordinate: Coordinate,
    elevation: f64,
    timestamp: OffsetDateTime,
}

impl Trackpoint {
    pub fn new(latitude: f64, longitude: f64, timestamp: OffsetDateTime) -> Self {
        Self::with_elevation(latitude, longitude, 0.0, timestamp)
    }

    pub fn with_elevation(
        latitude: f64,
        longitude: f64,
        elevation: f64,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            coordinate: Coordinate::new(latitude, longitude),
            elevation,
            timestamp,
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[inline]
    pub fn elevation(&self) -> f64 {
        self.elevation
    }
}

impl Position for Trackpoint {
    #[inline]
    fn latitude(&self) -> f64 {
        self.coordinate.latitude
    }

    #[inline]
    fn longitude(&self) -> f64 {
        self.coordinate.longitude
    }
}

impl Timestamped for Trackpoint {
    #[inline]
    fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }
}

impl PartialEq for Trackpoint {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate && self.timestamp == other.timestamp
    }
}

impl PartialOrd for Trackpoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let ordering = self
            .coordinate
            .partial_cmp(&other.coordinate)?
            .then_with(|| self.timestamp.cmp(&other.timestamp));
        Some(ordering)
    }
}

impl TryFrom<&gpx::Waypoint> for Trackpoint {
    type Error = SimplifyError;

    /// Build a trackpoint from a parsed GPX waypoint.
    ///
    /// # Errors
    /// Returns [`SimplifyError::MissingTimestamp`] when the waypoint carries
    /// no `<time>` element.
    fn try_from(waypoint: &gpx::Waypoint) -> Result<Self> {
        let time = waypoint.time.ok_or(SimplifyError::MissingTimestamp)?;
        Ok(Self::with_elevation(
            waypoint.point().y(),
            waypoint.point().x(),
            waypoint.elevation.unwrap_or(0.0),
            time.into(),
        ))
    }
}
