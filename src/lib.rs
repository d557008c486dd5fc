//! Track Simplify - Polyline Simplification for GPS Tracks and Routes
//!
//! This library reduces the number of points in a geographic polyline while
//! preserving its essential shape, within caller-supplied error tolerances.
//! Every filter returns a subsequence of its input, in original order, always
//! containing the first and last input points; no filter ever fabricates new
//! coordinate values.
//!
//! # Architecture
//!
//! - **[`Coordinate`] / [`Waypoint`] / [`Trackpoint`]**: immutable point value types
//! - **[`geodesic`]**: great-circle primitives (distance, bearing, cross-track)
//! - **[`filters`]**: the simplification algorithms, one module each
//! - **[`analysis`]**: classifies every source point as retained or discarded
//!
//! # Performance Characteristics
//!
//! - Radial distance, perpendicular distance, Reumann-Witkam, Opheim,
//!   nth-point, direction: O(N)
//! - Lang: O(N·W) for the fixed search window W
//! - Douglas-Peucker: O(N log N) average, O(N²) on pathological input

pub mod analysis;
pub mod filters;
pub mod geodesic;
mod point;

// Public API exports
pub use analysis::{FilteredPoint, PointState};
pub use point::{Coordinate, Position, Timestamped, Trackpoint, Waypoint};

/// Error types for the simplification module
#[derive(Debug, thiserror::Error)]
pub enum SimplifyError {
    #[error("point sequence is empty")]
    EmptyInput,

    #[error("{name} cannot be negative: {value}")]
    NegativeParameter { name: &'static str, value: f64 },

    #[error("multiple cannot be zero")]
    ZeroMultiple,

    #[error("waypoint has no timestamp")]
    MissingTimestamp,

    // Named to avoid thiserror treating a `source` field as the error cause.
    #[error("filtered sequence is longer than the source ({filtered_len} > {source_len})")]
    FilteredLongerThanSource {
        source_len: usize,
        filtered_len: usize,
    },

    #[error("filtered point at index {index} does not appear in the remaining source")]
    FilteredPointNotInSource { index: usize },
}

pub type Result<T> = std::result::Result<T, SimplifyError>;
