//! Polyline simplification filters
//!
//! Each submodule implements one reduction algorithm as a pure
//! `simplify(points, ..) -> Result<Vec<T>>` function. All filters validate
//! their arguments before any scan, retain the first and last input points,
//! and return the input points themselves, never recomputed values.

pub mod direction;
pub mod douglas_peucker;
pub mod lang;
pub mod nth_point;
pub mod opheim;
pub mod perpendicular_distance;
pub mod radial_distance;
pub mod reumann_witkam;
pub mod stoppage;

use crate::{Result, SimplifyError};

pub(crate) fn ensure_not_empty<T>(points: &[T]) -> Result<()> {
    if points.is_empty() {
        return Err(SimplifyError::EmptyInput);
    }
    Ok(())
}

pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value < 0.0 {
        return Err(SimplifyError::NegativeParameter { name, value });
    }
    Ok(())
}

/// Add the point to the retained set unless an equal point is already
/// there. Returns whether the point was added.
pub(crate) fn push_if_absent<T: Clone + PartialEq>(retained: &mut Vec<T>, point: &T) -> bool {
    if retained.contains(point) {
        return false;
    }
    retained.push(point.clone());
    true
}

/// Add the last input point to the retained set unless already there.
pub(crate) fn push_last_if_absent<T: Clone + PartialEq>(retained: &mut Vec<T>, points: &[T]) {
    if let Some(last) = points.last() {
        push_if_absent(retained, last);
    }
}
