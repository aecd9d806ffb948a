//! Safe casting utilities for pixel arithmetic

use crate::{Error, Result};

/// Round an f64 to the nearest i64 with overflow checking
///
/// Halfway cases round away from zero.
///
/// # Errors
///
/// Returns an error if the value is not finite or outside i64 range
#[allow(clippy::cast_possible_truncation)] // Truncation after bounds check is safe
#[allow(clippy::cast_precision_loss)] // MIN/MAX bounds checking is approximate
pub fn f64_round_to_i64(value: f64) -> Result<i64> {
    let rounded = value.round();
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        Ok(rounded as i64)
    } else {
        Err(Error::InvalidInput(format!(
            "Value {value} cannot be safely converted to i64"
        )))
    }
}

/// Round an f64 to the nearest i64, saturating at the i64 bounds
///
/// NaN maps to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // `as` saturates for out of range floats
pub fn f64_round_to_i64_saturating(value: f64) -> i64 {
    f64_round_to_i64(value).unwrap_or_else(|_| value.round() as i64)
}

/// Convert a pixel count to f64
#[must_use]
#[allow(clippy::cast_precision_loss)] // Pixel offsets are far below 2^52
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}
