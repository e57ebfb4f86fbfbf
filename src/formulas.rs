//! Closed-form relations between the quantities of a mechanical wave.
//!
//! All functions are pure. Optional arguments are explicit: `Some(0.0)` is a
//! zero value and takes part in the arithmetic, `None` means "not supplied".
//! Any division by zero is reported as [`WaveError::Domain`].

use crate::error::{Result, WaveError};
use std::f64::consts::PI;

pub const TWO_PI: f64 = 2.0 * PI;

fn divide(numerator: f64, denominator: f64, what: &str) -> Result<f64> {
    if denominator == 0.0 {
        return Err(WaveError::Domain(format!("{} must be non-zero", what)));
    }
    Ok(numerator / denominator)
}

/// Wavelength [m] from the propagation velocity and either the period or
/// the periodicity. The period is used when both are given.
pub fn wavelength(velocity: f64, period: Option<f64>, periodicity: Option<f64>) -> Result<f64> {
    match (period, periodicity) {
        (Some(period), _) => Ok(velocity * period),
        (None, Some(periodicity)) => divide(velocity, periodicity, "periodicity"),
        (None, None) => Err(WaveError::MissingParameter(
            "wavelength needs a period or a periodicity".to_string(),
        )),
    }
}

/// Propagation velocity [m/s]. The periodicity is used when both are given.
pub fn velocity(wavelength: f64, period: Option<f64>, periodicity: Option<f64>) -> Result<f64> {
    match (period, periodicity) {
        (_, Some(periodicity)) => Ok(wavelength * periodicity),
        (Some(period), None) => divide(wavelength, period, "period"),
        (None, None) => Err(WaveError::MissingParameter(
            "velocity needs a period or a periodicity".to_string(),
        )),
    }
}

/// Wave period [s]
pub fn period(wavelength: f64, velocity: f64) -> Result<f64> {
    divide(wavelength, velocity, "velocity")
}

/// Wave periodicity (temporal frequency) [1/s]
pub fn periodicity(wavelength: f64, velocity: f64) -> Result<f64> {
    divide(velocity, wavelength, "wavelength")
}

/// Angular frequency [rad/s]
pub fn angular_frequency(periodicity: f64) -> f64 {
    TWO_PI * periodicity
}

/// Wave number 2π/λ [rad/m]
pub fn wave_number(wavelength: f64) -> Result<f64> {
    divide(TWO_PI, wavelength, "wavelength")
}

/// Phase offset between positions `x1` and `x2` along the propagation axis.
/// Pass `x1 = 0.0` for the phase relative to the origin.
pub fn phase(wavelength: f64, x2: f64, x1: f64) -> Result<f64> {
    Ok(wave_number(wavelength)? * (x2 - x1))
}

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "expected {}, got {}",
        expected,
        actual
    );
}
