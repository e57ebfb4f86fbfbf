use crate::error::Result;
use crate::formulas;
use crate::grid::TimeGrid;
use crate::medium::WaveParameters;
use ndarray::Array1;
use std::fmt;

/// Digits kept when a displacement is printed
pub const DISPLAY_PRECISION: i32 = 5;

/// Position x (m) and time t (s) of an evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationPoint {
    pub x: f64,
    pub t: f64,
}

impl EvaluationPoint {
    pub fn new(x: f64, t: f64) -> Self {
        Self { x, t }
    }
}

/// S(x,t) = A·cos(ωt − 2π/λ·x)
pub fn evaluate_displacement(wave: &WaveParameters, point: EvaluationPoint) -> Result<f64> {
    let phase = formulas::phase(wave.wavelength(), point.x, 0.0)?;
    Ok(wave.amplitude() * (wave.angular_frequency() * point.t - phase).cos())
}

pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// A plane wave observed at one point; prints its displacement.
#[derive(Debug, Clone, Copy)]
pub struct PlaneWave {
    pub wave: WaveParameters,
    pub point: EvaluationPoint,
}

impl PlaneWave {
    pub fn new(wave: WaveParameters, point: EvaluationPoint) -> Self {
        Self { wave, point }
    }

    pub fn displacement(&self) -> Result<f64> {
        evaluate_displacement(&self.wave, self.point)
    }
}

impl fmt::Display for PlaneWave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.displacement().map_err(|_| fmt::Error)?;
        // Debug keeps the trailing ".0" on whole values
        write!(f, "{:?}", round_to(value, DISPLAY_PRECISION))
    }
}

/// Displacement history of the particle at `x` over a time grid
#[derive(Debug, Clone)]
pub struct DisplacementSeries {
    pub x: f64,
    pub times: Array1<f64>,
    pub values: Array1<f64>,
}

impl DisplacementSeries {
    pub fn sample(wave: &WaveParameters, x: f64, grid: &TimeGrid) -> Result<Self> {
        // phase only depends on x, so it is computed once for the whole series
        let phase = formulas::phase(wave.wavelength(), x, 0.0)?;
        let times = grid.times();
        let values = times.mapv(|t| wave.amplitude() * (wave.angular_frequency() * t - phase).cos());
        log::debug!("Sampled {} displacement values at x={}", values.len(), x);
        Ok(Self { x, times, values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// (min, max) of the sampled displacement, `None` when empty
    pub fn value_range(&self) -> Option<(f64, f64)> {
        if self.values.is_empty() {
            return None;
        }
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}
