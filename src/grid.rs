use crate::error::{Result, WaveError};
use ndarray::Array1;

/// Sampling step used by the plots unless configured otherwise (seconds)
pub const DEFAULT_TIME_STEP: f64 = 0.01;

/// Upper bound on the number of samples in one grid
pub const MAX_SAMPLES: usize = 10_000_000;

/// Uniform time axis covering [0, duration)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    pub nt: usize, // Number of samples
    pub dt: f64,   // Step between samples (seconds)
}

impl TimeGrid {
    pub fn new(duration: f64, dt: f64) -> Result<Self> {
        if !(dt > 0.0) || !dt.is_finite() {
            return Err(WaveError::Domain(format!(
                "time step must be positive and finite, got {}",
                dt
            )));
        }
        if !duration.is_finite() {
            return Err(WaveError::Domain(format!(
                "duration must be finite, got {}",
                duration
            )));
        }
        let samples = if duration > 0.0 { (duration / dt).ceil() } else { 0.0 };
        if samples > MAX_SAMPLES as f64 {
            return Err(WaveError::Domain(format!(
                "{} s at a {} s step needs {} samples, more than {}",
                duration, dt, samples, MAX_SAMPLES
            )));
        }
        let nt = samples as usize;
        Ok(TimeGrid { nt, dt })
    }

    pub fn with_default_step(duration: f64) -> Result<Self> {
        Self::new(duration, DEFAULT_TIME_STEP)
    }

    pub fn time(&self, n: usize) -> f64 {
        self.dt * (n as f64)
    }

    pub fn len(&self) -> usize {
        self.nt
    }

    pub fn is_empty(&self) -> bool {
        self.nt == 0
    }

    pub fn times(&self) -> Array1<f64> {
        Array1::from_shape_fn(self.nt, |n| self.time(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::assert_close;

    #[test]
    fn test_sample_count_matches_ceiling() {
        assert_eq!(TimeGrid::with_default_step(2.0).unwrap().len(), 200);
        assert_eq!(TimeGrid::with_default_step(0.005).unwrap().len(), 1);
        assert_eq!(TimeGrid::new(1.0, 0.3).unwrap().len(), 4);
    }

    #[test]
    fn test_times_are_half_open() {
        let grid = TimeGrid::new(1.0, 0.25).unwrap();
        let times = grid.times();
        assert_eq!(times.len(), 4);
        assert_eq!(times[0], 0.0);
        assert_close(times[3], 0.75);
    }

    #[test]
    fn test_non_positive_duration_is_empty() {
        assert!(TimeGrid::with_default_step(0.0).unwrap().is_empty());
        assert!(TimeGrid::with_default_step(-1.0).unwrap().is_empty());
    }

    #[test]
    fn test_oversized_span_rejected() {
        assert!(matches!(
            TimeGrid::with_default_step(1e30),
            Err(WaveError::Domain(_))
        ));
        assert!(matches!(TimeGrid::new(1.0, 1e-300), Err(WaveError::Domain(_))));
        let limit = MAX_SAMPLES as f64 * 0.5;
        assert_eq!(TimeGrid::new(limit, 0.5).unwrap().len(), MAX_SAMPLES);
    }

    #[test]
    fn test_bad_step_rejected() {
        assert!(matches!(TimeGrid::new(1.0, 0.0), Err(WaveError::Domain(_))));
        assert!(matches!(TimeGrid::new(1.0, -0.1), Err(WaveError::Domain(_))));
        assert!(matches!(TimeGrid::new(1.0, f64::NAN), Err(WaveError::Domain(_))));
        assert!(matches!(
            TimeGrid::new(f64::INFINITY, 0.01),
            Err(WaveError::Domain(_))
        ));
    }
}
