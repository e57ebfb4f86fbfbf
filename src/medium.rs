use crate::error::{Result, WaveError};
use crate::formulas::{self, TWO_PI};

/// How the caller describes the temporal behaviour of the wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrequencySpec {
    /// ω in rad/s, used as-is
    Angular(f64),
    /// f in 1/s, converted with ω = 2πf
    Temporal(f64),
}

impl FrequencySpec {
    /// Picks the explicit angular frequency first, then the periodicity.
    pub fn from_options(omega: Option<f64>, periodicity: Option<f64>) -> Result<Self> {
        match (omega, periodicity) {
            (Some(omega), _) => Ok(FrequencySpec::Angular(omega)),
            (None, Some(periodicity)) => Ok(FrequencySpec::Temporal(periodicity)),
            (None, None) => Err(WaveError::MissingParameter(
                "either omega or periodicity must be given".to_string(),
            )),
        }
    }

    pub fn resolve(self) -> f64 {
        match self {
            FrequencySpec::Angular(omega) => omega,
            FrequencySpec::Temporal(periodicity) => formulas::angular_frequency(periodicity),
        }
    }
}

/// A plane wave travelling through an elastic medium.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParameters {
    amplitude: f64,
    wavelength: f64,
    omega: f64, // resolved angular frequency (rad/s)
}

impl WaveParameters {
    pub fn new(amplitude: f64, wavelength: f64, frequency: FrequencySpec) -> Result<Self> {
        if wavelength == 0.0 {
            return Err(WaveError::Domain("wavelength must be non-zero".to_string()));
        }
        Ok(Self {
            amplitude,
            wavelength,
            omega: frequency.resolve(),
        })
    }

    pub fn from_options(
        amplitude: f64,
        wavelength: f64,
        omega: Option<f64>,
        periodicity: Option<f64>,
    ) -> Result<Self> {
        Self::new(
            amplitude,
            wavelength,
            FrequencySpec::from_options(omega, periodicity)?,
        )
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    pub fn angular_frequency(&self) -> f64 {
        self.omega
    }

    /// Temporal frequency f = ω/2π
    pub fn frequency(&self) -> f64 {
        self.omega / TWO_PI
    }

    pub fn period(&self) -> Result<f64> {
        let frequency = self.frequency();
        if frequency == 0.0 {
            return Err(WaveError::Domain(
                "a wave with zero frequency has no period".to_string(),
            ));
        }
        Ok(1.0 / frequency)
    }

    /// Propagation velocity v = λf
    pub fn velocity(&self) -> f64 {
        self.wavelength * self.frequency()
    }
}
