//! # elastic-wave
//!
//! Longitudinal plane waves in elastic media: the closed-form relations
//! between wavelength, velocity, period and frequency, the displacement
//! S(x,t) = A·cos(ωt − 2π/λ·x) of a particle of the medium, and
//! displacement-vs-time charts saved as images.
//!
//! ```no_run
//! use elastic_wave::{FrequencySpec, NamingPolicy, OutputFormat, PlotRenderer, WaveParameters};
//! use std::f64::consts::PI;
//!
//! let wave = WaveParameters::new(0.2, 10.0, FrequencySpec::Angular(2.0 * PI))?;
//! let renderer = PlotRenderer::default().with_naming(NamingPolicy::Suffix);
//! let chart = renderer.render(9.0, 2.0, &wave)?;
//! renderer.save(&chart, "elastic-wave-plot", OutputFormat::Png)?;
//! # Ok::<(), elastic_wave::WaveError>(())
//! ```

pub mod config;
pub mod displacement;
pub mod error;
pub mod formulas;
pub mod grid;
pub mod medium;
pub mod naming;
#[cfg(feature = "viewer")]
pub mod viewer;
pub mod visualisation;

pub use displacement::{evaluate_displacement, DisplacementSeries, EvaluationPoint, PlaneWave};
pub use error::{Result, WaveError};
pub use grid::TimeGrid;
pub use medium::{FrequencySpec, WaveParameters};
pub use naming::{resolve_output_path, NamingPolicy, OutputFormat};
pub use visualisation::{ChartHandle, PlotRenderer, PlotStyle, YBounds};
