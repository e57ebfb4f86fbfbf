use crate::grid::DEFAULT_TIME_STEP;
use crate::medium::WaveParameters;
use crate::naming::{NamingPolicy, OutputFormat};
use crate::visualisation::{PlotRenderer, PlotStyle, YBounds};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs;
use std::path::PathBuf;

/// Wave description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveConfig {
    pub amplitude: f64,  // (m)
    pub wavelength: f64, // (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omega: Option<f64>, // Angular frequency (rad/s), wins over periodicity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periodicity: Option<f64>, // Temporal frequency (1/s)
}

impl WaveConfig {
    fn validate(&self) -> Result<()> {
        if !self.amplitude.is_finite() {
            return Err(anyhow!("amplitude must be finite, got {}", self.amplitude));
        }
        if !self.wavelength.is_finite() || self.wavelength == 0.0 {
            return Err(anyhow!(
                "wavelength must be finite and non-zero, got {}",
                self.wavelength
            ));
        }
        for (name, value) in [("omega", self.omega), ("periodicity", self.periodicity)] {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(anyhow!("{} must be finite, got {}", name, value));
                }
            }
        }
        match (self.omega, self.periodicity) {
            (None, None) => Err(anyhow!("either omega or periodicity must be given")),
            (Some(omega), Some(_)) => {
                log::warn!("Both omega and periodicity given, using omega={}", omega);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    pub fn parameters(&self) -> Result<WaveParameters> {
        Ok(WaveParameters::from_options(
            self.amplitude,
            self.wavelength,
            self.omega,
            self.periodicity,
        )?)
    }
}

/// Where the wave is observed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointConfig {
    pub x: f64, // Position (m)
    pub t: f64, // Evaluation time, or plotted time span (s)
}

impl PointConfig {
    fn validate(&self) -> Result<()> {
        if !self.x.is_finite() || !self.t.is_finite() {
            return Err(anyhow!(
                "x and t must be finite (x={}, t={})",
                self.x,
                self.t
            ));
        }
        Ok(())
    }
}

/// Plot and output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "default_step")]
    pub step: f64,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_title_font_size")]
    pub title_font_size: f64,
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f64,
    #[serde(default = "default_line_width")]
    pub line_width: u32,
    #[serde(default)]
    pub y_bounds: YBounds,
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub naming: NamingPolicy,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_step() -> f64 {
    DEFAULT_TIME_STEP
}

fn default_width() -> u32 {
    PlotStyle::default().width
}

fn default_height() -> u32 {
    PlotStyle::default().height
}

fn default_font_family() -> String {
    PlotStyle::default().font_family
}

fn default_title_font_size() -> f64 {
    PlotStyle::default().title_font_size
}

fn default_label_font_size() -> f64 {
    PlotStyle::default().label_font_size
}

fn default_line_width() -> u32 {
    PlotStyle::default().line_width
}

fn default_output_root() -> PathBuf {
    PathBuf::from("./plots")
}

fn default_file_name() -> String {
    "elastic-wave-plot".to_string()
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            step: default_step(),
            width: default_width(),
            height: default_height(),
            font_family: default_font_family(),
            title_font_size: default_title_font_size(),
            label_font_size: default_label_font_size(),
            line_width: default_line_width(),
            y_bounds: YBounds::default(),
            output_root: default_output_root(),
            format: OutputFormat::default(),
            naming: NamingPolicy::default(),
            file_name: default_file_name(),
        }
    }
}

impl PlotConfig {
    fn validate(&self) -> Result<()> {
        if !(self.step > 0.0) || !self.step.is_finite() {
            return Err(anyhow!("step must be positive, got {}", self.step));
        }
        if self.width == 0 || self.height == 0 {
            return Err(anyhow!(
                "Image dimensions must be positive (width={}, height={})",
                self.width,
                self.height
            ));
        }
        if self.title_font_size <= 0.0 || self.label_font_size <= 0.0 {
            return Err(anyhow!(
                "Font sizes must be positive (title={}, label={})",
                self.title_font_size,
                self.label_font_size
            ));
        }
        if self.file_name.is_empty() {
            return Err(anyhow!("file_name must not be empty"));
        }
        Ok(())
    }

    pub fn style(&self) -> PlotStyle {
        PlotStyle {
            width: self.width,
            height: self.height,
            font_family: self.font_family.clone(),
            title_font_size: self.title_font_size,
            label_font_size: self.label_font_size,
            line_width: self.line_width,
            y_bounds: self.y_bounds,
        }
    }

    pub fn renderer(&self) -> PlotRenderer {
        PlotRenderer::new(self.output_root.clone(), self.style())
            .with_naming(self.naming)
            .with_time_step(self.step)
    }
}

/// Complete run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub wave: WaveConfig,
    pub point: PointConfig,
    #[serde(default)]
    pub plot: PlotConfig,
}

impl Default for Config {
    /// x=9 m, t=2 s, λ=10 m, A=0.2 m, ω=2π rad/s
    fn default() -> Self {
        Self {
            wave: WaveConfig {
                amplitude: 0.2,
                wavelength: 10.0,
                omega: Some(2.0 * PI),
                periodicity: None,
            },
            point: PointConfig { x: 9.0, t: 2.0 },
            plot: PlotConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path, e))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| anyhow!("Failed to parse TOML config: {}", e))?;

        // Validate before returning
        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<()> {
        self.wave.validate()?;
        self.point.validate()?;
        self.plot.validate()?;
        Ok(())
    }

    /// Log configuration summary
    pub fn print_summary(&self) {
        log::info!("=== Elastic Wave Configuration ===");
        match self.wave.parameters() {
            Ok(wave) => log::info!(
                "Wave: A={} m, λ={} m, ω={:.5} rad/s (f={:.5} Hz)",
                wave.amplitude(),
                wave.wavelength(),
                wave.angular_frequency(),
                wave.frequency()
            ),
            Err(e) => log::info!("Wave: unresolved ({})", e),
        }
        log::info!("Point: x={} m, t={} s", self.point.x, self.point.t);
        log::info!(
            "Plot: {}x{} px, step={} s, {} -> {}/{}/{}.{} ({:?} naming)",
            self.plot.width,
            self.plot.height,
            self.plot.step,
            self.plot.font_family,
            self.plot.output_root.display(),
            self.plot.format,
            self.plot.file_name,
            self.plot.format,
            self.plot.naming
        );
        log::info!("==================================");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::assert_close;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_config_gets_defaults() {
        let config = Config::from_toml(
            r#"
            [wave]
            amplitude = 1.0
            wavelength = 12.0
            omega = 25.132741228718345

            [point]
            x = 9.0
            t = 4.0
            "#,
        )
        .unwrap();
        assert_eq!(config.plot.format, OutputFormat::Png);
        assert_eq!(config.plot.naming, NamingPolicy::Suffix);
        assert_eq!(config.plot.y_bounds, YBounds::Padded);
        assert_eq!(config.plot.output_root, PathBuf::from("./plots"));
        assert_eq!(config.plot.file_name, "elastic-wave-plot");
        assert_close(config.wave.parameters().unwrap().angular_frequency(), 8.0 * PI);
    }

    #[test]
    fn test_periodicity_and_plot_options() {
        let config = Config::from_toml(
            r#"
            [wave]
            amplitude = 2.0
            wavelength = 10.0
            periodicity = 3.0

            [point]
            x = 9.0
            t = 2.0

            [plot]
            format = "svg"
            naming = "counter"
            y_bounds = "auto"
            step = 0.05
            font_family = "serif"
            "#,
        )
        .unwrap();
        assert_eq!(config.plot.format, OutputFormat::Svg);
        assert_eq!(config.plot.naming, NamingPolicy::Counter);
        let renderer = config.plot.renderer();
        assert_eq!(renderer.time_step, 0.05);
        assert_eq!(renderer.style.font_family, "serif");
        assert_eq!(renderer.style.y_bounds, YBounds::Auto);
        assert_close(config.wave.parameters().unwrap().angular_frequency(), 6.0 * PI);
    }

    #[test]
    fn test_missing_frequency_rejected() {
        let err = Config::from_toml(
            r#"
            [wave]
            amplitude = 2.0
            wavelength = 10.0

            [point]
            x = 0.0
            t = 1.0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("omega or periodicity"));
    }

    #[test]
    fn test_non_finite_frequency_rejected() {
        let err = Config::from_toml(
            r#"
            [wave]
            amplitude = 1.0
            wavelength = 10.0
            omega = nan

            [point]
            x = 0.0
            t = 1.0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("omega must be finite"));

        let mut config = Config::default();
        config.wave.omega = None;
        config.wave.periodicity = Some(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_wavelength_rejected() {
        let mut config = Config::default();
        config.wave.wavelength = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_plot_values_rejected() {
        let mut config = Config::default();
        config.plot.step = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.plot.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_format_is_parse_error() {
        let err = Config::from_toml(
            r#"
            [wave]
            amplitude = 1.0
            wavelength = 1.0
            omega = 1.0

            [point]
            x = 0.0
            t = 1.0

            [plot]
            format = "gif"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML config"));
    }

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.wave.parameters().unwrap().amplitude(), 0.2);
    }
}
