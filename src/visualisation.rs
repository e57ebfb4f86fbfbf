use crate::displacement::DisplacementSeries;
use crate::error::{Result, WaveError};
use crate::grid::{TimeGrid, DEFAULT_TIME_STEP};
use crate::medium::WaveParameters;
use crate::naming::{self, NamingPolicy, OutputFormat};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};

pub const TIME_AXIS_LABEL: &str = "Time [s]";
pub const AMPLITUDE_AXIS_LABEL: &str = "Amplitude";

/// How the vertical axis is bounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YBounds {
    /// [-|A|-1, |A|+1]
    #[default]
    Padded,
    /// Fitted to the sampled values
    Auto,
}

/// Fonts and sizes used when drawing a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub font_family: String,
    pub title_font_size: f64,
    pub label_font_size: f64,
    pub line_width: u32,
    pub y_bounds: YBounds,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 500,
            height: 400,
            font_family: "sans-serif".to_string(),
            title_font_size: 16.0,
            label_font_size: 14.0,
            line_width: 2,
            y_bounds: YBounds::Padded,
        }
    }
}

/// A rendered displacement-vs-time chart, ready to be saved or shown
#[derive(Debug, Clone)]
pub struct ChartHandle {
    pub title: String,
    pub series: DisplacementSeries,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub style: PlotStyle,
}

pub fn chart_title(wave: &WaveParameters, x: f64, t: f64) -> String {
    format!(
        "Elastic Wave Plot: S(x,t)={}×cos({}π×{} - 2π/{}×{})",
        wave.amplitude(),
        wave.angular_frequency() / PI,
        t,
        wave.wavelength(),
        x
    )
}

fn y_range(wave: &WaveParameters, series: &DisplacementSeries, bounds: YBounds) -> (f64, f64) {
    let padded = (-wave.amplitude().abs() - 1.0, wave.amplitude().abs() + 1.0);
    match bounds {
        YBounds::Padded => padded,
        YBounds::Auto => match series.value_range() {
            Some((min, max)) if max - min > f64::EPSILON => {
                let margin = 0.05 * (max - min);
                (min - margin, max + margin)
            }
            Some((min, max)) => (min - 1.0, max + 1.0),
            None => padded,
        },
    }
}

impl ChartHandle {
    pub fn draw_on<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let family = self.style.font_family.as_str();
        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, (family, self.style.title_font_size))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(self.x_range.0..self.x_range.1, self.y_range.0..self.y_range.1)?;

        chart
            .configure_mesh()
            .x_desc(TIME_AXIS_LABEL)
            .y_desc(AMPLITUDE_AXIS_LABEL)
            .axis_desc_style((family, self.style.label_font_size, FontStyle::Bold))
            .draw()?;

        chart.draw_series(LineSeries::new(
            self.series.points(),
            BLUE.stroke_width(self.style.line_width),
        ))?;
        Ok(())
    }

    fn write_bitmap(&self, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (self.style.width, self.style.height)).into_drawing_area();
        self.draw_on(&root).map_err(plot_error)?;
        root.present().map_err(plot_error)
    }

    fn write_svg(&self, path: &Path) -> Result<()> {
        let root = SVGBackend::new(path, (self.style.width, self.style.height)).into_drawing_area();
        self.draw_on(&root).map_err(plot_error)?;
        root.present().map_err(plot_error)
    }
}

fn plot_error<E: std::fmt::Display>(e: E) -> WaveError {
    WaveError::Plot(e.to_string())
}

/// Samples displacement over time and turns it into charts
#[derive(Debug, Clone)]
pub struct PlotRenderer {
    pub style: PlotStyle,
    pub output_root: PathBuf,
    pub naming: NamingPolicy,
    pub time_step: f64,
}

impl Default for PlotRenderer {
    fn default() -> Self {
        Self {
            style: PlotStyle::default(),
            output_root: PathBuf::from("./plots"),
            naming: NamingPolicy::default(),
            time_step: DEFAULT_TIME_STEP,
        }
    }
}

impl PlotRenderer {
    pub fn new(output_root: impl Into<PathBuf>, style: PlotStyle) -> Self {
        Self {
            style,
            output_root: output_root.into(),
            ..Self::default()
        }
    }

    pub fn with_naming(mut self, naming: NamingPolicy) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Displacement at `x` over [0, t)
    pub fn render(&self, x: f64, t: f64, wave: &WaveParameters) -> Result<ChartHandle> {
        let grid = TimeGrid::new(t, self.time_step)?;
        if grid.is_empty() {
            log::warn!("Time span {} s yields no samples, the chart will be empty", t);
        }
        let series = DisplacementSeries::sample(wave, x, &grid)?;
        let x_end = if t > 0.0 { t } else { 1.0 };
        let y_range = y_range(wave, &series, self.style.y_bounds);

        Ok(ChartHandle {
            title: chart_title(wave, x, t),
            series,
            x_range: (0.0, x_end),
            y_range,
            style: self.style.clone(),
        })
    }

    /// Writes the chart under `<output_root>/<format>/` and returns the path used.
    pub fn save(&self, chart: &ChartHandle, name: &str, format: OutputFormat) -> Result<PathBuf> {
        let path = naming::resolve_output_path(&self.output_root, name, format, self.naming)?;
        let existed = path.exists();

        let written = if format.is_vector() {
            chart.write_svg(&path)
        } else {
            chart.write_bitmap(&path)
        };
        if let Err(e) = written {
            if !existed && path.exists() {
                let _ = fs::remove_file(&path);
            }
            return Err(e);
        }

        log::info!("Saved plot: {}", path.display());
        Ok(path)
    }

    /// Opens the chart in a window and blocks until it is closed.
    pub fn show(&self, chart: &ChartHandle) -> Result<()> {
        #[cfg(feature = "viewer")]
        {
            crate::viewer::show(chart)
        }
        #[cfg(not(feature = "viewer"))]
        {
            let _ = chart;
            Err(WaveError::Display(
                "built without the `viewer` feature".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::FrequencySpec;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn reference_wave() -> WaveParameters {
        WaveParameters::new(0.2, 10.0, FrequencySpec::Angular(2.0 * PI)).unwrap()
    }

    #[test]
    fn test_title_embeds_values() {
        assert_eq!(
            chart_title(&reference_wave(), 9.0, 2.0),
            "Elastic Wave Plot: S(x,t)=0.2×cos(2π×2 - 2π/10×9)"
        );
    }

    #[test]
    fn test_render_samples_half_open_span() {
        let chart = PlotRenderer::default()
            .render(9.0, 2.0, &reference_wave())
            .unwrap();
        assert_eq!(chart.series.len(), 200);
        assert_eq!(chart.x_range, (0.0, 2.0));
        assert_eq!(chart.y_range, (-1.2, 1.2));
    }

    #[test]
    fn test_render_custom_step() {
        let chart = PlotRenderer::default()
            .with_time_step(0.5)
            .render(0.0, 2.0, &reference_wave())
            .unwrap();
        assert_eq!(chart.series.len(), 4);
    }

    #[test]
    fn test_auto_bounds_fit_series() {
        let style = PlotStyle {
            y_bounds: YBounds::Auto,
            ..PlotStyle::default()
        };
        let chart = PlotRenderer::new("./plots", style)
            .render(9.0, 2.0, &reference_wave())
            .unwrap();
        let (lo, hi) = chart.y_range;
        assert!(lo < -0.19 && lo > -0.3);
        assert!(hi > 0.19 && hi < 0.3);
    }

    #[test]
    fn test_auto_bounds_flat_series() {
        let style = PlotStyle {
            y_bounds: YBounds::Auto,
            ..PlotStyle::default()
        };
        let still = WaveParameters::new(0.0, 5.0, FrequencySpec::Temporal(1.0)).unwrap();
        let chart = PlotRenderer::new("./plots", style).render(1.0, 1.0, &still).unwrap();
        assert_eq!(chart.y_range, (-1.0, 1.0));
    }

    #[test]
    fn test_empty_span_still_renders() {
        let chart = PlotRenderer::default()
            .render(9.0, 0.0, &reference_wave())
            .unwrap();
        assert!(chart.series.is_empty());
        assert_eq!(chart.x_range, (0.0, 1.0));
    }

    #[test]
    fn test_save_without_output_root_fails() {
        let tmp = TempDir::new().unwrap();
        let renderer = PlotRenderer::new(tmp.path().join("missing"), PlotStyle::default());
        let chart = renderer.render(9.0, 2.0, &reference_wave()).unwrap();
        let err = renderer.save(&chart, "plot", OutputFormat::Png).unwrap_err();
        assert!(matches!(err, WaveError::Io(_)));
        assert!(!tmp.path().join("missing").exists());
    }

    #[test]
    fn test_save_writes_files() {
        let tmp = TempDir::new().unwrap();
        let renderer = PlotRenderer::new(tmp.path(), PlotStyle::default());
        let chart = renderer.render(9.0, 2.0, &reference_wave()).unwrap();

        let first = renderer.save(&chart, "plot", OutputFormat::Png).unwrap();
        let second = renderer.save(&chart, "plot", OutputFormat::Png).unwrap();
        let vector = renderer.save(&chart, "plot", OutputFormat::Svg).unwrap();

        assert_eq!(first, tmp.path().join("png").join("plot.png"));
        assert_eq!(second, tmp.path().join("png").join("plot_0.png"));
        assert_eq!(vector, tmp.path().join("svg").join("plot.svg"));
        for path in [&first, &second, &vector] {
            assert!(fs::metadata(path).unwrap().len() > 0, "{} is empty", path.display());
        }
        let svg = fs::read_to_string(&vector).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_save_overwrite_keeps_one_file() {
        let tmp = TempDir::new().unwrap();
        let renderer = PlotRenderer::new(tmp.path(), PlotStyle::default())
            .with_naming(NamingPolicy::Overwrite);
        let chart = renderer.render(9.0, 1.0, &reference_wave()).unwrap();

        let first = renderer.save(&chart, "plot", OutputFormat::Png).unwrap();
        let second = renderer.save(&chart, "plot", OutputFormat::Png).unwrap();
        assert_eq!(first, second);
        assert_eq!(fs::read_dir(tmp.path().join("png")).unwrap().count(), 1);
    }

    #[cfg(not(feature = "viewer"))]
    #[test]
    fn test_show_without_viewer() {
        let renderer = PlotRenderer::default();
        let chart = renderer.render(9.0, 2.0, &reference_wave()).unwrap();
        assert!(matches!(renderer.show(&chart), Err(WaveError::Display(_))));
    }
}
