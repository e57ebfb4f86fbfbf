use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use elastic_wave::config::Config;
use elastic_wave::{formulas, EvaluationPoint, OutputFormat, PlaneWave};

#[derive(Parser)]
#[command(name = "elastic-wave")]
#[command(about = "Plane elastic wave displacement and plots", long_about = None)]
struct Cli {
    /// TOML run description (built-in run: x=9, t=2, λ=10, A=0.2, ω=2π)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the displacement S(x,t)
    Eval {
        #[arg(long, allow_negative_numbers = true)]
        x: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        t: Option<f64>,
    },

    /// Plot displacement over [0, t) at x
    Plot {
        /// Open the chart in a window (needs the `viewer` feature)
        #[arg(long)]
        show: bool,

        /// Skip writing the image
        #[arg(long)]
        no_save: bool,

        /// Base file name, without extension
        #[arg(long)]
        name: Option<String>,

        /// png, jpg, bmp or svg
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Derive wavelength, period and periodicity from a velocity
    Formulas {
        #[arg(long)]
        velocity: f64,
        #[arg(long)]
        period: Option<f64>,
        #[arg(long)]
        periodicity: Option<f64>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Eval { x, t } => {
            let wave = config.wave.parameters()?;
            let point = EvaluationPoint::new(x.unwrap_or(config.point.x), t.unwrap_or(config.point.t));
            let plane_wave = PlaneWave::new(wave, point);
            plane_wave.displacement()?;
            println!("{}", plane_wave);
        }

        Commands::Plot {
            show,
            no_save,
            name,
            format,
        } => {
            if no_save && !show {
                return Err(anyhow!("nothing to do: --no-save without --show"));
            }
            config.print_summary();
            let wave = config.wave.parameters()?;
            let renderer = config.plot.renderer();
            let chart = renderer.render(config.point.x, config.point.t, &wave)?;

            if !no_save {
                let name = name.unwrap_or_else(|| config.plot.file_name.clone());
                let path = renderer.save(&chart, &name, format.unwrap_or(config.plot.format))?;
                println!("{}", path.display());
            }
            if show {
                renderer.show(&chart)?;
            }
        }

        Commands::Formulas {
            velocity,
            period,
            periodicity,
        } => {
            let wavelength = formulas::wavelength(velocity, period, periodicity)?;
            println!("wavelength  = {} m", wavelength);
            println!("period      = {} s", formulas::period(wavelength, velocity)?);
            println!("periodicity = {} Hz", formulas::periodicity(wavelength, velocity)?);
            println!(
                "omega       = {} rad/s",
                formulas::angular_frequency(formulas::periodicity(wavelength, velocity)?)
            );
        }
    }

    Ok(())
}
