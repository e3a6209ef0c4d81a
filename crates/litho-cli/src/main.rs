// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — lithoenv
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! `lithoenv` runs strength-envelope scenarios from JSON files,
//! renders their figures to SVG and answers one-off piezometer
//! queries. Diagnostics go to stderr under `RUST_LOG`, results to
//! stdout.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use litho_envelope::scenario;
use litho_mech::piezometer::{self, QuartzPiezometer};
use litho_plot::figure;
use litho_types::config::ScenarioConfig;

#[derive(Parser)]
#[command(name = "lithoenv")]
#[command(about = "Yield strength envelopes for the continental lithosphere")]
#[command(version)]
struct Cli {
    /// Suppress the model summary on stdout
    #[arg(long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario file and render its figure
    Render {
        /// Scenario configuration (JSON)
        config: PathBuf,
        /// Output SVG path, defaults to the config path with .svg
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run the built-in reference scenario
    Demo {
        /// Output SVG path
        #[arg(long, default_value = "continental-reference.svg")]
        out: PathBuf,
    },
    /// Write a fully populated scenario file to edit from
    Init {
        /// Destination of the JSON scenario
        path: PathBuf,
    },
    /// Convert a recrystallised quartz grain size to flow stress
    Piezometer {
        /// Apparent grain size [um]
        grain_size_um: f64,
        /// Calibration key such as stipp_tullis; all of them if omitted
        #[arg(long)]
        calibration: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render { config, out } => render(&config, out, cli.quiet),
        Commands::Demo { out } => demo(&out, cli.quiet),
        Commands::Init { path } => init(&path),
        Commands::Piezometer {
            grain_size_um,
            calibration,
        } => piezometer_table(grain_size_um, calibration.as_deref()),
    }
}

fn render(config_path: &Path, out: Option<PathBuf>, quiet: bool) -> Result<()> {
    let cfg = ScenarioConfig::from_json_file(config_path)
        .with_context(|| format!("loading scenario {}", config_path.display()))?;
    let report = scenario::run(&cfg)?;
    let out = out.unwrap_or_else(|| config_path.with_extension("svg"));
    figure::save_svg(&report, &out)
        .with_context(|| format!("writing {}", out.display()))?;
    if !quiet {
        print!("{}", report.summary_text());
        println!("figure          = {}", out.display());
    }
    Ok(())
}

fn demo(out: &Path, quiet: bool) -> Result<()> {
    let report = scenario::run(&ScenarioConfig::default())?;
    figure::save_svg(&report, out).with_context(|| format!("writing {}", out.display()))?;
    if !quiet {
        print!("{}", report.summary_text());
        println!("figure          = {}", out.display());
    }
    Ok(())
}

fn init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    let json = ScenarioConfig::default().to_json_pretty()?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn piezometer_table(grain_size_um: f64, calibration: Option<&str>) -> Result<()> {
    let selected: Vec<QuartzPiezometer> = match calibration {
        Some(key) => match QuartzPiezometer::from_key(key) {
            Some(p) => vec![p],
            None => {
                let keys: Vec<&str> = QuartzPiezometer::ALL.iter().map(|p| p.key()).collect();
                bail!(
                    "unknown calibration {key:?}, expected one of: {}",
                    keys.join(", ")
                );
            }
        },
        None => QuartzPiezometer::ALL.to_vec(),
    };
    println!("apparent grain size = {grain_size_um} um");
    for p in selected {
        let sigma = piezometer::differential_stress_mpa(p, grain_size_um)?;
        println!("{:<12} {:>8.1} MPa   {}", p.key(), sigma, p);
    }
    Ok(())
}
