// Desktop tooling crate: unwrap/expect/panic acceptable in non-embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod port;
mod report;

use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use platform::config::{self, SPEAKER_CHANNEL};
use platform::{ClockDivisor, FrequencyStep, TolerancePermille};
use serde_json::json;
use synthesis::solver::{candidates, select};
use synthesis::{FrequencySynthesisModel, MatchPolicy};
use tracing_subscriber::EnvFilter;

use crate::port::ConsolePort;

#[derive(Parser)]
#[command(name = "cwgen")]
#[command(about = "Cosine wave generator frequency calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Calibrated reference frequency f0 in Hz
    #[arg(long, global = true, env = "CWGEN_F0", default_value_t = config::DEFAULT_REFERENCE_HZ)]
    f0: f64,

    /// Search tolerance in permille (1..=999)
    #[arg(
        long,
        global = true,
        env = "CWGEN_TOLERANCE",
        default_value_t = i64::from(config::DEFAULT_TOLERANCE_PERMILLE)
    )]
    tolerance: i64,

    /// Print machine-readable JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find divisor and step for a frequency and apply them
    Search {
        /// Requested output frequency in Hz
        hz: f64,
        /// Pick the closest frequency instead of the smallest divisor within tolerance
        #[arg(long)]
        best: bool,
    },
    /// Print the candidate for every divisor
    Table {
        /// Requested output frequency in Hz
        hz: f64,
    },
    /// Apply a raw divisor/step pair
    Apply {
        #[arg(long, short)]
        divisor: i64,
        #[arg(long, short)]
        step: i64,
    },
    /// Fix the divisor and derive the step for a frequency
    WithDivisor {
        hz: f64,
        #[arg(long, short)]
        divisor: i64,
    },
    /// Fix the step and derive the divisor for a frequency
    WithStep {
        hz: f64,
        #[arg(long, short)]
        step: i64,
    },
    /// Print the power-on model state
    Dump,
    /// Print the reachable frequency range for the reference
    Range,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    ensure!(
        cli.f0.is_finite() && cli.f0 > 0.0,
        "reference frequency must be a positive number, got {}",
        cli.f0
    );
    let tolerance = TolerancePermille::from_i64_clamped(cli.tolerance);
    warn_clamped("tolerance", cli.tolerance, i64::from(tolerance.get()));

    let mut model = FrequencySynthesisModel::new(cli.f0, ConsolePort::new());
    model.set_tolerance(tolerance);
    model.enable(SPEAKER_CHANNEL);

    if !cli.json {
        println!("{} v{}", config::app_title().bold(), config::APP_VERSION);
        println!("{}", config::formula_banner().dimmed());
    }

    match cli.command {
        Commands::Search { hz, best } => {
            check_target(hz)?;
            let policy = if best {
                MatchPolicy::BestApproximation
            } else {
                MatchPolicy::WithinTolerance
            };
            let outcome = model.search_with_policy(hz, policy);
            if cli.json {
                report::print_json(&report::outcome_json(hz, &outcome, &model.snapshot()))?;
            } else {
                report::print_outcome(hz, &outcome);
                report::print_snapshot(&model.snapshot());
            }
        }
        Commands::Table { hz } => {
            check_target(hz)?;
            let table = candidates(cli.f0, hz);
            let selection = select(&table, hz, tolerance);
            if cli.json {
                report::print_json(&report::table_json(&table, &selection))?;
            } else {
                report::print_table(hz, &table, &selection);
            }
        }
        Commands::Apply { divisor, step } => {
            let divisor = clamp_divisor(divisor);
            let step = clamp_step(step);
            model.apply_divisor_and_step(divisor, step);
            print_state(&model, cli.json)?;
        }
        Commands::WithDivisor { hz, divisor } => {
            check_target(hz)?;
            model.set_frequency_with_divisor(hz, clamp_divisor(divisor));
            print_state(&model, cli.json)?;
        }
        Commands::WithStep { hz, step } => {
            check_target(hz)?;
            model.set_frequency_with_step(hz, clamp_step(step));
            print_state(&model, cli.json)?;
        }
        Commands::Dump => print_state(&model, cli.json)?,
        Commands::Range => {
            let (low, high) = model.frequency_range();
            if cli.json {
                report::print_json(&json!({ "f0": cli.f0, "min_hz": low, "max_hz": high }))?;
            } else {
                println!();
                println!("  {} {:.4} Hz", "min".cyan(), low);
                println!("  {} {:.4} Hz", "max".cyan(), high);
                println!();
            }
        }
    }

    tracing::debug!(latches = model.port().latches(), "done");
    Ok(())
}

fn print_state(model: &FrequencySynthesisModel<ConsolePort>, json: bool) -> Result<()> {
    let snapshot = model.snapshot();
    if json {
        report::print_json(&json!(snapshot))
    } else {
        report::print_snapshot(&snapshot);
        Ok(())
    }
}

fn check_target(hz: f64) -> Result<()> {
    ensure!(
        hz.is_finite() && hz > 0.0,
        "target frequency must be a positive number, got {hz}"
    );
    if !(config::FREQUENCY_INPUT_MIN_HZ..=config::FREQUENCY_INPUT_MAX_HZ).contains(&hz) {
        tracing::warn!(
            hz,
            min = config::FREQUENCY_INPUT_MIN_HZ,
            max = config::FREQUENCY_INPUT_MAX_HZ,
            "target outside the panel input range"
        );
    }
    Ok(())
}

fn clamp_divisor(raw: i64) -> ClockDivisor {
    let divisor = ClockDivisor::from_i64_clamped(raw);
    warn_clamped("divisor", raw, i64::from(divisor.get()));
    divisor
}

fn clamp_step(raw: i64) -> FrequencyStep {
    let step = FrequencyStep::from_i64_clamped(raw);
    warn_clamped("step", raw, i64::from(step.get()));
    step
}

fn warn_clamped(what: &str, raw: i64, used: i64) {
    if raw != used {
        tracing::warn!(what, raw, used, "value clamped into range");
    }
}
