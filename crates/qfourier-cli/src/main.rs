//! qfourier Command-Line Interface
//!
//! Builds Quantum Fourier Transform circuits, renders them as text, JSON or
//! OpenQASM 3, and checks them against the reference simulator.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::common::OutputFormat;
use commands::{build, demo, verify, version};
use config::CliConfig;

/// qfourier - Quantum Fourier Transform circuit builder
#[derive(Parser, Debug)]
#[command(name = "qfourier")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ~/.qfourier/config.yaml)
    #[arg(long, global = true, env = "QFOURIER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a QFT (or inverse QFT) circuit
    Build {
        /// Number of qubits
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        qubits: i64,

        /// Build the inverse QFT
        #[arg(long)]
        inverse: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Prepare a state, apply the QFT and sample measurement outcomes
    Demo {
        /// Number of qubits (at least 2)
        #[arg(short = 'n', long, default_value = "3")]
        qubits: u32,

        /// Number of shots
        #[arg(short, long)]
        shots: Option<u32>,

        /// RNG seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check that the inverse QFT undoes the QFT on every basis state
    Verify {
        /// Largest register size to check
        #[arg(long)]
        max_qubits: Option<u32>,

        /// Largest accepted amplitude error
        #[arg(long, allow_negative_numbers = true)]
        tolerance: Option<f64>,
    },

    /// Show version information
    Version,
}

fn log_filter(verbose: u8, config: &CliConfig) -> EnvFilter {
    if std::env::var_os("RUST_LOG").is_some() {
        return EnvFilter::from_default_env();
    }
    let level = match verbose {
        0 => config.log_level.as_deref().unwrap_or("warn"),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn run(command: Commands, mut config: CliConfig) -> anyhow::Result<()> {
    match command {
        Commands::Build {
            qubits,
            inverse,
            format,
            output,
        } => build::execute(qubits, inverse, format, output.as_deref()),

        Commands::Demo {
            qubits,
            shots,
            seed,
        } => {
            config.shots = shots.unwrap_or(config.shots);
            config.seed = seed.or(config.seed);
            config.validate()?;
            demo::execute(qubits, config.shots, config.seed)
        }

        Commands::Verify {
            max_qubits,
            tolerance,
        } => {
            config.max_qubits = max_qubits.unwrap_or(config.max_qubits);
            config.tolerance = tolerance.unwrap_or(config.tolerance);
            config.validate()?;
            verify::execute(config.max_qubits, config.tolerance)
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, &config))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    debug!(?config, "configuration loaded");

    // Execute command
    if let Err(e) = run(cli.command, config) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
