//! argshim benchmark CLI
//!
//! Standalone benchmark runner for the argshim parser facade. Invoked
//! with no arguments it runs the full scenario catalogue and prints the
//! report to standard output.
//!
//! Examples:
//!   cargo run -p argshim-bench                          # full catalogue
//!   cargo run -p argshim-bench -- --list                # list scenarios
//!   cargo run -p argshim-bench -- --scenario "simple parse"
//!   cargo run -p argshim-bench -- --scale 0.1           # shorten the run

use std::io;

use anyhow::Result;
use argshim::ClapBackend;
use argshim_bench::{catalogue, run_suite, write_report, IterationPlan};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "argshim-bench")]
#[command(about = "Micro-benchmarks for the argshim parser facade")]
struct Cli {
    /// List available scenarios and exit
    #[arg(long)]
    list: bool,

    /// Run only the named scenario
    #[arg(short, long)]
    scenario: Option<String>,

    /// Multiply every scenario's default iteration count
    #[arg(long, env = "ARGSHIM_BENCH_SCALE", default_value_t = 1.0)]
    scale: f64,

    /// Print verbose output during benchmark execution
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string()));

    // Diagnostics go to stderr; stdout carries only the measured report.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.scale <= 0.0 {
        anyhow::bail!("--scale must be positive (got {})", cli.scale);
    }
    let plan = IterationPlan::default().scaled(cli.scale);

    let mut scenarios = catalogue(ClapBackend, &plan);

    if cli.list {
        println!("Available scenarios:\n");
        for scenario in &scenarios {
            println!("  {} ({} iterations)", scenario.name, scenario.iterations);
        }
        return Ok(());
    }

    if let Some(name) = &cli.scenario {
        scenarios.retain(|s| s.name == name.as_str());
        if scenarios.is_empty() {
            anyhow::bail!("unknown scenario {name:?}; use --list to see the catalogue");
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let records = run_suite(scenarios, &mut out)?;
    write_report(&mut out, &records)?;

    Ok(())
}
