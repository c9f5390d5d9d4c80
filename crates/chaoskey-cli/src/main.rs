//! Chaoskey command-line front end.
//!
//! # Usage
//!
//! ```bash
//! # Derive key streams and print a summary
//! chaoskey --master-key secret --nonce 000000000001
//!
//! # Dump all eleven streams as hex
//! chaoskey --master-key secret --nonce 000000000001 --steps 64 --verbose
//!
//! # Check determinism and stream invariants, report elapsed time
//! chaoskey --master-key secret --mode validate --time
//! ```

mod report;

use std::{
    io::{self, Write},
    time::Instant,
};

use chaoskey_core::{ChaosParams, DEFAULT_DT, DEFAULT_STEPS, derive_seed, generate};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::report::{CliError, first_failure, validate, write_streams, write_summary};

/// What to do with the derived key streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Derive the streams and print them
    Generate,
    /// Derive twice and check every stream invariant
    Validate,
}

/// Chaos-driven subkey derivation
#[derive(Parser, Debug)]
#[command(name = "chaoskey")]
#[command(about = "Derive chaoskey cipher subkey streams from a master key and nonce")]
#[command(version)]
struct Args {
    /// Master key (raw bytes of the argument)
    #[arg(short = 'k', long, required_unless_present = "seed")]
    master_key: Option<String>,

    /// Public nonce (raw bytes of the argument)
    #[arg(short, long, default_value = "defaultnonce")]
    nonce: String,

    /// Use this seed directly instead of deriving it from key and nonce
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Operation to run
    #[arg(short, long, value_enum, default_value_t = Mode::Generate)]
    mode: Mode,

    /// Number of RK4 steps (even, at least 2)
    #[arg(short, long, default_value_t = DEFAULT_STEPS)]
    steps: u32,

    /// Integration timestep
    #[arg(long, default_value_t = DEFAULT_DT)]
    dt: f64,

    /// Print every stream as hex
    #[arg(short, long)]
    verbose: bool,

    /// Report execution time
    #[arg(short, long)]
    time: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    run(&args, &mut io::stdout().lock())?;

    Ok(())
}

/// Execute the selected mode, writing results to `out`.
///
/// A failed validation check is returned as an error so the process exits
/// non-zero.
fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    #[allow(clippy::disallowed_methods)]
    let start = Instant::now();

    let params = ChaosParams::new(args.steps, args.dt);
    let seed = match (args.seed, &args.master_key) {
        (Some(seed), _) => {
            tracing::warn!("Using explicit seed - master key and nonce are ignored");
            seed
        },
        (None, Some(key)) => derive_seed(key.as_bytes(), args.nonce.as_bytes()),
        (None, None) => return Err(CliError::MissingKey),
    };

    match args.mode {
        Mode::Generate => {
            let streams = generate(seed, params.steps, params.dt)?;
            write_summary(out, &streams)?;
            if args.verbose {
                write_streams(out, &streams)?;
            }
        },
        Mode::Validate => {
            let checks = validate(seed, &params)?;
            for check in &checks {
                writeln!(out, "{check}")?;
            }
            first_failure(&checks)?;
            writeln!(out, "all {} checks passed", checks.len())?;
        },
    }

    if args.time {
        writeln!(out, "Execution time: {:?}", start.elapsed())?;
    }

    Ok(())
}
