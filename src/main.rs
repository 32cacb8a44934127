//! # Main — CLI Entry Point
//!
//! Parses flags, installs logging, and hands off to `cli::run_search`.
//!
//! ## Options
//!
//! - `--max-digits` / `PANDIGITAL_MAX_DIGITS`: largest digit class (2–9, default 9).
//! - `--skip-divisible-by-three`: skip classes whose digit sum is a multiple of 3.
//! - `--json`: print the full search outcome as JSON.
//!
//! Logs go to stderr (`LOG_FORMAT=json` for structured output, `RUST_LOG` to
//! filter); stdout carries only the result.

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(
    name = "pandigital-prime",
    about = "Find the largest prime that uses each digit 1..n exactly once"
)]
struct Cli {
    /// Largest digit-length class to search (2-9)
    #[arg(
        long,
        env = "PANDIGITAL_MAX_DIGITS",
        default_value_t = 9,
        value_parser = clap::value_parser!(u32).range(2..=9)
    )]
    max_digits: u32,

    /// Skip digit classes whose digit sum 1+..+n is divisible by 3 (no primes there)
    #[arg(long)]
    skip_divisible_by_three: bool,

    /// Print the search outcome as JSON instead of the result line
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    cli::run_search(&cli)
}
