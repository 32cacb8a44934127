//! # CLI Execution Functions
//!
//! Turns parsed flags into a `SearchConfig`, runs the search, and prints the
//! result line (or the JSON outcome).

use anyhow::Result;
use pandigital_prime::search::{self, SearchConfig};
use std::time::Instant;
use tracing::info;

use super::Cli;

pub fn run_search(cli: &Cli) -> Result<()> {
    let config = SearchConfig {
        max_digits: cli.max_digits,
        skip_divisible_by_three: cli.skip_divisible_by_three,
    };

    let start = Instant::now();
    let outcome = search::search(&config)?;
    info!(
        greatest = ?outcome.greatest,
        buckets_sieved = outcome.buckets_sieved,
        primes_scanned = outcome.primes_scanned,
        elapsed_secs = format_args!("{:.3}", start.elapsed().as_secs_f64()),
        "Search complete"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let greatest = outcome.greatest.ok_or_else(|| {
        anyhow::anyhow!(
            "no pandigital prime with at most {} digits",
            config.max_digits
        )
    })?;
    println!("The greatest pandigital prime is {}", greatest);
    Ok(())
}
