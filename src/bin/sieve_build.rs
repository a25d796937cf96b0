//! Build a presence filter from a record list and write the serialized
//! table to disk. Prints the SHA-256 of the output so builds can be
//! compared for bit-identity across machines.

use clap::Parser;
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use annosieve::build_filter_with_stats;
use annosieve::io_utils::{io_cli_error, read_records_file, sieve_cli_error};

#[derive(Parser)]
struct Args {
    /// Record list: .csv rows of namespace,name,parent_id or a .json array
    input: PathBuf,
    /// Output path for the serialized filter
    output: PathBuf,
    /// Print build statistics to stderr
    #[clap(long)]
    stats: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let records =
        read_records_file(&args.input).map_err(|e| sieve_cli_error("loading records", e))?;

    let (table, stats) = build_filter_with_stats(&records);
    let bytes = table.to_bytes();
    std::fs::write(&args.output, &bytes)
        .map_err(|e| io_cli_error("writing filter", &args.output, e))?;

    if table.is_disabled() && !records.is_empty() {
        eprintln!("Table could not be filled; wrote the disabled (empty) filter.");
    }
    if args.stats {
        stats.report();
    }
    println!(
        "{} records -> {} bytes (sha256 {})",
        records.len(),
        bytes.len(),
        hex::encode(Sha256::digest(&bytes))
    );
    Ok(())
}
