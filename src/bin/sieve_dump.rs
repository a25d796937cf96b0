//! Inspect a serialized filter: shape, occupancy, digest, optional hex.

use clap::Parser;
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use annosieve::io_utils::{io_cli_error, sieve_cli_error};
use annosieve::{FilterTable, BUCKET_WIDTH};

#[derive(Parser)]
struct Args {
    /// Serialized filter produced by sieve_build
    filter: PathBuf,
    /// Also print the raw bytes as hex, 32 bytes per line
    #[clap(long)]
    hex: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let bytes =
        std::fs::read(&args.filter).map_err(|e| io_cli_error("reading filter", &args.filter, e))?;
    let table = FilterTable::from_bytes(&bytes).map_err(|e| sieve_cli_error("decoding filter", e))?;

    println!("Bytes: {}", bytes.len());
    println!("Sha256: {}", hex::encode(Sha256::digest(&bytes)));
    if table.is_disabled() {
        println!("Filter is disabled (no table).");
        return Ok(());
    }

    println!("Buckets: {}", table.bucket_count());
    println!("Slots: {}", table.slots().len());
    println!("Occupied: {}", table.occupied_slots());
    println!("Load factor: {:.3}", table.load_factor());

    // Buckets grouped by how many of their 8 slots are occupied.
    let mut histogram = [0usize; BUCKET_WIDTH + 1];
    for bucket in table.slots().chunks(BUCKET_WIDTH) {
        let occupied = bucket.iter().filter(|&&s| s != 0).count();
        histogram[occupied] += 1;
    }
    for (occupied, count) in histogram.iter().enumerate() {
        if *count > 0 {
            println!("{occupied}/8 full: {count} buckets");
        }
    }

    if args.hex {
        for line in bytes.chunks(32) {
            println!("{}", hex::encode(line));
        }
    }
    Ok(())
}
