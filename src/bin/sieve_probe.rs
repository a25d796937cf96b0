//! Probe a serialized filter for one record or a whole record list.

use clap::Parser;
use std::path::PathBuf;

use annosieve::io_utils::{io_cli_error, read_records_file, sieve_cli_error, simple_cli_error};
use annosieve::{might_contain, Record};

#[derive(Parser)]
struct Args {
    /// Serialized filter produced by sieve_build
    filter: PathBuf,
    /// Record list to probe (.csv or .json)
    #[clap(long)]
    records: Option<PathBuf>,
    /// Namespace of a single record to probe
    #[clap(long)]
    namespace: Option<String>,
    /// Name of a single record to probe
    #[clap(long)]
    name: Option<String>,
    /// Parent element id of the single record
    #[clap(long, default_value_t = 0)]
    parent: u32,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        std::fs::read(&args.filter).map_err(|e| io_cli_error("reading filter", &args.filter, e))?;

    if filter.is_empty() {
        eprintln!("Filter is disabled (empty); every probe answers \"possibly present\".");
    }

    let mut probes = Vec::new();
    if let Some(path) = &args.records {
        probes = read_records_file(path).map_err(|e| sieve_cli_error("loading records", e))?;
    }
    match (&args.namespace, &args.name) {
        (Some(ns), Some(name)) => probes.push(Record::new(ns, name, args.parent)),
        (None, None) => {}
        _ => {
            return Err(simple_cli_error("--namespace and --name must be given together").into());
        }
    }
    if probes.is_empty() {
        return Err(simple_cli_error("nothing to probe: pass --records or --namespace/--name").into());
    }

    for record in &probes {
        let verdict = if might_contain(&filter, record) {
            "possibly present"
        } else {
            "definitely absent"
        };
        println!("{} #{}: {}", record.qualified_name(), record.parent_id, verdict);
    }
    Ok(())
}
