//! CLI-facing helpers: friendly I/O errors and record list loading.

use std::fmt;
use std::io;
use std::path::Path;

use crate::error::SieveError;
use crate::record::Record;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        UnexpectedEof => "File appears truncated or corrupted.",
        WriteZero => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn sieve_cli_error(context: &str, err: SieveError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &SieveError) -> String {
    use SieveError::*;
    match err {
        Filter(msg) => format!("{msg}. Verify the filter file is intact."),
        Records(msg) => format!("{msg}. Check the record list format."),
        Csv(e) => format!("{e}. Rows must be namespace,name,parent_id."),
        Json(e) => format!("{e}. Expected an array of record objects."),
        Io(io) => format!("{io}"),
    }
}

/// Load an ordered record list from a `.csv` or `.json` file, chosen by
/// extension.
///
/// CSV rows are headerless `namespace,name,parent_id` triples; JSON is an
/// array of objects with the same fields. File order is preserved, since
/// the builder's output depends on it.
pub fn read_records_file(path: &Path) -> Result<Vec<Record>, SieveError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_records_csv(path),
        Some("json") => read_records_json(path),
        _ => Err(SieveError::Records(format!(
            "unsupported records file '{}': expected .csv or .json",
            path.display()
        ))),
    }
}

fn read_records_csv(path: &Path) -> Result<Vec<Record>, SieveError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: Record = row?;
        records.push(record);
    }
    Ok(records)
}

fn read_records_json(path: &Path) -> Result<Vec<Record>, SieveError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
