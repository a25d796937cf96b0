use thiserror::Error;

#[derive(Error, Debug)]
pub enum SieveError {
    /// Malformed serialized filter data.
    #[error("filter error: {0}")]
    Filter(String),

    /// Record list input failure.
    #[error("records error: {0}")]
    Records(String),

    /// CSV record list failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON record list failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
