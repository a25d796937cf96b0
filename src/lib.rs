//! Annotation presence filter.
//!
//! Builds a compact probabilistic table over annotation records (a
//! declarative tag type attached to a program element) so a consumer can
//! cheaply rule out "definitely not annotated" without scanning full
//! metadata. Construction is cuckoo-style bucketized hashing with bounded
//! eviction and retry; the serialized form is a flat little-endian array
//! of 16-bit fingerprints. Producer and consumer must agree on every
//! hashing constant, so all of them are frozen here.

pub mod build;
pub mod error;
pub mod hash;
pub mod io_utils;
pub mod prng;
pub mod query;
pub mod record;
pub mod table;

pub use build::{build_filter, build_filter_with_stats, BuildStats, MAX_KICKS, MAX_RETRIES};
pub use error::SieveError;
pub use query::might_contain;
pub use record::Record;
pub use table::{FilterTable, BUCKET_BYTES, BUCKET_WIDTH};
