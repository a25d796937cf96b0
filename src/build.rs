//! Filter construction: bucket sizing, placement, eviction, retry.

use crate::hash::{alt_bucket, RecordHash};
use crate::prng::XorShift128;
use crate::record::Record;
use crate::table::{FilterTable, BUCKET_WIDTH};

/// Eviction budget for a single insertion.
pub const MAX_KICKS: u32 = 256;
/// Extra attempts after the initial one, each with a doubled bucket count.
pub const MAX_RETRIES: u32 = 2;

/// Construction statistics for one build call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BuildStats {
    /// Attempts consumed, 1 to 3. Zero for empty input.
    pub attempts: u32,
    /// Records placed into the final table.
    pub placed: usize,
    /// Records skipped because their fingerprint was already present in
    /// one of their two candidate buckets.
    pub deduplicated: usize,
    /// Bucket count of the final table, zero when disabled.
    pub bucket_count: u32,
    /// Occupied slot fraction of the final table.
    pub load_factor: f64,
}

impl BuildStats {
    /// Print a human readable summary to stderr.
    pub fn report(&self) {
        eprintln!("Filter build complete");
        eprintln!("Attempts: {}", self.attempts);
        eprintln!("Placed: {}", self.placed);
        eprintln!("Deduplicated: {}", self.deduplicated);
        eprintln!("Buckets: {}", self.bucket_count);
        eprintln!("Load factor: {:.3}", self.load_factor);
    }
}

/// Build a presence filter over `records`.
///
/// Record order is part of the determinism contract: the same list in the
/// same order produces byte-identical output on every platform and run.
/// Construction never fails; when the table cannot be filled even after
/// two size doublings, the result degrades to [`FilterTable::disabled`]
/// and callers lose the optimization, not correctness.
pub fn build_filter(records: &[Record]) -> FilterTable {
    build_filter_with_stats(records).0
}

/// [`build_filter`] variant that also reports construction statistics.
pub fn build_filter_with_stats(records: &[Record]) -> (FilterTable, BuildStats) {
    let mut stats = BuildStats::default();
    if records.is_empty() {
        return (FilterTable::disabled(), stats);
    }

    let min_buckets = (records.len() / BUCKET_WIDTH) as u32 + 1;
    let mut bucket_count = min_buckets.next_power_of_two();

    for attempt in 0..=MAX_RETRIES {
        stats.attempts = attempt + 1;
        if let Some(table) = try_fill(records, bucket_count, &mut stats) {
            stats.bucket_count = table.bucket_count();
            stats.load_factor = table.load_factor();
            return (table, stats);
        }
        // Doubling keeps the count a power of two, which the XOR bucket
        // pairing requires.
        bucket_count *= 2;
    }

    stats.placed = 0;
    stats.deduplicated = 0;
    (FilterTable::disabled(), stats)
}

/// One construction attempt at a fixed table size.
///
/// Returns `None` as soon as any record exhausts its eviction budget;
/// remaining records are not processed, the caller retries with a bigger
/// table.
fn try_fill(records: &[Record], bucket_count: u32, stats: &mut BuildStats) -> Option<FilterTable> {
    let mut table = FilterTable::zeroed(bucket_count);
    let mut rng = XorShift128::new();
    stats.placed = 0;
    stats.deduplicated = 0;

    for record in records {
        let hash = RecordHash::of(record);
        let (mut bucket_a, mut bucket_b) = hash.buckets(bucket_count);
        // Coin flip picks which bucket gets tried first. Drawn for every
        // record, duplicates included, so the stream position stays a
        // function of the input list alone.
        if rng.next_u32() & 1 != 0 {
            std::mem::swap(&mut bucket_a, &mut bucket_b);
        }

        // A matching fingerprint in either candidate bucket already
        // answers every query for this record.
        if table.bucket_contains(bucket_a, hash.fingerprint)
            || table.bucket_contains(bucket_b, hash.fingerprint)
        {
            stats.deduplicated += 1;
            continue;
        }

        if table.fill_slot(bucket_a, hash.fingerprint) || table.fill_slot(bucket_b, hash.fingerprint)
        {
            stats.placed += 1;
            continue;
        }

        if !kick_into_place(&mut table, bucket_a, hash.fingerprint, &mut rng) {
            return None;
        }
        stats.placed += 1;
    }

    Some(table)
}

/// Displace resident fingerprints until the incoming one finds a free
/// slot, for at most [`MAX_KICKS`] swaps. Returns false on exhaustion.
fn kick_into_place(
    table: &mut FilterTable,
    mut bucket: u32,
    mut fingerprint: u16,
    rng: &mut XorShift128,
) -> bool {
    let bucket_count = table.bucket_count();
    for _ in 0..MAX_KICKS {
        let slot = (rng.next_u32() & 0x7) as usize;
        fingerprint = table.swap_slot(bucket, slot, fingerprint);
        // The displaced fingerprint's other home.
        bucket = alt_bucket(bucket, fingerprint, bucket_count);
        if table.fill_slot(bucket, fingerprint) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(namespace: &str, name: &str, parent: u32) -> Record {
        Record::new(namespace, name, parent)
    }

    #[test]
    fn empty_input_yields_disabled_table() {
        let (table, stats) = build_filter_with_stats(&[]);
        assert!(table.is_disabled());
        assert_eq!(stats.attempts, 0);
        assert_eq!(stats.placed, 0);
    }

    #[test]
    fn single_record_fills_one_bucket_table() {
        let records = [record("A", "X", 1)];
        let (table, stats) = build_filter_with_stats(&records);
        assert_eq!(table.bucket_count(), 1);
        assert_eq!(table.occupied_slots(), 1);
        assert_eq!(stats.attempts, 1);
        assert_eq!(stats.placed, 1);
        assert_eq!(stats.deduplicated, 0);
    }

    #[test]
    fn bucket_count_is_a_power_of_two() {
        let records: Vec<Record> = (0..100)
            .map(|i| record("ns", &format!("T{i}"), i))
            .collect();
        let table = build_filter(&records);
        assert!(!table.is_disabled());
        assert!(table.bucket_count().is_power_of_two());
        // 100 records / 8 + 1 = 13 minimum buckets, rounded up to 16.
        assert_eq!(table.bucket_count(), 16);
    }

    #[test]
    fn identical_records_occupy_one_slot() {
        let records = vec![record("A", "X", 1); 20];
        let (table, stats) = build_filter_with_stats(&records);
        assert_eq!(table.occupied_slots(), 1);
        assert_eq!(stats.placed, 1);
        assert_eq!(stats.deduplicated, 19);
    }
}
