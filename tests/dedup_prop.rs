use annosieve::{build_filter, build_filter_with_stats, might_contain, Record};
use quickcheck::quickcheck;

quickcheck! {
    // Duplicates are silently skipped during insertion, so feeding the
    // list twice must still answer "possibly present" for every member.
    fn duplicated_input_preserves_membership(raw: Vec<(String, String, u32)>) -> bool {
        let records: Vec<Record> = raw
            .iter()
            .map(|(ns, name, parent)| Record::new(ns, name, *parent))
            .collect();
        let doubled: Vec<Record> = records.iter().chain(records.iter()).cloned().collect();
        let bytes = build_filter(&doubled).to_bytes();
        records.iter().all(|r| might_contain(&bytes, r))
    }

    fn placed_plus_deduplicated_covers_the_input(raw: Vec<(String, String, u32)>) -> bool {
        let records: Vec<Record> = raw
            .iter()
            .map(|(ns, name, parent)| Record::new(ns, name, *parent))
            .collect();
        let (table, stats) = build_filter_with_stats(&records);
        if table.is_disabled() {
            // Either the empty input or a failed build; both reset counters.
            return stats.placed == 0 && stats.deduplicated == 0;
        }
        stats.placed + stats.deduplicated == records.len()
            && stats.placed == table.occupied_slots()
    }
}

#[test]
fn identical_records_collapse_to_one_placement() {
    let records = vec![Record::new("System.Runtime", "TagAttribute", 7); 50];
    let (table, stats) = build_filter_with_stats(&records);
    assert_eq!(stats.placed, 1);
    assert_eq!(stats.deduplicated, 49);
    assert_eq!(table.occupied_slots(), 1);
}
