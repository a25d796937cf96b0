use annosieve::{build_filter, might_contain, Record};
use honggfuzz::fuzz;

fn records_from(data: &[u8]) -> Vec<Record> {
    data.chunks(5)
        .map(|chunk| {
            let ns = format!("n{}", chunk[0] % 16);
            let name = format!("T{}", chunk.get(1).copied().unwrap_or(0));
            let parent = chunk.get(2).map(|&b| b as u32).unwrap_or(0)
                | (chunk.get(3).map(|&b| b as u32).unwrap_or(0) << 8)
                | (chunk.get(4).map(|&b| b as u32).unwrap_or(0) << 16);
            Record::new(&ns, &name, parent)
        })
        .collect()
}

// Build over a derived record list, then require every member to answer
// "possibly present". The disabled table passes trivially.
fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let records = records_from(data);
            let bytes = build_filter(&records).to_bytes();
            for r in &records {
                assert!(might_contain(&bytes, r));
            }
        });
    }
}
