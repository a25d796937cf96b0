use annosieve::{might_contain, Record};
use honggfuzz::fuzz;

// Arbitrary byte buffers must never panic the query side, whatever their
// length or contents.
fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let record = Record::new("Fuzz", "Probe", data.len() as u32);
            let _ = might_contain(data, &record);
        });
    }
}
