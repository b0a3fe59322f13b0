#![no_main]

use libfuzzer_sys::fuzz_target;

use picalc_core::partition::{partition, Range};

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    let terms = u64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let parts = u16::from_le_bytes([data[8], data[9]]) as usize;

    let Ok(ranges) = partition(terms, parts) else {
        // Invalid requests must be rejected, never mis-partitioned
        assert!(terms == 0 || parts == 0 || parts as u64 > terms);
        return;
    };

    // Exact coverage of [0, terms): ordered, contiguous, disjoint
    assert_eq!(ranges.len(), parts);
    assert_eq!(ranges[0].start, 0);
    assert_eq!(ranges[ranges.len() - 1].end, terms);
    for pair in ranges.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    let covered: u64 = ranges.iter().map(Range::len).sum();
    assert_eq!(covered, terms);
});
