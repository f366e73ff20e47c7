#![no_main]

use libfuzzer_sys::fuzz_target;
use rollcall::aggregate::summarize;
use rollcall::source::parse_records;

fuzz_target!(|data: &[u8]| {
    // Parsing and aggregation must return errors, never panic
    if let Ok(records) = parse_records(data, "fuzz") {
        let _ = summarize(&records, 75.0);
    }
});
