//! Fuzz target for cell coercion and case-label extraction.

#![no_main]

use libfuzzer_sys::fuzz_target;
use verdict::Cell;
use verdict::distribution::classify_status_flag;
use verdict::metrics::extract_case_label;
use verdict::numeric::coerce;

fuzz_target!(|raw: &str| {
    let cell = Cell::from_raw(raw);

    if let Some(v) = coerce(&cell) {
        assert!(v.is_finite());
    }

    let label = extract_case_label(&cell);
    assert!(label == "Unknown" || label.starts_with("Case "));

    let _ = classify_status_flag(raw);
});
