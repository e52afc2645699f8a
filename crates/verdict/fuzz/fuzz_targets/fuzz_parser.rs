//! Fuzz target for report ingestion.
//!
//! Ingestion must return `Ok` or an error for any byte string, and every view
//! derived from a successfully ingested report must be computable.

#![no_main]

use libfuzzer_sys::fuzz_target;
use verdict::{Category, FilterCriteria, Session, to_delimited_bytes};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let mut session = Session::new();
    for category in Category::ALL {
        if session.ingest(category, "fuzz.csv", data).is_err() {
            return;
        }
    }

    let _ = session.overview();
    let _ = session.summary_report();
    let _ = session.filtered_view(Category::NotOk, &FilterCriteria::new().with_search("1"));
    if let Some(ingested) = session.table(Category::Ok) {
        let _ = to_delimited_bytes(&ingested.table);
    }
});
