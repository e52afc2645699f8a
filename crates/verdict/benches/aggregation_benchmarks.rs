//! Ingestion, aggregation and filtering benchmarks.
//!
//! Measures the cost of recomputing the derived views, which happens on every
//! interaction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use verdict::{CanonicalField, Category, FilterCriteria, Parser, Session};

/// Generate a synthetic outcome report with the given number of rows.
fn generate_report(rows: usize) -> String {
    let mut data = String::from(
        "Dataset ID,Ingestion type,Sanity reason,Status flag,Max date not matching,old count,new count\n",
    );

    for row in 0..rows {
        data.push_str(&format!(
            "DS-{:06},{},Case {} row mismatch,{},{},{},{}\n",
            row / 2,
            if row % 3 == 0 { "full" } else { "delta" },
            row % 25,
            match row % 4 {
                0 => "Matching",
                1 => "Not Matching",
                2 => "Unmatched",
                _ => "",
            },
            if row % 2 == 0 { "Yes" } else { "No" },
            1_000 + row,
            990 + row,
        ));
    }

    data
}

fn generate_summary(rows: usize) -> String {
    let mut data = String::from("Dataset ID,% date match,% date unmatch,% data match,% data unmatch\n");
    for row in 0..rows {
        let date = (row * 37 % 1000) as f64 / 10.0;
        let matched = (row * 53 % 1000) as f64 / 10.0;
        data.push_str(&format!(
            "DS-{:06},{:.1},{:.1},{:.1},{:.1}\n",
            row,
            date,
            100.0 - date,
            matched,
            100.0 - matched
        ));
    }
    data.push_str("Total,N/A,N/A,N/A,N/A\n");
    data
}

fn loaded_session(rows: usize) -> Session {
    let report = generate_report(rows);
    let mut session = Session::new();
    for category in Category::OUTCOMES {
        session
            .ingest(category, "report.csv", report.as_bytes())
            .unwrap();
    }
    session
        .ingest(Category::Summary, "summary.csv", generate_summary(rows).as_bytes())
        .unwrap();
    session
}

/// Benchmark parsing reports of various sizes.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_report");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_report(*rows);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            let parser = Parser::new();
            b.iter(|| black_box(parser.parse_named("report.csv", data.as_bytes()).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark the full overview: metrics plus every chart dataset.
fn bench_overview(c: &mut Criterion) {
    let mut group = c.benchmark_group("overview");

    for rows in [100, 1_000, 10_000].iter() {
        let session = loaded_session(*rows);
        group.bench_with_input(BenchmarkId::new("rows", rows), &session, |b, session| {
            b.iter(|| black_box(session.overview()))
        });
    }

    group.finish();
}

/// Benchmark search plus membership filtering.
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let criteria = FilterCriteria::new()
        .with_search("ds-00")
        .with_values(CanonicalField::IngestType, ["delta"])
        .with_values(CanonicalField::StatusFlag, ["Matching", "Unmatched"]);

    for rows in [100, 1_000, 10_000].iter() {
        let session = loaded_session(*rows);
        group.bench_with_input(BenchmarkId::new("rows", rows), &session, |b, session| {
            b.iter(|| black_box(session.filtered_view(Category::NotOk, &criteria)))
        });
    }

    group.finish();
}

/// Benchmark the numeric summary report.
fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary_report");

    for rows in [100, 1_000, 10_000].iter() {
        let session = loaded_session(*rows);
        group.bench_with_input(BenchmarkId::new("rows", rows), &session, |b, session| {
            b.iter(|| black_box(session.summary_report()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_overview, bench_filter, bench_summary);
criterion_main!(benches);
