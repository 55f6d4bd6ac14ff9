//! Benchmarks for filtering and sorting
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic listing set the size of a full 25-district collection.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{District, Listing};
use pipeline::{
    compliance_report, filter_listings, sort_listings, DistrictSelection, FilterCriteria,
    RangeConstraint, SortKey,
};

fn synthetic_listings(count: usize) -> Vec<Listing> {
    (0..count)
        .map(|i| {
            Listing::new(
                i as u64,
                District::ALL[i % District::ALL.len()],
                ((i * 37) % 5000) as u32,
                ((i * 13) % 400) as u32,
                ((i * 7) % 120) as f64 + 0.5,
                format!("https://new.land.naver.com/articles/{i}"),
            )
        })
        .collect()
}

fn reference_criteria() -> FilterCriteria {
    FilterCriteria::new(
        DistrictSelection::all(),
        RangeConstraint::new(0, 2000),
        RangeConstraint::new(0, 130),
        RangeConstraint::new(20.0, 100.0),
    )
}

fn bench_filter(c: &mut Criterion) {
    let listings = synthetic_listings(10_000);
    let criteria = reference_criteria();

    c.bench_function("filter_listings_10k", |b| {
        b.iter(|| {
            let filtered = filter_listings(black_box(&listings), black_box(&criteria)).unwrap();
            black_box(filtered)
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let listings = synthetic_listings(10_000);

    c.bench_function("sort_listings_rent_desc_10k", |b| {
        b.iter(|| {
            let sorted = sort_listings(black_box(&listings), black_box(SortKey::RentDesc));
            black_box(sorted)
        })
    });
}

fn bench_compliance(c: &mut Criterion) {
    let listings = synthetic_listings(10_000);
    let criteria = reference_criteria();

    c.bench_function("compliance_report_10k", |b| {
        b.iter(|| {
            let report = compliance_report(black_box(&listings), black_box(&criteria)).unwrap();
            black_box(report)
        })
    });
}

criterion_group!(benches, bench_filter, bench_sort, bench_compliance);
criterion_main!(benches);
