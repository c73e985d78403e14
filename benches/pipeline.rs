//! Pipeline benchmark: filter → summary → node stats → insights over synthetic tables.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use securegraph::aggregate::{node_summaries, summarize};
use securegraph::filter::{apply, FilterCriteria, SegmentFilter};
use securegraph::insights::generate;
use securegraph::records::ConnectionRecord;

fn make_rows(n: usize) -> Vec<ConnectionRecord> {
    (0..n)
        .map(|i| {
            ConnectionRecord::new(
                format!("10.0.{}.{}", i % 7, i % 50),
                format!("10.1.{}.{}", i % 5, i % 40),
                (i % 300) as f64 + 0.5,
                i % 11 == 0,
                format!("seg{}", i % 4),
            )
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let rows = make_rows(10_000);
    let criteria = FilterCriteria {
        segment: SegmentFilter::Only("seg1".to_string()),
        latency_ceiling: 200.0,
        attacks_only: false,
    };

    c.bench_function("filter_10k_rows", |b| b.iter(|| black_box(apply(black_box(&rows), &criteria))));
}

fn bench_full_cycle(c: &mut Criterion) {
    let mut g = c.benchmark_group("derive_by_rows");
    for n in [100, 1_000, 10_000] {
        let rows = make_rows(n);
        let criteria = FilterCriteria::default();
        g.bench_function(format!("rows_{}", n).as_str(), |b| {
            b.iter(|| {
                let filtered = apply(&rows, &criteria);
                black_box(summarize(&filtered));
                black_box(node_summaries(&filtered));
                black_box(generate(&filtered))
            })
        });
    }
    g.finish();
}

criterion_group!(benches, bench_filter, bench_full_cycle);
criterion_main!(benches);
