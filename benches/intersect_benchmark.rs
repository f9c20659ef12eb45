use criterion::{black_box, criterion_group, criterion_main, Criterion};
use proximity::graph::intersect::count_common;
use proximity::NodeId;

fn bench_intersect(c: &mut Criterion) {
    // Balanced sides take the merge path
    let a: Vec<NodeId> = (0..4_096).map(|x| x * 2).collect();
    let b: Vec<NodeId> = (0..4_096).map(|x| x * 3).collect();

    c.bench_function("intersect_merge_4k", |bench| {
        bench.iter(|| black_box(count_common(black_box(&a), black_box(&b))));
    });

    // A short side against a hub row takes the galloping path
    let hub: Vec<NodeId> = (0..100_000).collect();
    let short: Vec<NodeId> = (0..64).map(|x| x * 1_531).collect();

    c.bench_function("intersect_gallop_64_vs_100k", |bench| {
        bench.iter(|| black_box(count_common(black_box(&short), black_box(&hub))));
    });

    // Naive baseline for the same skewed input
    c.bench_function("intersect_binary_search_64_vs_100k", |bench| {
        bench.iter(|| {
            black_box(
                short
                    .iter()
                    .filter(|x| hub.binary_search(x).is_ok())
                    .count(),
            )
        });
    });
}

criterion_group!(benches, bench_intersect);
criterion_main!(benches);
