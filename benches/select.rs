use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lib::{eval::Materialist, game::Side, mnk::Board, search::Options, search::Searcher};
use std::time::Duration;

fn bench(c: &mut Criterion) {
    let options = Options {
        depth: 4,
        margin: Duration::ZERO,
    };

    c.benchmark_group("benches").bench_function("select", |b| {
        b.iter_batched_ref(
            || {
                let searcher = Searcher::with_options(Side::Black, Materialist::new(), options);
                (searcher.with_seed(0), Board::new(4, 3))
            },
            |(s, pos)| s.select(pos, Duration::MAX),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
