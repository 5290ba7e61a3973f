use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use shatranj::{perft, Position};

fn bench_perft(c: &mut Criterion) {
    let pos = Position::default();

    c.bench_function("perft_3", |b| {
        b.iter(|| assert_eq!(perft(black_box(&pos), 3), 8_902))
    });

    c.bench_function("perft_4", |b| {
        b.iter(|| assert_eq!(perft(black_box(&pos), 4), 197_281))
    });
}

criterion_group!(benches, bench_perft);
criterion_main!(benches);
