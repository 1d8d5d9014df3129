use criterion::{criterion_group, criterion_main, Criterion};
use maze_carver::generators;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| generators::generate(32, 32, &mut rng).unwrap())
    });
}

fn bench_recursive_backtracker_maze_350(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(350);
    c.bench_function("recursive_backtracker_maze_350", move |b| {
        b.iter(|| generators::generate(350, 350, &mut rng).unwrap())
    });
}

fn bench_shuffle_directions(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(4);
    let mut items = [0u8, 1, 2, 3];
    c.bench_function("shuffle_directions", move |b| {
        b.iter(|| generators::shuffle(&mut items, &mut rng))
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_350,
    bench_shuffle_directions
);
criterion_main!(benches);
