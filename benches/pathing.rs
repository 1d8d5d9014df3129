use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use maze_carver::cells::CellCoordinate;
use maze_carver::generators;
use maze_carver::maze::Maze;
use maze_carver::pathing;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

type MazeDistances = pathing::Distances<u32>;

fn large_maze() -> Maze {
    generators::generate(350, 350, &mut XorShiftRng::seed_from_u64(350)).unwrap()
}

fn bench_distances(c: &mut Criterion) {
    c.bench_function("distances", |b| {
        let m = large_maze();
        let start_coord = CellCoordinate::new(250, 250);
        b.iter(|| MazeDistances::for_maze(&m, start_coord))
    });
}

fn bench_furthest_points(c: &mut Criterion) {
    c.bench_function("furthest_points", |b| {
        let m = large_maze();
        let start_coord = CellCoordinate::new(250, 250);
        let distances = MazeDistances::for_maze(&m, start_coord).unwrap();
        b.iter(|| distances.furthest_points())
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    c.bench_function("shortest_path", |b| {
        let m = large_maze();
        let start_coord = CellCoordinate::new(250, 250);
        let distances = MazeDistances::for_maze(&m, start_coord).unwrap();
        let end_coord = CellCoordinate::new(0, 0);
        b.iter(|| pathing::shortest_path(&m, &distances, end_coord))
    });
}

fn bench_is_perfect(c: &mut Criterion) {
    c.bench_function("is_perfect", |b| {
        let m = large_maze();
        b.iter(|| m.is_perfect())
    });
}

criterion_group!(benches,
    bench_distances,
    bench_furthest_points,
    bench_shortest_path,
    bench_is_perfect
);
criterion_main!(benches);
