use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridwalk_core::SplitMix64;
use gridwalk_nav::{Cell, Grid, Navigator, NullRenderer, StepBudget};

fn scenario() -> Grid {
    Grid::new(5, 5, [Cell::new(2, 2), Cell::new(3, 2)], Cell::new(4, 4)).expect("grid")
}

/// Open field with a few wall segments, each leaving a gap.
fn walled_field(size: i32) -> Grid {
    let mut walls = Vec::new();
    for x in (4..size - 1).step_by(6) {
        for y in 0..size {
            if y % 11 != 5 {
                walls.push(Cell::new(x, y));
            }
        }
    }
    Grid::new(size, size, walls, Cell::new(size - 1, size - 1)).expect("grid")
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("gridwalk-nav/walk");

    let small = scenario();
    let mut seed = 0u64;
    group.bench_function("run_until_goal_5x5", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut nav = Navigator::at_origin(&small, SplitMix64::new(seed)).expect("start");
            let result = nav.run_until_goal(StepBudget::scaled(&small, 100), &mut NullRenderer);
            black_box(result.ok());
        })
    });

    let field = walled_field(32);
    let mut seed = 0u64;
    group.bench_function("run_until_goal_32x32", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut nav = Navigator::at_origin(&field, SplitMix64::new(seed)).expect("start");
            let result = nav.run_until_goal(StepBudget::scaled(&field, 100), &mut NullRenderer);
            black_box(result.ok());
        })
    });

    let mut nav = Navigator::at_origin(&field, SplitMix64::new(7)).expect("start");
    group.bench_function("step", |b| {
        b.iter(|| {
            if nav.at_goal() {
                nav = Navigator::at_origin(&field, SplitMix64::new(7)).expect("start");
            }
            black_box(nav.step().ok());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_walk);
criterion_main!(benches);
