use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridfall::core::{Grid, GridEngine};
use gridfall::types::{GridConfig, MoveDir, Rgb};

fn bench_gravity_tick(c: &mut Criterion) {
    let mut engine = GridEngine::new(GridConfig::default(), 12345);

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            engine.gravity_tick();
            black_box(engine.active());
        })
    });
}

fn bench_move_horizontal(c: &mut Criterion) {
    let mut engine = GridEngine::new(GridConfig::default(), 12345);
    engine.gravity_tick(); // spawn

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            engine.move_horizontal(black_box(MoveDir::Left));
            engine.move_horizontal(black_box(MoveDir::Right));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut engine = GridEngine::new(GridConfig::default(), 12345);
    engine.gravity_tick(); // spawn

    c.bench_function("rotate", |b| {
        b.iter(|| {
            engine.rotate();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(10, 24);
            for row in 20..24i8 {
                for col in 0..10i8 {
                    grid.fill_cell(col, row, Rgb::new(50, 50, 50));
                    grid.lock_cell(col, row);
                }
            }
            black_box(grid.clear_lines(&[20, 21, 22, 23]));
        })
    });
}

fn bench_visible_cells(c: &mut Criterion) {
    let mut engine = GridEngine::new(GridConfig::default(), 12345);
    for _ in 0..500 {
        engine.gravity_tick();
    }

    c.bench_function("visible_cells_scan", |b| {
        b.iter(|| {
            black_box(engine.visible_cells().count());
        })
    });
}

criterion_group!(
    benches,
    bench_gravity_tick,
    bench_move_horizontal,
    bench_rotate,
    bench_line_clear,
    bench_visible_cells
);
criterion_main!(benches);
