//! Benchmark: measure `step()` cost under various grid conditions.
//!
//! The desktop host runs one generation per frame on a 480×480 grid, so a
//! step should stay well under a 16.6 ms frame (60 Hz).
//!
//! Each active benchmark uses `iter_batched` to re-seed the grid before every
//! iteration so we measure moving particles, not a settled grid.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use sandfall::cell::Species;
use sandfall::config::Config;
use sandfall::{Grid, Universe};

const SIZE: i32 = 480;

fn grid() -> Grid {
    Grid::with_config(Config::default()).expect("default config is valid")
}

/// Empty grid: baseline cost of scanning 230K cells with nothing to do.
fn bench_step_empty(c: &mut Criterion) {
    c.bench_function("step_empty_480x480", |b| {
        let mut grid = grid();
        b.iter(|| {
            black_box(grid.step());
        });
    });
}

/// Sand falling: the top fifth of the grid, all in free fall.
fn bench_step_sand_falling(c: &mut Criterion) {
    c.bench_function("step_sand_falling_480x480", |b| {
        b.iter_batched(
            || {
                let mut grid = grid();
                for row in 1..96 {
                    for col in 0..SIZE {
                        grid.place(Species::Sand, row, col);
                    }
                }
                grid
            },
            |mut grid| {
                black_box(grid.step());
                grid
            },
            BatchSize::LargeInput,
        );
    });
}

/// Water body: lateral momentum checks make water dearer than sand.
fn bench_step_water_body(c: &mut Criterion) {
    c.bench_function("step_water_body_480x480", |b| {
        b.iter_batched(
            || {
                let mut grid = grid();
                for row in 240..SIZE {
                    for col in 0..SIZE {
                        grid.place(Species::Water, row, col);
                    }
                }
                grid
            },
            |mut grid| {
                black_box(grid.step());
                grid
            },
            BatchSize::LargeInput,
        );
    });
}

/// Mixed species including toxic, so corrosion cascades are exercised.
fn bench_step_mixed_active(c: &mut Criterion) {
    c.bench_function("step_mixed_active_480x480", |b| {
        b.iter_batched(
            || {
                let mut grid = grid();
                for row in 1..SIZE {
                    for col in 0..SIZE {
                        let species = match (row * 7 + col * 13) % 6 {
                            0 => Species::Sand,
                            1 => Species::Water,
                            2 => Species::Stone,
                            3 => Species::Toxic,
                            _ => continue,
                        };
                        grid.place(species, row, col);
                    }
                }
                grid
            },
            |mut grid| {
                black_box(grid.step());
                grid
            },
            BatchSize::LargeInput,
        );
    });
}

/// Full `Universe::step()` including the RGBA frame refresh the host reads.
fn bench_universe_step(c: &mut Criterion) {
    c.bench_function("universe_step_mixed_480x480", |b| {
        b.iter_batched(
            || {
                let mut universe = Universe::new(480, 7).expect("valid size");
                for row in 1..SIZE {
                    for col in 0..SIZE {
                        universe.place(((row + col) % 5) as u8, row, col);
                    }
                }
                universe
            },
            |mut universe| {
                black_box(universe.step());
                universe
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_step_empty,
    bench_step_sand_falling,
    bench_step_water_body,
    bench_step_mixed_active,
    bench_universe_step,
);
criterion_main!(benches);
