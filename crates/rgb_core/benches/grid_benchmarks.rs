//! Criterion benchmarks for rgb_core submission
//!
//! Run with: cargo bench -p rgb_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rgb_core::form::{grid_to_values, submit};
use rgb_core::model::{Grid, GridShape, MONTHS};
use rgb_core::validate::validate;

/// Grid where every table fills the same contiguous run of months.
fn filled_grid(table_count: usize, row_count: usize) -> Grid {
    let shape = GridShape {
        table_count,
        row_count,
    };
    let mut grid = Grid::with_shape(shape);
    for t in 0..table_count {
        for r in 0..row_count {
            let row = grid.row_mut(t, r).unwrap();
            for (i, key) in MONTHS.into_iter().enumerate() {
                row.set_month(key, (i + r + 1) as f64);
            }
        }
    }
    grid
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for &(tables, rows) in &[(1, 1), (5, 10), (50, 100)] {
        let grid = filled_grid(tables, rows);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{tables}x{rows}")),
            &grid,
            |b, grid| b.iter(|| validate(black_box(grid))),
        );
    }
    group.finish();
}

fn bench_submit(c: &mut Criterion) {
    let grid = filled_grid(10, 20);
    let values = grid_to_values(&grid, 2026);
    let shape = grid.shape();

    c.bench_function("submit_10x20", |b| {
        b.iter(|| submit(black_box(shape), black_box(&values), 2026).unwrap())
    });
}

criterion_group!(benches, bench_validate, bench_submit);
criterion_main!(benches);
