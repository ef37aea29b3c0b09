//! Run these benches with `cargo bench --bench projection -- --verbose`
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grid_forecast::{GridCell, GridProjector, ProjectionParams};

fn build_tester() -> Criterion {
    Criterion::default()
        .sample_size(200)
        .measurement_time(std::time::Duration::from_secs(10))
        .noise_threshold(0.03)
        .significance_level(0.01)
}

criterion_main!(projection_benches);

criterion_group!(
    name = projection_benches;
    config = build_tester();
    targets = new_projector_bench, project_bench, grid_to_geo_bench
);

fn coords() -> Vec<(f64, f64)> {
    (0..100)
        .map(|i| {
            let frac = f64::from(i) / 100.0;
            (33.0 + 5.5 * frac, 124.5 + 7.0 * frac)
        })
        .collect()
}

fn new_projector_bench(c: &mut Criterion) {
    c.bench_function("new_projector", |b| {
        b.iter(|| GridProjector::new(black_box(ProjectionParams::default())));
    });
}

fn project_bench(c: &mut Criterion) {
    let projector = GridProjector::default();
    let coords = coords();

    c.bench_function("project", |b| {
        b.iter(|| {
            for &coord in &coords {
                let _x = projector.project(black_box(coord));
            }
        });
    });
}

fn grid_to_geo_bench(c: &mut Criterion) {
    let projector = GridProjector::default();
    let cells: Vec<GridCell> = (0..100)
        .map(|i| GridCell {
            nx: 20 + i,
            ny: 30 + i,
        })
        .collect();

    c.bench_function("grid_to_geo", |b| {
        b.iter(|| {
            for &cell in &cells {
                let _x = projector.grid_to_geo(black_box(cell));
            }
        });
    });
}
