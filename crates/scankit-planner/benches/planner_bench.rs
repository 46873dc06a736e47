use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scankit_core::ScanConfiguration;
use scankit_planner::ScanPlanner;

fn bench_plan(c: &mut Criterion) {
    let config = ScanConfiguration {
        x_origin: 40.0,
        y_origin: 35.0,
        x_delta: 20.0,
        y_delta: 20.0,
        row_spacing: 0.1,
        scan_angles: 12,
        ..Default::default()
    };

    c.bench_function("plan_12_angles_200_rows", |b| {
        b.iter(|| ScanPlanner::plan(black_box(&config)).unwrap())
    });
}

criterion_group!(benches, bench_plan);
criterion_main!(benches);
