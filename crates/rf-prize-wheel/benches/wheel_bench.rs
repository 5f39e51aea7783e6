//! Spin Engine Benchmarks
//!
//! Benchmarks for the per-spin and per-frame hot paths.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rf_prize_wheel::{
    RotationPlanner, TickDetector, WheelConfig, select_winning_sector_with,
};

const SECTOR_COUNTS: &[usize] = &[2, 8, 24];

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_winning_sector");
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for &count in SECTOR_COUNTS {
        let sectors = WheelConfig::demo(count).sectors;
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(select_winning_sector_with(&mut rng, black_box(&sectors))))
        });
    }

    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_rotation");
    let planner = RotationPlanner::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    for &count in SECTOR_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                black_box(planner.plan_with(&mut rng, count / 2, count, black_box(1234.5), 5, 8))
            })
        });
    }

    group.finish();
}

fn bench_tick_frames(c: &mut Criterion) {
    let detector = TickDetector::default();

    c.bench_function("tick_detector_240_frames", |b| {
        b.iter(|| {
            let mut last = 0.0;
            let mut ticks = 0u32;
            for frame in 1..=240 {
                let rotation = frame as f64 * 9.3;
                if detector.should_trigger(black_box(rotation), last, 8) {
                    ticks += 1;
                }
                last = rotation.round();
            }
            black_box(ticks)
        })
    });
}

criterion_group!(benches, bench_select, bench_plan, bench_tick_frames);
criterion_main!(benches);
