//! Benchmarks for per-frame exercise tracking

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use repcount_core::{FrameSize, Side};
use repcount_exercise::synth::frame_for;
use repcount_exercise::{ExerciseKind, Tracker};
use repcount_test::{FuzzerConfig, SessionFuzzer};

fn bench_process_frame(c: &mut Criterion) {
    let size = FrameSize::default();
    let mut group = c.benchmark_group("tracker_process");

    for &kind in ExerciseKind::all() {
        let frames = [
            frame_for(kind, Side::Left, 175.0, None),
            frame_for(kind, Side::Left, 90.0, None),
            frame_for(kind, Side::Left, 20.0, None),
        ];
        let mut tracker = Tracker::new(kind, Side::Left);
        let mut i = 0;

        group.bench_function(kind.as_str(), |b| {
            b.iter(|| {
                i = (i + 1) % frames.len();
                black_box(tracker.process(black_box(&frames[i]), size).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_fuzz_session(c: &mut Criterion) {
    let config = FuzzerConfig::light();
    let mut group = c.benchmark_group("fuzz_session");
    group.throughput(Throughput::Elements(config.frames as u64));

    group.bench_function("curl_light", |b| {
        b.iter(|| {
            let mut fuzzer = SessionFuzzer::new(config.clone());
            black_box(fuzzer.run(ExerciseKind::Curl, Side::Left).unwrap())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_process_frame, bench_fuzz_session);
criterion_main!(benches);
