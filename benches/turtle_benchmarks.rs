//! Replay benchmarks with confidence intervals.
//!
//! The sketch rebuilds the whole pose stack every frame, so per-frame cost
//! is the replay cost. These benchmarks measure full replays at growing
//! program sizes to confirm the recompute-from-scratch design stays cheap
//! at interactive frame rates.
//!
//! Run with: cargo criterion

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tortuga::interpreter::interpret;
use tortuga::program::{ParamTable, Program};
use tortuga::render::Recorder;

/// A branching program of roughly `n` commands.
fn branching_program(n: usize) -> Program {
    let unit = "F[+F][-F]";
    let repeated: String = unit.repeat(n / unit.len() + 1);
    Program::parse(&repeated[..n.min(repeated.len())]).unwrap_or_default()
}

/// Full replay cost at growing program sizes.
fn bench_full_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_replay");
    group.sample_size(100);
    group.confidence_level(0.95);

    let table = ParamTable::with_values(40.0, 25.0, 25.0);

    for n in [9, 90, 900] {
        let program = branching_program(n);
        group.bench_with_input(BenchmarkId::new("interpret", n), &n, |b, _| {
            b.iter(|| {
                let mut recorder = Recorder::new();
                let replay = interpret(&program, &table, program.len() as f64, &mut recorder);
                black_box((replay.executed, recorder.len()))
            });
        });
    }

    group.finish();
}

/// Mid-animation replay: same work plus the fractional final command.
fn bench_partial_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("partial_replay");
    group.sample_size(100);
    group.confidence_level(0.95);

    let table = ParamTable::with_values(40.0, 25.0, 25.0);
    let program = branching_program(900);

    group.bench_function("interpret_half", |b| {
        b.iter(|| {
            let mut recorder = Recorder::new();
            let replay = interpret(
                &program,
                &table,
                program.len() as f64 / 2.0 + 0.5,
                &mut recorder,
            );
            black_box(replay.executed)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_full_replay, bench_partial_replay);
criterion_main!(benches);
