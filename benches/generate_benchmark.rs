#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for state generation and frame building.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sortviz::algorithms::{generate, AlgorithmId};
use sortviz::output::{frame_to_svg, TerminalMode, TerminalRenderer};
use sortviz::render::FrameView;
use sortviz::session::random_array;
use sortviz::theme::Theme;

fn generate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [10, 25, 50] {
        let input = random_array(size, 100, &mut rng);
        for algorithm in AlgorithmId::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.as_str(), size),
                &input,
                |b, input| {
                    b.iter(|| generate(black_box(algorithm), black_box(input)));
                },
            );
        }
    }

    group.finish();
}

fn frame_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let mut rng = StdRng::seed_from_u64(7);
    let input = random_array(50, 100, &mut rng);
    let states = generate(AlgorithmId::Quick, &input);
    let state = &states[states.len() / 2];

    group.bench_function("build", |b| {
        b.iter(|| FrameView::build(black_box(state), AlgorithmId::Quick, Theme::Dark, 800));
    });

    let frame = FrameView::build(state, AlgorithmId::Quick, Theme::Dark, 800);
    let renderer = TerminalRenderer::new().mode(TerminalMode::AnsiTrueColor);
    group.bench_function("terminal", |b| {
        b.iter(|| renderer.render(black_box(&frame)));
    });
    group.bench_function("svg", |b| {
        b.iter(|| frame_to_svg(black_box(&frame), 240).render());
    });

    group.finish();
}

criterion_group!(benches, generate_benchmark, frame_benchmark);
criterion_main!(benches);
