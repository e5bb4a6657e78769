//! Breakpoint splitting benchmarks.
//!
//! Chains are built once per cluster; only `apply_breakpoints` is timed, at
//! several flag densities.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use kusari_benches::{
    error::BenchSetupError,
    params::BreakpointBenchParams,
    source::{SyntheticConfig, SyntheticShape, generate_cluster, random_breakpoints},
};
use kusari_core::{apply_breakpoints, build_chains};

/// Seed used for all synthetic data generation in this benchmark.
const SEED: u64 = 7;

/// Ring sizes to benchmark.
const RING_SIZES: &[usize] = &[10_000, 100_000];

/// Breakpoint densities, in thousandths.
const DENSITIES: &[u32] = &[1, 10, 100];

fn apply_breakpoints_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("apply_breakpoints");
    group.sample_size(20);

    for &node_count in RING_SIZES {
        let cluster = generate_cluster(&SyntheticConfig {
            shape: SyntheticShape::Ring {
                node_count,
                chords: node_count / 1_000,
            },
            seed: SEED,
        })?;
        let chains = build_chains(&cluster, None)?;

        for &density_permille in DENSITIES {
            let flags = random_breakpoints(node_count, density_permille, SEED)?;
            let params = BreakpointBenchParams {
                node_count,
                density_permille,
            };
            group.bench_with_input(
                BenchmarkId::from_parameter(&params),
                &(&chains, &flags),
                |b, &(chains, flags)| {
                    b.iter(|| apply_breakpoints(chains, &cluster, flags));
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn breakpoints_apply(c: &mut Criterion) {
    if let Err(err) = apply_breakpoints_impl(c) {
        panic!("apply_breakpoints benchmark setup failed: {err}");
    }
}

criterion_group!(benches, breakpoints_apply);
criterion_main!(benches);
