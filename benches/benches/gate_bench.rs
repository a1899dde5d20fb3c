//! # Gate Algebra Benchmarks
//!
//! Measures Bell-state construction, gate application and Born-rule
//! measurement. All operations work on fixed 4-dimensional vectors, so
//! everything here is O(1) per call.
//!
//! Run: `cargo bench --bench gate_bench`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qezk_encoding::{apply_circuit, witness_to_gates};
use qezk_measurement::{chsh_statistic, classify_bell_state, measure};
use qezk_quantum::{BellState, Gate, MeasurementBasis, Qubit};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_bell_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("bell_construction");

    for kind in BellState::ALL {
        group.bench_function(kind.name(), |b| {
            b.iter(|| black_box(kind.state_vector()))
        });
    }

    group.finish();
}

fn bench_gate_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_application");
    let state = BellState::PhiPlus.state_vector();

    group.bench_function("single_gate", |b| {
        b.iter(|| black_box(state.apply_single(&Gate::H.matrix(), Qubit::First)))
    });

    let gates = witness_to_gates("101101110010110").unwrap();
    group.bench_function("five_gate_circuit", |b| {
        b.iter(|| black_box(apply_circuit(state, &gates)))
    });

    group.finish();
}

fn bench_measurement(c: &mut Criterion) {
    let mut group = c.benchmark_group("measurement");
    let state = BellState::PhiPlus.state_vector();
    let mut rng = StdRng::seed_from_u64(42);

    for basis in MeasurementBasis::ALL {
        group.bench_function(basis.name(), |b| {
            b.iter(|| black_box(measure(&state, basis, &mut rng)))
        });
    }

    group.bench_function("classify", |b| {
        b.iter(|| black_box(classify_bell_state(&state)))
    });

    group.finish();
}

fn bench_chsh(c: &mut Criterion) {
    let mut group = c.benchmark_group("chsh");
    let mut rng = StdRng::seed_from_u64(7);
    let state = BellState::PhiPlus.state_vector();

    let bases: Vec<MeasurementBasis> = (0..1000)
        .map(|i| MeasurementBasis::ALL[i % 3])
        .collect();
    let prover: Vec<u8> = bases.iter().map(|b| measure(&state, *b, &mut rng)).collect();
    let verifier: Vec<u8> = bases.iter().map(|b| measure(&state, *b, &mut rng)).collect();

    group.bench_function("1000_samples", |b| {
        b.iter(|| black_box(chsh_statistic(&prover, &verifier, &bases, &bases).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_bell_construction,
    bench_gate_application,
    bench_measurement,
    bench_chsh
);
criterion_main!(benches);
