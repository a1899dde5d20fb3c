//! # Protocol Benchmarks
//!
//! End-to-end `prove()` cost as a function of the EPR pair count.
//! Work grows linearly: one gate circuit plus two measurements per pair.
//!
//! Run: `cargo bench --bench protocol_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qezk_protocol::{ProtocolConfig, QezkProtocol};

fn bench_prove(c: &mut Criterion) {
    let mut group = c.benchmark_group("prove");

    for num_pairs in [10, 100, 1000] {
        let protocol = QezkProtocol::new(ProtocolConfig {
            num_pairs,
            ..Default::default()
        })
        .unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(num_pairs),
            &protocol,
            |b, protocol| {
                b.iter(|| black_box(protocol.prove("benchmark claim", "101101", Some(42)).unwrap()))
            },
        );
    }

    group.finish();
}

fn bench_setup_only(c: &mut Criterion) {
    let protocol = QezkProtocol::new(ProtocolConfig {
        num_pairs: 1000,
        ..Default::default()
    })
    .unwrap();

    c.bench_function("setup_1000_pairs", |b| {
        b.iter(|| black_box(protocol.setup(Some(1)).unwrap()))
    });
}

criterion_group!(benches, bench_prove, bench_setup_only);
criterion_main!(benches);
