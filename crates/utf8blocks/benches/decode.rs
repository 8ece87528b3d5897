//! Benchmark – `utf8blocks::ByteSequence` population and serialization
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use utf8blocks::{ByteSequence, DecodeOptions};

/// Produce a *deterministic* payload of exactly `target_len` bytes that
/// cycles through characters of every width.
fn make_payload(target_len: usize, alphabet: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(target_len + 4);
    for c in alphabet.chars().cycle() {
        let mut buf = [0u8; 4];
        let encoded = c.encode_utf8(&mut buf).as_bytes();
        if out.len() + encoded.len() > target_len {
            break;
        }
        out.extend_from_slice(encoded);
    }
    // Pad with ASCII so every scenario sees the same number of bytes.
    out.resize(target_len, b'.');
    debug_assert_eq!(out.len(), target_len);
    out
}

fn bench_populate(c: &mut Criterion) {
    let mut group = c.benchmark_group("populate");

    for &size in &[1_024usize, 64 * 1_024, 1_024 * 1_024] {
        for (name, alphabet) in [("ascii", "abcdefgh"), ("mixed", "a∮é😀 → ∞")] {
            let payload = make_payload(size, alphabet);
            group.throughput(Throughput::Bytes(size as u64));

            for (mode, options) in [
                ("reserve", DecodeOptions::default()),
                (
                    "shrink",
                    DecodeOptions {
                        shrink_to_fit: true,
                        ..Default::default()
                    },
                ),
            ] {
                group.bench_with_input(
                    BenchmarkId::new(format!("{name}/{mode}"), size),
                    &payload,
                    |b, payload| {
                        let mut seq = ByteSequence::new();
                        b.iter(|| {
                            seq.populate(black_box(payload), options).unwrap();
                            black_box(seq.len())
                        });
                    },
                );
            }
        }
    }

    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write");
    let payload = make_payload(1_024 * 1_024, "a∮é😀 → ∞");
    let seq = ByteSequence::from_bytes(&payload).unwrap();
    group.throughput(Throughput::Bytes(payload.len() as u64));

    group.bench_function("to_bytes", |b| b.iter(|| black_box(seq.to_bytes())));
    group.bench_function("write_to", |b| {
        let mut out = Vec::with_capacity(payload.len());
        b.iter(|| {
            out.clear();
            seq.write_to(&mut out).unwrap();
            black_box(out.len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_populate, bench_write);
criterion_main!(benches);
