//! Waveform synthesizer benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use irblast::audio::synthesize;
use irblast::codec::protocol;

fn bench_synthesize(c: &mut Criterion) {
    // Full NEC frame, the common transmission unit
    let nec = protocol::decode("NEC,32,159,0").unwrap();

    c.bench_function("synthesize_nec_frame_44k1", |b| {
        b.iter(|| synthesize(black_box(nec.carrier_hz()), black_box(nec.pulses()), 44100))
    });

    c.bench_function("synthesize_nec_frame_96k", |b| {
        b.iter(|| synthesize(black_box(nec.carrier_hz()), black_box(nec.pulses()), 96000))
    });

    // A long raw pattern, worst case for per-sample sine generation
    let long_pattern: Vec<u32> = (0..512).map(|i| 400 + (i % 7) * 120).collect();
    c.bench_function("synthesize_long_pattern", |b| {
        b.iter(|| synthesize(black_box(38000), black_box(&long_pattern), 44100))
    });
}

criterion_group!(benches, bench_synthesize);
criterion_main!(benches);
