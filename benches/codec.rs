//! Encode/decode throughput benchmarks for both circuit families.
#![expect(missing_docs)]
#![allow(unused_crate_dependencies)]

use cin::block::{BlockDecoder, BlockEncoder};
use cin::secret::{Key, Nonce};
use cin::stream::{StreamDecoder, StreamEncoder};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn payload(len: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    (0..len).map(|_| rng.random()).collect()
}

fn secrets() -> (Key, Nonce) {
    (
        Key::from_bytes(&[0x42u8; 32]).unwrap(),
        Nonce::from_bytes(&[0x17u8; 12]).unwrap(),
    )
}

fn bench_stream(c: &mut Criterion) {
    let (key, nonce) = secrets();
    let encoder = StreamEncoder::for_profile("10KB").unwrap();
    let decoder = StreamDecoder::for_profile("10KB").unwrap();
    let data = payload(10240);

    c.bench_function("stream_encode_10kb", |b| {
        b.iter(|| {
            let (inputs, _) = encoder.encode(&key, &nonce, 1, black_box(&data));
            black_box(inputs);
        });
    });

    let (inputs, _) = encoder.encode(&key, &nonce, 1, &data);
    c.bench_function("stream_decode_10kb", |b| {
        b.iter(|| {
            let decoded = decoder.decode(black_box(&inputs)).unwrap();
            black_box(decoded);
        });
    });
}

fn bench_block(c: &mut Criterion) {
    let (key, nonce) = secrets();
    let encoder = BlockEncoder::for_profile("10KB").unwrap();
    let decoder = BlockDecoder::for_profile("10KB").unwrap();
    let data = payload(10240);

    c.bench_function("block_encode_10kb", |b| {
        b.iter(|| {
            let (inputs, _) = encoder.encode(&key, &nonce, 1, black_box(&data));
            black_box(inputs);
        });
    });

    let (inputs, _) = encoder.encode(&key, &nonce, 1, &data);
    c.bench_function("block_decode_10kb", |b| {
        b.iter(|| {
            let decoded = decoder.decode(black_box(&inputs)).unwrap();
            black_box(decoded);
        });
    });
}

criterion_group!(benches, bench_stream, bench_block);
criterion_main!(benches);
