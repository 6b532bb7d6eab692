//! Benchmarks for DXT block decompression

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mu_formats::dxt;
use std::hint::black_box;

fn compressed(width: u32, height: u32) -> Vec<u8> {
    let size = dxt::compressed_size(width, height).unwrap_or(0);
    (0..size).map(|i| (i * 31 % 251) as u8).collect()
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("dxt_decompress");

    for dim in [64u32, 256, 1024] {
        let data = compressed(dim, dim);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(dim), &data, |b, data| {
            b.iter(|| dxt::decompress(black_box(dim), black_box(dim), black_box(data)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decompress);

criterion_main!(benches);
