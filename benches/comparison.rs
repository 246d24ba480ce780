//! Benchmark comparison between `BitBuffer` and bitvec

use bitbuf::BitBuffer;
use bitvec::prelude::*;
use core::hint::black_box;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const SIZES: &[usize] = &[256, 1024, 4096];

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_ones");

    for &size in SIZES {
        let mut buf = BitBuffer::new(size);
        let mut bv = bitvec![u8, Lsb0; 0; size * 8];
        for i in (0..size * 8).step_by(3) {
            buf.set(i);
            bv.set(i, true);
        }
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("BitBuffer", size), &buf, |b, buf| {
            b.iter(|| black_box(buf.count_ones()));
        });

        group.bench_with_input(BenchmarkId::new("BitVec", size), &bv, |b, bv| {
            b.iter(|| black_box(bv.count_ones()));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for &size in SIZES {
        let mut buf = BitBuffer::new(size);
        let mut bv = bitvec![u8, Lsb0; 0; size * 8];
        for i in (0..size * 8).step_by(5) {
            buf.set(i);
            bv.set(i, true);
        }
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("BitBuffer", size), &buf, |b, buf| {
            b.iter(|| black_box(buf.to_bit_string()));
        });

        group.bench_with_input(BenchmarkId::new("BitVec", size), &bv, |b, bv| {
            b.iter(|| {
                let text: String = bv.iter().map(|bit| if *bit { '1' } else { '0' }).collect();
                black_box(text)
            });
        });
    }

    group.finish();
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_bit");

    for &size in SIZES {
        let indices: Vec<usize> = (0..size * 8).step_by(10).take(100).collect();
        group.throughput(Throughput::Elements(indices.len() as u64));

        group.bench_with_input(BenchmarkId::new("BitBuffer", size), &indices, |b, indices| {
            b.iter(|| {
                let mut buf = BitBuffer::new(size);
                for &i in indices {
                    buf.set(i);
                }
                black_box(buf);
            });
        });

        group.bench_with_input(BenchmarkId::new("BitVec", size), &indices, |b, indices| {
            b.iter(|| {
                let mut bv = bitvec![u8, Lsb0; 0; size * 8];
                for &i in indices {
                    bv.set(i, true);
                }
                black_box(bv);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_count, bench_render, bench_set);
criterion_main!(benches);
