use bitbuf::BitBuffer;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: &[usize] = &[256, 1024, 4096];

fn bench_new(c: &mut Criterion) {
    let mut group = c.benchmark_group("new");

    for &size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(BitBuffer::new(size)));
        });
    }

    group.finish();
}

fn bench_to_bit_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_bit_string");

    for &size in SIZES {
        let buf = BitBuffer::new(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &buf, |b, buf| {
            b.iter(|| black_box(buf.to_bit_string()));
        });
    }

    group.finish();
}

fn bench_set_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_all");

    for &size in SIZES {
        let mut buf = BitBuffer::new(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                black_box(buf.set_all());
            });
        });
    }

    group.finish();
}

fn bench_count_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_bits");

    for &size in SIZES {
        let mut buf = BitBuffer::new(size);
        for i in (0..buf.len_bits()).step_by(3) {
            buf.set(i);
        }
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &buf, |b, buf| {
            b.iter(|| black_box(buf.count_bits()));
        });
    }

    group.finish();
}

fn bench_bit_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_access");

    group.bench_function("set", |b| {
        let mut buf = BitBuffer::new(1024);
        let mut i = 0;
        b.iter(|| {
            buf.set(black_box(i % 8192));
            i += 7;
        });
    });

    group.bench_function("is_set", |b| {
        let mut buf = BitBuffer::new(1024);
        for i in (0..8192).step_by(2) {
            buf.set(i);
        }
        let mut i = 0;
        b.iter(|| {
            black_box(buf.is_set(i % 8192));
            i += 7;
        });
    });

    group.bench_function("grow", |b| {
        b.iter(|| {
            let mut buf = BitBuffer::new(0);
            for i in (0..8192).step_by(64) {
                buf.set(black_box(i));
            }
            black_box(buf);
        });
    });

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    let mut buf = BitBuffer::new(4096);
    buf.set_all();

    group.bench_function("clone_4096", |b| {
        b.iter(|| black_box(buf.clone()));
    });

    let other = buf.clone();
    group.bench_function("compare_4096", |b| {
        b.iter(|| black_box(buf.compare(&other)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_new,
    bench_to_bit_string,
    bench_set_all,
    bench_count_bits,
    bench_bit_access,
    bench_clone,
);

criterion_main!(benches);
