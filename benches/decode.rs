//! Benchmarks for primitive decoding.
//!
//! Compares the in-place decoding of `InMemory` against the provided
//! `read_fully`-based path exercised through `StreamInput`:
//! - Sequential 32-bit and 64-bit integer reads
//! - Mixed record layouts through `read_value`
//! - Offset-table style seek-then-read access

extern crate seekio;

use criterion::{criterion_group, criterion_main, Criterion};
use seekio::input::{
    io::write_be_at, memory::InMemory, stream::StreamInput, value::PrimitiveKind,
    SeekableDataInput, SeekableInput,
};
use std::{hint::black_box, io::Cursor};

const VALUES: usize = 4096;

fn int_buffer() -> Vec<u8> {
    let mut data = vec![0u8; VALUES * 8];
    let mut offset = 0;
    for i in 0..VALUES {
        write_be_at(&mut data, &mut offset, i as i64 * 0x0101_0101).unwrap();
    }
    data
}

/// Benchmark sequential i32 reads from an owned buffer.
fn bench_memory_read_i32(c: &mut Criterion) {
    let data = int_buffer();

    c.bench_function("memory_read_i32", |b| {
        b.iter(|| {
            let mut input = InMemory::new(black_box(data.clone()));
            let mut sum = 0_i64;
            while let Ok(value) = input.read_i32() {
                sum += i64::from(value);
            }
            black_box(sum)
        });
    });
}

/// Benchmark sequential i64 reads through a `Cursor` transport.
fn bench_stream_read_i64(c: &mut Criterion) {
    let data = int_buffer();

    c.bench_function("stream_read_i64", |b| {
        b.iter(|| {
            let mut input = StreamInput::new(Cursor::new(black_box(data.clone())));
            let mut sum = 0_i64;
            for _ in 0..VALUES {
                sum = sum.wrapping_add(input.read_i64().unwrap());
            }
            black_box(sum)
        });
    });
}

/// Benchmark decoding a mixed record layout repeatedly.
fn bench_read_value_layout(c: &mut Criterion) {
    let layout = [
        PrimitiveKind::UnsignedShort,
        PrimitiveKind::Int,
        PrimitiveKind::Double,
        PrimitiveKind::Boolean,
        PrimitiveKind::Char,
    ];
    let record: usize = layout.iter().map(|kind| kind.width()).sum();
    let data = vec![0x5A_u8; record * 512];

    c.bench_function("memory_read_value_layout", |b| {
        b.iter(|| {
            let mut input = InMemory::new(black_box(data.clone()));
            for _ in 0..512 {
                for kind in &layout {
                    black_box(input.read_value(*kind).unwrap());
                }
            }
        });
    });
}

/// Benchmark random access: read an offset table, then seek to each entry.
fn bench_offset_table(c: &mut Criterion) {
    const ENTRIES: usize = 256;
    let table = ENTRIES * 4;
    let mut data = vec![0u8; table + ENTRIES * 8];
    let mut offset = 0;
    for i in (0..ENTRIES).rev() {
        write_be_at(&mut data, &mut offset, (table + i * 8) as u32).unwrap();
    }

    c.bench_function("memory_offset_table", |b| {
        b.iter(|| {
            let mut input = InMemory::new(black_box(data.clone()));
            let mut offsets = Vec::with_capacity(ENTRIES);
            for _ in 0..ENTRIES {
                offsets.push(input.read_i32().unwrap() as u64);
            }
            for target in offsets {
                input.seek(target).unwrap();
                black_box(input.read_i64().unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_memory_read_i32,
    bench_stream_read_i64,
    bench_read_value_layout,
    bench_offset_table
);
criterion_main!(benches);
