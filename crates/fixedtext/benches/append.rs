//! Benchmark – per-frame label rebuilding with `fixedtext::FixedTextBuffer`
#![allow(missing_docs)]

use std::fmt::Write as _;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fixedtext::{FixedTextBuffer, FormatFlags, Precision, Vector2i};

/// Rebuild a HUD-style label the way a render loop would, once per frame.
fn rebuild_label(buf: &mut FixedTextBuffer, frame: u32) -> usize {
    buf.set("frame ")
        .append_int(frame, 8, FormatFlags::ZERO_FILL)
        .append(" pos ")
        .append(Vector2i::new(frame as i32 % 320, frame as i32 % 240))
        .append(" dt ")
        .append_float(16.6667_f32, Precision::Fixed(2));
    buf.len()
}

/// Same label through `String` and `write!`, for comparison.
fn rebuild_label_string(out: &mut String, frame: u32) -> usize {
    out.clear();
    write!(
        out,
        "frame {frame:08} pos ({}, {}) dt {:.2}",
        frame as i32 % 320,
        frame as i32 % 240,
        16.6667_f32
    )
    .unwrap();
    out.len()
}

fn bench_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("label_rebuild");

    group.bench_function("fixedtext", |b| {
        let mut buf = FixedTextBuffer::with_capacity(64);
        let mut frame = 0_u32;
        b.iter(|| {
            frame = frame.wrapping_add(1);
            black_box(rebuild_label(&mut buf, black_box(frame)))
        });
    });

    group.bench_function("string_write", |b| {
        let mut out = String::with_capacity(64);
        let mut frame = 0_u32;
        b.iter(|| {
            frame = frame.wrapping_add(1);
            black_box(rebuild_label_string(&mut out, black_box(frame)))
        });
    });

    group.finish();
}

fn bench_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace");
    let template = "{name} gains experience! {name} levels up! {name} wins!";

    for name in ["Al", "Pete!!", "Alexandra"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &name, |b, &name| {
            let mut buf = FixedTextBuffer::with_capacity(128);
            b.iter(|| {
                buf.set(template).replace("{name}", name);
                black_box(buf.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_labels, bench_replace);
criterion_main!(benches);
