//! Benchmarks for markdown conversion.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mdpad::controller::Statistics;
use mdpad::markdown::{ComrakConverter, MarkdownConverter, render_lines};

fn bench_html_simple(c: &mut Criterion) {
    let md = "# Hello\n\nWorld";
    let converter = ComrakConverter::default();
    c.bench_function("html_simple", |b| {
        b.iter(|| converter.convert(black_box(md)).unwrap())
    });
}

fn bench_html_medium(c: &mut Criterion) {
    let md = include_str!("../tests/fixtures/sample.md");
    let converter = ComrakConverter::default();
    c.bench_function("html_medium", |b| {
        b.iter(|| converter.convert(black_box(md)).unwrap())
    });
}

fn bench_render_lines(c: &mut Criterion) {
    let md = include_str!("../tests/fixtures/sample.md");
    c.bench_function("render_lines_80", |b| {
        b.iter(|| render_lines(black_box(md), 80))
    });
}

fn bench_statistics(c: &mut Criterion) {
    let md = include_str!("../tests/fixtures/sample.md").repeat(50);
    c.bench_function("statistics", |b| b.iter(|| Statistics::of(black_box(&md))));
}

criterion_group!(
    benches,
    bench_html_simple,
    bench_html_medium,
    bench_render_lines,
    bench_statistics
);
criterion_main!(benches);
