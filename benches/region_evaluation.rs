// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for visibility evaluation.
//!
//! Measures the performance of:
//! - A single intersection ratio
//! - One observer evaluated over a scroll sweep
//! - A full page evaluation per scroll notification

use criterion::{criterion_group, criterion_main, Criterion};
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Point, Rectangle, Size};
use iced_reveal::config::Config;
use iced_reveal::content::Portfolio;
use iced_reveal::observer::{self, intersection_ratio, ObserveConfig, Region};
use iced_reveal::ui::page::Page;
use std::hint::black_box;

const WINDOW: Size = Size::new(1280.0, 800.0);

fn viewport_at(y: f32) -> Rectangle {
    Rectangle::new(Point::new(0.0, y), WINDOW)
}

/// Benchmark the raw geometry.
fn bench_intersection_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_evaluation");

    let region = Rectangle::new(Point::new(0.0, 900.0), Size::new(1280.0, 640.0));
    let viewport = viewport_at(500.0);

    group.bench_function("intersection_ratio", |b| {
        b.iter(|| black_box(intersection_ratio(black_box(region), black_box(viewport))));
    });

    group.finish();
}

/// Benchmark a repeating observer across a scroll sweep.
fn bench_observer_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_evaluation");

    let region = Region::attached(Rectangle::new(
        Point::new(0.0, 2000.0),
        Size::new(1280.0, 640.0),
    ));

    group.bench_function("observer_sweep", |b| {
        b.iter(|| {
            let mut handle =
                observer::observe(&region, ObserveConfig::repeating(0.2)).unwrap();
            for step in 0..200 {
                let viewport = viewport_at(step as f32 * 20.0);
                black_box(handle.evaluate(&region, viewport));
            }
        });
    });

    group.finish();
}

/// Benchmark one page-wide evaluation, as done for every scroll notification.
fn bench_page_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_evaluation");

    let portfolio = Portfolio::builtin().unwrap();
    let mut page = Page::new(&Config::default()).unwrap();
    page.resize(WINDOW, &portfolio);
    let bounds = Rectangle::new(Point::ORIGIN, WINDOW);
    let max_y = page.content_height() - WINDOW.height;

    group.bench_function("page_scroll", |b| {
        let mut y = 0.0;
        b.iter(|| {
            y = if y >= max_y { 0.0 } else { y + 16.0 };
            black_box(page.scrolled(bounds, AbsoluteOffset { x: 0.0, y }, &portfolio));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_intersection_ratio,
    bench_observer_sweep,
    bench_page_scroll
);
criterion_main!(benches);
