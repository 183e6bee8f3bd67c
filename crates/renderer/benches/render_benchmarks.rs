//! Benchmarks for the renderer crate - map frames and PNG encoding.
//!
//! Run with: cargo bench --package renderer --bench render_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use map_common::{BoundingBox, MetricRange};
use renderer::{png, Canvas};
use test_utils::create_region_grid;

// =============================================================================
// MAP FRAME BENCHMARKS
// =============================================================================

fn bench_draw_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_frame");

    // Roughly county-sized cells over a CONUS-like extent.
    let scenarios = [(20, 10, "200_regions"), (60, 25, "1500_regions"), (100, 32, "3200_regions")];

    for (cols, rows, name) in scenarios {
        let regions = create_region_grid(cols, rows, -125.0, 30.0, 0.5);
        let bbox = BoundingBox::enclosing(&regions).unwrap();
        let range = MetricRange::from_regions(&regions).unwrap();

        group.throughput(Throughput::Elements(regions.len() as u64));
        group.bench_with_input(BenchmarkId::new(name, 1024), &regions, |b, regions| {
            b.iter(|| {
                let mut canvas = Canvas::new(1024, bbox).unwrap();
                for region in regions {
                    canvas.draw(black_box(region), &range);
                }
                canvas
            });
        });
    }

    group.finish();
}

// =============================================================================
// PNG ENCODING BENCHMARKS
// =============================================================================

fn bench_png_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("png_encoding");

    let regions = create_region_grid(60, 25, -125.0, 30.0, 0.5);
    let range = MetricRange::from_regions(&regions).unwrap();
    let mut canvas = Canvas::new(1024, BoundingBox::enclosing(&regions).unwrap()).unwrap();
    for region in &regions {
        canvas.draw(region, &range);
    }
    let (w, h) = (canvas.width() as usize, canvas.height() as usize);
    let pixels = canvas.image().as_raw().clone();

    group.throughput(Throughput::Bytes(pixels.len() as u64));
    group.bench_function("auto", |b| {
        b.iter(|| png::encode_png_auto(black_box(&pixels), w, h).unwrap());
    });
    group.bench_function("truecolor", |b| {
        b.iter(|| png::encode_png(black_box(&pixels), w, h).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_draw_frame, bench_png_encoding);
criterion_main!(benches);
