use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use tipplot_core::{compute_scales, ChartConfig, ChartRenderer, LoadedRecords, Page, Record, RenderOptions};

const BOROUGHS: [&str; 6] = ["Manhattan", "Brooklyn", "Queens", "Bronx", "Staten Island", "EWR"];

fn records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let d = (i as f64 * 0.013).sin().abs() * 20.0;
            let t = (i as f64 * 0.007).cos().abs() * 35.0;
            Record::try_new(d, t, BOROUGHS[i % BOROUGHS.len()]).expect("valid")
        })
        .collect()
}

fn ready_chart(n: usize) -> ChartRenderer {
    let mut page = Page::new().with_container("plot");
    let mut chart = ChartRenderer::initialize(&mut page, ChartConfig::default()).expect("mount");
    chart.finish_load(Ok(LoadedRecords::from_records(records(n))));
    chart
}

fn bench_scales(c: &mut Criterion) {
    let data = records(50_000);
    c.bench_function("compute_scales_50k", |b| {
        b.iter(|| black_box(compute_scales(black_box(&data), 720.0, 400.0)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("scatter_{n}"), |b| {
            let chart = ready_chart(n);
            let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let mut chart = ready_chart(50_000);
    c.bench_function("toggle_borough_50k", |b| {
        b.iter(|| black_box(chart.toggle("Queens")))
    });
}

criterion_group!(benches, bench_scales, bench_render, bench_toggle);
criterion_main!(benches);
