// File: crates/tipplot-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use tipplot_core::{ChartConfig, ChartRenderer, LoadedRecords, Page, Record, RenderOptions};

#[test]
fn render_smoke_png() {
    let mut page = Page::new().with_container("plot");
    let mut chart = ChartRenderer::initialize(&mut page, ChartConfig::default()).unwrap();
    chart.finish_load(Ok(LoadedRecords::from_records(vec![
        Record::try_new(0.5, 12.0, "Manhattan").unwrap(),
        Record::try_new(3.2, 18.5, "Brooklyn").unwrap(),
        Record::try_new(7.9, 0.0, "Queens").unwrap(),
    ])));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn loading_page_renders() {
    let mut page = Page::new().with_container("plot");
    let chart = ChartRenderer::initialize(&mut page, ChartConfig::default()).unwrap();
    let bytes = chart.render_to_png_bytes(&RenderOptions::for_theme("dark")).expect("render");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
