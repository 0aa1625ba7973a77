// File: crates/tipplot-core/tests/rgba.rs
// Purpose: Validate RGBA buffer shape and that hidden markers leave no pixels behind.

use tipplot_core::{ChartConfig, ChartRenderer, LoadedRecords, Page, Record, RenderOptions};

fn chart_with_one_point() -> ChartRenderer {
    let mut page = Page::new().with_container("plot");
    let mut chart = ChartRenderer::initialize(&mut page, ChartConfig::default()).unwrap();
    // Distance 1 of max 2, tip 1 of max 2: center of the 720x400 plot.
    chart.finish_load(Ok(LoadedRecords::from_records(vec![
        Record::try_new(1.0, 1.0, "Queens").unwrap(),
        Record::try_new(2.0, 2.0, "Bronx").unwrap(),
    ])));
    chart
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let chart = chart_with_one_point();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);
    assert_eq!((w, h), chart.page_size());

    // Background alpha in the top-left pixel.
    assert_eq!(px[3], 255);
    // White page corner.
    assert_eq!(pixel(&px, stride, 0, 0), [255, 255, 255, 255]);
}

#[test]
fn marker_pixels_follow_visibility() {
    let mut chart = chart_with_one_point();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    // Marker center in page coordinates: margins (50, 50) + (360, 200).
    let (cx, cy) = (410, 250);

    let (px, _, _, stride) = chart.render_to_rgba8(&opts).unwrap();
    let shown = pixel(&px, stride, cx, cy);
    assert_ne!(shown, [255, 255, 255, 255], "visible marker should tint the page");

    chart.toggle("Queens");
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).unwrap();
    assert_eq!(pixel(&px, stride, cx, cy), [255, 255, 255, 255]);
}
