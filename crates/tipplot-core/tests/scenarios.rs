// File: crates/tipplot-core/tests/scenarios.rs
// Purpose: End-to-end lifecycle: mount, Loading, Ready/Failed, on small literal datasets.

use tipplot_core::mount::Region;
use tipplot_core::scene::Status;
use tipplot_core::{ChartConfig, ChartError, ChartRenderer, LoadedRecords, Page, Phase, Record};

fn mounted() -> (Page, ChartRenderer) {
    let mut page = Page::new().with_container("plot");
    let chart = ChartRenderer::initialize(&mut page, ChartConfig::default()).expect("mount");
    (page, chart)
}

#[test]
fn initialize_appends_regions_in_order() {
    let (page, chart) = mounted();
    let container = page.select("#plot").expect("container");
    assert_eq!(container.children, [Region::Surface, Region::Tooltip, Region::Controls]);
    assert_eq!(chart.phase(), &Phase::Loading);
    assert_eq!(chart.surface().status, Some(Status::Loading));
    assert_eq!(chart.surface().title, "Tip Percentage vs Trip Distance in Different Boroughs");
    assert_eq!((chart.surface().width, chart.surface().height), (800, 500));
    assert!(chart.surface().x_axis.is_none());
    assert!(chart.controls().entries.is_empty());
    assert!(!chart.tooltip().visible);
}

#[test]
fn missing_container_is_a_mount_error() {
    let mut page = Page::new().with_container("other");
    match ChartRenderer::initialize(&mut page, ChartConfig::default()) {
        Err(ChartError::Mount { selector }) => assert_eq!(selector, "#plot"),
        Err(other) => panic!("expected Mount, got {other:?}"),
        Ok(_) => panic!("mount should fail"),
    }
    assert!(page.select("#other").unwrap().children.is_empty());
}

#[test]
fn two_record_example() {
    let (_page, mut chart) = mounted();
    let records = vec![
        Record::try_new(1.0, 10.0, "Manhattan").unwrap(),
        Record::try_new(2.0, 20.0, "Brooklyn").unwrap(),
    ];
    assert_eq!(chart.finish_load(Ok(LoadedRecords::from_records(records))), &Phase::Ready);

    let state = chart.state().expect("state");
    assert_eq!(state.scales.x.domain(), (0.0, 2.0));
    assert_eq!(state.scales.y.domain(), (0.0, 20.0));

    let markers = &chart.surface().markers;
    assert_eq!(markers.len(), 2);
    assert!(markers.iter().all(|m| m.opacity == 0.7 && m.radius == 5.0));
    assert_eq!(markers[0].class, "borough-Manhattan");
    assert_eq!(markers[0].fill, state.fill_for("Manhattan"));
    assert_ne!(markers[0].fill, markers[1].fill);
    // Plot area is 720x400 with the default margins.
    assert_eq!((markers[1].cx, markers[1].cy), (720.0, 0.0));
    assert_eq!((markers[0].cx, markers[0].cy), (360.0, 200.0));

    let entries = &chart.controls().entries;
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|c| c.checked));
    assert_eq!(entries[0].borough, "Manhattan");
    assert_eq!(entries[1].id, "checkbox-Brooklyn");
    assert_eq!(entries[1].color, markers[1].fill);

    assert!(chart.surface().status.is_none());
    assert!(chart.surface().x_axis.is_some() && chart.surface().y_axis.is_some());
}

#[test]
fn empty_dataset_renders_axes_only() {
    let (_page, mut chart) = mounted();
    assert_eq!(chart.finish_load(Ok(LoadedRecords::default())), &Phase::Ready);
    let state = chart.state().unwrap();
    assert_eq!(state.scales.x.domain(), (0.0, 1.0));
    assert_eq!(state.scales.y.domain(), (0.0, 1.0));
    assert!(chart.surface().markers.is_empty());
    assert!(chart.controls().entries.is_empty());
    let x_axis = chart.surface().x_axis.as_ref().expect("x axis");
    assert!(!x_axis.ticks.is_empty());
}

#[test]
fn failed_fetch_leaves_loading_with_error() {
    let (_page, mut chart) = mounted();
    let err = ChartError::HttpStatus { location: "https://example.invalid/x.csv".into(), status: 404 };
    let phase = chart.finish_load(Err(err)).clone();
    match phase {
        Phase::Failed(msg) => assert!(msg.contains("404"), "{msg}"),
        other => panic!("expected Failed, got {other:?}"),
    }
    assert!(matches!(chart.surface().status, Some(Status::Error(_))));
    assert!(chart.surface().markers.is_empty());
    assert!(chart.surface().x_axis.is_none());
    assert!(chart.controls().entries.is_empty());
    assert!(chart.state().is_none());
}

#[test]
fn second_load_result_is_ignored() {
    let (_page, mut chart) = mounted();
    chart.finish_load(Ok(LoadedRecords::from_records(vec![Record::try_new(1.0, 1.0, "Queens").unwrap()])));
    chart.finish_load(Err(ChartError::fetch("somewhere", "late failure")));
    assert_eq!(chart.phase(), &Phase::Ready);
    assert_eq!(chart.surface().markers.len(), 1);
}

#[test]
fn page_size_covers_controls() {
    let (_page, mut chart) = mounted();
    let (w, h_loading) = chart.page_size();
    assert_eq!(w, 800);
    assert!(h_loading > 500);
    let many: Vec<Record> = (0..30)
        .map(|i| Record::try_new(i as f64, 1.0, format!("Borough number {i}")).unwrap())
        .collect();
    chart.finish_load(Ok(LoadedRecords::from_records(many)));
    let (_, h_ready) = chart.page_size();
    // Hosts sized for the loading page must grow once the wrapped panel exists.
    assert!(h_ready > h_loading, "{h_ready} <= {h_loading}");
    let last = chart.controls().entries.last().unwrap().bounds;
    assert!(h_ready as f32 >= last.y + last.h);
    assert!(chart.controls().entries.iter().all(|c| c.bounds.x + c.bounds.w <= 800.0));
}
