// File: crates/tipplot-core/tests/records.rs
// Purpose: CSV parsing policy: column lookup by name, dropped rows, unusable datasets.

use tipplot_core::{parse_records, ChartError};

#[test]
fn columns_found_by_name_and_extras_ignored() {
    let csv = "\
VendorID,DOBorough,fare,percent_tip,trip_distance
1,Manhattan,12.5,10.0,1.0
2,Brooklyn,20.0,20.0,2.0
";
    let loaded = parse_records(csv.as_bytes(), "inline").expect("parse");
    assert_eq!(loaded.dropped, 0);
    assert_eq!(loaded.records.len(), 2);
    assert_eq!(loaded.records[0].borough, "Manhattan");
    assert_eq!(loaded.records[0].trip_distance, 1.0);
    assert_eq!(loaded.records[1].tip_percent, 20.0);
}

#[test]
fn non_numeric_distance_is_dropped_before_domain_computation() {
    let csv = "\
trip_distance,percent_tip,DOBorough
abc,10.0,Manhattan
2.0,20.0,Brooklyn
";
    let loaded = parse_records(csv.as_bytes(), "inline").expect("parse");
    assert_eq!(loaded.dropped, 1);
    assert_eq!(loaded.records.len(), 1);
    let scales = tipplot_core::compute_scales(&loaded.records, 100.0, 100.0);
    assert_eq!(scales.x.domain(), (0.0, 2.0));
}

#[test]
fn blank_nan_negative_and_short_rows_are_dropped() {
    let csv = "\
trip_distance,percent_tip,DOBorough
,10.0,Manhattan
NaN,10.0,Queens
-1.0,5.0,Bronx
1.0,inf,Bronx
1.5,3.0,
2.0
3.0,7.5,Staten Island
";
    let loaded = parse_records(csv.as_bytes(), "inline").expect("parse");
    assert_eq!(loaded.dropped, 6);
    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.records[0].borough, "Staten Island");
}

#[test]
fn whitespace_around_fields_is_trimmed() {
    let csv = "trip_distance , percent_tip , DOBorough\n 1.25 , 4.5 ,  Queens \n";
    let loaded = parse_records(csv.as_bytes(), "inline").expect("parse");
    assert_eq!(loaded.records[0].trip_distance, 1.25);
    assert_eq!(loaded.records[0].borough, "Queens");
}

#[test]
fn missing_column_is_an_error() {
    let csv = "trip_distance,DOBorough\n1.0,Queens\n";
    match parse_records(csv.as_bytes(), "inline") {
        Err(ChartError::MissingColumn { column }) => assert_eq!(column, "percent_tip"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn header_only_is_an_empty_dataset() {
    let csv = "trip_distance,percent_tip,DOBorough\n";
    let loaded = parse_records(csv.as_bytes(), "inline").expect("parse");
    assert!(loaded.records.is_empty());
    assert_eq!(loaded.dropped, 0);
}

#[test]
fn all_rows_malformed_is_unusable() {
    let csv = "trip_distance,percent_tip,DOBorough\nx,y,Queens\n,,\n";
    match parse_records(csv.as_bytes(), "inline") {
        Err(ChartError::NoUsableRows { dropped, .. }) => assert_eq!(dropped, 2),
        other => panic!("expected NoUsableRows, got {other:?}"),
    }
}

/// Yields `body` in small chunks, then fails like a connection dropped mid-download.
struct BrokenStream {
    body: &'static [u8],
    pos: usize,
}

impl std::io::Read for BrokenStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.pos >= self.body.len() {
            return Err(std::io::Error::new(std::io::ErrorKind::TimedOut, "body read timed out"));
        }
        let n = buf.len().min(8).min(self.body.len() - self.pos);
        buf[..n].copy_from_slice(&self.body[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

#[test]
fn reader_failure_mid_stream_is_a_fetch_error() {
    let reader = BrokenStream { body: b"trip_distance,percent_tip,DOBorough\n1.0,10.0,Queens\n2.0,20.0,Bron", pos: 0 };
    match parse_records(reader, "remote") {
        Err(err @ ChartError::Fetch { .. }) => assert!(err.is_fetch_failure()),
        other => panic!("expected Fetch, got {other:?}"),
    }
}

#[test]
fn truncated_download_does_not_make_the_chart_ready() {
    use tipplot_core::{ChartConfig, ChartRenderer, Page, Phase};

    let reader = BrokenStream { body: b"trip_distance,percent_tip,DOBorough\n1.0,10.0,Queens\n", pos: 0 };
    let mut page = Page::new().with_container("plot");
    let mut chart = ChartRenderer::initialize(&mut page, ChartConfig::default()).expect("mount");
    let phase = chart.finish_load(parse_records(reader, "remote")).clone();
    assert!(matches!(phase, Phase::Failed(_)), "{phase:?}");
    assert!(chart.surface().markers.is_empty());
}
