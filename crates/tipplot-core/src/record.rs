// File: crates/tipplot-core/src/record.rs
// Summary: Trip record model and CSV parsing with the drop-malformed-rows policy.

use std::io::Read;

use crate::error::{ChartError, Result};

pub const COL_DISTANCE: &str = "trip_distance";
pub const COL_TIP: &str = "percent_tip";
pub const COL_BOROUGH: &str = "DOBorough";

/// One trip observation.
/// Contract: `trip_distance` and `tip_percent` are finite and >= 0, `borough` is non-empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub trip_distance: f64,
    pub tip_percent: f64,
    pub borough: String,
}

impl Record {
    pub fn try_new(trip_distance: f64, tip_percent: f64, borough: impl Into<String>) -> Option<Self> {
        let borough = borough.into();
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(trip_distance) || !valid(tip_percent) || borough.trim().is_empty() {
            return None;
        }
        Some(Self { trip_distance, tip_percent, borough })
    }
}

/// Outcome of a load: the usable records plus how many rows were dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadedRecords {
    pub records: Vec<Record>,
    pub dropped: usize,
}

impl LoadedRecords {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records, dropped: 0 }
    }
}

struct Columns {
    distance: usize,
    tip: usize,
    borough: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Self> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(ChartError::MissingColumn { column })
        };
        Ok(Self { distance: find(COL_DISTANCE)?, tip: find(COL_TIP)?, borough: find(COL_BOROUGH)? })
    }

    fn extract(&self, row: &csv::StringRecord) -> Option<Record> {
        let number = |ix: usize| row.get(ix).and_then(|s| s.parse::<f64>().ok());
        Record::try_new(number(self.distance)?, number(self.tip)?, row.get(self.borough)?)
    }
}

/// Parse comma-separated text with a header row. `location` only labels errors.
///
/// Malformed rows are dropped and counted. If rows existed but none survived,
/// the dataset is unusable and `NoUsableRows` is returned.
pub fn parse_records<R: Read>(reader: R, location: &str) -> Result<LoadedRecords> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| ChartError::fetch(location, e))?
        .clone();
    let columns = Columns::locate(&headers)?;

    let mut out = LoadedRecords::default();
    for (line, row) in rdr.records().enumerate() {
        // A failing reader means the download broke off; the rows so far are not the dataset.
        let row = match row {
            Err(err) if err.is_io_error() => return Err(ChartError::fetch(location, err)),
            row => row.ok(),
        };
        match row.as_ref().and_then(|r| columns.extract(r)) {
            Some(rec) => out.records.push(rec),
            None => {
                log::trace!("dropping malformed row {} of {}", line + 1, location);
                out.dropped += 1;
            }
        }
    }

    if out.records.is_empty() && out.dropped > 0 {
        return Err(ChartError::NoUsableRows { location: location.to_string(), dropped: out.dropped });
    }
    if out.dropped > 0 {
        log::warn!("dropped {} malformed rows from {}", out.dropped, location);
    }
    log::info!("parsed {} records from {}", out.records.len(), location);
    Ok(out)
}
