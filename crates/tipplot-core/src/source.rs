// File: crates/tipplot-core/src/source.rs
// Summary: Data source resolution and loading (HTTP via ureq or local file), plus a background loader.

use std::fmt;
use std::path::PathBuf;
use std::thread::JoinHandle;
use std::time::Duration;

use crate::error::{ChartError, Result};
use crate::record::{parse_records, LoadedRecords};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` locations are fetched, anything else is a local path.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch and parse the dataset. Blocks until the round-trip completes or `timeout` elapses.
pub fn load_data(source: &DataSource, timeout: Duration) -> Result<LoadedRecords> {
    let location = source.to_string();
    log::info!("loading dataset from {location}");
    match source {
        DataSource::Url(url) => {
            let agent = ureq::AgentBuilder::new().timeout(timeout).build();
            let response = agent.get(url).call().map_err(|err| match err {
                ureq::Error::Status(status, _) => ChartError::HttpStatus { location: location.clone(), status },
                ureq::Error::Transport(t) => ChartError::fetch(&location, t),
            })?;
            parse_records(response.into_reader(), &location)
        }
        DataSource::File(path) => {
            let file = std::fs::File::open(path).map_err(|e| ChartError::fetch(&location, e))?;
            parse_records(std::io::BufReader::new(file), &location)
        }
    }
}

/// Run `load_data` on a loader thread and hand the outcome to `on_done`.
///
/// The callback runs on the loader thread; hosts forward it into their own event loop.
pub fn spawn_load<F>(source: DataSource, timeout: Duration, on_done: F) -> std::io::Result<JoinHandle<()>>
where
    F: FnOnce(Result<LoadedRecords>) + Send + 'static,
{
    std::thread::Builder::new()
        .name("tipplot-loader".into())
        .spawn(move || on_done(load_data(&source, timeout)))
}
