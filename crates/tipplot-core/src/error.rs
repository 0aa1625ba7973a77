// File: crates/tipplot-core/src/error.rs
// Summary: Error kinds surfaced by mounting, loading and parsing the trip dataset.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The container selector resolved to nothing. Fatal for initialization.
    #[error("mount point `{selector}` not found")]
    Mount { selector: String },

    #[error("failed to fetch {location}: {message}")]
    Fetch { location: String, message: String },

    #[error("fetching {location} returned HTTP {status}")]
    HttpStatus { location: String, status: u16 },

    #[error("dataset is missing required column `{column}`")]
    MissingColumn { column: &'static str },

    #[error("no usable rows in {location} ({dropped} malformed)")]
    NoUsableRows { location: String, dropped: usize },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("render failed: {0}")]
    Render(String),
}

impl ChartError {
    pub fn fetch(location: impl Into<String>, message: impl ToString) -> Self {
        Self::Fetch { location: location.into(), message: message.to_string() }
    }

    /// Network/transport side failures (as opposed to content problems).
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::HttpStatus { .. } | Self::Io(_))
    }
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
