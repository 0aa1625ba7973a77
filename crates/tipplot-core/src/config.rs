// File: crates/tipplot-core/src/config.rs
// Summary: Chart configuration with TOML loading; every field has a default.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Insets, BASE_OPACITY, HEIGHT, MARKER_RADIUS, WIDTH};

pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/amayakejriwal/nyc-taxis/main/tips_sample2.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Container the chart mounts into (`#id` or bare id).
    pub selector: String,
    pub data_url: String,
    /// Outer surface width, margins included.
    pub width: u32,
    /// Outer surface height, margins included.
    pub height: u32,
    pub margins: Insets,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub marker_radius: f32,
    pub base_opacity: f32,
    pub fetch_timeout_secs: u64,
    pub theme: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            selector: "#plot".to_string(),
            data_url: DEFAULT_DATA_URL.to_string(),
            width: WIDTH,
            height: HEIGHT,
            margins: Insets::default(),
            title: "Tip Percentage vs Trip Distance in Different Boroughs".to_string(),
            x_label: "Trip Distance (miles)".to_string(),
            y_label: "Tip Percentage (%)".to_string(),
            marker_radius: MARKER_RADIUS,
            base_opacity: BASE_OPACITY,
            fetch_timeout_secs: 30,
            theme: "light".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&text)
    }

    /// Width of the plot area (outer width minus margins), at least 1px.
    pub fn plot_width(&self) -> f64 {
        (self.width.saturating_sub(self.margins.hsum())).max(1) as f64
    }

    /// Height of the plot area (outer height minus margins), at least 1px.
    pub fn plot_height(&self) -> f64 {
        (self.height.saturating_sub(self.margins.vsum())).max(1) as f64
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs.max(1))
    }
}
