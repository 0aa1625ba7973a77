// File: crates/tipplot-core/src/lib.rs
// Summary: Core library entry point; exports public API for loading trip data and rendering the scatter chart.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod mount;
pub mod palette;
pub mod record;
pub mod render;
pub mod scale;
pub mod scene;
pub mod source;
pub mod text;
pub mod theme;
pub mod types;
pub mod visibility;

pub use axis::Axis;
pub use chart::{ChartEvent, ChartRenderer, ChartState, Phase};
pub use config::ChartConfig;
pub use error::ChartError;
pub use mount::{Page, Region};
pub use palette::CategoryPalette;
pub use record::{parse_records, LoadedRecords, Record};
pub use render::RenderOptions;
pub use scale::{compute_scales, LinearScale, ScaleSet};
pub use source::{load_data, spawn_load, DataSource};
pub use theme::Theme;
pub use visibility::VisibilityState;
