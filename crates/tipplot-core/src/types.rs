// File: crates/tipplot-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, marker defaults).

use serde::{Deserialize, Serialize};

/// Default outer surface width in pixels.
pub const WIDTH: u32 = 800;
/// Default outer surface height in pixels.
pub const HEIGHT: u32 = 500;

/// Marker radius in pixels.
pub const MARKER_RADIUS: f32 = 5.0;
/// Opacity of a marker whose borough is visible.
pub const BASE_OPACITY: f32 = 0.7;
/// Domain span used when the data cannot provide a positive one.
pub const DEFAULT_SPAN: f64 = 1.0;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Insets {
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(50, 30, 50, 50)
    }
}

/// Replace whitespace runs with `-` so a borough can be used in ids and class names.
pub fn sanitize_ident(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("-")
}
