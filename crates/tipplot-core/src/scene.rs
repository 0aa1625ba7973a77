// File: crates/tipplot-core/src/scene.rs
// Summary: Retained scene regions owned by the renderer: drawing surface, tooltip overlay, control panel.
// Notes:
// - Marker positions are in plot coordinates (origin at the top-left of the plot area).
// - Tooltip and control panel positions are in page coordinates (origin at the top-left of the surface).

use skia_safe as skia;

use crate::axis::Axis;
use crate::record::Record;
use crate::types::{sanitize_ident, Insets};

/// Approximate advance of one character at the panel/tooltip font size.
pub const CHAR_WIDTH: f32 = 7.0;
pub const PANEL_MARGIN_TOP: f32 = 20.0;
pub const PANEL_ROW_HEIGHT: f32 = 24.0;
pub const CHECKBOX_SIZE: f32 = 13.0;
pub const SWATCH_SIZE: f32 = 12.0;
const CHECKBOX_GAP: f32 = 4.0;
const SWATCH_GAP: f32 = 5.0;
const ENTRY_MARGIN_RIGHT: f32 = 15.0;
/// Tooltip offset from the pointer, in pixels.
pub const TOOLTIP_OFFSET: (f32, f32) = (10.0, -20.0);

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Index of the record this marker plots.
    pub record: usize,
    pub borough: String,
    /// `borough-<name>` tag used to address every marker of a borough.
    pub class: String,
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub fill: skia::Color,
    pub opacity: f32,
    pub trip_distance: f64,
    pub tip_percent: f64,
}

pub fn borough_class(borough: &str) -> String {
    format!("borough-{}", sanitize_ident(borough))
}

impl Marker {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        let (dx, dy) = (px - self.cx, py - self.cy);
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Text shown in place of the chart while loading or after a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Loading,
    Error(String),
}

#[derive(Clone, Debug)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    pub margins: Insets,
    pub title: String,
    pub x_axis: Option<Axis>,
    pub y_axis: Option<Axis>,
    pub markers: Vec<Marker>,
    pub status: Option<Status>,
}

impl Surface {
    pub fn new(width: u32, height: u32, margins: Insets, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            margins,
            title: title.into(),
            x_axis: None,
            y_axis: None,
            markers: Vec::new(),
            status: Some(Status::Loading),
        }
    }

    /// Convert a page position into plot coordinates.
    pub fn to_plot(&self, x: f32, y: f32) -> (f32, f32) {
        (x - self.margins.left as f32, y - self.margins.top as f32)
    }

    /// Topmost marker under the page position that is currently shown.
    pub fn marker_at(&self, x: f32, y: f32) -> Option<usize> {
        let (px, py) = self.to_plot(x, y);
        self.markers
            .iter()
            .rposition(|m| m.opacity > 0.0 && m.contains(px, py))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub left: f32,
    pub top: f32,
    pub lines: Vec<String>,
}

impl Tooltip {
    pub fn show_for(&mut self, record: &Record, pointer: (f32, f32)) {
        self.visible = true;
        self.left = pointer.0 + TOOLTIP_OFFSET.0;
        self.top = pointer.1 + TOOLTIP_OFFSET.1;
        self.lines = tooltip_lines(record);
    }

    /// Hide without clearing; the overlay keeps its last content like an opacity-0 element.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn size(&self) -> (f32, f32) {
        let longest = self.lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        (longest as f32 * CHAR_WIDTH + 10.0, self.lines.len() as f32 * 16.0 + 10.0)
    }
}

pub fn tooltip_lines(record: &Record) -> Vec<String> {
    vec![
        format!("Borough: {}", record.borough),
        format!("Trip Distance: {} miles", record.trip_distance),
        format!("Tip: {:.2}%", record.tip_percent),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Checkbox {
    pub id: String,
    pub borough: String,
    pub color: skia::Color,
    pub checked: bool,
    /// Whole label (box, swatch and text) in page coordinates.
    pub bounds: Rect,
}

impl Checkbox {
    pub fn box_rect(&self) -> Rect {
        let b = self.bounds;
        Rect { x: b.x, y: b.y + (b.h - CHECKBOX_SIZE) / 2.0, w: CHECKBOX_SIZE, h: CHECKBOX_SIZE }
    }

    pub fn swatch_rect(&self) -> Rect {
        let b = self.bounds;
        Rect {
            x: b.x + CHECKBOX_SIZE + CHECKBOX_GAP,
            y: b.y + (b.h - SWATCH_SIZE) / 2.0,
            w: SWATCH_SIZE,
            h: SWATCH_SIZE,
        }
    }

    /// Baseline-left anchor of the borough name.
    pub fn text_origin(&self) -> (f32, f32) {
        let s = self.swatch_rect();
        (s.x + SWATCH_SIZE + SWATCH_GAP, self.bounds.y + self.bounds.h / 2.0 + 4.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ControlPanel {
    /// Top of the panel in page coordinates (directly below the surface).
    pub top: f32,
    pub width: f32,
    pub entries: Vec<Checkbox>,
}

impl ControlPanel {
    pub fn new(top: f32, width: f32) -> Self {
        Self { top, width, entries: Vec::new() }
    }

    /// Append an inline entry, wrapping to a new row when it would overflow the panel width.
    pub fn push(&mut self, borough: &str, color: skia::Color) {
        let entry_w = CHECKBOX_SIZE
            + CHECKBOX_GAP
            + SWATCH_SIZE
            + SWATCH_GAP
            + borough.chars().count() as f32 * CHAR_WIDTH;
        let (mut x, mut y) = match self.entries.last() {
            Some(last) => (last.bounds.x + last.bounds.w + ENTRY_MARGIN_RIGHT, last.bounds.y),
            None => (0.0, self.top + PANEL_MARGIN_TOP),
        };
        if x > 0.0 && x + entry_w > self.width {
            x = 0.0;
            y += PANEL_ROW_HEIGHT;
        }
        self.entries.push(Checkbox {
            id: format!("checkbox-{}", sanitize_ident(borough)),
            borough: borough.to_string(),
            color,
            checked: true,
            bounds: Rect { x, y, w: entry_w, h: PANEL_ROW_HEIGHT },
        });
    }

    /// Total height including the top margin; an empty panel still reserves its margin.
    pub fn height(&self) -> f32 {
        match self.entries.last() {
            Some(last) => last.bounds.y + last.bounds.h - self.top,
            None => PANEL_MARGIN_TOP,
        }
    }

    pub fn entry_at(&self, x: f32, y: f32) -> Option<usize> {
        self.entries.iter().position(|c| c.bounds.contains(x, y))
    }

    pub fn entry(&self, borough: &str) -> Option<&Checkbox> {
        self.entries.iter().find(|c| c.borough == borough)
    }
}
