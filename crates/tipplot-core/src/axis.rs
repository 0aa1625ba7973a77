// File: crates/tipplot-core/src/axis.rs
// Summary: Axis model (orientation, ticks with labels, unit label) in plot coordinates.

use crate::scale::LinearScale;

/// Tick count hint handed to the scale, as d3 axes do by default.
pub const TICK_COUNT: usize = 10;
/// Length of a tick mark in pixels.
pub const TICK_SIZE: f32 = 6.0;
/// Distance of the unit label from the axis line.
pub const LABEL_OFFSET: f32 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis in plot coordinates.
    pub pos: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    pub label: String,
    /// Axis line from 0 to `length` (plot width for bottom, plot height for left).
    pub length: f32,
    /// Offset of the axis line: y of a bottom axis, x of a left axis.
    pub offset: f32,
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn bottom(scale: &LinearScale, label: impl Into<String>, plot_height: f32) -> Self {
        Self::build(AxisOrient::Bottom, scale, label.into(), plot_height)
    }

    pub fn left(scale: &LinearScale, label: impl Into<String>) -> Self {
        Self::build(AxisOrient::Left, scale, label.into(), 0.0)
    }

    fn build(orient: AxisOrient, scale: &LinearScale, label: String, offset: f32) -> Self {
        let (r0, r1) = scale.range();
        let ticks = scale
            .tick_labels(TICK_COUNT)
            .into_iter()
            .map(|(v, text)| Tick { pos: scale.map(v) as f32, label: text })
            .collect();
        Self { orient, label, length: (r1 - r0).abs() as f32, offset, ticks }
    }

    /// Anchor of the unit label in plot coordinates. The left label is drawn rotated -90°.
    pub fn label_anchor(&self) -> (f32, f32) {
        match self.orient {
            AxisOrient::Bottom => (self.length / 2.0, self.offset + LABEL_OFFSET),
            AxisOrient::Left => (self.offset - LABEL_OFFSET, self.length / 2.0),
        }
    }
}
