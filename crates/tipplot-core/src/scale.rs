// File: crates/tipplot-core/src/scale.rs
// Summary: Linear data-to-pixel scales and the scale set computed from a record set.

use crate::grid;
use crate::palette::CategoryPalette;
use crate::record::Record;
use crate::types::DEFAULT_SPAN;

/// Maps a data interval onto a pixel interval by linear interpolation.
/// The range may be inverted (e.g. `(height, 0.0)` for a y axis).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Domains with a non-positive or non-finite span are widened to `DEFAULT_SPAN`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, mut d1) = domain;
        if !(d1 - d0).is_finite() || d1 - d0 <= f64::EPSILON {
            d1 = d0 + DEFAULT_SPAN;
        }
        Self { domain: (d0, d1), range }
    }

    /// Scale over `[0, max]`.
    pub fn from_zero(max: f64, range: (f64, f64)) -> Self {
        Self::new((0.0, max), range)
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }
    pub fn span(&self) -> f64 { self.domain.1 - self.domain.0 }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (px - r0) / (r1 - r0) * (d1 - d0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        grid::ticks(self.domain.0, self.domain.1, count)
    }

    /// Tick values paired with formatted labels.
    pub fn tick_labels(&self, count: usize) -> Vec<(f64, String)> {
        let values = self.ticks(count);
        let step = match values.as_slice() {
            [a, b, ..] => b - a,
            _ => self.span(),
        };
        values.into_iter().map(|v| (v, grid::format_tick(v, step))).collect()
    }
}

/// Everything the draw steps need to place and color markers.
#[derive(Clone, Debug)]
pub struct ScaleSet {
    pub x: LinearScale,
    pub y: LinearScale,
    pub color: CategoryPalette,
    /// The x domain had no usable span and was widened.
    pub x_clamped: bool,
    /// The y domain had no usable span and was widened.
    pub y_clamped: bool,
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.filter(|v| v.is_finite()).fold(0.0, f64::max)
}

fn degenerate(max: f64) -> bool {
    !(max > f64::EPSILON)
}

/// x maps `[0, max distance]` onto `[0, plot_width]`, y maps `[0, max tip]` onto
/// `[plot_height, 0]`, color follows first-seen borough order.
pub fn compute_scales(records: &[Record], plot_width: f64, plot_height: f64) -> ScaleSet {
    let x_max = max_of(records.iter().map(|r| r.trip_distance));
    let y_max = max_of(records.iter().map(|r| r.tip_percent));
    let x_clamped = degenerate(x_max);
    let y_clamped = degenerate(y_max);
    if x_clamped || y_clamped {
        log::warn!(
            "degenerate domain (x max {x_max}, y max {y_max}, {} records); using a span of {DEFAULT_SPAN}",
            records.len()
        );
    }

    ScaleSet {
        x: LinearScale::from_zero(x_max, (0.0, plot_width)),
        y: LinearScale::from_zero(y_max, (plot_height, 0.0)),
        color: CategoryPalette::from_categories(records.iter().map(|r| r.borough.as_str())),
        x_clamped,
        y_clamped,
    }
}
