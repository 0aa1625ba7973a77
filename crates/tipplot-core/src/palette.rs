// File: crates/tipplot-core/src/palette.rs
// Summary: Categorical color assignment (Category10, first-seen order, cycling past capacity).

use std::collections::HashMap;

use skia_safe as skia;

/// The ten-color qualitative scheme used by d3's `schemeCategory10`.
pub const CATEGORY10: [skia::Color; 10] = [
    skia::Color::new(0xff1f77b4),
    skia::Color::new(0xffff7f0e),
    skia::Color::new(0xff2ca02c),
    skia::Color::new(0xffd62728),
    skia::Color::new(0xff9467bd),
    skia::Color::new(0xff8c564b),
    skia::Color::new(0xffe377c2),
    skia::Color::new(0xff7f7f7f),
    skia::Color::new(0xffbcbd22),
    skia::Color::new(0xff17becf),
];

/// Maps each distinct category to a display color.
/// Contract: the mapping never changes after construction.
#[derive(Clone, Debug)]
pub struct CategoryPalette {
    scheme: Vec<skia::Color>,
    domain: Vec<String>,
    index: HashMap<String, usize>,
}

impl CategoryPalette {
    /// Build from categories in data order; duplicates keep their first position.
    pub fn from_categories<'a>(categories: impl IntoIterator<Item = &'a str>) -> Self {
        Self::with_scheme(categories, CATEGORY10.to_vec())
    }

    /// Like `from_categories` with a custom scheme. An empty scheme falls back to Category10.
    pub fn with_scheme<'a>(categories: impl IntoIterator<Item = &'a str>, scheme: Vec<skia::Color>) -> Self {
        let scheme = if scheme.is_empty() { CATEGORY10.to_vec() } else { scheme };
        let mut domain = Vec::new();
        let mut index = HashMap::new();
        for name in categories {
            if !index.contains_key(name) {
                index.insert(name.to_string(), domain.len());
                domain.push(name.to_string());
            }
        }
        if domain.len() > scheme.len() {
            log::warn!(
                "{} categories exceed palette of {} colors; colors will repeat",
                domain.len(),
                scheme.len()
            );
        }
        Self { scheme, domain, index }
    }

    /// Categories in first-seen order.
    pub fn domain(&self) -> &[String] { &self.domain }

    pub fn len(&self) -> usize { self.domain.len() }

    pub fn is_empty(&self) -> bool { self.domain.is_empty() }

    pub fn capacity(&self) -> usize { self.scheme.len() }

    /// Color for `category`; wraps around the scheme once it is exhausted.
    /// Unknown categories have no color.
    pub fn color(&self, category: &str) -> Option<skia::Color> {
        self.index.get(category).map(|&i| self.scheme[i % self.scheme.len()])
    }
}

/// `#rrggbb` form used by the SVG/HTML export.
pub fn to_hex(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}
