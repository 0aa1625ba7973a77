// File: crates/tipplot-core/src/visibility.rs
// Summary: Per-borough visibility flags driving marker opacity.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityState {
    flags: Vec<(String, bool)>,
}

impl VisibilityState {
    /// Every borough starts visible.
    pub fn new<S: AsRef<str>>(boroughs: &[S]) -> Self {
        Self { flags: boroughs.iter().map(|b| (b.as_ref().to_string(), true)).collect() }
    }

    /// Unknown boroughs report `None`.
    pub fn is_visible(&self, borough: &str) -> Option<bool> {
        self.flags.iter().find(|(b, _)| b == borough).map(|&(_, v)| v)
    }

    /// Set the flag and return the previous value; unknown boroughs are ignored.
    pub fn set(&mut self, borough: &str, visible: bool) -> Option<bool> {
        let slot = self.flags.iter_mut().find(|(b, _)| b == borough)?;
        Some(std::mem::replace(&mut slot.1, visible))
    }

    /// `base` while visible, 0 while hidden.
    pub fn opacity_for(&self, borough: &str, base: f32) -> f32 {
        match self.is_visible(borough) {
            Some(false) => 0.0,
            _ => base,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.flags.iter().map(|(b, v)| (b.as_str(), *v))
    }
}
