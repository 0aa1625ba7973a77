// File: crates/tipplot-core/src/mount.rs
// Summary: Host page with named containers; a chart mounts its regions into one of them.

use crate::error::{ChartError, Result};

/// Region a component appended to a container, in append order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Surface,
    Tooltip,
    Controls,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    pub id: String,
    pub children: Vec<Region>,
}

#[derive(Clone, Debug, Default)]
pub struct Page {
    containers: Vec<Container>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.containers.push(Container { id: id.into(), children: Vec::new() });
        self
    }

    /// Resolve `#id` (or a bare id) to a container.
    pub fn select(&self, selector: &str) -> Option<&Container> {
        let id = selector_id(selector)?;
        self.containers.iter().find(|c| c.id == id)
    }

    /// Append `regions` to the container named by `selector`, returning its id.
    pub fn mount(&mut self, selector: &str, regions: &[Region]) -> Result<String> {
        let missing = || ChartError::Mount { selector: selector.to_string() };
        let id = selector_id(selector).ok_or_else(missing)?;
        let container = self
            .containers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(missing)?;
        container.children.extend_from_slice(regions);
        Ok(container.id.clone())
    }
}

fn selector_id(selector: &str) -> Option<&str> {
    let id = selector.trim();
    let id = id.strip_prefix('#').unwrap_or(id);
    (!id.is_empty()).then_some(id)
}
