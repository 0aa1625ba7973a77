// File: crates/tipplot-core/src/chart.rs
// Summary: ChartRenderer: owns surface, tooltip and control panel; Loading -> Ready/Failed; event dispatch.

use skia_safe as skia;

use crate::axis::Axis;
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::mount::{Page, Region};
use crate::record::{LoadedRecords, Record};
use crate::scale::{compute_scales, ScaleSet};
use crate::scene::{
    borough_class, ControlPanel, Marker, Status, Surface, Tooltip, PANEL_MARGIN_TOP, PANEL_ROW_HEIGHT,
};
use crate::source::{load_data, DataSource};
use crate::visibility::VisibilityState;

/// Panel rows reserved in the page size before the controls exist.
const PANEL_RESERVED_ROWS: f32 = 2.0;
/// Fill for a borough the palette does not know. Never hit for loaded data.
const FALLBACK_FILL: skia::Color = skia::Color::new(0xff7f7f7f);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    /// Loading ended in an error; the message is shown in place of the chart.
    Failed(String),
    Ready,
}

/// Interactions delivered by the host event loop.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartEvent {
    PointerEnter { marker: usize, x: f32, y: f32 },
    PointerLeave { marker: usize },
    CheckboxChange { borough: String, checked: bool },
}

/// Scales and palette are fixed once data arrives; visibility is the only mutable part.
#[derive(Clone, Debug)]
pub struct ChartState {
    pub scales: ScaleSet,
    pub visibility: VisibilityState,
    pub base_opacity: f32,
}

impl ChartState {
    pub fn new(scales: ScaleSet, base_opacity: f32) -> Self {
        let visibility = VisibilityState::new(scales.color.domain());
        Self { scales, visibility, base_opacity }
    }

    pub fn fill_for(&self, borough: &str) -> skia::Color {
        self.scales.color.color(borough).unwrap_or(FALLBACK_FILL)
    }

    pub fn opacity_for(&self, borough: &str) -> f32 {
        self.visibility.opacity_for(borough, self.base_opacity)
    }
}

pub struct ChartRenderer {
    config: ChartConfig,
    container: String,
    phase: Phase,
    records: Vec<Record>,
    state: Option<ChartState>,
    surface: Surface,
    tooltip: Tooltip,
    controls: ControlPanel,
    hovered: Option<usize>,
}

impl ChartRenderer {
    /// Mount surface, tooltip and control panel into the container named by `config.selector`.
    /// The chart starts in `Phase::Loading` with only its title drawn.
    pub fn initialize(page: &mut Page, config: ChartConfig) -> Result<Self> {
        let container = page.mount(&config.selector, &[Region::Surface, Region::Tooltip, Region::Controls])?;
        let surface = Surface::new(config.width, config.height, config.margins, config.title.clone());
        let controls = ControlPanel::new(config.height as f32, config.width as f32);
        log::debug!("mounted chart into #{container} ({}x{})", config.width, config.height);
        Ok(Self {
            config,
            container,
            phase: Phase::Loading,
            records: Vec::new(),
            state: None,
            surface,
            tooltip: Tooltip::default(),
            controls,
            hovered: None,
        })
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn container_id(&self) -> &str { &self.container }
    pub fn phase(&self) -> &Phase { &self.phase }
    pub fn records(&self) -> &[Record] { &self.records }
    pub fn state(&self) -> Option<&ChartState> { self.state.as_ref() }
    pub fn surface(&self) -> &Surface { &self.surface }
    pub fn tooltip(&self) -> &Tooltip { &self.tooltip }
    pub fn controls(&self) -> &ControlPanel { &self.controls }
    pub fn hovered(&self) -> Option<usize> { self.hovered }

    /// Page size covering the surface and the control panel below it.
    pub fn page_size(&self) -> (u32, u32) {
        let reserved = PANEL_MARGIN_TOP + PANEL_RESERVED_ROWS * PANEL_ROW_HEIGHT;
        let panel = self.controls.height().max(reserved);
        (self.surface.width, self.surface.height + panel.ceil() as u32)
    }

    /// Blocking load from `source` using the configured timeout.
    pub fn load(&mut self, source: &DataSource) -> &Phase {
        let result = load_data(source, self.config.fetch_timeout());
        self.finish_load(result)
    }

    /// Apply the outcome of a load. Only the first outcome counts; later ones are ignored.
    pub fn finish_load(&mut self, result: Result<LoadedRecords>) -> &Phase {
        if self.phase != Phase::Loading {
            log::warn!("ignoring load result: chart already left the loading phase");
            return &self.phase;
        }
        match result {
            Ok(loaded) => self.become_ready(loaded.records),
            Err(err) => self.fail(err),
        }
        &self.phase
    }

    fn fail(&mut self, err: ChartError) {
        log::error!("chart failed to load: {err}");
        let message = err.to_string();
        self.surface.status = Some(Status::Error(message.clone()));
        self.phase = Phase::Failed(message);
    }

    fn become_ready(&mut self, records: Vec<Record>) {
        let scales = compute_scales(&records, self.config.plot_width(), self.config.plot_height());
        let state = ChartState::new(scales, self.config.base_opacity);
        self.records = records;
        self.draw_axes(&state.scales);
        self.draw_points(&state);
        self.build_controls(&state);
        self.surface.status = None;
        self.state = Some(state);
        self.phase = Phase::Ready;
        log::info!(
            "chart ready: {} markers, {} boroughs",
            self.surface.markers.len(),
            self.controls.entries.len()
        );
    }

    fn draw_axes(&mut self, scales: &ScaleSet) {
        let plot_height = self.config.plot_height() as f32;
        self.surface.x_axis = Some(Axis::bottom(&scales.x, self.config.x_label.clone(), plot_height));
        self.surface.y_axis = Some(Axis::left(&scales.y, self.config.y_label.clone()));
    }

    fn draw_points(&mut self, state: &ChartState) {
        let radius = self.config.marker_radius;
        self.surface.markers = self
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| Marker {
                record: i,
                borough: r.borough.clone(),
                class: borough_class(&r.borough),
                cx: state.scales.x.map(r.trip_distance) as f32,
                cy: state.scales.y.map(r.tip_percent) as f32,
                radius,
                fill: state.fill_for(&r.borough),
                opacity: state.opacity_for(&r.borough),
                trip_distance: r.trip_distance,
                tip_percent: r.tip_percent,
            })
            .collect();
    }

    fn build_controls(&mut self, state: &ChartState) {
        for borough in state.scales.color.domain() {
            self.controls.push(borough, state.fill_for(borough));
        }
    }

    /// Apply one interaction. Returns whether anything visible changed.
    /// Nothing happens before the chart is ready.
    pub fn dispatch(&mut self, event: ChartEvent) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        log::debug!("dispatch {event:?}");
        match event {
            ChartEvent::PointerEnter { marker, x, y } => {
                let Some(record) = self.surface.markers.get(marker).and_then(|m| self.records.get(m.record)) else {
                    return false;
                };
                self.tooltip.show_for(record, (x, y));
                self.hovered = Some(marker);
                true
            }
            ChartEvent::PointerLeave { marker } => {
                if self.hovered == Some(marker) {
                    self.hovered = None;
                }
                let was_visible = self.tooltip.visible;
                self.tooltip.hide();
                was_visible
            }
            ChartEvent::CheckboxChange { borough, checked } => self.set_borough_visible(&borough, checked),
        }
    }

    fn set_borough_visible(&mut self, borough: &str, visible: bool) -> bool {
        let Some(state) = self.state.as_mut() else { return false };
        if state.visibility.set(borough, visible).is_none() {
            log::warn!("checkbox change for unknown borough {borough:?}");
            return false;
        }
        let opacity = state.opacity_for(borough);
        for marker in self.surface.markers.iter_mut().filter(|m| m.borough == borough) {
            marker.opacity = opacity;
        }
        if let Some(entry) = self.controls.entries.iter_mut().find(|c| c.borough == borough) {
            entry.checked = visible;
        }
        // The tooltip must not outlive the marker it describes.
        let hovered_here = self.hovered.and_then(|ix| self.surface.markers.get(ix)).is_some_and(|m| m.borough == borough);
        if !visible && hovered_here {
            self.hovered = None;
            self.tooltip.hide();
        }
        true
    }

    /// Flip the checkbox of `borough`, returning its new checked state.
    pub fn toggle(&mut self, borough: &str) -> Option<bool> {
        let checked = !self.controls.entry(borough)?.checked;
        self.dispatch(ChartEvent::CheckboxChange { borough: borough.to_string(), checked })
            .then_some(checked)
    }

    /// Track the pointer at page position `(x, y)`, emitting enter/leave as the hovered marker changes.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        let hit = self.surface.marker_at(x, y);
        if hit == self.hovered {
            return false;
        }
        let mut changed = false;
        if let Some(prev) = self.hovered {
            changed |= self.dispatch(ChartEvent::PointerLeave { marker: prev });
        }
        if let Some(marker) = hit {
            changed |= self.dispatch(ChartEvent::PointerEnter { marker, x, y });
        }
        changed
    }

    /// The pointer left the page entirely.
    pub fn pointer_exit(&mut self) -> bool {
        match self.hovered {
            Some(marker) => self.dispatch(ChartEvent::PointerLeave { marker }),
            None => false,
        }
    }

    /// Primary click at page position `(x, y)`; toggles the checkbox under it, if any.
    pub fn click(&mut self, x: f32, y: f32) -> bool {
        let Some(ix) = self.controls.entry_at(x, y) else { return false };
        let borough = self.controls.entries[ix].borough.clone();
        self.toggle(&borough).is_some()
    }
}
