// File: crates/tipplot-core/src/theme.rs
// Summary: Light/Dark theming for page, axes, tooltip and control panel colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub title: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_text: skia::Color,
    pub control_text: skia::Color,
    pub checkbox_border: skia::Color,
    pub checkbox_fill: skia::Color,
    pub status_text: skia::Color,
    pub error_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::WHITE,
            title: skia::Color::BLACK,
            axis_line: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            tooltip_fill: skia::Color::WHITE,
            tooltip_border: skia::Color::from_rgb(0xcc, 0xcc, 0xcc),
            tooltip_text: skia::Color::BLACK,
            control_text: skia::Color::BLACK,
            checkbox_border: skia::Color::from_rgb(0x76, 0x76, 0x76),
            checkbox_fill: skia::Color::from_rgb(0x00, 0x75, 0xff),
            status_text: skia::Color::from_rgb(0x55, 0x55, 0x55),
            error_text: skia::Color::from_rgb(0xc0, 0x1c, 0x28),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_rgb(18, 18, 20),
            title: skia::Color::from_rgb(235, 235, 245),
            axis_line: skia::Color::from_rgb(180, 180, 190),
            axis_label: skia::Color::from_rgb(235, 235, 245),
            tick: skia::Color::from_rgb(150, 150, 160),
            tooltip_fill: skia::Color::from_rgb(40, 40, 45),
            tooltip_border: skia::Color::from_rgb(90, 90, 100),
            tooltip_text: skia::Color::from_rgb(235, 235, 245),
            control_text: skia::Color::from_rgb(210, 210, 220),
            checkbox_border: skia::Color::from_rgb(150, 150, 160),
            checkbox_fill: skia::Color::from_rgb(64, 160, 255),
            status_text: skia::Color::from_rgb(180, 180, 190),
            error_text: skia::Color::from_rgb(220, 80, 80),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
