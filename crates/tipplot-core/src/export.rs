// File: crates/tipplot-core/src/export.rs
// Summary: Embeddable SVG/HTML serialization of the mounted regions (inline styles only).

use std::fmt::Write as _;

use crate::axis::{Axis, AxisOrient, TICK_SIZE};
use crate::chart::ChartRenderer;
use crate::palette::to_hex;
use crate::scene::{Status, Tooltip};

/// Escape text for XML/HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// The drawing surface as a standalone `<svg>` element.
pub fn to_svg(chart: &ChartRenderer) -> String {
    let s = chart.surface();
    let m = s.margins;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" font-family="sans-serif">"#,
        s.width, s.height
    );
    let title_x = s.width.saturating_sub(m.hsum()) as f32 / 2.0 + m.left as f32;
    let _ = writeln!(
        out,
        r#"  <text x="{}" y="{}" text-anchor="middle" style="font-size: 16px; font-weight: bold;">{}</text>"#,
        title_x,
        m.top as f32 / 2.0,
        escape(&s.title)
    );
    let _ = writeln!(out, r#"  <g transform="translate({}, {})">"#, m.left, m.top);

    if let Some(status) = &s.status {
        let (text, fill) = match status {
            Status::Loading => ("Loading data…".to_string(), "#555555"),
            Status::Error(msg) => (format!("Could not load data: {msg}"), "#c01c28"),
        };
        let _ = writeln!(
            out,
            r#"    <text class="status" x="{}" y="{}" text-anchor="middle" fill="{}">{}</text>"#,
            chart.config().plot_width() / 2.0,
            chart.config().plot_height() / 2.0,
            fill,
            escape(&text)
        );
    }

    for axis in s.x_axis.iter().chain(s.y_axis.iter()) {
        write_axis(&mut out, axis);
    }

    for mk in &s.markers {
        let _ = writeln!(
            out,
            r#"    <circle cx="{}" cy="{}" r="{}" fill="{}" class="{}" style="opacity: {};"/>"#,
            mk.cx,
            mk.cy,
            mk.radius,
            to_hex(mk.fill),
            escape(&mk.class),
            mk.opacity
        );
    }
    out.push_str("  </g>\n</svg>\n");
    out
}

fn write_axis(out: &mut String, axis: &Axis) {
    let o = axis.offset;
    match axis.orient {
        AxisOrient::Bottom => {
            let _ = writeln!(out, r#"    <g class="axis axis-x" transform="translate(0, {o})">"#);
            let _ = writeln!(out, r#"      <path stroke="black" d="M0,0H{}"/>"#, axis.length);
            for t in &axis.ticks {
                let _ = writeln!(
                    out,
                    r#"      <g class="tick" transform="translate({}, 0)"><line stroke="black" y2="{TICK_SIZE}"/><text y="{}" text-anchor="middle" font-size="10">{}</text></g>"#,
                    t.pos,
                    TICK_SIZE + 12.0,
                    escape(&t.label)
                );
            }
            let (lx, ly) = axis.label_anchor();
            let _ = writeln!(
                out,
                r#"      <text x="{lx}" y="{}" fill="black" text-anchor="middle">{}</text>"#,
                ly - o,
                escape(&axis.label)
            );
        }
        AxisOrient::Left => {
            let _ = writeln!(out, r#"    <g class="axis axis-y" transform="translate({o}, 0)">"#);
            let _ = writeln!(out, r#"      <path stroke="black" d="M0,0V{}"/>"#, axis.length);
            for t in &axis.ticks {
                let _ = writeln!(
                    out,
                    r#"      <g class="tick" transform="translate(0, {})"><line stroke="black" x2="-{TICK_SIZE}"/><text x="-{}" dy="0.32em" text-anchor="end" font-size="10">{}</text></g>"#,
                    t.pos,
                    TICK_SIZE + 3.0,
                    escape(&t.label)
                );
            }
            let (lx, ly) = axis.label_anchor();
            let _ = writeln!(
                out,
                r#"      <text transform="rotate(-90)" x="{}" y="{}" fill="black" text-anchor="middle">{}</text>"#,
                -ly,
                lx - o,
                escape(&axis.label)
            );
        }
    }
    out.push_str("    </g>\n");
}

fn write_tooltip(out: &mut String, tooltip: &Tooltip) {
    let _ = write!(
        out,
        r#"  <div class="tooltip" style="opacity: {}; position: absolute; left: {}px; top: {}px; background-color: white; border: 1px solid #ccc; padding: 5px; font-size: 12px; pointer-events: none;">"#,
        if tooltip.visible { 1 } else { 0 },
        tooltip.left,
        tooltip.top
    );
    let lines: Vec<String> = tooltip.lines.iter().map(|l| escape(l)).collect();
    out.push_str(&lines.join("<br>"));
    out.push_str("</div>\n");
}

/// The container with surface, tooltip overlay and control panel, in mount order.
pub fn to_html(chart: &ChartRenderer) -> String {
    let mut out = String::new();
    let _ = writeln!(out, r#"<div id="{}" style="position: relative;">"#, escape(chart.container_id()));
    for line in to_svg(chart).lines() {
        let _ = writeln!(out, "  {line}");
    }
    write_tooltip(&mut out, chart.tooltip());

    out.push_str("  <div id=\"checkbox-container\" style=\"margin-top: 20px;\">\n");
    for entry in &chart.controls().entries {
        let _ = writeln!(
            out,
            concat!(
                r#"    <label style="display: inline-block; margin-right: 15px;">"#,
                r#"<input type="checkbox" value="{value}" id="{id}"{checked}>"#,
                r#"<span style="background-color: {color}; display: inline-block; width: 12px; height: 12px; margin-right: 5px; vertical-align: middle;"></span>"#,
                r#"<span style="vertical-align: middle;">{value}</span></label>"#
            ),
            value = escape(&entry.borough),
            id = escape(&entry.id),
            checked = if entry.checked { " checked" } else { "" },
            color = to_hex(entry.color),
        );
    }
    out.push_str("  </div>\n</div>\n");
    out
}
