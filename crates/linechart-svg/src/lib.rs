// File: crates/linechart-svg/src/lib.rs
// Summary: SVG serialization of a draw frame (paths, circles, text, guide lines, tooltip).

use std::fmt::Write;

use linechart_core::frame::{Anchor, Frame};
use linechart_core::types::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Serialize a frame into a standalone SVG document at the default
/// 800x400 logical canvas size.
pub fn frame_to_svg(frame: &Frame) -> String {
    frame_to_svg_sized(frame, CANVAS_WIDTH, CANVAS_HEIGHT)
}

/// Serialize a frame into a standalone SVG document.
///
/// Primitives are emitted in the frame's draw order, so later elements
/// paint on top: lines, markers, labels, guides, then the tooltip.
pub fn frame_to_svg_sized(frame: &Frame, width: f64, height: f64) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" style="overflow: visible">"#
    );

    for line in &frame.lines {
        let mut d = String::new();
        for (i, (x, y)) in line.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{}{},{} ", cmd, x, y);
        }
        let class = if line.active { r#" class="active""# } else { "" };
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}"{} />"#,
            d.trim_end(),
            line.color,
            line.stroke_width,
            class,
        );
    }

    for m in &frame.markers {
        let _ = writeln!(
            svg,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}" />"#,
            m.x, m.y, m.radius, m.color,
        );
    }

    for label in &frame.labels {
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-size="{}" text-anchor="{}">{}</text>"#,
            label.x,
            label.y,
            label.font_size,
            anchor_attr(label.anchor),
            label.text,
        );
    }

    for g in &frame.guides {
        let _ = writeln!(
            svg,
            r##"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#000" />"##,
            g.x1, g.y1, g.x2, g.y2,
        );
    }

    if let Some(tip) = &frame.tooltip {
        let _ = writeln!(
            svg,
            r#"  <text class="tooltip" x="{}" y="{}">{}</text>"#,
            tip.x, tip.y, tip.text,
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn anchor_attr(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}
