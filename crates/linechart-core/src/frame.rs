// File: crates/linechart-core/src/frame.rs
// Summary: Backend-agnostic draw primitives and the per-render frame.

use crate::theme::Color;

/// One stroked open polyline, screen coordinates, already flipped so y
/// grows downward. `series` is the source index into the data set.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub series: usize,
    pub points: Vec<(f64, f64)>,
    pub color: Color,
    pub stroke_width: f64,
    pub active: bool,
}

/// One filled circular marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub series: usize,
    pub point: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

/// Text anchoring relative to the label position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// One axis tick label.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: Anchor,
    pub font_size: f64,
}

/// One straight axis guide line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Tooltip overlay, already offset from the pointer position.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Everything one render cycle produces, in draw order: lines first
/// (active series last within them), then markers, labels, guides, and
/// the optional tooltip overlay on top.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub lines: Vec<Polyline>,
    pub markers: Vec<Marker>,
    pub labels: Vec<TextLabel>,
    pub guides: Vec<GuideLine>,
    pub tooltip: Option<Tooltip>,
}
