// File: crates/linechart-core/src/types.rs
// Summary: Shared layout constants and the plot-area descriptor.

/// Logical drawing-surface width, in drawing units.
pub const CANVAS_WIDTH: f64 = 800.0;
/// Logical drawing-surface height, in drawing units.
pub const CANVAS_HEIGHT: f64 = 400.0;

/// Horizontal extent of the plot area (the span normalized x values cover).
pub const PLOT_WIDTH: f64 = 600.0;
/// Vertical extent of the plot area (the span normalized y values cover).
pub const PLOT_HEIGHT: f64 = 200.0;
/// Left inset applied to every normalized x coordinate.
pub const AXIS_MARGIN: f64 = 60.0;

/// Tick label counts per axis.
pub const Y_TICK_COUNT: usize = 10;
pub const X_TICK_COUNT: usize = 25;

/// Marker radius at rest and while hovered.
pub const MARKER_RADIUS: f64 = 6.0;
pub const MARKER_RADIUS_HOVER: f64 = 8.0;

/// Line stroke widths for inactive and active series.
pub const STROKE_WIDTH: f64 = 2.0;
pub const STROKE_WIDTH_ACTIVE: f64 = 3.0;

/// Tooltip overlay offset from the pointer position.
pub const TOOLTIP_OFFSET_X: f64 = 10.0;
pub const TOOLTIP_OFFSET_Y: f64 = -30.0;

/// Static axis guide lines: vertical at x=30, horizontal along the plot floor.
pub const GUIDE_X: f64 = 30.0;
pub const GUIDE_TOP: f64 = -100.0;
pub const GUIDE_RIGHT: f64 = 700.0;

/// Axis label layout: anchor columns/rows, pixel spans, font size.
pub const Y_LABEL_X: f64 = 20.0;
pub const Y_LABEL_SPAN: f64 = 260.0;
pub const X_LABEL_SPAN: f64 = 660.0;
pub const X_LABEL_OFFSET: f64 = 30.0;
pub const X_LABEL_Y: f64 = 220.0;
pub const LABEL_FONT_SIZE: f64 = 12.0;

/// Plot-area dimensions fed to the coordinate mapper.
/// Contract: all fields are positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub axis_margin: f64,
}

impl PlotArea {
    pub const fn new(width: f64, height: f64, axis_margin: f64) -> Self {
        Self { width, height, axis_margin }
    }
}

impl Default for PlotArea {
    fn default() -> Self {
        Self::new(PLOT_WIDTH, PLOT_HEIGHT, AXIS_MARGIN)
    }
}
