// File: crates/linechart-core/src/chart.rs
// Summary: Chart model and the frame-building pipeline (lines, markers, labels, guides, tooltip).

use crate::axis::AxisBounds;
use crate::error::ChartError;
use crate::frame::{Anchor, Frame, GuideLine, Marker, Polyline, TextLabel, Tooltip};
use crate::grid::{tick_position, tick_values};
use crate::interact::{InteractionState, PointerEvent};
use crate::scale::{NormalizedSeries, Scale};
use crate::series::{DataSet, Series};
use crate::theme::Theme;
use crate::types::{
    PlotArea, GUIDE_RIGHT, GUIDE_TOP, GUIDE_X, LABEL_FONT_SIZE, MARKER_RADIUS,
    MARKER_RADIUS_HOVER, STROKE_WIDTH, STROKE_WIDTH_ACTIVE, TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y,
    X_LABEL_OFFSET, X_LABEL_SPAN, X_LABEL_Y, X_TICK_COUNT, Y_LABEL_SPAN, Y_LABEL_X, Y_TICK_COUNT,
};

/// One chart: a data set, the plot geometry, and the interaction state.
///
/// All work is synchronous and re-executed per render; `render` is a pure
/// function of the data set and the interaction state.
pub struct Chart {
    dataset: DataSet,
    plot: PlotArea,
    theme: Theme,
    state: InteractionState,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            dataset: DataSet::new(),
            plot: PlotArea::default(),
            theme: Theme::default(),
            state: InteractionState::new(),
        }
    }

    pub fn with_plot(mut self, plot: PlotArea) -> Self {
        self.plot = plot;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.dataset.push(series);
    }

    /// Replace the whole data set. A full data refresh resets the
    /// interaction state.
    pub fn set_data(&mut self, dataset: DataSet) {
        self.dataset = dataset;
        self.state.reset();
    }

    pub fn dataset(&self) -> &DataSet {
        &self.dataset
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Route one pointer event into the interaction state. Stale indices
    /// are dropped first so the event applies against the current data.
    pub fn handle_event(&mut self, event: PointerEvent) {
        self.state.reconcile(self.dataset.len());
        self.state.handle(event);
    }

    /// Build the draw-order frame for the current data and state.
    ///
    /// An empty data set renders the two guide lines and nothing else.
    /// Degenerate bounds (max_x = 1 or max_y = 0) are an error: no frame
    /// is produced rather than one full of non-finite positions.
    pub fn render(&self) -> Result<Frame, ChartError> {
        let mut frame = Frame::default();
        frame.guides = vec![
            GuideLine { x1: GUIDE_X, y1: GUIDE_TOP, x2: GUIDE_X, y2: self.plot.height },
            GuideLine { x1: GUIDE_X, y1: self.plot.height, x2: GUIDE_RIGHT, y2: self.plot.height },
        ];

        let Some(bounds) = AxisBounds::scan(&self.dataset) else {
            return Ok(frame);
        };
        let scale = Scale::from_bounds(bounds, self.plot)?;

        let normalized: Vec<NormalizedSeries> = self
            .dataset
            .iter()
            .map(|s| NormalizedSeries {
                name: s.name.clone(),
                points: s.points.iter().map(|&p| scale.apply(p)).collect(),
            })
            .collect();

        // Guard against state left over from an out-of-band data change.
        let mut state = self.state;
        state.reconcile(self.dataset.len());

        frame.lines = self.build_lines(&normalized, state.active_series);
        frame.markers = self.build_markers(&normalized, &state);
        frame.labels = build_labels(bounds, self.plot.height);
        frame.tooltip = self.build_tooltip(&normalized, &state);
        Ok(frame)
    }

    /// One polyline per series, y flipped into screen-down space, with the
    /// active series (if any) moved to the end of the list so it paints on
    /// top. Relative order among the remaining series is untouched.
    fn build_lines(
        &self,
        normalized: &[NormalizedSeries],
        active: Option<usize>,
    ) -> Vec<Polyline> {
        let mut lines: Vec<Polyline> = normalized
            .iter()
            .enumerate()
            .map(|(i, ns)| {
                let is_active = active == Some(i);
                Polyline {
                    series: i,
                    points: ns
                        .points
                        .iter()
                        .map(|p| (p.screen_x, self.plot.height - p.screen_y))
                        .collect(),
                    color: self.theme.series_color(i),
                    stroke_width: if is_active { STROKE_WIDTH_ACTIVE } else { STROKE_WIDTH },
                    active: is_active,
                }
            })
            .collect();

        if let Some(i) = active {
            if let Some(pos) = lines.iter().position(|l| l.series == i) {
                let promoted = lines.remove(pos);
                lines.push(promoted);
            }
        }
        lines
    }

    /// Circular markers flattened across all series, in insertion order
    /// (markers are never z-reordered). The hovered marker, and only it,
    /// gets the enlarged radius.
    fn build_markers(
        &self,
        normalized: &[NormalizedSeries],
        state: &InteractionState,
    ) -> Vec<Marker> {
        let mut markers = Vec::new();
        for (si, ns) in normalized.iter().enumerate() {
            let color = self.theme.series_color(si);
            for (pi, p) in ns.points.iter().enumerate() {
                let hovered = state
                    .hovered
                    .is_some_and(|h| h.series == si && h.point == pi);
                markers.push(Marker {
                    series: si,
                    point: pi,
                    x: p.screen_x,
                    y: self.plot.height - p.screen_y,
                    radius: if hovered { MARKER_RADIUS_HOVER } else { MARKER_RADIUS },
                    color,
                });
            }
        }
        markers
    }

    /// Tooltip content is derived from state on every render. The label
    /// shows the hovered point's screen-space coordinates, not the raw
    /// data values.
    fn build_tooltip(
        &self,
        normalized: &[NormalizedSeries],
        state: &InteractionState,
    ) -> Option<Tooltip> {
        let h = state.hovered?;
        let p = normalized.get(h.series)?.points.get(h.point)?;
        Some(Tooltip {
            x: h.pointer_x + TOOLTIP_OFFSET_X,
            y: h.pointer_y + TOOLTIP_OFFSET_Y,
            text: format!("x: {}, y: {}", p.screen_x, p.screen_y),
        })
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

/// Tick labels for both axes: Y right-anchored down the label column,
/// X middle-anchored along the plot floor.
fn build_labels(bounds: AxisBounds, plot_height: f64) -> Vec<TextLabel> {
    let mut labels = Vec::with_capacity(Y_TICK_COUNT + X_TICK_COUNT);
    for value in tick_values(bounds.max_y, Y_TICK_COUNT) {
        labels.push(TextLabel {
            x: Y_LABEL_X,
            y: plot_height - tick_position(value, bounds.max_y, Y_LABEL_SPAN),
            text: format!("{value}"),
            anchor: Anchor::End,
            font_size: LABEL_FONT_SIZE,
        });
    }
    for value in tick_values(bounds.max_x, X_TICK_COUNT) {
        labels.push(TextLabel {
            x: tick_position(value, bounds.max_x, X_LABEL_SPAN) + X_LABEL_OFFSET,
            y: X_LABEL_Y,
            text: format!("{value}"),
            anchor: Anchor::Middle,
            font_size: LABEL_FONT_SIZE,
        });
    }
    labels
}
