// File: crates/linechart-core/src/interact.rs
// Summary: First-class interaction state: active-series selection and point hover.

/// The point currently under the pointer. Carries only indices and the
/// absolute pointer position; tooltip text and marker radius are derived
/// from this during frame construction, never stored on a primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverPoint {
    pub series: usize,
    pub point: usize,
    pub pointer_x: f64,
    pub pointer_y: f64,
}

/// Pointer events the host surface forwards to the chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Click on a line or marker of the given series. Selects it
    /// unconditionally; re-clicking the selected series does not toggle
    /// it off.
    Click { series: usize },
    /// Pointer entered a marker.
    PointerEnter { series: usize, point: usize, pointer_x: f64, pointer_y: f64 },
    /// Pointer left the hovered marker.
    PointerLeave,
}

/// Selection and hover are independent concerns and stay independent
/// fields. Owned exclusively by the chart; the mapper and the frame
/// builder only read it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionState {
    pub active_series: Option<usize>,
    pub hovered: Option<HoverPoint>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one pointer event. Events are handled one at a time in
    /// arrival order; each mutation is followed by a full re-render on
    /// the caller's side.
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Click { series } => {
                self.active_series = Some(series);
            }
            PointerEvent::PointerEnter { series, point, pointer_x, pointer_y } => {
                self.hovered = Some(HoverPoint { series, point, pointer_x, pointer_y });
            }
            PointerEvent::PointerLeave => {
                self.hovered = None;
            }
        }
    }

    /// Drop references that no longer point into the current data set.
    /// Called before a render whenever the data may have changed shape.
    pub fn reconcile(&mut self, series_count: usize) {
        if self.active_series.is_some_and(|i| i >= series_count) {
            self.active_series = None;
        }
        if self.hovered.is_some_and(|h| h.series >= series_count) {
            self.hovered = None;
        }
    }

    /// Full reset, used on every data refresh.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
