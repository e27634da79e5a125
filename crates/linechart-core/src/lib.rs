// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and frame building.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod scale;
pub mod frame;
pub mod interact;
pub mod theme;
pub mod error;

pub use chart::Chart;
pub use series::{Point, Series, DataSet, DataSource};
pub use axis::AxisBounds;
pub use scale::{Scale, NormalizedPoint, NormalizedSeries, normalize};
pub use frame::{Frame, Polyline, Marker, TextLabel, Anchor, GuideLine, Tooltip};
pub use interact::{InteractionState, HoverPoint, PointerEvent};
pub use theme::{Color, Theme};
pub use types::PlotArea;
pub use error::ChartError;
