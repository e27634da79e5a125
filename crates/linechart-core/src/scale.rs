// File: crates/linechart-core/src/scale.rs
// Summary: Linear coordinate mapper from data space into canvas pixel space.

use crate::axis::AxisBounds;
use crate::error::ChartError;
use crate::series::{DataSet, Point};
use crate::types::PlotArea;

/// A point rescaled into canvas pixel space. Still "y grows upward":
/// the vertical flip happens at draw time, not here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedPoint {
    pub screen_x: f64,
    pub screen_y: f64,
}

/// A series name paired with its normalized points, same count and order
/// as the source series.
#[derive(Clone, Debug)]
pub struct NormalizedSeries {
    pub name: String,
    pub points: Vec<NormalizedPoint>,
}

/// Linear scale factors for one render cycle.
///
/// The x divisor is `max_x - 1`, not `max_x`: x values are treated as
/// 1-based sample indices, so the first sample lands one x-unit inset
/// from the axis origin. This convention is deliberate and load-bearing.
#[derive(Clone, Copy, Debug)]
pub struct Scale {
    x_factor: f64,
    y_factor: f64,
    axis_margin: f64,
}

impl Scale {
    /// Build the scale, failing fast when the bounds are degenerate
    /// (max_x = 1 or max_y = 0, or non-finite maxima) rather than letting
    /// NaN/infinite positions leak into the draw list.
    pub fn from_bounds(bounds: AxisBounds, plot: PlotArea) -> Result<Self, ChartError> {
        let x_factor = plot.width / (bounds.max_x - 1.0);
        let y_factor = plot.height / bounds.max_y;
        if !x_factor.is_finite() || !y_factor.is_finite() {
            return Err(ChartError::DegenerateBounds {
                max_x: bounds.max_x,
                max_y: bounds.max_y,
            });
        }
        Ok(Self { x_factor, y_factor, axis_margin: plot.axis_margin })
    }

    /// Rescale one raw point. Pure; no flip.
    #[inline]
    pub fn apply(&self, p: Point) -> NormalizedPoint {
        NormalizedPoint {
            screen_x: p.x * self.x_factor + self.axis_margin,
            screen_y: p.y * self.y_factor,
        }
    }
}

/// Normalize every series of the data set into pixel space.
///
/// Deterministic and side-effect free; must be re-run whenever the source
/// data set changes. An empty data set yields an empty result (a valid
/// minimal render), while degenerate bounds are an error.
pub fn normalize(dataset: &DataSet, plot: PlotArea) -> Result<Vec<NormalizedSeries>, ChartError> {
    let Some(bounds) = AxisBounds::scan(dataset) else {
        return Ok(Vec::new());
    };
    let scale = Scale::from_bounds(bounds, plot)?;
    Ok(dataset
        .iter()
        .map(|s| NormalizedSeries {
            name: s.name.clone(),
            points: s.points.iter().map(|&p| scale.apply(p)).collect(),
        })
        .collect())
}
