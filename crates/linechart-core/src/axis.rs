// File: crates/linechart-core/src/axis.rs
// Summary: Axis bounds discovered by scanning the raw data.

use crate::series::DataSet;

/// Upper reference values for both axes. Minima are fixed at 0: the model
/// covers the non-negative quadrant only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub max_x: f64,
    pub max_y: f64,
}

impl AxisBounds {
    /// Scan every point of every series for the axis maxima.
    /// Returns None for an empty data set (or one with no points at all).
    pub fn scan(dataset: &DataSet) -> Option<Self> {
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        let mut any = false;
        for s in dataset.iter() {
            for p in &s.points {
                max_x = max_x.max(p.x);
                max_y = max_y.max(p.y);
                any = true;
            }
        }
        if any { Some(Self { max_x, max_y }) } else { None }
    }
}
