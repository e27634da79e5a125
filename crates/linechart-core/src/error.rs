// File: crates/linechart-core/src/error.rs
// Summary: Typed errors for the rendering pipeline.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ChartError {
    /// The observed bounds yield a non-finite scale factor (max_x = 1 or
    /// max_y = 0, or non-finite input coordinates). Rendering must not
    /// proceed: the mapper would emit NaN/infinite screen positions.
    #[error("degenerate axis bounds (max_x = {max_x}, max_y = {max_y}): scale factors are not finite")]
    DegenerateBounds { max_x: f64, max_y: f64 },
}
