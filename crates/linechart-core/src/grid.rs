// File: crates/linechart-core/src/grid.rs
// Summary: Tick value generation and label positioning helpers.

/// Generate `count` tick label values over [0, max]: equal steps floored
/// to integers, then floored again to the nearest lower multiple of 5.
///
/// The rounding is coarse by design (down, not to nearest) and can repeat
/// adjacent values when the range is small; duplicates are accepted.
pub fn tick_values(max: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![0.0];
    }
    (0..count)
        .map(|i| {
            let value = (i as f64 * max / (count as f64 - 1.0)).floor();
            (value / 5.0).floor() * 5.0
        })
        .collect()
}

/// Pixel offset of a tick value along an axis span, with the axis minimum
/// fixed at 0.
#[inline]
pub fn tick_position(value: f64, max: f64, span: f64) -> f64 {
    value / max * span
}
