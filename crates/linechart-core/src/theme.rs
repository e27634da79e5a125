// File: crates/linechart-core/src/theme.rs
// Summary: Colors and the positional series palette.

use std::fmt;

/// Opaque RGB color; displays as "#RRGGBB".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Chart colors. The series palette is positional: a series at index `i`
/// draws with `palette[i % palette.len()]`, so reordering the data set
/// reorders the colors.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub palette: &'static [Color],
    pub axis_line: Color,
    pub label: Color,
}

const LIGHT_PALETTE: &[Color] = &[
    Color::new(0xFF, 0x57, 0x33),
    Color::new(0x42, 0x87, 0xF5),
    Color::new(0xA9, 0xA9, 0xA9),
];

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            palette: LIGHT_PALETTE,
            axis_line: Color::new(0, 0, 0),
            label: Color::new(0, 0, 0),
        }
    }

    /// Color for the series at `index` in insertion order.
    pub fn series_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
