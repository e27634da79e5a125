// File: crates/linechart-core/src/series.rs
// Summary: Data model: points, named series, and the insertion-ordered data set.

/// A single raw data sample. Immutable once produced by the provider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A named, ordered sequence of points. Order defines the path drawing
/// order along x.
#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), points: Vec::new() }
    }

    pub fn with_points(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self { name: name.into(), points }
    }

    /// Build a series from raw (x, y) pairs.
    pub fn from_pairs(name: impl Into<String>, pairs: Vec<(f64, f64)>) -> Self {
        let points = pairs.into_iter().map(|(x, y)| Point::new(x, y)).collect();
        Self::with_points(name, points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// An ordered collection of series. Insertion order defines the default
/// z-order and the positional color assignment.
#[derive(Clone, Debug, Default)]
pub struct DataSet {
    series: Vec<Series>,
}

impl DataSet {
    pub fn new() -> Self {
        Self { series: Vec::new() }
    }

    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }
}

impl FromIterator<Series> for DataSet {
    fn from_iter<I: IntoIterator<Item = Series>>(iter: I) -> Self {
        Self { series: iter.into_iter().collect() }
    }
}

/// Boundary trait for whatever supplies the data (sampler, file loader,
/// random generator in the demo). One call yields one complete data set
/// for a render cycle.
pub trait DataSource {
    fn dataset(&mut self) -> DataSet;
}
