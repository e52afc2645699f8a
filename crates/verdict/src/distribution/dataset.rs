//! Chart-ready datasets.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// One bar, slice or grouped-bar segment.
///
/// Single-series charts (pies, the case bar chart) repeat the label in both
/// fields so each bar gets its own colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// X-axis label (or slice label).
    pub dimension: String,
    /// Colour/legend group.
    pub series: String,
    pub count: usize,
}

impl ChartPoint {
    pub fn new(dimension: impl Into<String>, series: impl Into<String>, count: usize) -> Self {
        Self {
            dimension: dimension.into(),
            series: series.into(),
            count,
        }
    }

    /// A point whose series is its own label.
    pub fn single(label: impl Into<String>, count: usize) -> Self {
        let label = label.into();
        Self::new(label.clone(), label, count)
    }
}

/// Ordered (dimension, series, count) triples for one chart.
///
/// An empty dataset means the chart is unavailable for the supplied tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartDataset {
    points: Vec<ChartPoint>,
}

impl ChartDataset {
    pub fn new(points: Vec<ChartPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.points.iter().map(|p| p.count).sum()
    }

    /// Count for a (dimension, series) pair, if present.
    pub fn count(&self, dimension: &str, series: &str) -> Option<usize> {
        self.points
            .iter()
            .find(|p| p.dimension == dimension && p.series == series)
            .map(|p| p.count)
    }

    /// Distinct dimension labels in first-appearance order.
    pub fn dimensions(&self) -> Vec<&str> {
        let labels: IndexSet<&str> = self.points.iter().map(|p| p.dimension.as_str()).collect();
        labels.into_iter().collect()
    }

    /// Distinct series labels in first-appearance order.
    pub fn series(&self) -> Vec<&str> {
        let labels: IndexSet<&str> = self.points.iter().map(|p| p.series.as_str()).collect();
        labels.into_iter().collect()
    }
}

impl FromIterator<ChartPoint> for ChartDataset {
    fn from_iter<I: IntoIterator<Item = ChartPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ChartDataset {
    type Item = &'a ChartPoint;
    type IntoIter = std::slice::Iter<'a, ChartPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
