//! Generic `{labels, datasets}` shape consumed by every chart adapter.

use serde::{Deserialize, Serialize};

/// Border and fill colours of one dataset.
///
/// `background` holds either a single colour applied to every point or a
/// palette that is reused cyclically by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesColors {
    pub border: Option<String>,
    pub background: Vec<String>,
}

impl SeriesColors {
    pub fn line(border: &str, fill: &str) -> Self {
        Self {
            border: Some(border.to_string()),
            background: vec![fill.to_string()],
        }
    }

    pub fn fill(fill: &str) -> Self {
        Self {
            border: None,
            background: vec![fill.to_string()],
        }
    }

    pub fn palette(colors: &[&str]) -> Self {
        Self {
            border: None,
            background: colors.iter().map(|color| color.to_string()).collect(),
        }
    }

    /// Fill colour of the point at `index`, cycling through the palette.
    pub fn background_at(&self, index: usize) -> Option<&str> {
        if self.background.is_empty() {
            return None;
        }
        self.background
            .get(index % self.background.len())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub colors: SeriesColors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSeries {
    /// Every dataset has exactly one value per label.
    pub fn is_aligned(&self) -> bool {
        self.datasets
            .iter()
            .all(|dataset| dataset.data.len() == self.labels.len())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Largest absolute value across all datasets, `0.0` when empty.
    pub fn max_magnitude(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|dataset| dataset.data.iter())
            .fold(0.0_f64, |acc, value| acc.max(value.abs()))
    }
}

/// Builds a [`ChartSeries`] whose labels and datasets are all projected from
/// the same row slice, which keeps `labels[i]` and `data[i]` paired.
pub struct SeriesBuilder<'a, R> {
    rows: &'a [R],
    labels: Vec<String>,
    datasets: Vec<Dataset>,
}

impl<'a, R> SeriesBuilder<'a, R> {
    pub fn new(rows: &'a [R], label: impl Fn(&R) -> String) -> Self {
        Self {
            rows,
            labels: rows.iter().map(label).collect(),
            datasets: Vec::new(),
        }
    }

    pub fn dataset(
        mut self,
        label: &str,
        value: impl Fn(&R) -> f64,
        colors: SeriesColors,
    ) -> Self {
        self.datasets.push(Dataset {
            label: label.to_string(),
            data: self.rows.iter().map(value).collect(),
            colors,
        });
        self
    }

    /// `None` when there were no rows, so callers render an empty state
    /// instead of an empty chart.
    pub fn build(self) -> Option<ChartSeries> {
        if self.rows.is_empty() {
            return None;
        }
        Some(ChartSeries {
            labels: self.labels,
            datasets: self.datasets,
        })
    }
}
