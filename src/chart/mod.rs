//! Declarative chart descriptions.
//!
//! A [`ChartDescription`] carries no behavior, it's serialized to JSON and
//! rendered by the page. Builders borrow their input and never reorder it.

use serde::Serialize;

use crate::aggregate::{bin_values, AggregateRow, HistogramBin};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Histogram,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLabels {
    pub x: String,
    pub y: String,
}

impl ChartLabels {
    pub fn new<X: Into<String>, Y: Into<String>>(x: X, y: Y) -> ChartLabels {
        ChartLabels {
            x: x.into(),
            y: y.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartData {
    Bar { x: Vec<String>, y: Vec<usize> },
    Line { x: Vec<String>, y: Vec<usize> },
    Pie { names: Vec<String>, values: Vec<usize> },
    Histogram { bins: Vec<HistogramBin> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescription {
    pub title: String,
    pub labels: ChartLabels,
    /// When false the x axis title is left blank.
    pub show_x_title: bool,
    pub data: ChartData,
}

impl ChartDescription {
    pub fn kind(&self) -> ChartKind {
        match self.data {
            ChartData::Bar { .. } => ChartKind::Bar,
            ChartData::Line { .. } => ChartKind::Line,
            ChartData::Pie { .. } => ChartKind::Pie,
            ChartData::Histogram { .. } => ChartKind::Histogram,
        }
    }

    /// Number of points (categories or bins) in the single series.
    pub fn point_count(&self) -> usize {
        match &self.data {
            ChartData::Bar { x, .. } | ChartData::Line { x, .. } => x.len(),
            ChartData::Pie { names, .. } => names.len(),
            ChartData::Histogram { bins } => bins.len(),
        }
    }

    /// (category, count) pairs for the categorical kinds, empty for histograms.
    pub fn points(&self) -> Vec<(String, usize)> {
        match &self.data {
            ChartData::Bar { x, y } | ChartData::Line { x, y } => {
                x.iter().cloned().zip(y.iter().copied()).collect()
            }
            ChartData::Pie { names, values } => {
                names.iter().cloned().zip(values.iter().copied()).collect()
            }
            ChartData::Histogram { .. } => Vec::new(),
        }
    }

    pub fn with_x_title_hidden(mut self) -> Self {
        self.show_x_title = false;
        self
    }
}

fn split_rows(rows: &[AggregateRow]) -> (Vec<String>, Vec<usize>) {
    rows.iter().map(|r| (r.category.clone(), r.count)).unzip()
}

pub fn bar<T: Into<String>>(
    rows: &[AggregateRow],
    title: T,
    labels: ChartLabels,
) -> ChartDescription {
    let (x, y) = split_rows(rows);
    ChartDescription {
        title: title.into(),
        labels,
        show_x_title: true,
        data: ChartData::Bar { x, y },
    }
}

pub fn line<T: Into<String>>(
    rows: &[AggregateRow],
    title: T,
    labels: ChartLabels,
) -> ChartDescription {
    let (x, y) = split_rows(rows);
    ChartDescription {
        title: title.into(),
        labels,
        show_x_title: true,
        data: ChartData::Line { x, y },
    }
}

pub fn pie<T: Into<String>>(
    rows: &[AggregateRow],
    title: T,
    labels: ChartLabels,
) -> ChartDescription {
    let (names, values) = split_rows(rows);
    ChartDescription {
        title: title.into(),
        labels,
        show_x_title: true,
        data: ChartData::Pie { names, values },
    }
}

pub fn histogram<T: Into<String>>(
    values: &[f64],
    bins: usize,
    title: T,
    labels: ChartLabels,
) -> ChartDescription {
    ChartDescription {
        title: title.into(),
        labels,
        show_x_title: true,
        data: ChartData::Histogram {
            bins: bin_values(values, bins),
        },
    }
}
