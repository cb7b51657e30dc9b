//! Grouping and counting over the song table.
//!
//! Every function here is pure, the input is never mutated and a new
//! sequence is returned on each call. Count tables are ordered by count
//! descending, ties keep the order in which the category first appears in
//! the source table.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::dataset::{Dataset, Song};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Artist,
    Genre,
}

impl GroupField {
    fn value_of<'a>(&self, song: &'a Song) -> &'a str {
        match self {
            GroupField::Artist => &song.artist_name,
            GroupField::Genre => &song.genre,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateRow {
    pub category: String,
    pub count: usize,
}

impl AggregateRow {
    pub fn new<S: Into<String>>(category: S, count: usize) -> AggregateRow {
        AggregateRow {
            category: category.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

pub fn count_by<'a, I>(songs: I, field: GroupField) -> Vec<AggregateRow>
where
    I: IntoIterator<Item = &'a Song>,
{
    let mut rows: Vec<AggregateRow> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for song in songs {
        let category = field.value_of(song);
        match positions.get(category) {
            Some(&index) => rows[index].count += 1,
            None => {
                positions.insert(category, rows.len());
                rows.push(AggregateRow::new(category, 1));
            }
        }
    }

    // sort_by is stable, equal counts stay in first-seen order
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Counts songs per artist, restricted to `selected`. An empty selection
/// yields an empty table.
pub fn count_selected_artists<S: AsRef<str>>(
    dataset: &Dataset,
    selected: &[S],
) -> Vec<AggregateRow> {
    if selected.is_empty() {
        return Vec::new();
    }
    let selected: HashSet<&str> = selected.iter().map(|s| s.as_ref()).collect();
    count_by(
        dataset
            .songs()
            .iter()
            .filter(|song| selected.contains(song.artist_name.as_str())),
        GroupField::Artist,
    )
}

/// First `n` rows of an already sorted count table.
pub fn top_n(rows: &[AggregateRow], n: usize) -> Vec<AggregateRow> {
    rows.iter().take(n).cloned().collect()
}

/// Splits the finite `values` into `bins` equal-width bins spanning the
/// observed minimum and maximum. The maximum belongs to the last bin.
pub fn bin_values(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        min -= 0.5;
        max += 0.5;
    }
    let width = (max - min) / bins as f64;

    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: min + width * i as f64,
            end: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for value in finite {
        let index = (((value - min) / width).floor() as usize).min(bins - 1);
        out[index].count += 1;
    }
    out
}
