use serde::{Deserialize, Serialize};

use crate::chart::ChartDescription;

pub const ARTIST_CHECKLIST: &str = "artist-checklist";
pub const GENRE_COUNT_RADIO: &str = "genre-count-radio";

pub const ARTIST_COUNT_GRAPH: &str = "artist-count-graph";
pub const LOUDNESS_HISTOGRAM_GRAPH: &str = "loudness-histogram-graph";
pub const TOP_5_GENRES_PIE_CHART: &str = "top-5-genres-pie-chart";
pub const ARTIST_COUNT_LINE_CHART: &str = "artist-count-line-chart";
pub const TOP_GENRES_PIE_CHART: &str = "top-genres-pie-chart";

/// An interactive widget. Each control feeds exactly one figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Control {
    ArtistChecklist,
    GenreCountRadio,
}

impl Control {
    pub const ALL: [Control; 2] = [Control::ArtistChecklist, Control::GenreCountRadio];

    pub fn id(&self) -> &'static str {
        match self {
            Control::ArtistChecklist => ARTIST_CHECKLIST,
            Control::GenreCountRadio => GENRE_COUNT_RADIO,
        }
    }

    pub fn output(&self) -> &'static str {
        match self {
            Control::ArtistChecklist => ARTIST_COUNT_LINE_CHART,
            Control::GenreCountRadio => TOP_GENRES_PIE_CHART,
        }
    }
}

/// A widget value change, as posted by the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "control", content = "value", rename_all = "kebab-case")]
pub enum SelectionEvent {
    ArtistChecklist(Vec<String>),
    GenreCountRadio(i64),
}

impl SelectionEvent {
    pub fn control(&self) -> Control {
        match self {
            SelectionEvent::ArtistChecklist(_) => Control::ArtistChecklist,
            SelectionEvent::GenreCountRadio(_) => Control::GenreCountRadio,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub id: &'static str,
    pub figure: ChartDescription,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureUpdate {
    pub output: &'static str,
    pub figure: ChartDescription,
}
