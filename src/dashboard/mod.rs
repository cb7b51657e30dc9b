//! The reactive part of the dashboard.
//!
//! [`Dashboard`] owns a handle to the baseline [`Dataset`] and the count
//! tables derived from it once at construction. The callbacks map a widget
//! value to a brand new [`ChartDescription`] and keep no state between calls.

mod callbacks;
mod layout;

pub use callbacks::*;
pub use layout::{Layout, Section, Tab, Widget, WidgetOption};

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::aggregate::{count_by, count_selected_artists, top_n, AggregateRow, GroupField};
use crate::chart::{self, ChartDescription, ChartLabels};
use crate::dataset::Dataset;

pub const LOUDNESS_BINS: usize = 10;
pub const DEFAULT_ARTIST_OPTIONS: usize = 15;
pub const DASHBOARD_HEADING: &str = "Top 50 Songs Dashboard";

#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("Invalid selection for {control}: {reason}")]
    InvalidSelection {
        control: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DashboardVariant {
    /// Artist bar chart, loudness histogram and top 5 genres, no controls.
    Overview,
    /// Tabs with an artist checklist and a genre count selector.
    #[default]
    Interactive,
}

impl std::fmt::Display for DashboardVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardVariant::Overview => write!(f, "overview"),
            DashboardVariant::Interactive => write!(f, "interactive"),
        }
    }
}

/// How many genres the pie chart shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenreLimit {
    #[default]
    Top5,
    Top10,
}

impl GenreLimit {
    pub const ALL: [GenreLimit; 2] = [GenreLimit::Top5, GenreLimit::Top10];

    pub fn count(&self) -> usize {
        match self {
            GenreLimit::Top5 => 5,
            GenreLimit::Top10 => 10,
        }
    }
}

impl TryFrom<i64> for GenreLimit {
    type Error = DashboardError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(GenreLimit::Top5),
            10 => Ok(GenreLimit::Top10),
            other => Err(DashboardError::InvalidSelection {
                control: GENRE_COUNT_RADIO,
                reason: format!("top {} genres is not offered, expected 5 or 10", other),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardSettings {
    pub variant: DashboardVariant,
    pub artist_options: usize,
    pub subtitle: Option<String>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        DashboardSettings {
            variant: DashboardVariant::default(),
            artist_options: DEFAULT_ARTIST_OPTIONS,
            subtitle: None,
        }
    }
}

pub struct Dashboard {
    dataset: Arc<Dataset>,
    settings: DashboardSettings,
    artist_counts: Vec<AggregateRow>,
    genre_counts: Vec<AggregateRow>,
}

fn count_labels() -> ChartLabels {
    ChartLabels::new("Artist Name", "Count of Songs")
}

fn genre_labels() -> ChartLabels {
    ChartLabels::new("Genre", "Count")
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>, settings: DashboardSettings) -> Dashboard {
        let artist_counts = count_by(dataset.songs(), GroupField::Artist);
        let genre_counts = count_by(dataset.songs(), GroupField::Genre);
        Dashboard {
            dataset,
            settings,
            artist_counts,
            genre_counts,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn variant(&self) -> DashboardVariant {
        self.settings.variant
    }

    pub fn artist_counts(&self) -> &[AggregateRow] {
        &self.artist_counts
    }

    pub fn genre_counts(&self) -> &[AggregateRow] {
        &self.genre_counts
    }

    /// Artists offered by the checklist, most prolific first.
    pub fn artist_options(&self) -> Vec<String> {
        self.artist_counts
            .iter()
            .take(self.settings.artist_options)
            .map(|r| r.category.clone())
            .collect()
    }

    pub fn default_artist_selection(&self) -> Vec<String> {
        self.artist_counts
            .first()
            .map(|r| vec![r.category.clone()])
            .unwrap_or_default()
    }

    /// Line chart of the song counts for the selected artists. An empty
    /// selection gives a chart without points.
    pub fn update_artist_chart<S: AsRef<str>>(&self, selected_artists: &[S]) -> ChartDescription {
        let rows = count_selected_artists(&self.dataset, selected_artists);
        debug!(
            "Artist chart for {} selected artists, {} points",
            selected_artists.len(),
            rows.len()
        );
        chart::line(&rows, "Count of songs for selected artists", count_labels())
            .with_x_title_hidden()
    }

    /// Pie chart of the `top_n` most common genres, `top_n` must be 5 or 10.
    pub fn update_genre_chart(&self, top_n: i64) -> Result<ChartDescription, DashboardError> {
        let limit = GenreLimit::try_from(top_n)?;
        Ok(self.genre_chart(limit))
    }

    pub fn genre_chart(&self, limit: GenreLimit) -> ChartDescription {
        let rows = top_n(&self.genre_counts, limit.count());
        debug!("Genre chart for top {}, {} rows", limit.count(), rows.len());
        chart::pie(
            &rows,
            format!("Pie Chart of Top {} Genres by Count", limit.count()),
            genre_labels(),
        )
    }

    pub fn artist_count_chart(&self) -> ChartDescription {
        chart::bar(
            &self.artist_counts,
            "Count of songs for each artist name",
            count_labels(),
        )
        .with_x_title_hidden()
    }

    pub fn loudness_histogram(&self) -> ChartDescription {
        chart::histogram(
            &self.dataset.loudness_values(),
            LOUDNESS_BINS,
            "Histogram of Loudness (dB)",
            ChartLabels::new("Loudness (dB)", "Count"),
        )
    }

    /// Routes a widget change to the callback registered for its control.
    pub fn dispatch(&self, event: &SelectionEvent) -> Result<FigureUpdate, DashboardError> {
        let control = event.control();
        let figure = match event {
            SelectionEvent::ArtistChecklist(artists) => {
                self.update_artist_chart(artists.as_slice())
            }
            SelectionEvent::GenreCountRadio(top_n) => self.update_genre_chart(*top_n)?,
        };
        Ok(FigureUpdate {
            output: control.output(),
            figure,
        })
    }

    pub fn initial_figures(&self) -> Vec<Figure> {
        match self.settings.variant {
            DashboardVariant::Overview => vec![
                Figure {
                    id: ARTIST_COUNT_GRAPH,
                    figure: self.artist_count_chart(),
                },
                Figure {
                    id: LOUDNESS_HISTOGRAM_GRAPH,
                    figure: self.loudness_histogram(),
                },
                Figure {
                    id: TOP_5_GENRES_PIE_CHART,
                    figure: self.genre_chart(GenreLimit::Top5),
                },
            ],
            DashboardVariant::Interactive => vec![
                Figure {
                    id: ARTIST_COUNT_LINE_CHART,
                    figure: self.update_artist_chart(self.default_artist_selection().as_slice()),
                },
                Figure {
                    id: TOP_GENRES_PIE_CHART,
                    figure: self.genre_chart(GenreLimit::default()),
                },
            ],
        }
    }

    pub fn layout(&self) -> Layout {
        let variant = self.settings.variant;
        let heading = DASHBOARD_HEADING.to_string();
        let subtitle = self.settings.subtitle.clone();

        match variant {
            DashboardVariant::Overview => Layout {
                variant,
                heading,
                subtitle,
                selected_tab: None,
                sections: vec![Section {
                    tab: None,
                    widgets: vec![],
                    figures: vec![
                        ARTIST_COUNT_GRAPH,
                        LOUDNESS_HISTOGRAM_GRAPH,
                        TOP_5_GENRES_PIE_CHART,
                    ],
                }],
            },
            DashboardVariant::Interactive => {
                let artist_checklist = Widget::Checklist {
                    id: ARTIST_CHECKLIST,
                    label: "Select Artist(s):".to_string(),
                    options: self
                        .artist_options()
                        .into_iter()
                        .map(|artist| WidgetOption {
                            label: artist.clone(),
                            value: artist,
                        })
                        .collect(),
                    value: self.default_artist_selection(),
                };
                let genre_radio = Widget::RadioItems {
                    id: GENRE_COUNT_RADIO,
                    options: GenreLimit::ALL
                        .iter()
                        .map(|limit| WidgetOption {
                            label: format!("Show Top {} Genres", limit.count()),
                            value: limit.count() as i64,
                        })
                        .collect(),
                    value: GenreLimit::default().count() as i64,
                };

                Layout {
                    variant,
                    heading,
                    subtitle,
                    selected_tab: Some("tab-artist-count".to_string()),
                    sections: vec![
                        Section {
                            tab: Some(Tab {
                                label: "Artist Count".to_string(),
                                value: "tab-artist-count".to_string(),
                            }),
                            widgets: vec![artist_checklist],
                            figures: vec![ARTIST_COUNT_LINE_CHART],
                        },
                        Section {
                            tab: Some(Tab {
                                label: "Top 5 Genres".to_string(),
                                value: "tab-top-5-genres".to_string(),
                            }),
                            widgets: vec![genre_radio],
                            figures: vec![TOP_GENRES_PIE_CHART],
                        },
                    ],
                }
            }
        }
    }
}
