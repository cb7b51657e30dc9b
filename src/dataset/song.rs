use serde::{Deserialize, Serialize};

/// A single row of the Top 50 table.
///
/// Only the artist, the genre and the loudness are required, the remaining
/// descriptive columns are kept when the source provides them.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Song {
    #[serde(rename = "Track.Name", default)]
    pub track_name: Option<String>,

    #[serde(rename = "Artist.Name")]
    pub artist_name: String,

    #[serde(rename = "Genre")]
    pub genre: String,

    #[serde(rename = "Beats.Per.Minute", default)]
    pub beats_per_minute: Option<f64>,

    #[serde(rename = "Energy", default)]
    pub energy: Option<f64>,

    #[serde(rename = "Danceability", default)]
    pub danceability: Option<f64>,

    #[serde(rename = "Loudness..dB..")]
    pub loudness_db: f64,

    #[serde(rename = "Liveness", default)]
    pub liveness: Option<f64>,

    #[serde(rename = "Valence.", default)]
    pub valence: Option<f64>,

    #[serde(rename = "Length.", default)]
    pub length_sec: Option<f64>,

    #[serde(rename = "Acousticness..", default)]
    pub acousticness: Option<f64>,

    #[serde(rename = "Speechiness.", default)]
    pub speechiness: Option<f64>,

    #[serde(rename = "Popularity", default)]
    pub popularity: Option<f64>,
}

impl Song {
    /// Minimal constructor, mostly useful to build datasets in tests.
    pub fn new<A: Into<String>, G: Into<String>>(
        artist_name: A,
        genre: G,
        loudness_db: f64,
    ) -> Song {
        Song {
            track_name: None,
            artist_name: artist_name.into(),
            genre: genre.into(),
            beats_per_minute: None,
            energy: None,
            danceability: None,
            loudness_db,
            liveness: None,
            valence: None,
            length_sec: None,
            acousticness: None,
            speechiness: None,
            popularity: None,
        }
    }
}
