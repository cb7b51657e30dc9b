//! The baseline song table.
//!
//! A [`Dataset`] is built once at startup, either from a remote CSV or from a
//! local file, and then shared read-only behind an `Arc`.

mod load;
mod song;

pub use load::{decode_latin1, load_dataset, DataSource, DatasetError, REQUIRED_COLUMNS};
pub use song::Song;

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    songs: Vec<Song>,
}

impl Dataset {
    pub fn new(songs: Vec<Song>) -> Dataset {
        Dataset { songs }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn loudness_values(&self) -> Vec<f64> {
        self.songs.iter().map(|s| s.loudness_db).collect()
    }

    pub fn distinct_artists_count(&self) -> usize {
        self.songs
            .iter()
            .map(|s| s.artist_name.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn distinct_genres_count(&self) -> usize {
        self.songs
            .iter()
            .map(|s| s.genre.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

impl FromIterator<Song> for Dataset {
    fn from_iter<T: IntoIterator<Item = Song>>(iter: T) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}
