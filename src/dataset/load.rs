use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{info, warn};

use super::{Dataset, Song};

pub const REQUIRED_COLUMNS: [&str; 3] = ["Artist.Name", "Genre", "Loudness..dB.."];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Fetching {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column \"{0}\"")]
    MissingColumn(&'static str),
}

/// Where the CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl From<&str> for DataSource {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Url(trimmed.to_owned())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }
}

impl FromStr for DataSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DataSource::from(s))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// ISO-8859-1 decoding, each byte is the code point with the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

async fn fetch_bytes(url: &str, timeout: Duration) -> Result<Vec<u8>, DatasetError> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|source| DatasetError::Fetch {
            url: url.to_owned(),
            source,
        })?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| DatasetError::Fetch {
            url: url.to_owned(),
            source,
        })?;

    if !response.status().is_success() {
        return Err(DatasetError::HttpStatus {
            url: url.to_owned(),
            status: response.status().as_u16(),
        });
    }

    let bytes = response.bytes().await.map_err(|source| DatasetError::Fetch {
        url: url.to_owned(),
        source,
    })?;
    Ok(bytes.to_vec())
}

impl Dataset {
    /// Parses Latin-1 encoded CSV bytes. A header row is required. Only the
    /// header names are trimmed, field values are kept as written.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Dataset, DatasetError> {
        let text = decode_latin1(bytes);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn(column));
            }
        }

        let songs = reader
            .deserialize::<Song>()
            .collect::<Result<Vec<Song>, csv::Error>>()?;
        Ok(Dataset::new(songs))
    }
}

/// Loads the baseline dataset. Any failure here is meant to abort startup.
pub async fn load_dataset(source: &DataSource, timeout: Duration) -> Result<Dataset, DatasetError> {
    info!("Loading songs from {}...", source);
    let bytes = match source {
        DataSource::Url(url) => fetch_bytes(url, timeout).await?,
        DataSource::File(path) => tokio::fs::read(path).await?,
    };

    let dataset = Dataset::from_csv_bytes(&bytes)?;
    if dataset.is_empty() {
        warn!("Loaded dataset has no rows, every chart will be empty.");
    }
    info!(
        "Dataset has:\n{} songs\n{} artists\n{} genres",
        dataset.len(),
        dataset.distinct_artists_count(),
        dataset.distinct_genres_count()
    );
    Ok(dataset)
}
