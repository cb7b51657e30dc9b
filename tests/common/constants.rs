//! Shared constants for end-to-end tests
//!
//! This module contains all constants used across the test suite.
//! When the fixture CSV changes, update only this file.

#![allow(dead_code)]

// ============================================================================
// Test Dataset Artists
// ============================================================================

/// 4 songs, all "pop"
pub const ARTIST_ED_SHEERAN: &str = "Ed Sheeran";

/// 3 songs, all "canadian pop"
pub const ARTIST_SHAWN_MENDES: &str = "Shawn Mendes";

/// 2 songs, all "dance pop". Written as Latin-1 in the fixture.
pub const ARTIST_BEYONCE: &str = "Beyoncé";

/// 1 song, "electropop"
pub const ARTIST_BILLIE_EILISH: &str = "Billie Eilish";

/// Not in the fixture
pub const UNKNOWN_ARTIST: &str = "Nobody Famous";

// ============================================================================
// Test Dataset Shape
// ============================================================================

pub const SONG_COUNT: usize = 15;

pub const DISTINCT_ARTISTS: usize = 9;

pub const DISTINCT_GENRES: usize = 9;

/// Genres by count, ties in order of first appearance
pub const GENRES_BY_COUNT: [&str; 9] = [
    "pop",
    "canadian pop",
    "dance pop",
    "electropop",
    "reggaeton",
    "latin",
    "country rap",
    "dfw rap",
    "reggaeton flow",
];

// ============================================================================
// Figure Ids
// ============================================================================

pub const ARTIST_LINE_FIGURE: &str = "artist-count-line-chart";

pub const GENRE_PIE_FIGURE: &str = "top-genres-pie-chart";

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

/// Cache age the test server is configured with
pub const TEST_CACHE_AGE_SEC: usize = 60;
