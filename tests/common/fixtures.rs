//! Test fixture creation for the songs CSV

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const HEADER: &str = concat!(
    "\"\",\"Track.Name\",\"Artist.Name\",\"Genre\",\"Beats.Per.Minute\",\"Energy\",",
    "\"Danceability\",\"Loudness..dB..\",\"Liveness\",\"Valence.\",\"Length.\",",
    "\"Acousticness..\",\"Speechiness.\",\"Popularity\"\n"
);

/// (track, artist, genre, loudness), artist and track names as Latin-1 bytes
const ROWS: [(&[u8], &[u8], &str, i32); 15] = [
    (b"Se\xf1orita", b"Shawn Mendes", "canadian pop", -6),
    (b"Beautiful People", b"Ed Sheeran", "pop", -5),
    (b"I Don't Care", b"Ed Sheeran", "pop", -4),
    (b"Halo", b"Beyonc\xe9", "dance pop", -3),
    (b"Antisocial", b"Ed Sheeran", "pop", -7),
    (b"If I Can't Have You", b"Shawn Mendes", "canadian pop", -5),
    (b"bad guy", b"Billie Eilish", "electropop", -10),
    (b"South of the Border", b"Ed Sheeran", "pop", -6),
    (b"Treat You Better", b"Shawn Mendes", "canadian pop", -4),
    (b"Crazy in Love", b"Beyonc\xe9", "dance pop", -2),
    (b"Callaita", b"Bad Bunny", "reggaeton", -4),
    (b"LA CANCI\xd3N", b"J Balvin", "latin", -3),
    (b"Old Town Road", b"Lil Nas X", "country rap", -6),
    (b"Goodbyes", b"Post Malone", "dfw rap", -5),
    (b"China", b"Anuel AA", "reggaeton flow", -4),
];

/// Writes a Latin-1 encoded top 50 style CSV into a temp dir.
/// Returns (temp_dir, csv_path)
pub fn create_test_csv() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("top50.csv");

    let mut bytes = HEADER.as_bytes().to_vec();
    for (index, (track, artist, genre, loudness)) in ROWS.iter().enumerate() {
        bytes.extend_from_slice(format!("{},\"", index + 1).as_bytes());
        bytes.extend_from_slice(track);
        bytes.extend_from_slice(b"\",\"");
        bytes.extend_from_slice(artist);
        bytes.extend_from_slice(
            format!("\",\"{}\",117,55,76,{},8,75,191,4,3,79\n", genre, loudness).as_bytes(),
        );
    }
    fs::write(&path, bytes)?;

    Ok((dir, path))
}
