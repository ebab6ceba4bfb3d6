//! Song list loading.
//!
//! A song list is a plain `*.txt` file with one `*.flac` path per line.
//! Relative entries are resolved against the current working directory.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result, ResultExt};

/// Extension the list file itself must carry.
pub const LIST_EXTENSION: &str = "txt";

/// Extension every listed audio file must carry.
pub const AUDIO_EXTENSION: &str = "flac";

/// Load the list file and return the absolute paths it names, in file order.
///
/// Blank lines are skipped; duplicates are kept.
pub fn load(list_path: &Path) -> Result<Vec<PathBuf>> {
    let list_path = std::path::absolute(list_path)?;
    if !has_extension(&list_path, LIST_EXTENSION) {
        return Err(Error::invalid_extension(list_path, LIST_EXTENSION));
    }

    let contents = std::fs::read_to_string(&list_path)
        .with_context(format!("Failed to read song list {}", list_path.display()))?;

    let songs = parse(&contents)?;
    tracing::info!("Loaded {} song(s) from {}", songs.len(), list_path.display());
    Ok(songs)
}

/// Parse list file contents into absolute song paths.
pub fn parse(contents: &str) -> Result<Vec<PathBuf>> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let path = Path::new(line);
            if !has_extension(path, AUDIO_EXTENSION) {
                return Err(Error::invalid_extension(path, AUDIO_EXTENSION));
            }
            Ok(std::path::absolute(path)?)
        })
        .collect()
}

/// Check a path's extension; the comparison is case-sensitive
fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == expected)
}
