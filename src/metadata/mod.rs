//! Audio file metadata reading and writing.
//!
//! Uses the lofty crate for format-independent tag access. Only two
//! operations are needed here: read the title/artist pair used for the
//! catalog search, and write confirmed styles into the genre field.

use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::{Accessor, Tag, TagExt};
use std::path::{Path, PathBuf};

use crate::config::TaggingConfig;
use crate::error::{Error, Result, TagField};

/// A song from the list, with the tags needed for the catalog search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongFile {
    pub path: PathBuf,
    pub title: String,
    pub artist: String,
}

/// Options for controlling how genres get written
#[derive(Debug, Clone)]
pub struct TagWriteOptions {
    /// Separator placed between styles in the single genre value
    pub genre_delimiter: String,
}

impl Default for TagWriteOptions {
    fn default() -> Self {
        Self {
            genre_delimiter: ";".to_string(),
        }
    }
}

impl From<&TaggingConfig> for TagWriteOptions {
    fn from(config: &TaggingConfig) -> Self {
        Self {
            genre_delimiter: config.genre_delimiter.clone(),
        }
    }
}

impl TagWriteOptions {
    /// Join styles into the genre value that gets stored
    pub fn genre_value(&self, styles: &[String]) -> String {
        styles.join(&self.genre_delimiter)
    }
}

/// Read/write access to a song's tag store.
///
/// Implement this trait to substitute an in-memory store in tests.
pub trait TagStore {
    /// Read title and artist, failing if either is absent.
    fn read(&self, path: &Path) -> Result<SongFile>;

    /// Store the styles as the file's genre.
    fn write_genre(&self, path: &Path, styles: &[String]) -> Result<()>;
}

/// Tag store backed by the files on disk.
#[derive(Debug, Clone, Default)]
pub struct LoftyTagStore {
    options: TagWriteOptions,
}

impl LoftyTagStore {
    pub fn new(options: TagWriteOptions) -> Self {
        Self { options }
    }
}

impl TagStore for LoftyTagStore {
    fn read(&self, path: &Path) -> Result<SongFile> {
        read(path)
    }

    fn write_genre(&self, path: &Path, styles: &[String]) -> Result<()> {
        write_genre(path, styles, &self.options)
    }
}

/// Read the title and artist of an audio file.
pub fn read(path: &Path) -> Result<SongFile> {
    // Probe the file to determine format and read tags
    let tagged_file = Probe::open(path)
        .and_then(|probe| probe.read())
        .map_err(|e| Error::metadata(path, e.to_string()))?;

    // Get the primary tag, or fall back to the first available tag
    let tag = tagged_file
        .primary_tag()
        .or_else(|| tagged_file.first_tag());

    let title = tag
        .and_then(|t| t.title().map(|s| s.to_string()))
        .ok_or_else(|| Error::missing_field(path, TagField::Title))?;

    let artist = tag
        .and_then(|t| t.artist().map(|s| s.to_string()))
        .ok_or_else(|| Error::missing_field(path, TagField::Artist))?;

    tracing::info!("file path: {}", path.display());
    tracing::info!("\t{}: {}", TagField::Title, title);
    tracing::info!("\t{}: {}", TagField::Artist, artist);

    Ok(SongFile {
        path: path.to_path_buf(),
        title,
        artist,
    })
}

/// Write styles into the genre field of an audio file's tags.
///
/// Styles are stored as one delimited value, not as repeated genre items.
pub fn write_genre(path: &Path, styles: &[String], options: &TagWriteOptions) -> Result<()> {
    let mut tagged_file = Probe::open(path)
        .and_then(|probe| probe.read())
        .map_err(|e| Error::metadata(path, e.to_string()))?;

    // Get the primary tag type for this format, or create one
    let tag_type = tagged_file.primary_tag_type();
    if tagged_file.tag(tag_type).is_none() {
        tagged_file.insert_tag(Tag::new(tag_type));
    }
    let tag = tagged_file
        .tag_mut(tag_type)
        .ok_or_else(|| Error::metadata(path, "no writable tag for this format"))?;

    tracing::info!("Adding genres: {:?} to {}", styles, path.display());
    tag.set_genre(options.genre_value(styles));

    tag.save_to_path(path, WriteOptions::default())
        .map_err(|e| Error::metadata(path, format!("failed to write tags: {e}")))?;
    tracing::info!("Added genres: {:?} to {}", styles, path.display());

    Ok(())
}
