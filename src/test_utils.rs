//! Test utilities and fixtures for genre-minder tests.
//!
//! This module provides tagged FLAC fixtures, a scripted prompter, and a
//! scoped log capture to reduce boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{flac_fixture, ScriptedPrompter};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = flac_fixture(dir.path(), "a.flac", Some("X"), Some("Y"));
//! let prompter = ScriptedPrompter::new([UserDecision::Yes]);
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::{Accessor, Tag, TagExt, TagType};
use tracing_subscriber::fmt::MakeWriter;

use crate::error::Result;
use crate::metadata::SongFile;
use crate::prompt::{Prompter, UserDecision};

/// Bytes of a FLAC file with only a STREAMINFO block (1s, 44.1kHz, stereo, 16 bit).
fn minimal_flac() -> Vec<u8> {
    let mut bytes = b"fLaC".to_vec();
    // Metadata block header: last block, type STREAMINFO, 34 bytes
    bytes.extend_from_slice(&[0x80, 0x00, 0x00, 0x22]);
    bytes.extend_from_slice(&4096u16.to_be_bytes()); // min block size
    bytes.extend_from_slice(&4096u16.to_be_bytes()); // max block size
    bytes.extend_from_slice(&[0; 6]); // min/max frame size (unknown)
    // sample rate (20) | channels - 1 (3) | bits per sample - 1 (5) | total samples (36)
    let packed: u64 = (44_100 << 44) | (1 << 41) | (15 << 36) | 44_100;
    bytes.extend_from_slice(&packed.to_be_bytes());
    bytes.extend_from_slice(&[0; 16]); // MD5 of unencoded audio
    bytes
}

/// Create a FLAC file in `dir` carrying the given title and artist tags.
///
/// Passing `None` leaves the field out of the tag store entirely.
pub fn flac_fixture(dir: &Path, name: &str, title: Option<&str>, artist: Option<&str>) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, minimal_flac()).expect("Failed to write FLAC fixture");

    let mut tag = Tag::new(TagType::VorbisComments);
    if let Some(title) = title {
        tag.set_title(title.to_string());
    }
    if let Some(artist) = artist {
        tag.set_artist(artist.to_string());
    }
    if !tag.is_empty() {
        tag.save_to_path(&path, WriteOptions::default())
            .expect("Failed to tag FLAC fixture");
    }

    path
}

/// Read back the genre of a file, if any.
pub fn read_genre(path: &Path) -> Option<String> {
    let tagged_file = Probe::open(path)
        .expect("Failed to open file")
        .read()
        .expect("Failed to read file");
    tagged_file
        .primary_tag()
        .and_then(|tag| tag.genre().map(|genre| genre.to_string()))
}

/// Creates a SongFile with sensible defaults.
pub fn mock_song() -> SongFile {
    SongFile {
        path: PathBuf::from("/music/test.flac"),
        title: "Test Track".to_string(),
        artist: "Test Artist".to_string(),
    }
}

/// Prompter that answers from a script and records every prompt it was shown.
///
/// Answers are raw picker indices, so they pass through the same
/// index-to-decision conversion as the terminal picker.
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<usize>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    /// Script a sequence of decisions
    pub fn new(answers: impl IntoIterator<Item = UserDecision>) -> Self {
        Self::with_indices(answers.into_iter().map(|answer| match answer {
            UserDecision::Yes => 0,
            UserDecision::No => 1,
        }))
    }

    /// Script raw picker indices, including out-of-range ones
    pub fn with_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            answers: RefCell::new(indices.into_iter().collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// Prompts shown so far, in order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, prompt: &str) -> Result<UserDecision> {
        self.prompts.borrow_mut().push(prompt.to_string());
        let index = self
            .answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("Unscripted prompt:\n{prompt}"));
        UserDecision::try_from(index)
    }
}

/// Shared in-memory log sink
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn buffered_subscriber(buffer: LogBuffer) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_writer(buffer)
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish()
}

/// Run `f` with a thread-local subscriber and return its output plus the log text.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let output = tracing::subscriber::with_default(buffered_subscriber(buffer.clone()), f);
    (output, buffer.contents())
}

/// Async variant of [`capture_logs`]; requires a current-thread runtime.
pub async fn capture_logs_async<F: Future>(future: F) -> (F::Output, String) {
    let buffer = LogBuffer::default();
    let guard = tracing::subscriber::set_default(buffered_subscriber(buffer.clone()));
    let output = future.await;
    drop(guard);
    (output, buffer.contents())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flac_fixture_is_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = flac_fixture(dir.path(), "a.flac", Some("X"), Some("Y"));

        let tagged_file = Probe::open(&path).unwrap().read().unwrap();
        let tag = tagged_file.primary_tag().unwrap();
        assert_eq!(tag.title().as_deref(), Some("X"));
        assert_eq!(tag.artist().as_deref(), Some("Y"));
        assert!(read_genre(&path).is_none());
    }

    #[test]
    fn test_scripted_prompter_records_prompts() {
        let prompter = ScriptedPrompter::new([UserDecision::No, UserDecision::Yes]);

        assert_eq!(prompter.confirm("first").unwrap(), UserDecision::No);
        assert_eq!(prompter.confirm("second").unwrap(), UserDecision::Yes);
        assert_eq!(prompter.prompts(), vec!["first", "second"]);
    }

    #[test]
    fn test_capture_logs_collects_events() {
        let (value, logs) = capture_logs(|| {
            tracing::warn!("something odd");
            42
        });

        assert_eq!(value, 42);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("something odd"));
    }

    #[test]
    fn test_mock_song_defaults() {
        let song = mock_song();
        assert_eq!(song.title, "Test Track");
        assert_eq!(song.artist, "Test Artist");
        assert_eq!(song.path, PathBuf::from("/music/test.flac"));
    }
}
