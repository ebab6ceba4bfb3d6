//! Interactive Yes/No confirmation.
//!
//! The terminal picker is wrapped behind [`Prompter`] so the enrichment flow
//! can be driven by scripted answers in tests.

use std::fmt::Write as _;

use dialoguer::Select;

use crate::enrichment::CatalogSummary;
use crate::error::{Error, Result, TagField};
use crate::metadata::SongFile;

/// The user's answer to a single prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserDecision {
    Yes,
    No,
}

impl UserDecision {
    /// Picker options, in display order
    pub const OPTIONS: [UserDecision; 2] = [UserDecision::Yes, UserDecision::No];

    pub fn label(self) -> &'static str {
        match self {
            UserDecision::Yes => "Yes",
            UserDecision::No => "No",
        }
    }
}

impl TryFrom<usize> for UserDecision {
    type Error = Error;

    /// Convert the picker's selected index; anything but a known option is rejected
    fn try_from(index: usize) -> Result<Self> {
        Self::OPTIONS
            .get(index)
            .copied()
            .ok_or(Error::UnexpectedPromptResult(index))
    }
}

/// Something that can ask the user a Yes/No question.
pub trait Prompter {
    /// Show the prompt and block until the user answers.
    fn confirm(&self, prompt: &str) -> Result<UserDecision>;
}

/// Prompter backed by an arrow-key picker on the terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, prompt: &str) -> Result<UserDecision> {
        let labels = UserDecision::OPTIONS.map(UserDecision::label);
        let index = Select::new()
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| Error::Prompt(e.to_string()))?;

        UserDecision::try_from(index)
    }
}

/// Render the question asked for each catalog candidate.
pub fn match_prompt(song: &SongFile, candidate: &CatalogSummary) -> String {
    let mut prompt = String::from("Please verify if Metadata from Discogs API is correct [Yes/No]:");
    let _ = write!(prompt, "\n\tParsed from '{}'", song.path.display());
    let _ = write!(prompt, "\n\t\tTitle: {}", song.title);
    let _ = write!(prompt, "\n\t\tArtist: {}", song.artist);
    prompt.push_str("\n\tRetrieved from Discogs API:");
    for (name, value) in candidate.fields() {
        let _ = write!(prompt, "\n\t\t{name}: {value}");
    }
    prompt
}

/// Render the question asked before writing styles into a file.
pub fn write_prompt(song: &SongFile, summary: &CatalogSummary, styles: &[String]) -> String {
    let mut prompt = String::from("Setting styles:");
    for style in styles {
        let _ = write!(prompt, "\n\t - {style}");
    }
    let _ = write!(prompt, "\nAdding as metadata to {}", song.path.display());
    prompt.push_str("\n\nPlease review before confirming metadata changes.");
    prompt.push_str("\n\nOriginal metadata listed below for reference:");
    let _ = write!(prompt, "\n\t{}: {}", TagField::Title, song.title);
    let _ = write!(prompt, "\n\t{}: {}", TagField::Artist, song.artist);
    prompt.push_str("\n\nData from Discogs API");
    for (name, value) in summary.fields() {
        let _ = write!(prompt, "\n\t{name}: {value}");
    }
    prompt
}
