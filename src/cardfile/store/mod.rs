//! # Storage Layer
//!
//! The [`CardStore`] trait is the whole persistence contract: create, list,
//! read, update and delete. Everything above it (commands, API, CLI) talks
//! only to this trait.
//!
//! ## Files Are Truth
//!
//! [`fs::FileStore`] keeps one text file per card in a single directory. There
//! is no index file. A card's id lives inside its record header (see
//! [`crate::record`]); the file name is derived from the card's title and
//! carries no meaning for the store.
//!
//! ```text
//! cards/
//! ├── Groceries.md
//! ├── Groceries (2).md     # same title, different card
//! ├── Meeting notes.md
//! └── 5f0c…e1.md           # random name once every numbered one is taken
//! ```
//!
//! Looking a card up by id therefore means decoding every file: only a full
//! scan can tell whether a second copy of the same id is lying around.
//!
//! ## Renames
//!
//! Editing a card's title moves it to a new file. The new record is written
//! and fsynced first, then the old file is removed. A crash in between leaves
//! two decodable records with the same id; the one with the newer
//! `updated_at` wins and the other is cleaned up by the next update or
//! delete of that card.
//!
//! ## Concurrency
//!
//! Nothing is locked across operations. Records are written to a hidden temp
//! file and then linked under a new name with a single create-if-absent call
//! ([`alloc::allocate`]), so two writers never end up sharing a file and a
//! visible record is always complete, but a read racing a delete of the same card can
//! still observe either outcome.

use crate::error::Result;
use crate::model::Card;
use std::path::PathBuf;

pub mod alloc;
pub mod fs;

/// A file in the cards directory that did not decode as a record.
#[derive(Debug, Clone)]
pub struct SkippedRecord {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything a full directory scan found.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub cards: Vec<Card>,
    pub skipped: Vec<SkippedRecord>,
}

/// Abstract interface for card storage.
pub trait CardStore {
    /// Store a new card built from `content`.
    fn create(&self, content: String) -> Result<Card>;

    /// Decode every record, reporting the files that could not be decoded.
    fn scan(&self) -> Result<ScanOutcome>;

    /// All cards, in no particular order. Undecodable files are skipped.
    fn list(&self) -> Result<Vec<Card>> {
        Ok(self.scan()?.cards)
    }

    /// Get a card by id.
    fn read(&self, id: &str) -> Result<Card>;

    /// Replace a card's content, keeping its id and creation time.
    fn update(&self, id: &str, content: String) -> Result<Card>;

    /// Delete a card permanently.
    fn delete(&self, id: &str) -> Result<()>;

    /// The file currently holding the card.
    fn card_path(&self, id: &str) -> Result<PathBuf>;
}
