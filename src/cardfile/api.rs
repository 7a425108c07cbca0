//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! UI: the CLI in this crate, or a desktop shell, or a tool-calling bridge
//! living elsewhere. It dispatches to the matching command and hands back a
//! structured [`CmdResult`]; it never prints and never formats.
//!
//! `CardsApi<S: CardStore>` is generic over the store, so tests can point it
//! at a throwaway directory.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::store::CardStore;

pub use crate::commands::{CmdMessage, MessageLevel};

/// The main API facade for card operations.
pub struct CardsApi<S: CardStore> {
    store: S,
}

impl<S: CardStore> CardsApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_card(&self, content: impl Into<String>) -> Result<CmdResult> {
        commands::create::run(&self.store, content.into())
    }

    pub fn list_cards(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn read_card(&self, id: &str) -> Result<CmdResult> {
        commands::read::run(&self.store, id)
    }

    pub fn update_card(&self, id: &str, content: impl Into<String>) -> Result<CmdResult> {
        commands::update::run(&self.store, id, content.into())
    }

    pub fn delete_card(&self, id: &str) -> Result<CmdResult> {
        commands::delete::run(&self.store, id)
    }

    pub fn card_path(&self, id: &str) -> Result<CmdResult> {
        commands::read::path(&self.store, id)
    }
}
