//! # Command Layer
//!
//! One module per store operation. Commands take a [`CardStore`] and plain
//! Rust arguments and return a [`CmdResult`]: the cards they touched or
//! listed, plus messages meant for whoever is driving them. Nothing here
//! prints.
//!
//! [`CardStore`]: crate::store::CardStore

use crate::model::Card;
use std::path::PathBuf;

pub mod create;
pub mod delete;
pub mod list;
pub mod read;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_cards: Vec<Card>,
    pub listed_cards: Vec<Card>,
    pub card_paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_cards(mut self, cards: Vec<Card>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_card_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.card_paths = paths;
        self
    }
}
