//! # Cardfile Architecture
//!
//! Cardfile stores notes ("cards") as plain text files, one file per card, in
//! a single directory. Files are named after the card's title so the directory
//! is pleasant to browse by hand, while every card keeps an id that never
//! changes no matter how often its title does.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, render.rs)                          │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade, the one entry point for any UI              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One per operation, returns structured `CmdResult`s       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - `CardStore` trait, `FileStore` over a directory          │
//! │  - name allocation, duplicate resolution                    │
//! └─────────────────────────────────────────────────────────────┘
//!          │                                  │
//!          ▼                                  ▼
//! ┌──────────────────────────┐   ┌──────────────────────────────┐
//! │  record.rs               │   │  naming.rs                   │
//! │  header + body codec     │   │  title → safe file name      │
//! └──────────────────────────┘   └──────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr and nothing exits
//! the process. Diagnostics go through the `log` facade; the binary decides
//! where they end up.
//!
//! ## Identity
//!
//! The id inside a record's header is the only identity a card has. File
//! names are derived (see [`naming`]) and may change on every edit. Looking a
//! card up by id decodes every file in the directory, so a stray older copy
//! of the same card is always noticed.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Storage trait and the file-backed implementation
//! - [`record`]: On-disk record format
//! - [`naming`]: Title derivation and file name sanitizing
//! - [`model`]: The `Card` type
//! - [`config`]: Config file and cards directory resolution
//! - [`logging`]: Logger setup for the binary
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod naming;
pub mod record;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
