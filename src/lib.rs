//! Word-matching and grid-state engine for a falling-block kana/kanji puzzle
//! game. Single tokens drop into a fixed grid; when occupied cells spell a
//! vocabulary word (horizontally or vertically, forward or reversed) the
//! matched cells are cleared and gravity compacts the columns.
//!
//! Rendering, input capture, and audio live outside this crate: collaborators
//! feed [`messages::Command`]s into a [`game::GameSession`] and consume the
//! [`messages::Event`]s it emits.

pub mod config;
pub mod data;
pub mod dictionary;
pub mod game;
pub mod messages;
pub mod models;
pub mod utils;

pub use config::GameConfig;
pub use data::Lexicon;
pub use dictionary::Dictionary;
pub use game::{GameSession, Grid};
pub use messages::{Command, Event};
pub use models::{Block, GameMode, JlptLevel, Match, Position, WordEntry, WordInfo};
