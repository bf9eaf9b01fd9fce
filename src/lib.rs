//! Kernel - core of the health/document organizer app shell
//!
//! The crate resolves dotted translation keys against a nested dictionary
//! and holds the shell's route table, UI constant tables and mock records.
//! A missing translation resolves to its own key, so it shows up verbatim
//! wherever it is displayed.
//!
//! ## Module Structure
//!
//! - `app`: Route table, UI constants and mock data
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Translation dictionary, resolver and locale file parsing

pub mod app;
pub mod cli;
pub mod config;
pub mod core;

pub use crate::core::{TranslationDictionary, TranslationResolver};
