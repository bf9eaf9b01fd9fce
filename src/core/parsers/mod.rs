//! Parsers for locale files on disk.
//!
//! - `json`: JSON locale file parser (scans locale directories)

pub mod json;
