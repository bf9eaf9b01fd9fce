//! Data of the app shell: the route table, the UI constant tables, and the
//! mock records.
//!
//! ## Module Structure
//!
//! - `constants`: tabs, tags, users, user menu, palette
//! - `mock_data`: documents and appointments with "first N" accessors
//! - `routes`: path to page view mapping

pub mod constants;
pub mod mock_data;
pub mod routes;
