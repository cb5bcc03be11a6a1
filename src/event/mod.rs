//! Event pages: index, detail, per-team matches, and the CSV export.

pub mod handlers;
pub mod types;
