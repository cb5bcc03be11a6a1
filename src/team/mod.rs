//! Team pages: the paginated index and per-team detail with event stats.

pub mod handlers;
pub mod types;
