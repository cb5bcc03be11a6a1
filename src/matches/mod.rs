//! Match pages: detail, official score entry, and scout form submission.

pub mod handlers;
pub mod types;
