//! Per-team statistics aggregation over an event's match records.

mod aggregator;
pub mod models;

pub use aggregator::team_event_stats;
pub use models::{BridgeStats, TeamEventStats};
