// Library crate for the scouting server
// This file exposes the public API for integration tests

pub mod event;
pub mod jump;
pub mod matches;
pub mod paging;
pub mod reports;
pub mod routes;
pub mod scoring;
pub mod shared;
pub mod stats;
pub mod store;
pub mod tags;
pub mod team;

// Re-export commonly used types for easier access in tests
pub use paging::{Page, PageSource, Paginator, PagingError};
pub use routes::router;
pub use scoring::{calculate_score, BridgeAttempt, HoopCount};
pub use shared::{AppError, AppState};
pub use stats::{team_event_stats, TeamEventStats};
pub use store::{Datastore, InMemoryDatastore};
pub use tags::{EventTag, MatchCategory, MatchTag, MatchTeamTag, TagError};
