use serde::{Deserialize, Serialize};

use crate::stats::TeamEventStats;
use crate::store::models::Team;

#[derive(Debug, Deserialize)]
pub struct TeamIndexQuery {
    /// Raw page value; anything unparsable falls back to page 1.
    pub page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TeamViewQuery {
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct TeamIndexResponse {
    pub teams: Vec<Team>,
    pub page: usize,
    pub page_count: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// A team's aggregate at one event, keyed by the event tag.
#[derive(Debug, Serialize)]
pub struct TeamEventEntry {
    pub event_tag: String,
    pub stats: TeamEventStats,
}

#[derive(Debug, Serialize)]
pub struct TeamDetailResponse {
    #[serde(flatten)]
    pub team: Team,
    pub events: Vec<TeamEventEntry>,
}
