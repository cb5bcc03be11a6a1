use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::stats::TeamEventStats;
use crate::store::models::{Event, Location, Match, Team};
use crate::tags::EventTag;

#[derive(Debug, Deserialize)]
pub struct EventIndexQuery {
    pub year: Option<i32>,
}

/// One event in the index listing.
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub tag: String,
    #[serde(flatten)]
    pub event: Event,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            tag: event.tag().to_string(),
            event,
        }
    }
}

/// One match, annotated with its tag and heading.
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub tag: String,
    pub display_name: String,
    #[serde(flatten)]
    pub inner: Match,
}

impl MatchResponse {
    pub fn new(event: &EventTag, inner: Match) -> Self {
        Self {
            tag: inner.tag(event).to_string(),
            display_name: format!("{} #{}", inner.category.display_name(), inner.number),
            inner,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventDetailResponse {
    pub tag: String,
    pub location: Location,
    pub date: NaiveDate,
    pub matches: Vec<MatchResponse>,
    pub teams: Vec<Team>,
}

/// A team's schedule and aggregate at one event.
#[derive(Debug, Serialize)]
pub struct EventTeamResponse {
    pub event_tag: String,
    pub team_number: u32,
    pub matches: Vec<MatchResponse>,
    pub stats: TeamEventStats,
}
