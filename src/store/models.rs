use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::scoring::{calculate_score, BridgeAttempt, HoopCount};
use crate::tags::{EventTag, MatchCategory, MatchTag, MatchTeamTag};

/// A competing team, keyed by its competition number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub number: u32,
    pub name: String,
    pub rookie_year: Option<i32>,
}

impl Team {
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            rookie_year: None,
        }
    }
}

/// Where an event is held. `code` is the lowercase short code used in tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub code: String,
}

/// One competition instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub location: Location,
    pub date: NaiveDate,
    /// Numbers of the teams attending, kept sorted.
    pub teams: Vec<u32>,
}

impl Event {
    pub fn tag(&self) -> EventTag {
        EventTag::new(self.location.code.clone(), self.date.year() as u32)
    }

    pub fn has_team(&self, number: u32) -> bool {
        self.teams.contains(&number)
    }
}

/// One of the two opposing sides in a match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Alliance {
    Red,
    Blue,
}

/// The officially recorded final score of a match. Absent until the match
/// has been played and scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllianceScores {
    pub red: i32,
    pub blue: i32,
}

/// One team's scouted entry for one match. A scout form submission
/// overwrites the whole record; it is never partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMatchRecord {
    pub team: u32,
    pub alliance: Alliance,
    pub autonomous: HoopCount,
    pub teleoperated: HoopCount,
    pub coop_bridge: BridgeAttempt,
    pub bridge1: BridgeAttempt,
    pub bridge2: BridgeAttempt,
    pub scout_name: String,
    pub failure: bool,
    pub no_show: bool,
    /// Derived from the fields above by the score calculator; recomputed on
    /// every write and never trusted as independently authoritative.
    pub score: i32,
}

impl TeamMatchRecord {
    pub fn new(team: u32, alliance: Alliance) -> Self {
        Self {
            team,
            alliance,
            autonomous: HoopCount::default(),
            teleoperated: HoopCount::default(),
            coop_bridge: BridgeAttempt::NOT_ATTEMPTED,
            bridge1: BridgeAttempt::NOT_ATTEMPTED,
            bridge2: BridgeAttempt::NOT_ATTEMPTED,
            scout_name: String::new(),
            failure: false,
            no_show: false,
            score: 0,
        }
    }

    /// Recomputes the stored score from the performance fields. Must be
    /// called before the record is persisted so a reader never sees a score
    /// inconsistent with the counters it was derived from.
    pub fn recompute_score(&mut self) {
        self.score = calculate_score(
            &self.autonomous,
            &self.teleoperated,
            &self.coop_bridge,
            &self.bridge1,
            &self.bridge2,
        );
    }
}

/// One match within an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub category: MatchCategory,
    pub number: u32,
    pub teams: Vec<TeamMatchRecord>,
    pub scores: Option<AllianceScores>,
}

impl Match {
    pub fn new(category: MatchCategory, number: u32) -> Self {
        Self {
            category,
            number,
            teams: Vec::new(),
            scores: None,
        }
    }

    pub fn tag(&self, event: &EventTag) -> MatchTag {
        MatchTag::new(event.clone(), self.category, self.number)
    }

    pub fn team_tag(&self, event: &EventTag, team_number: u32) -> MatchTeamTag {
        MatchTeamTag::new(self.tag(event), team_number)
    }

    /// Whether the match has an officially recorded score yet.
    pub fn is_scored(&self) -> bool {
        self.scores.is_some()
    }

    pub fn has_team(&self, team_number: u32) -> bool {
        self.team_record(team_number).is_some()
    }

    pub fn team_record(&self, team_number: u32) -> Option<&TeamMatchRecord> {
        self.teams.iter().find(|record| record.team == team_number)
    }

    pub fn team_record_mut(&mut self, team_number: u32) -> Option<&mut TeamMatchRecord> {
        self.teams
            .iter_mut()
            .find(|record| record.team == team_number)
    }

    pub fn alliance_records(&self, alliance: Alliance) -> Vec<&TeamMatchRecord> {
        self.teams
            .iter()
            .filter(|record| record.alliance == alliance)
            .collect()
    }
}
