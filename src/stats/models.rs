use serde::Serialize;

use crate::scoring::{BridgeAttempt, HoopCount};
use crate::store::models::TeamMatchRecord;

/// Attempt and success tallies for one bridge across an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BridgeStats {
    pub attempt_count: u32,
    pub success_count: u32,
}

impl BridgeStats {
    /// Folds one match's attempt into the tallies. A success implies an
    /// attempt and is counted as one of each, never double counted.
    pub(crate) fn record(&mut self, attempt: &BridgeAttempt) {
        if attempt.was_attempted() {
            self.attempt_count += 1;
        }
        if attempt.succeeded {
            self.success_count += 1;
        }
    }

    /// Attempts per counted match; 0.0 when no matches were counted.
    pub fn attempt_rate(&self, match_count: u32) -> f64 {
        ratio(self.attempt_count as f64, match_count)
    }

    /// Successes per attempt; 0.0 when nothing was attempted.
    pub fn success_rate(&self) -> f64 {
        ratio(self.success_count as f64, self.attempt_count)
    }
}

/// A team's aggregated performance across one event's matches.
///
/// Entirely derived: recomputed from the match records on read, never
/// persisted as a source of truth.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamEventStats {
    pub team_number: u32,
    /// Matches that were played, scored, and not a no-show.
    pub match_count: u32,
    pub no_show_count: u32,
    pub failure_count: u32,
    pub total_points: i64,
    pub coop_bridge: BridgeStats,
    pub bridge1: BridgeStats,
    pub bridge2: BridgeStats,
    /// Hoop counts summed over counted matches.
    pub autonomous: HoopCount,
    pub teleoperated: HoopCount,
}

impl TeamEventStats {
    pub fn new(team_number: u32) -> Self {
        Self {
            team_number,
            ..Self::default()
        }
    }

    /// Folds one match record into the accumulator.
    ///
    /// A no-show counts only toward the no-show tally. A record from a
    /// match without an official score is excluded entirely: "not yet
    /// played" is distinct from "played and scored zero".
    pub(crate) fn record(&mut self, record: &TeamMatchRecord, match_scored: bool) {
        if record.no_show {
            self.no_show_count += 1;
            return;
        }
        if !match_scored {
            return;
        }
        self.match_count += 1;
        self.total_points += i64::from(record.score);
        if record.failure {
            self.failure_count += 1;
        }
        self.autonomous.add(&record.autonomous);
        self.teleoperated.add(&record.teleoperated);
        self.coop_bridge.record(&record.coop_bridge);
        self.bridge1.record(&record.bridge1);
        self.bridge2.record(&record.bridge2);
    }

    pub fn average_score(&self) -> f64 {
        ratio(self.total_points as f64, self.match_count)
    }

    pub fn failure_rate(&self) -> f64 {
        ratio(self.failure_count as f64, self.match_count)
    }

    /// Average autonomous hoops per counted match.
    pub fn average_autonomous(&self) -> f64 {
        ratio(self.autonomous.total() as f64, self.match_count)
    }

    /// Average teleoperated hoops per counted match.
    pub fn average_teleoperated(&self) -> f64 {
        ratio(self.teleoperated.total() as f64, self.match_count)
    }
}

fn ratio(numerator: f64, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / f64::from(denominator)
    }
}
