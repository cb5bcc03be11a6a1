use serde::{Deserialize, Serialize};

use crate::scoring::{BridgeAttempt, HoopCount};
use crate::store::models::TeamMatchRecord;

/// Bridge outcome exactly as encoded on the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgeOutcome {
    Na,
    Fail,
    Success,
}

impl From<BridgeOutcome> for BridgeAttempt {
    fn from(outcome: BridgeOutcome) -> Self {
        match outcome {
            BridgeOutcome::Na => BridgeAttempt::new(false, false),
            BridgeOutcome::Fail => BridgeAttempt::new(true, false),
            BridgeOutcome::Success => BridgeAttempt::new(true, true),
        }
    }
}

impl From<BridgeAttempt> for BridgeOutcome {
    fn from(attempt: BridgeAttempt) -> Self {
        if attempt.succeeded {
            BridgeOutcome::Success
        } else if attempt.was_attempted() {
            BridgeOutcome::Fail
        } else {
            BridgeOutcome::Na
        }
    }
}

/// The official alliance scores of one match.
#[derive(Debug, Deserialize)]
pub struct ScoreForm {
    pub red_score: i32,
    pub blue_score: i32,
}

/// One scout's entry for one team in one match. A submission overwrites
/// the team's whole record.
#[derive(Debug, Deserialize)]
pub struct TeamEntryForm {
    pub autonomous: HoopCount,
    pub teleoperated: HoopCount,
    pub coop_bridge: BridgeOutcome,
    pub bridge1: BridgeOutcome,
    pub bridge2: BridgeOutcome,
    #[serde(default)]
    pub scout_name: String,
    #[serde(default)]
    pub failure: bool,
    #[serde(default)]
    pub no_show: bool,
}

#[derive(Debug, Serialize)]
pub struct MatchTeamResponse {
    pub tag: String,
    #[serde(flatten)]
    pub record: TeamMatchRecord,
}
