//! Game-rule scoring for a single team's match entry.

use serde::{Deserialize, Serialize};

/// Hoops scored in one phase of a match, bucketed by goal height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoopCount {
    pub high: u32,
    pub mid: u32,
    pub low: u32,
}

impl HoopCount {
    pub fn new(high: u32, mid: u32, low: u32) -> Self {
        Self { high, mid, low }
    }

    /// Total hoops scored across all heights.
    pub fn total(&self) -> u32 {
        self.high + self.mid + self.low
    }

    /// Accumulates another count into this one.
    pub fn add(&mut self, other: &HoopCount) {
        self.high += other.high;
        self.mid += other.mid;
        self.low += other.low;
    }
}

/// One bridge balance attempt on the scouting form.
///
/// Hand-entered data can claim a success without an attempt; consumers must
/// not rely on `succeeded` implying `attempted` and should go through
/// [`BridgeAttempt::was_attempted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeAttempt {
    pub attempted: bool,
    pub succeeded: bool,
}

impl BridgeAttempt {
    pub const NOT_ATTEMPTED: BridgeAttempt = BridgeAttempt {
        attempted: false,
        succeeded: false,
    };

    pub fn new(attempted: bool, succeeded: bool) -> Self {
        Self {
            attempted,
            succeeded,
        }
    }

    /// True when the bridge was attempted, counting a recorded success as
    /// an attempt even if the attempt box was left unchecked.
    pub fn was_attempted(&self) -> bool {
        self.attempted || self.succeeded
    }
}

// Teleoperated hoop values; autonomous hoops earn a flat bonus on top.
const TELEOP_HIGH_POINTS: i32 = 3;
const TELEOP_MID_POINTS: i32 = 2;
const TELEOP_LOW_POINTS: i32 = 1;
const AUTONOMOUS_BONUS: i32 = 3;
const BRIDGE_POINTS: i32 = 10;

fn hoop_points(count: &HoopCount, bonus: i32) -> i32 {
    count.high as i32 * (TELEOP_HIGH_POINTS + bonus)
        + count.mid as i32 * (TELEOP_MID_POINTS + bonus)
        + count.low as i32 * (TELEOP_LOW_POINTS + bonus)
}

/// Points for one team in one match.
///
/// Only the first team bridge is worth points under the current rule set;
/// the coop bridge and second team bridge are tracked on the form and in
/// the stats but score nothing. That asymmetry is the game rule, not an
/// oversight.
pub fn calculate_score(
    autonomous: &HoopCount,
    teleoperated: &HoopCount,
    _coop: &BridgeAttempt,
    bridge1: &BridgeAttempt,
    _bridge2: &BridgeAttempt,
) -> i32 {
    let mut score = hoop_points(teleoperated, 0) + hoop_points(autonomous, AUTONOMOUS_BONUS);
    if bridge1.succeeded {
        score += BRIDGE_POINTS;
    }
    score
}
