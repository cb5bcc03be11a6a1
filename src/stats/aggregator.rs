use tracing::warn;

use super::models::TeamEventStats;
use crate::store::models::Match;

/// Folds one team's matches at one event into a [`TeamEventStats`].
///
/// A single linear pass with no ordering dependency; every call allocates
/// its own accumulator, so recomputing over the same input is idempotent.
/// A match that somehow lacks a record for the team is logged and skipped,
/// never a panic.
pub fn team_event_stats(team_number: u32, matches: &[Match]) -> TeamEventStats {
    let mut stats = TeamEventStats::new(team_number);
    for m in matches {
        let Some(record) = m.team_record(team_number) else {
            warn!(
                team_number,
                category = %m.category,
                match_number = m.number,
                "match has no record for team, skipping"
            );
            continue;
        };
        stats.record(record, m.is_scored());
    }
    stats
}
