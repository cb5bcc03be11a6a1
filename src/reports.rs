//! Spreadsheet export of per-team event statistics.

use std::io::Write;

use crate::stats::TeamEventStats;

/// Column order of the team spreadsheet. External consumers align on this
/// header, so the order is part of the contract.
pub const TEAM_SPREADSHEET_HEADER: [&str; 19] = [
    "Team #",
    "Matches Played",
    "No-Shows",
    "Failures",
    "Average Score",
    "Average Auto Hoops",
    "Average Teleop Hoops",
    "Coop Bridge Attempts",
    "Coop Bridge Successes",
    "Bridge 1 Attempts",
    "Bridge 1 Successes",
    "Bridge 2 Attempts",
    "Bridge 2 Successes",
    "Auto High",
    "Auto Mid",
    "Auto Low",
    "Teleop High",
    "Teleop Mid",
    "Teleop Low",
];

/// Writes one CSV row per entry in `stats`, preceded by the pinned header.
pub fn write_team_spreadsheet<W: Write>(
    writer: W,
    stats: &[TeamEventStats],
) -> Result<(), csv::Error> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(TEAM_SPREADSHEET_HEADER)?;
    for s in stats {
        w.write_record(&[
            s.team_number.to_string(),
            s.match_count.to_string(),
            s.no_show_count.to_string(),
            s.failure_count.to_string(),
            format_average(s.average_score()),
            format_average(s.average_autonomous()),
            format_average(s.average_teleoperated()),
            s.coop_bridge.attempt_count.to_string(),
            s.coop_bridge.success_count.to_string(),
            s.bridge1.attempt_count.to_string(),
            s.bridge1.success_count.to_string(),
            s.bridge2.attempt_count.to_string(),
            s.bridge2.success_count.to_string(),
            s.autonomous.high.to_string(),
            s.autonomous.mid.to_string(),
            s.autonomous.low.to_string(),
            s.teleoperated.high.to_string(),
            s.teleoperated.mid.to_string(),
            s.teleoperated.low.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Shortest representation that round-trips, matching how the rates are
/// shown elsewhere.
fn format_average(value: f64) -> String {
    format!("{value}")
}
