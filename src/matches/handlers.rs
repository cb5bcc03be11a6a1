use std::str::FromStr;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use super::types::{MatchTeamResponse, ScoreForm, TeamEntryForm};
use crate::event::types::MatchResponse;
use crate::shared::{AppError, AppState};
use crate::store::models::{AllianceScores, Match};
use crate::tags::{EventTag, MatchCategory, MatchTag};

pub(crate) fn route_match_tag(
    year: u32,
    location: String,
    category: &str,
    number: u32,
) -> Result<MatchTag, AppError> {
    let category = MatchCategory::from_str(category)
        .map_err(|_| AppError::NotFound(format!("no match category {category:?}")))?;
    Ok(MatchTag::new(EventTag::new(location, year), category, number))
}

async fn fetch_match(state: &AppState, tag: &MatchTag) -> Result<Match, AppError> {
    if state.datastore.fetch_event(&tag.event).await?.is_none() {
        return Err(AppError::NotFound(format!("no event {}", tag.event)));
    }
    state
        .datastore
        .fetch_match(tag)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no match {tag}")))
}

/// HTTP handler for a match's detail
///
/// GET /event/{year}/{location}/match/{category}/{number}
#[instrument(name = "view_match", skip(state))]
pub async fn view_match(
    State(state): State<AppState>,
    Path((year, location, category, number)): Path<(u32, String, String, u32)>,
) -> Result<Json<MatchResponse>, AppError> {
    let tag = route_match_tag(year, location, &category, number)?;
    let m = fetch_match(&state, &tag).await?;
    Ok(Json(MatchResponse::new(&tag.event, m)))
}

/// HTTP handler for recording a match's official alliance scores
///
/// POST /event/{year}/{location}/match/{category}/{number}/score
#[instrument(name = "score_match", skip(state, form))]
pub async fn score_match(
    State(state): State<AppState>,
    Path((year, location, category, number)): Path<(u32, String, String, u32)>,
    Json(form): Json<ScoreForm>,
) -> Result<Json<MatchResponse>, AppError> {
    let tag = route_match_tag(year, location, &category, number)?;
    fetch_match(&state, &tag).await?;

    let scores = AllianceScores {
        red: form.red_score,
        blue: form.blue_score,
    };
    state.datastore.update_match_score(&tag, scores).await?;
    info!(tag = %tag, red = scores.red, blue = scores.blue, "recorded match score");

    let m = fetch_match(&state, &tag).await?;
    Ok(Json(MatchResponse::new(&tag.event, m)))
}

/// HTTP handler for one team's current scout record in a match
///
/// GET /event/{year}/{location}/match/{category}/{number}/team/{team}
#[instrument(name = "view_match_team", skip(state))]
pub async fn view_match_team(
    State(state): State<AppState>,
    Path((year, location, category, number, team_number)): Path<(u32, String, String, u32, u32)>,
) -> Result<Json<MatchTeamResponse>, AppError> {
    let tag = route_match_tag(year, location, &category, number)?;
    let m = fetch_match(&state, &tag).await?;
    let record = m.team_record(team_number).cloned().ok_or_else(|| {
        AppError::NotFound(format!("team {team_number} is not in match {tag}"))
    })?;
    Ok(Json(MatchTeamResponse {
        tag: m.team_tag(&tag.event, team_number).to_string(),
        record,
    }))
}

/// HTTP handler for a scout form submission
///
/// POST /event/{year}/{location}/match/{category}/{number}/team/{team}
///
/// Overwrites the team's record for this match, recomputing the stored
/// score from the submitted counters before persisting, so the two are
/// never out of step.
#[instrument(name = "edit_match_team", skip(state, form))]
pub async fn edit_match_team(
    State(state): State<AppState>,
    Path((year, location, category, number, team_number)): Path<(u32, String, String, u32, u32)>,
    Json(form): Json<TeamEntryForm>,
) -> Result<Json<MatchTeamResponse>, AppError> {
    let tag = route_match_tag(year, location, &category, number)?;
    let m = fetch_match(&state, &tag).await?;
    let mut record = m.team_record(team_number).cloned().ok_or_else(|| {
        AppError::NotFound(format!("team {team_number} is not in match {tag}"))
    })?;

    record.autonomous = form.autonomous;
    record.teleoperated = form.teleoperated;
    record.coop_bridge = form.coop_bridge.into();
    record.bridge1 = form.bridge1.into();
    record.bridge2 = form.bridge2.into();
    record.scout_name = form.scout_name;
    record.failure = form.failure;
    record.no_show = form.no_show;
    record.recompute_score();

    state
        .datastore
        .update_match_team(&tag, record.clone())
        .await?;
    info!(
        tag = %tag,
        team_number,
        score = record.score,
        scout = %record.scout_name,
        "saved scout entry"
    );

    Ok(Json(MatchTeamResponse {
        tag: m.team_tag(&tag.event, team_number).to_string(),
        record,
    }))
}
