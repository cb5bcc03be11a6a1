use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{error, info, instrument};

use super::types::{TeamDetailResponse, TeamEventEntry, TeamIndexQuery, TeamIndexResponse, TeamViewQuery};
use crate::paging::Paginator;
use crate::shared::{current_year, AppError, AppState};
use crate::stats::team_event_stats;

pub(crate) const TEAMS_PER_PAGE: usize = 50;

/// HTTP handler for the paginated team listing
///
/// GET /team?page=N — an absent or unparsable page means page 1; a page
/// past the end is a 404.
#[instrument(name = "team_index", skip(state))]
pub async fn team_index(
    State(state): State<AppState>,
    Query(query): Query<TeamIndexQuery>,
) -> Result<Json<TeamIndexResponse>, AppError> {
    let page_number: usize = query
        .page
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(1);

    let teams = state.datastore.teams().await?;
    let paginator = Paginator::new(teams.as_slice(), TEAMS_PER_PAGE).map_err(|err| {
        error!(%err, "team paginator misconfigured");
        AppError::Internal
    })?;
    let page = paginator
        .page(page_number)
        .ok_or_else(|| AppError::NotFound(format!("no page {page_number}")))?;

    info!(
        page = page.number(),
        page_count = paginator.page_count(),
        "listed teams"
    );
    Ok(Json(TeamIndexResponse {
        teams: page.fetch(),
        page: page.number(),
        page_count: paginator.page_count(),
        has_next: page.has_next(),
        has_previous: page.has_previous(),
    }))
}

/// HTTP handler for a team's detail page with per-event stats
///
/// GET /team/{number}?year=YYYY (defaults to the current year)
#[instrument(name = "view_team", skip(state))]
pub async fn view_team(
    State(state): State<AppState>,
    Path(number): Path<u32>,
    Query(query): Query<TeamViewQuery>,
) -> Result<Json<TeamDetailResponse>, AppError> {
    let team = state
        .datastore
        .fetch_team(number)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no team {number}")))?;

    let year = query.year.unwrap_or_else(current_year);
    let event_tags = state.datastore.events_for_team(year, number).await?;
    let mut events = Vec::with_capacity(event_tags.len());
    for tag in event_tags {
        let matches = state.datastore.team_event_matches(&tag, number).await?;
        events.push(TeamEventEntry {
            event_tag: tag.to_string(),
            stats: team_event_stats(number, &matches),
        });
    }

    Ok(Json(TeamDetailResponse { team, events }))
}
