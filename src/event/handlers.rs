use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::{error, info, instrument};

use super::types::{
    EventDetailResponse, EventIndexQuery, EventResponse, EventTeamResponse, MatchResponse,
};
use crate::reports;
use crate::shared::{current_year, AppError, AppState};
use crate::stats::team_event_stats;
use crate::tags::EventTag;

pub(crate) fn route_event_tag(year: u32, location: String) -> EventTag {
    EventTag::new(location, year)
}

/// HTTP handler for the event index
///
/// GET /event?year=YYYY (defaults to the current year)
#[instrument(name = "event_index", skip(state))]
pub async fn event_index(
    State(state): State<AppState>,
    Query(query): Query<EventIndexQuery>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let year = query.year.unwrap_or_else(current_year);
    let events = state.datastore.events(year).await?;
    info!(year, event_count = events.len(), "listed events");
    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

/// HTTP handler for one event's detail: its matches and attending teams
///
/// GET /event/{year}/{location}
#[instrument(name = "view_event", skip(state))]
pub async fn view_event(
    State(state): State<AppState>,
    Path((year, location)): Path<(u32, String)>,
) -> Result<Json<EventDetailResponse>, AppError> {
    let tag = route_event_tag(year, location);
    let event = state
        .datastore
        .fetch_event(&tag)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no event {tag}")))?;

    let matches = state.datastore.fetch_matches(&tag).await?;
    let teams = state.datastore.fetch_teams(&event.teams).await?;

    Ok(Json(EventDetailResponse {
        tag: tag.to_string(),
        location: event.location,
        date: event.date,
        matches: matches
            .into_iter()
            .map(|m| MatchResponse::new(&tag, m))
            .collect(),
        teams,
    }))
}

/// HTTP handler for one team's schedule and stats at an event
///
/// GET /event/{year}/{location}/team/{team}
#[instrument(name = "event_team_matches", skip(state))]
pub async fn team_matches(
    State(state): State<AppState>,
    Path((year, location, team_number)): Path<(u32, String, u32)>,
) -> Result<Json<EventTeamResponse>, AppError> {
    let tag = route_event_tag(year, location);
    let event = state
        .datastore
        .fetch_event(&tag)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no event {tag}")))?;
    if !event.has_team(team_number) {
        return Err(AppError::NotFound(format!(
            "team {team_number} is not at event {tag}"
        )));
    }

    let matches = state.datastore.team_event_matches(&tag, team_number).await?;
    let stats = team_event_stats(team_number, &matches);

    Ok(Json(EventTeamResponse {
        event_tag: tag.to_string(),
        team_number,
        matches: matches
            .into_iter()
            .map(|m| MatchResponse::new(&tag, m))
            .collect(),
        stats,
    }))
}

/// HTTP handler for the per-team spreadsheet export
///
/// GET /event/{year}/{location}/teams.csv
#[instrument(name = "event_spreadsheet", skip(state))]
pub async fn event_spreadsheet(
    State(state): State<AppState>,
    Path((year, location)): Path<(u32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let tag = route_event_tag(year, location);
    let event = state
        .datastore
        .fetch_event(&tag)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no event {tag}")))?;

    let mut all_stats = Vec::with_capacity(event.teams.len());
    for &team_number in &event.teams {
        let matches = state.datastore.team_event_matches(&tag, team_number).await?;
        all_stats.push(team_event_stats(team_number, &matches));
    }

    let mut body = Vec::new();
    reports::write_team_spreadsheet(&mut body, &all_stats).map_err(|err| {
        error!(%err, tag = %tag, "failed to write team spreadsheet");
        AppError::Internal
    })?;

    info!(tag = %tag, team_count = all_stats.len(), "exported team spreadsheet");
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=teams.csv"),
        ],
        body,
    ))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt; // for `oneshot`

    use super::*;
    use crate::shared::test_utils::seeded_state;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/event", get(event_index))
            .route("/event/:year/:location", get(view_event))
            .route("/event/:year/:location/teams.csv", get(event_spreadsheet))
            .route("/event/:year/:location/team/:team", get(team_matches))
            .with_state(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn event_index_lists_events_for_year() {
        let state = seeded_state().await;
        let (status, body) = get_json(app(state), "/event?year=2011").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["tag"], "sdc2011");
    }

    #[tokio::test]
    async fn view_event_returns_matches_and_teams() {
        let state = seeded_state().await;
        let (status, body) = get_json(app(state), "/event/2011/sdc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tag"], "sdc2011");
        assert_eq!(body["matches"].as_array().unwrap().len(), 2);
        assert_eq!(body["matches"][0]["tag"], "sdc20110001");
        assert_eq!(body["matches"][0]["display_name"], "Qualification #1");
        assert_eq!(body["teams"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_event_is_not_found() {
        let state = seeded_state().await;
        let (status, _) = get_json(app(state), "/event/2011/zzz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn team_matches_aggregates_stats() {
        let state = seeded_state().await;
        let (status, body) = get_json(app(state), "/event/2011/sdc/team/973").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["team_number"], 973);
        // both seeded matches include team 973, but only one is scored
        assert_eq!(body["matches"].as_array().unwrap().len(), 2);
        assert_eq!(body["stats"]["match_count"], 1);
        assert_eq!(body["stats"]["total_points"], 16);
    }

    #[tokio::test]
    async fn team_not_at_event_is_not_found() {
        let state = seeded_state().await;
        let (status, _) = get_json(app(state), "/event/2011/sdc/team/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn spreadsheet_has_pinned_header_and_a_row_per_team() {
        let state = seeded_state().await;
        let response = app(state)
            .oneshot(
                Request::builder()
                    .uri("/event/2011/sdc/teams.csv")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("Team #,Matches Played,"));
        assert_eq!(lines.clone().count(), 2);
        assert!(lines.any(|line| line.starts_with("973,1,0,0,16,")));
    }
}
