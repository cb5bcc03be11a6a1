//! The full route table, shared by the binary and the integration tests.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::shared::AppState;
use crate::{event, jump, matches, team};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/team", get(team::handlers::team_index))
        .route("/team/:number", get(team::handlers::view_team))
        .route("/event", get(event::handlers::event_index))
        .route("/event/:year/:location", get(event::handlers::view_event))
        .route(
            "/event/:year/:location/teams.csv",
            get(event::handlers::event_spreadsheet),
        )
        .route(
            "/event/:year/:location/team/:team",
            get(event::handlers::team_matches),
        )
        .route(
            "/event/:year/:location/match/:category/:number",
            get(matches::handlers::view_match),
        )
        .route(
            "/event/:year/:location/match/:category/:number/score",
            post(matches::handlers::score_match),
        )
        .route(
            "/event/:year/:location/match/:category/:number/team/:team",
            get(matches::handlers::view_match_team).post(matches::handlers::edit_match_team),
        )
        .route("/jump", get(jump::jump))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
