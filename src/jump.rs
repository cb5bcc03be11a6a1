//! The jump box: resolves a typed-in team number or tag to the page it
//! names.

use axum::{extract::Query, response::Redirect};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::shared::AppError;
use crate::tags::{EventTag, MatchTag, MatchTeamTag};

#[derive(Debug, Deserialize)]
pub struct JumpQuery {
    pub q: String,
}

/// HTTP handler for the jump box
///
/// GET /jump?q=... resolves the query in a fixed order: an all-digit
/// query is a team number, then the event, match, and match-team parsers
/// get a turn. The kinds cannot shadow one another because each parser
/// rejects the other kinds' encodings, so the order only decides which
/// error the caller sees.
#[instrument(name = "jump")]
pub async fn jump(Query(query): Query<JumpQuery>) -> Result<Redirect, AppError> {
    let q = query.q.trim();
    if q.is_empty() {
        return Err(AppError::BadRequest("empty jump query".to_string()));
    }

    let target = resolve(q).ok_or_else(|| AppError::NotFound(format!("nothing matches {q:?}")))?;
    info!(query = q, target = %target, "jump resolved");
    Ok(Redirect::to(&target))
}

fn resolve(q: &str) -> Option<String> {
    if q.chars().all(|c| c.is_ascii_digit()) {
        return Some(format!("/team/{q}"));
    }
    if let Ok(tag) = q.parse::<EventTag>() {
        return Some(event_path(&tag));
    }
    if let Ok(tag) = q.parse::<MatchTag>() {
        return Some(match_path(&tag));
    }
    if let Ok(tag) = q.parse::<MatchTeamTag>() {
        return Some(format!(
            "{}/team/{}",
            match_path(&tag.match_tag),
            tag.team_number
        ));
    }
    None
}

fn event_path(tag: &EventTag) -> String {
    format!("/event/{}/{}", tag.year, tag.location_code)
}

fn match_path(tag: &MatchTag) -> String {
    format!(
        "{}/match/{}/{}",
        event_path(&tag.event),
        tag.category,
        tag.match_number
    )
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        routing::get,
        Router,
    };
    use rstest::rstest;
    use tower::ServiceExt; // for `oneshot`

    use super::*;

    fn app() -> Router {
        Router::new().route("/jump", get(jump))
    }

    async fn jump_to(query: &str) -> (StatusCode, Option<String>) {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(format!("/jump?q={query}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|value| value.to_str().unwrap().to_string());
        (response.status(), location)
    }

    #[rstest]
    #[case("973", "/team/973")]
    #[case("sdc2011", "/event/2011/sdc")]
    #[case("sdc20110001", "/event/2011/sdc/match/qualification/1")]
    #[case("sdc20113001", "/event/2011/sdc/match/final/1")]
    #[case("sdc20110001973", "/event/2011/sdc/match/qualification/1/team/973")]
    #[tokio::test]
    async fn resolves_in_order(#[case] query: &str, #[case] expected: &str) {
        let (status, location) = jump_to(query).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some(expected));
    }

    #[tokio::test]
    async fn garbage_is_not_found() {
        let (status, _) = jump_to("SDC2011").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn truncated_tag_is_not_found() {
        let (status, _) = jump_to("sdc201").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
