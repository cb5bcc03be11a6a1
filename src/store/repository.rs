use async_trait::async_trait;
use chrono::Datelike;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::{AllianceScores, Event, Match, Team, TeamMatchRecord};
use crate::shared::AppError;
use crate::tags::{EventTag, MatchTag};

/// Boundary to the persistence layer. Handlers and reports only ever talk
/// to this trait; the backing store (document database in production, a
/// hash map in development and tests) is an implementation detail.
#[async_trait]
pub trait Datastore: Send + Sync {
    /// All teams, sorted by team number.
    async fn teams(&self) -> Result<Vec<Team>, AppError>;

    /// Events held in `year`, sorted by date.
    async fn events(&self, year: i32) -> Result<Vec<Event>, AppError>;

    async fn fetch_team(&self, number: u32) -> Result<Option<Team>, AppError>;

    /// The subset of `numbers` that exist, sorted by team number.
    async fn fetch_teams(&self, numbers: &[u32]) -> Result<Vec<Team>, AppError>;

    async fn fetch_event(&self, tag: &EventTag) -> Result<Option<Event>, AppError>;

    /// An event's matches in display order: category order, then number.
    async fn fetch_matches(&self, tag: &EventTag) -> Result<Vec<Match>, AppError>;

    async fn fetch_match(&self, tag: &MatchTag) -> Result<Option<Match>, AppError>;

    /// The subset of an event's matches that include `team_number`, in
    /// display order.
    async fn team_event_matches(
        &self,
        tag: &EventTag,
        team_number: u32,
    ) -> Result<Vec<Match>, AppError>;

    /// Tags of the events in `year` that `team_number` attended, by date.
    async fn events_for_team(
        &self,
        year: i32,
        team_number: u32,
    ) -> Result<Vec<EventTag>, AppError>;

    async fn upsert_team(&self, team: &Team) -> Result<(), AppError>;

    async fn upsert_event(&self, event: &Event) -> Result<(), AppError>;

    async fn upsert_match(&self, tag: &EventTag, m: &Match) -> Result<(), AppError>;

    async fn update_match_score(
        &self,
        tag: &MatchTag,
        scores: AllianceScores,
    ) -> Result<(), AppError>;

    /// Overwrites one team's record within one match as a single atomic
    /// step, so a concurrently computed aggregate never sees a stored score
    /// inconsistent with the record's performance fields.
    async fn update_match_team(
        &self,
        tag: &MatchTag,
        record: TeamMatchRecord,
    ) -> Result<(), AppError>;
}

#[derive(Default)]
struct InMemoryInner {
    teams: BTreeMap<u32, Team>,
    events: HashMap<String, Event>,
    /// Matches per event, keyed by the event tag string.
    matches: HashMap<String, Vec<Match>>,
}

/// In-memory implementation of [`Datastore`] for development and testing.
/// Data is lost when the process exits.
#[derive(Default)]
pub struct InMemoryDatastore {
    inner: Mutex<InMemoryInner>,
}

impl InMemoryDatastore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sort_for_display(matches: &mut [Match]) {
    matches.sort_by_key(|m| (m.category, m.number));
}

#[async_trait]
impl Datastore for InMemoryDatastore {
    #[instrument(skip(self))]
    async fn teams(&self) -> Result<Vec<Team>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.teams.values().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn events(&self, year: i32) -> Result<Vec<Event>, AppError> {
        let inner = self.inner.lock().unwrap();
        let mut events: Vec<Event> = inner
            .events
            .values()
            .filter(|event| event.date.year() == year)
            .cloned()
            .collect();
        events.sort_by_key(|event| event.date);
        Ok(events)
    }

    #[instrument(skip(self))]
    async fn fetch_team(&self, number: u32) -> Result<Option<Team>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.teams.get(&number).cloned())
    }

    #[instrument(skip(self))]
    async fn fetch_teams(&self, numbers: &[u32]) -> Result<Vec<Team>, AppError> {
        let inner = self.inner.lock().unwrap();
        let mut teams: Vec<Team> = numbers
            .iter()
            .filter_map(|number| inner.teams.get(number).cloned())
            .collect();
        teams.sort_by_key(|team| team.number);
        Ok(teams)
    }

    #[instrument(skip(self), fields(tag = %tag))]
    async fn fetch_event(&self, tag: &EventTag) -> Result<Option<Event>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.events.get(&tag.to_string()).cloned())
    }

    #[instrument(skip(self), fields(tag = %tag))]
    async fn fetch_matches(&self, tag: &EventTag) -> Result<Vec<Match>, AppError> {
        let inner = self.inner.lock().unwrap();
        let mut matches = inner
            .matches
            .get(&tag.to_string())
            .cloned()
            .unwrap_or_default();
        sort_for_display(&mut matches);
        Ok(matches)
    }

    #[instrument(skip(self), fields(tag = %tag))]
    async fn fetch_match(&self, tag: &MatchTag) -> Result<Option<Match>, AppError> {
        let inner = self.inner.lock().unwrap();
        let matches = inner.matches.get(&tag.event.to_string());
        Ok(matches.and_then(|matches| {
            matches
                .iter()
                .find(|m| m.category == tag.category && m.number == tag.match_number)
                .cloned()
        }))
    }

    #[instrument(skip(self), fields(tag = %tag))]
    async fn team_event_matches(
        &self,
        tag: &EventTag,
        team_number: u32,
    ) -> Result<Vec<Match>, AppError> {
        let mut matches = self.fetch_matches(tag).await?;
        matches.retain(|m| m.has_team(team_number));
        Ok(matches)
    }

    #[instrument(skip(self))]
    async fn events_for_team(
        &self,
        year: i32,
        team_number: u32,
    ) -> Result<Vec<EventTag>, AppError> {
        let events = self.events(year).await?;
        Ok(events
            .iter()
            .filter(|event| event.has_team(team_number))
            .map(Event::tag)
            .collect())
    }

    #[instrument(skip(self, team), fields(team_number = team.number))]
    async fn upsert_team(&self, team: &Team) -> Result<(), AppError> {
        debug!(team_number = team.number, name = %team.name, "upserting team");
        let mut inner = self.inner.lock().unwrap();
        inner.teams.insert(team.number, team.clone());
        Ok(())
    }

    #[instrument(skip(self, event), fields(tag = %event.tag()))]
    async fn upsert_event(&self, event: &Event) -> Result<(), AppError> {
        debug!(tag = %event.tag(), "upserting event");
        let mut inner = self.inner.lock().unwrap();
        inner.events.insert(event.tag().to_string(), event.clone());
        Ok(())
    }

    #[instrument(skip(self, m), fields(tag = %tag, category = %m.category, number = m.number))]
    async fn upsert_match(&self, tag: &EventTag, m: &Match) -> Result<(), AppError> {
        let mut inner = self.inner.lock().unwrap();
        let matches = inner.matches.entry(tag.to_string()).or_default();
        match matches
            .iter_mut()
            .find(|existing| existing.category == m.category && existing.number == m.number)
        {
            Some(existing) => *existing = m.clone(),
            None => matches.push(m.clone()),
        }
        Ok(())
    }

    #[instrument(skip(self), fields(tag = %tag))]
    async fn update_match_score(
        &self,
        tag: &MatchTag,
        scores: AllianceScores,
    ) -> Result<(), AppError> {
        let mut inner = self.inner.lock().unwrap();
        let matches = inner
            .matches
            .get_mut(&tag.event.to_string())
            .ok_or_else(|| AppError::NotFound(format!("no matches for event {}", tag.event)))?;
        let m = matches
            .iter_mut()
            .find(|m| m.category == tag.category && m.number == tag.match_number)
            .ok_or_else(|| AppError::NotFound(format!("no match {tag}")))?;
        m.scores = Some(scores);
        Ok(())
    }

    #[instrument(skip(self, record), fields(tag = %tag, team_number = record.team))]
    async fn update_match_team(
        &self,
        tag: &MatchTag,
        record: TeamMatchRecord,
    ) -> Result<(), AppError> {
        let mut inner = self.inner.lock().unwrap();
        let matches = inner
            .matches
            .get_mut(&tag.event.to_string())
            .ok_or_else(|| AppError::NotFound(format!("no matches for event {}", tag.event)))?;
        let m = matches
            .iter_mut()
            .find(|m| m.category == tag.category && m.number == tag.match_number)
            .ok_or_else(|| AppError::NotFound(format!("no match {tag}")))?;
        let Some(existing) = m.team_record_mut(record.team) else {
            warn!(team_number = record.team, tag = %tag, "team is not in match");
            return Err(AppError::NotFound(format!(
                "team {} is not in match {tag}",
                record.team
            )));
        };
        *existing = record;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::store::models::{Alliance, Location};
    use crate::tags::MatchCategory;

    fn sample_event(code: &str, year: i32, day: u32, teams: Vec<u32>) -> Event {
        Event {
            location: Location {
                name: code.to_uppercase(),
                code: code.to_string(),
            },
            date: NaiveDate::from_ymd_opt(year, 3, day).unwrap(),
            teams,
        }
    }

    fn match_with_teams(category: MatchCategory, number: u32, teams: &[(u32, Alliance)]) -> Match {
        let mut m = Match::new(category, number);
        for (team, alliance) in teams {
            m.teams.push(TeamMatchRecord::new(*team, *alliance));
        }
        m
    }

    #[tokio::test]
    async fn teams_are_sorted_by_number() {
        let store = InMemoryDatastore::new();
        store.upsert_team(&Team::new(973, "Greybots")).await.unwrap();
        store.upsert_team(&Team::new(1, "The Juggernauts")).await.unwrap();
        store.upsert_team(&Team::new(254, "The Cheesy Poofs")).await.unwrap();

        let teams = store.teams().await.unwrap();
        let numbers: Vec<u32> = teams.iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![1, 254, 973]);

        let subset = store.fetch_teams(&[973, 1, 42]).await.unwrap();
        let numbers: Vec<u32> = subset.iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![1, 973]);
    }

    #[tokio::test]
    async fn events_filter_by_year_and_sort_by_date() {
        let store = InMemoryDatastore::new();
        store
            .upsert_event(&sample_event("bbb", 2011, 20, vec![1]))
            .await
            .unwrap();
        store
            .upsert_event(&sample_event("aaa", 2011, 5, vec![1]))
            .await
            .unwrap();
        store
            .upsert_event(&sample_event("old", 2010, 1, vec![1]))
            .await
            .unwrap();

        let events = store.events(2011).await.unwrap();
        let codes: Vec<&str> = events.iter().map(|e| e.location.code.as_str()).collect();
        assert_eq!(codes, vec!["aaa", "bbb"]);

        let tags = store.events_for_team(2011, 1).await.unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].to_string(), "aaa2011");
    }

    #[tokio::test]
    async fn matches_sort_by_category_then_number() {
        let store = InMemoryDatastore::new();
        let tag = EventTag::new("sdc", 2011);
        store
            .upsert_event(&sample_event("sdc", 2011, 12, vec![1, 2]))
            .await
            .unwrap();
        for (category, number) in [
            (MatchCategory::Final, 1),
            (MatchCategory::Qualification, 12),
            (MatchCategory::Qualification, 2),
            (MatchCategory::SemiFinal, 1),
        ] {
            store
                .upsert_match(
                    &tag,
                    &match_with_teams(category, number, &[(1, Alliance::Red)]),
                )
                .await
                .unwrap();
        }

        let matches = store.fetch_matches(&tag).await.unwrap();
        let order: Vec<(MatchCategory, u32)> =
            matches.iter().map(|m| (m.category, m.number)).collect();
        assert_eq!(
            order,
            vec![
                (MatchCategory::Qualification, 2),
                (MatchCategory::Qualification, 12),
                (MatchCategory::SemiFinal, 1),
                (MatchCategory::Final, 1),
            ]
        );
    }

    #[tokio::test]
    async fn update_match_team_overwrites_one_record() {
        let store = InMemoryDatastore::new();
        let tag = EventTag::new("sdc", 2011);
        store
            .upsert_match(
                &tag,
                &match_with_teams(
                    MatchCategory::Qualification,
                    42,
                    &[(1, Alliance::Red), (2, Alliance::Blue)],
                ),
            )
            .await
            .unwrap();

        let match_tag = MatchTag::new(tag.clone(), MatchCategory::Qualification, 42);
        let mut record = TeamMatchRecord::new(1, Alliance::Red);
        record.teleoperated.high = 2;
        record.scout_name = "casey".to_string();
        record.recompute_score();
        store
            .update_match_team(&match_tag, record.clone())
            .await
            .unwrap();

        let stored = store.fetch_match(&match_tag).await.unwrap().unwrap();
        assert_eq!(stored.team_record(1), Some(&record));
        // the other record is untouched
        assert_eq!(stored.team_record(2).unwrap().score, 0);

        // a team that is not in the match is a NotFound, not a new record
        let stray = TeamMatchRecord::new(7, Alliance::Red);
        assert!(store.update_match_team(&match_tag, stray).await.is_err());
    }

    #[tokio::test]
    async fn update_match_score_marks_match_scored() {
        let store = InMemoryDatastore::new();
        let tag = EventTag::new("sdc", 2011);
        store
            .upsert_match(
                &tag,
                &match_with_teams(MatchCategory::Qualification, 1, &[(1, Alliance::Red)]),
            )
            .await
            .unwrap();

        let match_tag = MatchTag::new(tag.clone(), MatchCategory::Qualification, 1);
        store
            .update_match_score(&match_tag, AllianceScores { red: 30, blue: 12 })
            .await
            .unwrap();

        let stored = store.fetch_match(&match_tag).await.unwrap().unwrap();
        assert!(stored.is_scored());
        assert_eq!(stored.scores, Some(AllianceScores { red: 30, blue: 12 }));

        let missing = MatchTag::new(tag, MatchCategory::Final, 9);
        assert!(store
            .update_match_score(&missing, AllianceScores { red: 0, blue: 0 })
            .await
            .is_err());
    }
}
