//! Domain models and the persistence boundary.

pub mod models;
pub mod repository;

pub use models::{Alliance, AllianceScores, Event, Location, Match, Team, TeamMatchRecord};
pub use repository::{Datastore, InMemoryDatastore};
