use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::parser::{MATCH_NUMBER_WIDTH, YEAR_WIDTH};

/// The competition phase a match belongs to.
///
/// The declaration order is the display order of a match list, and each
/// category owns one digit of the tag encoding. The string form (via strum)
/// is the slug used in route paths.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum MatchCategory {
    #[serde(rename = "qualification")]
    #[strum(serialize = "qualification")]
    Qualification,
    #[serde(rename = "quarter")]
    #[strum(serialize = "quarter")]
    QuarterFinal,
    #[serde(rename = "semifinal")]
    #[strum(serialize = "semifinal")]
    SemiFinal,
    #[serde(rename = "final")]
    #[strum(serialize = "final")]
    Final,
}

impl MatchCategory {
    /// Human-readable name for page headings and printed forms.
    pub fn display_name(&self) -> &'static str {
        match self {
            MatchCategory::Qualification => "Qualification",
            MatchCategory::QuarterFinal => "Quarter-Final",
            MatchCategory::SemiFinal => "Semi-Final",
            MatchCategory::Final => "Final",
        }
    }

    /// The single tag digit for this category.
    pub fn digit(&self) -> char {
        match self {
            MatchCategory::Qualification => '0',
            MatchCategory::QuarterFinal => '1',
            MatchCategory::SemiFinal => '2',
            MatchCategory::Final => '3',
        }
    }

    /// Inverse of [`MatchCategory::digit`].
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(MatchCategory::Qualification),
            '1' => Some(MatchCategory::QuarterFinal),
            '2' => Some(MatchCategory::SemiFinal),
            '3' => Some(MatchCategory::Final),
            _ => None,
        }
    }
}

/// Identity of one competition instance: location code plus year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventTag {
    pub location_code: String,
    pub year: u32,
}

impl EventTag {
    pub fn new(location_code: impl Into<String>, year: u32) -> Self {
        Self {
            location_code: location_code.into(),
            year,
        }
    }
}

impl fmt::Display for EventTag {
    /// Encodes as `<location><year>` with the year zero-padded to four
    /// digits. A year wider than four digits widens the field rather than
    /// truncating; such a value no longer round-trips through the parser.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:0width$}",
            self.location_code,
            self.year,
            width = YEAR_WIDTH
        )
    }
}

/// Identity of one match within an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchTag {
    pub event: EventTag,
    pub category: MatchCategory,
    pub match_number: u32,
}

impl MatchTag {
    pub fn new(event: EventTag, category: MatchCategory, match_number: u32) -> Self {
        Self {
            event,
            category,
            match_number,
        }
    }
}

impl fmt::Display for MatchTag {
    /// Encodes as `<event tag><category digit><match number>` with the match
    /// number zero-padded to three digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{:0width$}",
            self.event,
            self.category.digit(),
            self.match_number,
            width = MATCH_NUMBER_WIDTH
        )
    }
}

/// Identity of one team's entry within one match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchTeamTag {
    pub match_tag: MatchTag,
    pub team_number: u32,
}

impl MatchTeamTag {
    pub fn new(match_tag: MatchTag, team_number: u32) -> Self {
        Self {
            match_tag,
            team_number,
        }
    }
}

impl fmt::Display for MatchTeamTag {
    /// Encodes as `<match tag><team number>`; the team number is variable
    /// width with no padding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.match_tag, self.team_number)
    }
}
