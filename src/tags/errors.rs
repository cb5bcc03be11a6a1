use thiserror::Error;

/// A tag parsing failure.
///
/// Every variant carries the full input string so callers can echo the tag
/// exactly as it was typed or scanned; variants that can point at a specific
/// field also carry the offending substring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("invalid tag {tag:?}: tag must begin with a location code")]
    EmptyLocationCode { tag: String },

    #[error("invalid tag {tag:?}: location code must be lowercase (at {code:?})")]
    InvalidLocationCode { tag: String, code: String },

    #[error("invalid tag {tag:?}: 4-digit year must follow location code (at {found:?})")]
    MissingYear { tag: String, found: String },

    #[error("invalid tag {tag:?}: bad year (at {found:?})")]
    InvalidYear { tag: String, found: String },

    #[error("invalid tag {tag:?}: match category must be 0, 1, 2, or 3 (at {found:?})")]
    InvalidCategory { tag: String, found: String },

    #[error("invalid tag {tag:?}: missing 3-digit match number (at {found:?})")]
    MissingMatchNumber { tag: String, found: String },

    #[error("invalid tag {tag:?}: match number must be 3 digits (at {found:?})")]
    InvalidMatchNumber { tag: String, found: String },

    #[error("invalid tag {tag:?}: bad team number (at {found:?})")]
    InvalidTeamNumber { tag: String, found: String },

    #[error("invalid tag {tag:?}: extra data at end (at {found:?})")]
    TrailingData { tag: String, found: String },
}

impl TagError {
    /// The full input that failed to parse.
    pub fn tag(&self) -> &str {
        match self {
            TagError::EmptyLocationCode { tag }
            | TagError::InvalidLocationCode { tag, .. }
            | TagError::MissingYear { tag, .. }
            | TagError::InvalidYear { tag, .. }
            | TagError::InvalidCategory { tag, .. }
            | TagError::MissingMatchNumber { tag, .. }
            | TagError::InvalidMatchNumber { tag, .. }
            | TagError::InvalidTeamNumber { tag, .. }
            | TagError::TrailingData { tag, .. } => tag,
        }
    }
}
