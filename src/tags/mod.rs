//! Compact identifier codec.
//!
//! A tag is a fixed-width ASCII encoding of an event, match, or match-team
//! identity. The same string is a URL path component, the payload printed
//! into the barcode on a paper scouting form, and the accepted format for
//! the free-text jump search, so encoding and parsing must be exact
//! inverses: `decode(encode(x)) == x` for every in-range identifier, and
//! `encode(decode(s)) == s` for every accepted string.

mod errors;
mod model;
mod parser;

pub use errors::TagError;
pub use model::{EventTag, MatchCategory, MatchTag, MatchTeamTag};
