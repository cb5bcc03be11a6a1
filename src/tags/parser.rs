use std::str::FromStr;

use super::errors::TagError;
use super::model::{EventTag, MatchCategory, MatchTag, MatchTeamTag};

pub(super) const YEAR_WIDTH: usize = 4;
pub(super) const MATCH_NUMBER_WIDTH: usize = 3;

impl FromStr for EventTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, rest) = parse_event_prefix(s)?;
        if !rest.is_empty() {
            return Err(TagError::TrailingData {
                tag: s.to_string(),
                found: rest.to_string(),
            });
        }
        Ok(tag)
    }
}

impl FromStr for MatchTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, rest) = parse_match_prefix(s)?;
        if !rest.is_empty() {
            return Err(TagError::TrailingData {
                tag: s.to_string(),
                found: rest.to_string(),
            });
        }
        Ok(tag)
    }
}

impl FromStr for MatchTeamTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (match_tag, rest) = parse_match_prefix(s)?;
        let team_number = parse_team_number(s, rest)?;
        Ok(MatchTeamTag {
            match_tag,
            team_number,
        })
    }
}

/// Parses `<location><year>` off the front of `input`, returning the tag and
/// whatever follows the year field. The location code candidate is everything
/// up to the first ASCII digit.
fn parse_event_prefix(input: &str) -> Result<(EventTag, &str), TagError> {
    let digit_at = input
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(input.len());
    let (code, rest) = input.split_at(digit_at);

    if code.is_empty() {
        return Err(TagError::EmptyLocationCode {
            tag: input.to_string(),
        });
    }
    if !code.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(TagError::InvalidLocationCode {
            tag: input.to_string(),
            code: code.to_string(),
        });
    }

    let Some((year_part, rest)) = split_fixed(rest, YEAR_WIDTH) else {
        return Err(TagError::MissingYear {
            tag: input.to_string(),
            found: rest.to_string(),
        });
    };
    let year = parse_decimal(year_part).ok_or_else(|| TagError::InvalidYear {
        tag: input.to_string(),
        found: year_part.to_string(),
    })?;

    Ok((
        EventTag {
            location_code: code.to_string(),
            year,
        },
        rest,
    ))
}

/// Parses `<event tag><category digit><match number>` off the front of
/// `input`, returning the tag and whatever follows the match number field.
fn parse_match_prefix(input: &str) -> Result<(MatchTag, &str), TagError> {
    let (event, rest) = parse_event_prefix(input)?;

    let mut chars = rest.chars();
    let Some(digit) = chars.next() else {
        return Err(TagError::InvalidCategory {
            tag: input.to_string(),
            found: String::new(),
        });
    };
    let Some(category) = MatchCategory::from_digit(digit) else {
        return Err(TagError::InvalidCategory {
            tag: input.to_string(),
            found: digit.to_string(),
        });
    };
    let rest = chars.as_str();

    let Some((number_part, rest)) = split_fixed(rest, MATCH_NUMBER_WIDTH) else {
        return Err(TagError::MissingMatchNumber {
            tag: input.to_string(),
            found: rest.to_string(),
        });
    };
    let match_number = parse_decimal(number_part).ok_or_else(|| TagError::InvalidMatchNumber {
        tag: input.to_string(),
        found: number_part.to_string(),
    })?;

    Ok((
        MatchTag {
            event,
            category,
            match_number,
        },
        rest,
    ))
}

/// The team number is the entire remainder of the tag: non-empty, all
/// decimal digits, and canonical (no redundant leading zero, so that every
/// accepted tag re-encodes to itself).
fn parse_team_number(input: &str, rest: &str) -> Result<u32, TagError> {
    let invalid = || TagError::InvalidTeamNumber {
        tag: input.to_string(),
        found: rest.to_string(),
    };
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if rest.len() > 1 && rest.starts_with('0') {
        return Err(invalid());
    }
    rest.parse().map_err(|_| invalid())
}

/// Splits off exactly `width` characters, or `None` if fewer remain.
fn split_fixed(s: &str, width: usize) -> Option<(&str, &str)> {
    let end = s
        .char_indices()
        .nth(width - 1)
        .map(|(i, c)| i + c.len_utf8())?;
    Some(s.split_at(end))
}

/// Parses a run of ASCII decimal digits; anything else is `None`.
fn parse_decimal(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn event(code: &str, year: u32) -> EventTag {
        EventTag::new(code, year)
    }

    fn qual_match(code: &str, year: u32, number: u32) -> MatchTag {
        MatchTag::new(event(code, year), MatchCategory::Qualification, number)
    }

    #[rstest]
    #[case("sdc2011", event("sdc", 2011))]
    #[case("sdc0008", event("sdc", 8))]
    #[case("longlocation9999", event("longlocation", 9999))]
    fn event_tag_round_trips(#[case] text: &str, #[case] tag: EventTag) {
        assert_eq!(text.parse::<EventTag>().unwrap(), tag);
        assert_eq!(tag.to_string(), text);
    }

    #[rstest]
    #[case("2011")]
    #[case("sdc201")]
    #[case("sdc2a11")]
    #[case("sdc2011a")]
    #[case("SDC2011")]
    #[case("")]
    fn event_tag_rejects(#[case] text: &str) {
        let err = text.parse::<EventTag>().unwrap_err();
        assert_eq!(err.tag(), text);
    }

    #[test]
    fn event_tag_error_variants() {
        assert_eq!(
            "2011".parse::<EventTag>().unwrap_err(),
            TagError::EmptyLocationCode {
                tag: "2011".to_string()
            }
        );
        assert_eq!(
            "SDC2011".parse::<EventTag>().unwrap_err(),
            TagError::InvalidLocationCode {
                tag: "SDC2011".to_string(),
                code: "SDC".to_string()
            }
        );
        assert_eq!(
            "sdc201".parse::<EventTag>().unwrap_err(),
            TagError::MissingYear {
                tag: "sdc201".to_string(),
                found: "201".to_string()
            }
        );
        assert_eq!(
            "sdc2a11".parse::<EventTag>().unwrap_err(),
            TagError::InvalidYear {
                tag: "sdc2a11".to_string(),
                found: "2a11".to_string()
            }
        );
        assert_eq!(
            "sdc2011a".parse::<EventTag>().unwrap_err(),
            TagError::TrailingData {
                tag: "sdc2011a".to_string(),
                found: "a".to_string()
            }
        );
    }

    #[test]
    fn event_tag_errors_are_presentable() {
        let err = "sdc2a11".parse::<EventTag>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("sdc2a11"));
        assert!(message.contains("2a11"));
    }

    #[rstest]
    #[case("sdc20110042", MatchCategory::Qualification)]
    #[case("sdc20111042", MatchCategory::QuarterFinal)]
    #[case("sdc20112042", MatchCategory::SemiFinal)]
    #[case("sdc20113042", MatchCategory::Final)]
    fn match_tag_round_trips(#[case] text: &str, #[case] category: MatchCategory) {
        let expected = MatchTag::new(event("sdc", 2011), category, 42);
        assert_eq!(text.parse::<MatchTag>().unwrap(), expected);
        assert_eq!(expected.to_string(), text);
    }

    #[rstest]
    #[case("sdc20114042")] // category digit out of range
    #[case("20110042")] // no location code
    #[case("sdc201100421")] // trailing team number
    #[case("sdc20110042a")]
    #[case("sdc201100a2")]
    #[case("sdc2011004")] // short match number
    #[case("sdc2011")] // missing category
    #[case("SDC20113042")]
    fn match_tag_rejects(#[case] text: &str) {
        let err = text.parse::<MatchTag>().unwrap_err();
        assert_eq!(err.tag(), text);
    }

    #[test]
    fn match_tag_error_variants() {
        assert_eq!(
            "sdc20114042".parse::<MatchTag>().unwrap_err(),
            TagError::InvalidCategory {
                tag: "sdc20114042".to_string(),
                found: "4".to_string()
            }
        );
        assert_eq!(
            "sdc2011".parse::<MatchTag>().unwrap_err(),
            TagError::InvalidCategory {
                tag: "sdc2011".to_string(),
                found: String::new()
            }
        );
        assert_eq!(
            "sdc2011004".parse::<MatchTag>().unwrap_err(),
            TagError::MissingMatchNumber {
                tag: "sdc2011004".to_string(),
                found: "04".to_string()
            }
        );
        assert_eq!(
            "sdc201100a2".parse::<MatchTag>().unwrap_err(),
            TagError::InvalidMatchNumber {
                tag: "sdc201100a2".to_string(),
                found: "0a2".to_string()
            }
        );
        assert_eq!(
            "sdc201100421".parse::<MatchTag>().unwrap_err(),
            TagError::TrailingData {
                tag: "sdc201100421".to_string(),
                found: "1".to_string()
            }
        );
    }

    #[rstest]
    #[case("sdc201100421", 1)]
    #[case("sdc20110042973", 973)]
    #[case("sdc201100420", 0)]
    fn match_team_tag_round_trips(#[case] text: &str, #[case] team_number: u32) {
        let expected = MatchTeamTag::new(qual_match("sdc", 2011, 42), team_number);
        assert_eq!(text.parse::<MatchTeamTag>().unwrap(), expected);
        assert_eq!(expected.to_string(), text);
    }

    #[rstest]
    #[case("sdc20110042")] // no team number at all
    #[case("sdc201100421a")]
    #[case("SDC201100421")]
    #[case("sdc2011004201")] // leading zero is non-canonical
    fn match_team_tag_rejects(#[case] text: &str) {
        let err = text.parse::<MatchTeamTag>().unwrap_err();
        assert_eq!(err.tag(), text);
    }

    #[test]
    fn match_team_tag_reports_team_field() {
        assert_eq!(
            "sdc201100421a".parse::<MatchTeamTag>().unwrap_err(),
            TagError::InvalidTeamNumber {
                tag: "sdc201100421a".to_string(),
                found: "1a".to_string()
            }
        );
    }

    #[test]
    fn multibyte_input_is_rejected_not_panicked() {
        assert!("sdc2€11".parse::<EventTag>().is_err());
        assert!("sdc2011é".parse::<EventTag>().is_err());
        assert!("sdc20110€42".parse::<MatchTag>().is_err());
    }

    #[test]
    fn decode_encode_identity_on_accepted_strings() {
        for text in ["sdc2011", "a0000", "xyz9999"] {
            assert_eq!(text.parse::<EventTag>().unwrap().to_string(), text);
        }
        for text in ["sdc20110000", "sdc20113999", "ab00002005"] {
            assert_eq!(text.parse::<MatchTag>().unwrap().to_string(), text);
        }
        for text in ["sdc201100421", "sdc20110042973", "ab000020050"] {
            assert_eq!(text.parse::<MatchTeamTag>().unwrap().to_string(), text);
        }
    }
}
