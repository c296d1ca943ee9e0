// Weekday recurrence rule parsing
// Rules are a brace-delimited comma list of two-letter day tokens,
// e.g. "{M, W, F}" for a class meeting Monday, Wednesday and Friday.

use std::collections::HashSet;

use chrono::Weekday;
use thiserror::Error;

/// Raised when a recurrence rule contains an unrecognized weekday token or
/// decodes to an empty set. Unknown tokens are never silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecurrenceRule {
    #[error("unrecognized weekday token {token:?} in recurrence rule {rule:?}")]
    UnknownToken { rule: String, token: String },
    #[error("recurrence rule {rule:?} contains no weekdays")]
    Empty { rule: String },
}

/// Decode a recurrence rule into the set of weekdays the class repeats on.
///
/// Surrounding braces and per-token whitespace are ignored; duplicates
/// collapse. The token set is fixed: `Su, M, Tu, W, Th, F, Sa`.
pub fn parse_schedule(rule: &str) -> Result<HashSet<Weekday>, MalformedRecurrenceRule> {
    let inner = rule.trim().trim_start_matches('{').trim_end_matches('}');

    let mut days = HashSet::new();
    for token in inner.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        match weekday_from_token(token) {
            Some(day) => {
                days.insert(day);
            }
            None => {
                return Err(MalformedRecurrenceRule::UnknownToken {
                    rule: rule.to_string(),
                    token: token.to_string(),
                })
            }
        }
    }

    if days.is_empty() {
        return Err(MalformedRecurrenceRule::Empty {
            rule: rule.to_string(),
        });
    }

    Ok(days)
}

fn weekday_from_token(token: &str) -> Option<Weekday> {
    match token {
        "Su" => Some(Weekday::Sun),
        "M" => Some(Weekday::Mon),
        "Tu" => Some(Weekday::Tue),
        "W" => Some(Weekday::Wed),
        "Th" => Some(Weekday::Thu),
        "F" => Some(Weekday::Fri),
        "Sa" => Some(Weekday::Sat),
        _ => None,
    }
}
