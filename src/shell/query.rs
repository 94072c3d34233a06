//! Index/range queries for filtered history views.
//!
//! Accepts free-form input such as `2,4,7` or `5-10, 33-39`: tokens separated
//! by commas and/or whitespace, each either a single entry number or an
//! `A-B` range. A single number is valid when it is below the entry count; a
//! range needs both bounds in range and `A <= B`. One bad token rejects the
//! whole query so the caller can reprompt with the offending token named.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:-(\d+))?$").expect("query token pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The input contained no entry numbers at all.
    #[error("invalid entry")]
    Empty,
    /// A token was not a number, not a valid range, or out of range.
    #[error("invalid number or range: {0}")]
    InvalidToken(String),
}

/// Parse a query against a history with `entry_count` entries.
///
/// Duplicates and overlapping ranges collapse into the returned set.
pub fn parse_query(input: &str, entry_count: usize) -> Result<BTreeSet<usize>, QueryError> {
    let mut query = BTreeSet::new();
    let mut matched_any = false;

    for token in input.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        matched_any = true;

        let invalid = || QueryError::InvalidToken(token.to_string());
        let caps = TOKEN_RE.captures(token).ok_or_else(invalid)?;
        let first: usize = caps[1].parse().map_err(|_| invalid())?;

        match caps.get(2) {
            None => {
                if first >= entry_count {
                    return Err(invalid());
                }
                query.insert(first);
            }
            Some(second) => {
                let second: usize = second.as_str().parse().map_err(|_| invalid())?;
                if second >= entry_count || first > second {
                    return Err(invalid());
                }
                query.extend(first..=second);
            }
        }
    }

    if !matched_any {
        return Err(QueryError::Empty);
    }
    Ok(query)
}
