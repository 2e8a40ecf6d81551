//! Domain entity representing a registered protected resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Outcome of matching a resource against the user's records at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStatus {
    MatchYes,
    MatchPossible,
    MatchNo,
}

impl MatchStatus {
    /// Returns the canonical string form, as stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::MatchYes => "match-yes",
            MatchStatus::MatchPossible => "match-possible",
            MatchStatus::MatchNo => "match-no",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored match status has no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown match status: {0}")]
pub struct UnknownMatchStatus(pub String);

impl FromStr for MatchStatus {
    type Err = UnknownMatchStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "match-yes" => Ok(MatchStatus::MatchYes),
            "match-possible" => Ok(MatchStatus::MatchPossible),
            "match-no" => Ok(MatchStatus::MatchNo),
            other => Err(UnknownMatchStatus(other.to_string())),
        }
    }
}

/// A protected resource registered with the stub.
///
/// Identity is `resource_id`, assigned by the registration flow. `rpt` stays
/// empty until an authorisation flow completes for the resource.
///
/// Resources seeded at startup carry a `friendly_name`; resources registered
/// during a test run do not. See [`RegisteredResource::is_dynamic`].
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredResource {
    pub resource_id: String,
    pub name: String,
    pub description: Option<String>,
    pub match_status: MatchStatus,
    pub resource_scopes: BTreeSet<String>,
    pub rpt: Option<String>,
    pub pat: Option<String>,
    pub friendly_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RegisteredResource {
    /// Returns true if the resource was created during a test run.
    ///
    /// A missing or blank friendly name marks a dynamic resource. Anything
    /// else is a fixture and must survive bulk cleanup. Blank means every
    /// character satisfies [`is_blank_char`], so non-breaking spaces keep a
    /// resource a fixture.
    pub fn is_dynamic(&self) -> bool {
        self.friendly_name
            .as_deref()
            .is_none_or(|name| name.chars().all(is_blank_char))
    }
}

/// Characters that count as blank in a friendly name: ASCII controls
/// `\t`..=`\r` and `\u{1C}`..=`\u{1F}`, plus Unicode space, line and
/// paragraph separators other than the non-breaking ones (U+00A0, U+2007,
/// U+202F). U+0085 is not blank.
pub fn is_blank_char(c: char) -> bool {
    matches!(
        c,
        '\t'..='\r'
            | '\u{1C}'..='\u{1F}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205F}'
            | '\u{3000}'
    )
}
