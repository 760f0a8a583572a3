use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RiskError;

/// The closed set of people the risk table scores.
///
/// Declaration order matches the table's reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Subject {
    Polly,
    Lisa,
}

impl Subject {
    pub const ALL: [Subject; 2] = [Subject::Polly, Subject::Lisa];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Polly => "Polly",
            Subject::Lisa => "Lisa",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = RiskError;

    // Matching is case-sensitive: "polly" is not a known subject.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Polly" => Ok(Subject::Polly),
            "Lisa" => Ok(Subject::Lisa),
            other => Err(RiskError::InvalidSubject(other.to_string())),
        }
    }
}
