//! Decisions a strategy can make.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseActionError;

/// Action taken at a decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Stop drawing and keep the current hand.
    Stand,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => f.write_str("hit"),
            Self::Stand => f.write_str("stand"),
        }
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses `h`, `hit`, `s`, `stand` or `stick`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if ["h", "hit"].iter().any(|w| s.eq_ignore_ascii_case(w)) {
            Ok(Self::Hit)
        } else if ["s", "stand", "stick"].iter().any(|w| s.eq_ignore_ascii_case(w)) {
            Ok(Self::Stand)
        } else {
            Err(ParseActionError::UnknownAction)
        }
    }
}
