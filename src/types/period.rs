//! Predefined relative time windows accepted by the observation endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A relative time window, used instead of (or next to) explicit
/// `from`/`to` bounds when requesting observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    /// Only the most recent observation per station and parameter.
    Latest,
    /// Observations from the last ten minutes.
    #[serde(rename = "latest-10-minutes")]
    Latest10Minutes,
    LatestHour,
    LatestDay,
    LatestWeek,
    LatestMonth,
}

impl Period {
    /// The token the API expects in the `period` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Latest => "latest",
            Period::Latest10Minutes => "latest-10-minutes",
            Period::LatestHour => "latest-hour",
            Period::LatestDay => "latest-day",
            Period::LatestWeek => "latest-week",
            Period::LatestMonth => "latest-month",
        }
    }
}

/// Formats a `Period` as its query token.
///
/// # Examples
///
/// ```
/// use metobs::Period;
///
/// assert_eq!(Period::LatestHour.to_string(), "latest-hour");
/// assert_eq!(format!("{}", Period::Latest10Minutes), "latest-10-minutes");
/// ```
impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
