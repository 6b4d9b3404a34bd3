use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which upstream produced a raw payload.
///
/// Normalization is shape-driven rather than provider-driven, so this is
/// context for logging and diagnostics, not a dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    /// Naver esports REST API (LoL monthly schedule)
    NaverRest,
    /// OP.GG esports GraphQL API, LoL paged matches
    OpggLol,
    /// OP.GG esports GraphQL API, Valorant matches by series
    OpggValorant,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::NaverRest => "naver-rest",
            Provider::OpggLol => "opgg-lol",
            Provider::OpggValorant => "opgg-valorant",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive date range used by the Valorant matches-by-series query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl TimeWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        TimeWindow { from, to }
    }

    /// Rolling window starting at the current UTC date.
    pub fn rolling_days(days: i64) -> Self {
        let today = Utc::now().date_naive();
        TimeWindow {
            from: today,
            to: today + Duration::days(days),
        }
    }

    /// Window start formatted the way the providers expect (YYYY-MM-DD)
    pub fn from_str_ymd(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }

    /// Window end formatted the way the providers expect (YYYY-MM-DD)
    pub fn to_str_ymd(&self) -> String {
        self.to.format("%Y-%m-%d").to_string()
    }
}
