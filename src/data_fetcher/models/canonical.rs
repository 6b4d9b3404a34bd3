use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque match identifier, kept as a string or an integer exactly as the
/// provider sent it. Never synthesized on our side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchId {
    Int(i64),
    Str(String),
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchId::Int(id) => write!(f, "{id}"),
            MatchId::Str(id) => write!(f, "{id}"),
        }
    }
}

/// Canonical match lifecycle state.
///
/// Providers disagree on status vocabulary; the known states map onto
/// `Before`/`Started`/`End`. Anything else is carried through verbatim in
/// `Other` so that new upstream states degrade to a readable string instead
/// of a failure. Callers matching on this enum must handle the passthrough
/// arm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MatchStatus {
    Before,
    Started,
    End,
    Other(String),
}

impl MatchStatus {
    /// Maps a provider status string to the canonical state.
    ///
    /// `not_started`, `running` and `finished` are the vocabulary both the
    /// REST and GraphQL providers emit today; unrecognized values pass
    /// through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use esports_schedule::data_fetcher::models::MatchStatus;
    ///
    /// assert_eq!(MatchStatus::from_raw("finished"), MatchStatus::End);
    /// assert_eq!(
    ///     MatchStatus::from_raw("paused"),
    ///     MatchStatus::Other("paused".to_string())
    /// );
    /// ```
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "not_started" => MatchStatus::Before,
            "running" => MatchStatus::Started,
            "finished" => MatchStatus::End,
            other => MatchStatus::Other(other.to_string()),
        }
    }

    /// Canonical display form (`BEFORE`/`STARTED`/`END`, or the raw
    /// passthrough string).
    pub fn as_str(&self) -> &str {
        match self {
            MatchStatus::Before => "BEFORE",
            MatchStatus::Started => "STARTED",
            MatchStatus::End => "END",
            MatchStatus::Other(raw) => raw,
        }
    }

    /// Whether the match has not started yet
    pub fn is_upcoming(&self) -> bool {
        matches!(self, MatchStatus::Before)
    }

    /// Whether the match has finished
    pub fn is_finished(&self) -> bool {
        matches!(self, MatchStatus::End)
    }
}

impl From<String> for MatchStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "BEFORE" => MatchStatus::Before,
            "STARTED" => MatchStatus::Started,
            "END" => MatchStatus::End,
            _ => MatchStatus::Other(value),
        }
    }
}

impl From<MatchStatus> for String {
    fn from(status: MatchStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The normalized, provider-independent representation of one scheduled
/// match.
///
/// Field conventions:
/// - `match_id` and `start_time` are always present; a raw match where
///   either cannot be derived is dropped before this type is constructed.
/// - Team names and logo URLs use the empty string as a sentinel for
///   "unknown". The sentinel is what downstream formatting keys on, so it
///   is part of the contract, not a convenience.
/// - Scores are `None` until a match has been played (or when a provider
///   does not expose them). `Some(0)` is a real score.
/// - `league_name`/`stage_name` are `None` when the provider has no such
///   concept in the shape it returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalMatch {
    #[serde(rename = "matchId")]
    pub match_id: MatchId,
    #[serde(rename = "startTime")]
    pub start_time: DateTime<Utc>,
    pub status: MatchStatus,
    #[serde(rename = "homeTeamName")]
    pub home_team_name: String,
    #[serde(rename = "awayTeamName")]
    pub away_team_name: String,
    #[serde(rename = "homeTeamLogoUrl")]
    pub home_team_logo_url: String,
    #[serde(rename = "awayTeamLogoUrl")]
    pub away_team_logo_url: String,
    #[serde(rename = "homeScore")]
    pub home_score: Option<i64>,
    #[serde(rename = "awayScore")]
    pub away_score: Option<i64>,
    #[serde(rename = "leagueName")]
    pub league_name: Option<String>,
    #[serde(rename = "stageName")]
    pub stage_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_match() -> CanonicalMatch {
        CanonicalMatch {
            match_id: MatchId::Str("m-2024-lck-001".to_string()),
            start_time: Utc.with_ymd_and_hms(2024, 4, 5, 8, 0, 0).unwrap(),
            status: MatchStatus::Before,
            home_team_name: "T1".to_string(),
            away_team_name: "GEN".to_string(),
            home_team_logo_url: "https://img.example.com/t1.png".to_string(),
            away_team_logo_url: "https://img.example.com/gen.png".to_string(),
            home_score: None,
            away_score: None,
            league_name: Some("LCK".to_string()),
            stage_name: Some("Spring".to_string()),
        }
    }

    #[test]
    fn test_status_from_raw_known_vocabulary() {
        assert_eq!(MatchStatus::from_raw("not_started"), MatchStatus::Before);
        assert_eq!(MatchStatus::from_raw("running"), MatchStatus::Started);
        assert_eq!(MatchStatus::from_raw("finished"), MatchStatus::End);
    }

    #[test]
    fn test_status_from_raw_passthrough() {
        let status = MatchStatus::from_raw("paused");
        assert_eq!(status, MatchStatus::Other("paused".to_string()));
        assert_eq!(status.as_str(), "paused");
        assert!(!status.is_upcoming());
        assert!(!status.is_finished());
    }

    #[test]
    fn test_status_serde_round_trip() {
        let json = serde_json::to_string(&MatchStatus::End).unwrap();
        assert_eq!(json, "\"END\"");
        let back: MatchStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MatchStatus::End);

        let passthrough: MatchStatus = serde_json::from_str("\"delayed\"").unwrap();
        assert_eq!(passthrough, MatchStatus::Other("delayed".to_string()));
    }

    #[test]
    fn test_match_id_untagged_serde() {
        let int_id: MatchId = serde_json::from_str("42").unwrap();
        assert_eq!(int_id, MatchId::Int(42));
        assert_eq!(int_id.to_string(), "42");

        let str_id: MatchId = serde_json::from_str("\"m-42\"").unwrap();
        assert_eq!(str_id, MatchId::Str("m-42".to_string()));
        assert_eq!(serde_json::to_string(&str_id).unwrap(), "\"m-42\"");
    }

    #[test]
    fn test_canonical_match_serialization() {
        let m = create_test_match();

        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"matchId\":\"m-2024-lck-001\""));
        assert!(json.contains("\"homeTeamName\":\"T1\""));
        assert!(json.contains("\"status\":\"BEFORE\""));
        assert!(json.contains("\"homeScore\":null"));

        let back: CanonicalMatch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_sentinels_are_distinct_from_scores() {
        let mut m = create_test_match();
        m.home_team_name = String::new();
        m.home_score = Some(0);

        // Empty string means "unknown team", Some(0) means a real 0-score.
        assert!(m.home_team_name.is_empty());
        assert_ne!(m.home_score, None);
    }
}
