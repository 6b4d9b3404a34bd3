//! Normalization of raw match objects into canonical records
//!
//! One raw match object in, one [`CanonicalMatch`] out. Every step
//! tolerates missing input on its own: a missing score never prevents a
//! found team name from being reported. The only fatal omissions are the
//! match identifier and the start time - a record without those is dropped
//! (and counted) rather than emitted half-built.

use crate::data_fetcher::models::{CanonicalMatch, MatchId, MatchStatus, Provider};
use crate::data_fetcher::processors::extract::{first_number, first_string, team_logo, team_name};
use crate::data_fetcher::processors::time_formatting::parse_start_time;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::debug;

/// Match identifier candidates, in priority order.
pub const MATCH_ID_KEYS: [&str; 2] = ["matchId", "id"];

/// Start time candidates, in priority order (REST spellings first, then
/// the GraphQL one).
pub const START_TIME_KEYS: [&str; 3] = ["startDate", "startTime", "scheduledAt"];

/// Status candidates, in priority order.
pub const STATUS_KEYS: [&str; 2] = ["status", "matchStatus"];

/// League display name candidates.
pub const LEAGUE_NAME_KEYS: [&str; 2] = ["leagueName", "league"];

/// Stage / block display name candidates.
pub const STAGE_NAME_KEYS: [&str; 2] = ["blockName", "stageName"];

/// Home side score candidates.
pub const HOME_SCORE_KEYS: [&str; 3] = ["homeScore", "team1Score", "score1"];

/// Away side score candidates.
pub const AWAY_SCORE_KEYS: [&str; 3] = ["awayScore", "team2Score", "score2"];

/// Pre-flattened team name keys, used when a raw match carries neither a
/// `teams` array nor `homeTeam`/`awayTeam` objects.
const HOME_FLAT_NAME_KEYS: [&str; 2] = ["team1Name", "homeTeamName"];
const AWAY_FLAT_NAME_KEYS: [&str; 2] = ["team2Name", "awayTeamName"];

fn extract_match_id(map: &Map<String, Value>) -> Option<MatchId> {
    for key in MATCH_ID_KEYS {
        match map.get(key) {
            Some(Value::String(s)) if !s.is_empty() => return Some(MatchId::Str(s.clone())),
            Some(Value::Number(n)) => {
                if let Some(id) = n.as_i64() {
                    return Some(MatchId::Int(id));
                }
            }
            _ => continue,
        }
    }
    None
}

fn extract_start_time(map: &Map<String, Value>) -> Option<DateTime<Utc>> {
    for key in START_TIME_KEYS {
        if let Some(raw) = map.get(key) {
            if let Some(instant) = parse_start_time(raw) {
                return Some(instant);
            }
        }
    }
    None
}

/// Name and logo for one side, already collapsed to sentinels.
#[derive(Debug, Default, PartialEq)]
struct TeamFields {
    name: String,
    logo: String,
}

impl TeamFields {
    fn from_team_object(team: Option<&Value>) -> Self {
        TeamFields {
            name: team_name(team).unwrap_or_default(),
            logo: team_logo(team).unwrap_or_default(),
        }
    }
}

/// Detects which team encoding the raw match uses and extracts both sides.
///
/// - `teams: [...]` array: positions 0/1 are home/away;
/// - nested `homeTeam`/`awayTeam` objects: extracted per side;
/// - otherwise: pre-flattened name keys, with no logos available.
fn extract_teams(raw: &Value, map: &Map<String, Value>) -> (TeamFields, TeamFields) {
    if let Some(Value::Array(teams)) = map.get("teams") {
        return (
            TeamFields::from_team_object(teams.first()),
            TeamFields::from_team_object(teams.get(1)),
        );
    }

    if map.contains_key("homeTeam") || map.contains_key("awayTeam") {
        return (
            TeamFields::from_team_object(map.get("homeTeam")),
            TeamFields::from_team_object(map.get("awayTeam")),
        );
    }

    (
        TeamFields {
            name: first_string(Some(raw), &HOME_FLAT_NAME_KEYS).unwrap_or_default(),
            logo: String::new(),
        },
        TeamFields {
            name: first_string(Some(raw), &AWAY_FLAT_NAME_KEYS).unwrap_or_default(),
            logo: String::new(),
        },
    )
}

/// Normalizes one raw match object into a canonical record.
///
/// Returns `None` only when the match identifier or the start time cannot
/// be derived; every other missing field degrades to its documented
/// sentinel (empty string for names/logos, `None` for scores and optional
/// display strings, `Other("")` for a missing status).
pub fn normalize_match(raw: &Value, provider: Provider) -> Option<CanonicalMatch> {
    let map = raw.as_object()?;

    let match_id = extract_match_id(map)?;
    let start_time = extract_start_time(map)?;

    let status = first_string(Some(raw), &STATUS_KEYS)
        .map(|s| MatchStatus::from_raw(&s))
        .unwrap_or_else(|| MatchStatus::Other(String::new()));

    let (home, away) = extract_teams(raw, map);

    let record = CanonicalMatch {
        match_id,
        start_time,
        status,
        home_team_name: home.name,
        away_team_name: away.name,
        home_team_logo_url: home.logo,
        away_team_logo_url: away.logo,
        home_score: first_number(raw, &HOME_SCORE_KEYS),
        away_score: first_number(raw, &AWAY_SCORE_KEYS),
        league_name: first_string(Some(raw), &LEAGUE_NAME_KEYS),
        stage_name: first_string(Some(raw), &STAGE_NAME_KEYS),
    };

    debug!(
        "Normalized match {} from {}: {} vs {} [{}]",
        record.match_id, provider, record.home_team_name, record.away_team_name, record.status
    );
    Some(record)
}

/// Normalizes a flattened sequence of raw matches, dropping (and counting)
/// the ones missing their hard-minimum fields.
pub fn normalize_matches(raws: &[&Value], provider: Provider) -> Vec<CanonicalMatch> {
    let mut records = Vec::with_capacity(raws.len());
    let mut dropped = 0usize;

    for raw in raws {
        match normalize_match(raw, provider) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(
            "Dropped {} raw matches from {} missing id or start time",
            dropped, provider
        );
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_nested_team_shape() {
        let raw = json!({
            "matchId": "lck-0415-1",
            "startDate": "2025-04-15T08:00:00Z",
            "status": "finished",
            "leagueName": "LCK",
            "blockName": "Spring",
            "homeTeam": { "nameAcronym": "T1", "imageUrl": "https://img/t1.png" },
            "awayTeam": { "nameAcronym": "GEN", "imageUrl": "https://img/gen.png" },
            "homeScore": 3,
            "awayScore": 1
        });

        let record = normalize_match(&raw, Provider::NaverRest).unwrap();
        assert_eq!(record.match_id, MatchId::Str("lck-0415-1".to_string()));
        assert_eq!(record.status, MatchStatus::End);
        assert_eq!(record.home_team_name, "T1");
        assert_eq!(record.away_team_name, "GEN");
        assert_eq!(record.home_team_logo_url, "https://img/t1.png");
        assert_eq!(record.home_score, Some(3));
        assert_eq!(record.away_score, Some(1));
        assert_eq!(record.league_name, Some("LCK".to_string()));
        assert_eq!(record.stage_name, Some("Spring".to_string()));
    }

    #[test]
    fn test_normalize_teams_array_shape_positional() {
        let raw = json!({
            "matchId": 99,
            "startTime": 1700000000000_i64,
            "status": "not_started",
            "teams": [
                { "name": "Paper Rex" },
                { "name": "DRX", "colorImageUrl": "https://img/drx.png" }
            ]
        });

        let record = normalize_match(&raw, Provider::OpggValorant).unwrap();
        assert_eq!(record.match_id, MatchId::Int(99));
        assert_eq!(record.status, MatchStatus::Before);
        assert_eq!(record.home_team_name, "Paper Rex");
        assert_eq!(record.away_team_name, "DRX");
        assert_eq!(record.home_team_logo_url, "");
        assert_eq!(record.away_team_logo_url, "https://img/drx.png");
        assert_eq!(record.home_score, None);
        assert_eq!(record.away_score, None);
    }

    #[test]
    fn test_normalize_flat_shape() {
        let raw = json!({
            "id": 7,
            "startDate": "2025-05-02T10:00:00Z",
            "matchStatus": "running",
            "team1Name": "FNC",
            "team2Name": "G2",
            "score1": 1,
            "score2": 0
        });

        let record = normalize_match(&raw, Provider::NaverRest).unwrap();
        assert_eq!(record.match_id, MatchId::Int(7));
        assert_eq!(record.status, MatchStatus::Started);
        assert_eq!(record.home_team_name, "FNC");
        assert_eq!(record.away_team_name, "G2");
        // Flat shape has no logo fields; sentinel applies.
        assert_eq!(record.home_team_logo_url, "");
        assert_eq!(record.home_score, Some(1));
        assert_eq!(record.away_score, Some(0));
    }

    #[test]
    fn test_null_home_team_degrades_to_sentinels() {
        let raw = json!({
            "matchId": "m1",
            "startDate": "2025-04-15T08:00:00Z",
            "status": "not_started",
            "homeTeam": null,
            "awayTeam": { "name": "GEN" }
        });

        let record = normalize_match(&raw, Provider::OpggLol).unwrap();
        assert_eq!(record.home_team_name, "");
        assert_eq!(record.home_team_logo_url, "");
        assert_eq!(record.away_team_name, "GEN");
    }

    #[test]
    fn test_missing_score_does_not_block_other_fields() {
        let raw = json!({
            "matchId": "m1",
            "scheduledAt": "2025-04-15T08:00:00Z",
            "homeTeam": { "acronym": "T1" }
        });

        let record = normalize_match(&raw, Provider::OpggLol).unwrap();
        assert_eq!(record.home_team_name, "T1");
        assert_eq!(record.home_score, None);
        // Missing status degrades to the empty passthrough, not a panic.
        assert_eq!(record.status, MatchStatus::Other(String::new()));
    }

    #[test]
    fn test_unrecognized_status_passes_through() {
        let raw = json!({
            "matchId": "m1",
            "startDate": "2025-04-15T08:00:00Z",
            "status": "postponed"
        });
        let record = normalize_match(&raw, Provider::NaverRest).unwrap();
        assert_eq!(record.status, MatchStatus::Other("postponed".to_string()));
    }

    #[test]
    fn test_zero_score_is_reported_not_skipped() {
        let raw = json!({
            "matchId": "m1",
            "startDate": "2025-04-15T08:00:00Z",
            "homeScore": 0,
            "awayScore": 2
        });
        let record = normalize_match(&raw, Provider::NaverRest).unwrap();
        assert_eq!(record.home_score, Some(0));
        assert_eq!(record.away_score, Some(2));
    }

    #[test]
    fn test_drops_without_match_id() {
        let raw = json!({ "startDate": "2025-04-15T08:00:00Z" });
        assert!(normalize_match(&raw, Provider::NaverRest).is_none());
    }

    #[test]
    fn test_drops_without_start_time() {
        let raw = json!({ "matchId": "m1", "startDate": "sometime soon" });
        assert!(normalize_match(&raw, Provider::NaverRest).is_none());
    }

    #[test]
    fn test_normalize_matches_counts_drops() {
        let good = json!({ "matchId": "m1", "startDate": "2025-04-15T08:00:00Z" });
        let bad = json!({ "matchId": "m2" });
        let raws = vec![&good, &bad];

        let records = normalize_matches(&raws, Provider::NaverRest);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].match_id, MatchId::Str("m1".to_string()));
    }
}
