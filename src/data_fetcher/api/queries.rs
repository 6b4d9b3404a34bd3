//! GraphQL documents and request envelopes for the OP.GG esports API
//!
//! OP.GG serves persisted-style queries: the full document travels in the
//! POST body together with an `operationName` and a variables object. The
//! documents are kept verbatim as the site sends them; trimming fields
//! risks cache misses on their side.

use crate::constants::GRAPHQL_UTC_OFFSET_MINUTES;
use crate::data_fetcher::models::TimeWindow;
use serde_json::{Value, json};

/// LoL paged-matches query, one page of all matches for a league and month.
pub const LIST_PAGED_ALL_MATCHES: &str = r#"fragment CoreTeam on Team {
  id
  name
  acronym
  imageUrl
  nationality
  foundedAt
  imageUrlDarkMode
  imageUrlLightMode
  youtube
  twitter
  facebook
  instagram
  discord
  website
  __typename
}

fragment CoreMatchCompact on Match {
  id
  tournamentId
  name
  scheduledAt
  beginAt
  matchType
  homeTeamId
  homeTeam {
    ...CoreTeam
    __typename
  }
  homeScore
  awayTeamId
  awayTeam {
    ...CoreTeam
    __typename
  }
  awayScore
  winnerTeam {
    ...CoreTeam
    __typename
  }
  status
  draw
  forfeit
  matchVersion
  __typename
}

fragment CoreTournament on Tournament {
  id
  name
  beginAt
  endAt
  __typename
}

query ListPagedAllMatches($status: String, $leagueId: ID, $teamId: ID, $page: Int, $year: Int, $month: Int, $limit: Int, $utcOffset: Int) {
  pagedAllMatches(
    status: $status
    leagueId: $leagueId
    teamId: $teamId
    page: $page
    year: $year
    month: $month
    limit: $limit
    utcOffset: $utcOffset
  ) {
    ...CoreMatchCompact
    tournament {
      ...CoreTournament
      serie {
        league {
          shortName
          region
          __typename
        }
        year
        season
        __typename
      }
      __typename
    }
    __typename
  }
}"#;

/// Valorant matches-by-series query over a date window.
pub const GET_MATCHES_BY_SERIES: &str = r#"fragment CoreTeam on Team { id name acronym imageUrl nationality __typename }
fragment CoreValorantMatchCompact on Match {
  id tournamentId name scheduledAt beginAt matchType
  homeTeamId homeTeam { ...CoreTeam __typename } homeScore
  awayTeamId awayTeam { ...CoreTeam __typename } awayScore
  winnerTeam { ...CoreTeam __typename }
  status draw forfeit matchVersion __typename
}
query GetMatchesBySeries($serieIds: [ID]!, $from: Date, $to: Date, $teamId: ID) {
  matchesBySeries(serieIds: $serieIds, from: $from, to: $to, teamId: $teamId) {
    ...CoreValorantMatchCompact serieId __typename
  }
}"#;

/// Request body for the LoL paged-matches query.
///
/// The `utcOffset` variable is what the site sends for a KST audience; the
/// server groups pages by local date using it.
pub fn lol_matches_body(league_id: &str, year: i32, month: u32) -> Value {
    json!({
        "operationName": "ListPagedAllMatches",
        "variables": {
            "leagueId": league_id,
            "year": year,
            "month": month,
            "teamId": null,
            "utcOffset": GRAPHQL_UTC_OFFSET_MINUTES,
            "page": 0
        },
        "query": LIST_PAGED_ALL_MATCHES
    })
}

/// Request body for the Valorant matches-by-series query.
pub fn valorant_matches_body(serie_ids: &[String], window: &TimeWindow) -> Value {
    json!({
        "operationName": "GetMatchesBySeries",
        "variables": {
            "serieIds": serie_ids,
            "from": window.from_str_ymd(),
            "to": window.to_str_ymd()
        },
        "query": GET_MATCHES_BY_SERIES
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_lol_body_shape() {
        let body = lol_matches_body("99", 2025, 3);
        assert_eq!(body["operationName"], "ListPagedAllMatches");
        assert_eq!(body["variables"]["leagueId"], "99");
        assert_eq!(body["variables"]["year"], 2025);
        assert_eq!(body["variables"]["month"], 3);
        assert_eq!(body["variables"]["utcOffset"], 540);
        assert_eq!(body["variables"]["page"], 0);
        assert!(body["query"].as_str().unwrap().contains("pagedAllMatches"));
    }

    #[test]
    fn test_valorant_body_shape() {
        let serie_ids = vec!["622".to_string(), "590".to_string()];
        let window = TimeWindow::new(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
        );
        let body = valorant_matches_body(&serie_ids, &window);
        assert_eq!(body["operationName"], "GetMatchesBySeries");
        assert_eq!(body["variables"]["serieIds"][0], "622");
        assert_eq!(body["variables"]["from"], "2025-03-01");
        assert_eq!(body["variables"]["to"], "2025-03-31");
        assert!(body["query"].as_str().unwrap().contains("matchesBySeries"));
    }
}
