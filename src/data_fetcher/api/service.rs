//! Schedule assembly: resolve -> fetch -> flatten -> normalize -> sort
//!
//! [`ScheduleService`] is the query surface callers see. It owns the
//! immutable league tables and a transport, and composes the pure
//! processors into per-provider operations. Errors split three ways for
//! callers: `LeagueNotFound` (bad user input, no network touched),
//! `NoData` (provider unreachable or reported failure), and a plain empty
//! vector (provider answered, nothing scheduled).

use crate::config::Config;
use crate::constants::{DEFAULT_UPCOMING_LIMIT, VALORANT_WINDOW_DAYS, headers};
use crate::data_fetcher::leagues::{
    LeagueTable, ResolveError, ResolvedLeague, lol_graphql_table, lol_rest_table, valorant_table,
};
use crate::data_fetcher::models::{CanonicalMatch, Provider, TimeWindow};
use crate::data_fetcher::processors::{flatten_matches, normalize_matches, response_succeeded};
use crate::error::AppError;
use chrono::{Datelike, NaiveTime, Utc};
use futures::future::join_all;
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use super::queries::{lol_matches_body, valorant_matches_body};
use super::transport::ScheduleTransport;
use super::urls::{lol_graphql_url, rest_month_url, rest_months_url, valorant_graphql_url};

const REST_HEADERS: [(&str, &str); 1] = [("origin", headers::REST_ORIGIN)];
const GRAPHQL_HEADERS: [(&str, &str); 2] =
    [("accept", "*/*"), ("origin", headers::GRAPHQL_ORIGIN)];

/// Schedule query surface over one transport and a fixed set of league
/// tables.
#[derive(Debug, Clone)]
pub struct ScheduleService<T> {
    config: Config,
    transport: T,
    lol_rest: LeagueTable,
    lol_graphql: LeagueTable,
    valorant: LeagueTable,
}

impl<T: ScheduleTransport> ScheduleService<T> {
    /// Builds a service with the built-in league tables.
    pub fn new(config: Config, transport: T) -> Self {
        Self::with_tables(
            config,
            transport,
            lol_rest_table().clone(),
            lol_graphql_table().clone(),
            valorant_table().clone(),
        )
    }

    /// Builds a service with caller-supplied league tables. This is the
    /// seam tests use to exercise resolution faults without touching the
    /// built-in data.
    pub fn with_tables(
        config: Config,
        transport: T,
        lol_rest: LeagueTable,
        lol_graphql: LeagueTable,
        valorant: LeagueTable,
    ) -> Self {
        ScheduleService {
            config,
            transport,
            lol_rest,
            lol_graphql,
            valorant,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Maps resolver faults to the caller-facing error, logging the two
    /// cases apart: an unknown alias is the user's typo (warn), a key with
    /// no provider ids is our table's integrity problem (error). Callers
    /// see "league not found" either way.
    fn resolve_with(table: &LeagueTable, input: &str) -> Result<ResolvedLeague, AppError> {
        match table.resolve(input) {
            Ok(resolved) => {
                info!(
                    "Resolved league alias '{}' to '{}' ({} provider ids)",
                    input,
                    resolved.canonical_key,
                    resolved.provider_ids.len()
                );
                Ok(resolved)
            }
            Err(ResolveError::UnknownAlias { .. }) => {
                warn!("Unknown league alias: {input}");
                Err(AppError::league_not_found(input))
            }
            Err(ResolveError::MissingProviderIds { canonical_key }) => {
                error!(
                    "League table integrity fault: '{}' (from alias '{}') has no provider ids",
                    canonical_key, input
                );
                Err(AppError::league_not_found(input))
            }
        }
    }

    /// Lists the months of `year` that have scheduled matches for a LoL
    /// league, as the provider's own month tokens (e.g. "2025-03").
    #[instrument(skip(self))]
    pub async fn lol_schedule_months(
        &self,
        alias: &str,
        year: i32,
    ) -> Result<Vec<String>, AppError> {
        let resolved = Self::resolve_with(&self.lol_rest, alias)?;
        let url = rest_months_url(&self.config.rest_api_domain);
        let year_param = year.to_string();
        // The months index is per-league; the first provider id is the
        // primary league code.
        let league_id = &resolved.provider_ids[0];

        let response = self
            .transport
            .get_json(
                &url,
                &[
                    ("year", &year_param),
                    ("topLeagueId", league_id),
                    ("relay", "false"),
                ],
                &REST_HEADERS,
            )
            .await
            .map_err(|e| Self::upstream_unavailable(e, &url))?;

        if !response_succeeded(&response) {
            return Err(AppError::no_data("provider reported failure", &url));
        }

        let months = response
            .get("content")
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(months)
    }

    /// Fetches and normalizes one month of LoL matches from the REST
    /// provider. `year`/`month` are formatted into the same token shape
    /// the months index returns.
    pub async fn lol_schedule(
        &self,
        alias: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<CanonicalMatch>, AppError> {
        self.lol_schedule_for_month(alias, &format!("{year:04}-{month:02}"))
            .await
    }

    /// Same as [`lol_schedule`](Self::lol_schedule), but takes a month
    /// token exactly as returned by
    /// [`lol_schedule_months`](Self::lol_schedule_months).
    #[instrument(skip(self))]
    pub async fn lol_schedule_for_month(
        &self,
        alias: &str,
        year_month: &str,
    ) -> Result<Vec<CanonicalMatch>, AppError> {
        let resolved = Self::resolve_with(&self.lol_rest, alias)?;
        let url = rest_month_url(&self.config.rest_api_domain);

        let fetches = resolved.provider_ids.iter().map(|league_id| {
            let url = url.clone();
            async move {
                self.transport
                    .get_json(
                        &url,
                        &[
                            ("month", year_month),
                            ("topLeagueId", league_id),
                            ("relay", "false"),
                        ],
                        &REST_HEADERS,
                    )
                    .await
            }
        });

        let mut responses = Vec::new();
        let mut failures = 0usize;
        for (league_id, result) in resolved.provider_ids.iter().zip(join_all(fetches).await) {
            match result {
                Ok(response) if response_succeeded(&response) => responses.push(response),
                Ok(_) => {
                    warn!(
                        "Provider envelope reported failure for '{}' (league id {})",
                        resolved.canonical_key, league_id
                    );
                    failures += 1;
                }
                Err(e) => {
                    warn!(
                        "Fetch failed for '{}' (league id {}): {}",
                        resolved.canonical_key, league_id, e
                    );
                    failures += 1;
                }
            }
        }

        // Every fetch failing means "temporarily unavailable", not "no
        // matches scheduled this month".
        if responses.is_empty() && failures > 0 {
            return Err(AppError::no_data("all provider fetches failed", &url));
        }

        let mut records = Vec::new();
        for response in &responses {
            let raws = flatten_matches(response);
            records.extend(normalize_matches(&raws, Provider::NaverRest));
        }

        Ok(sort_by_start(records))
    }

    /// Fetches and normalizes one month of LoL matches from the OP.GG
    /// GraphQL provider.
    #[instrument(skip(self))]
    pub async fn lol_schedule_graphql(
        &self,
        alias: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<CanonicalMatch>, AppError> {
        let resolved = Self::resolve_with(&self.lol_graphql, alias)?;
        let url = lol_graphql_url(&self.config.graphql_api_domain);

        let mut records = Vec::new();
        let mut failures = 0usize;
        for league_id in &resolved.provider_ids {
            let body = lol_matches_body(league_id, year, month);
            match self.transport.post_json(&url, &body, &GRAPHQL_HEADERS).await {
                Ok(response) => {
                    match response.get("data").and_then(|d| d.get("pagedAllMatches")) {
                        Some(node) if !node.is_null() => {
                            let raws = flatten_matches(node);
                            records.extend(normalize_matches(&raws, Provider::OpggLol));
                        }
                        _ => {
                            warn!(
                                "GraphQL response carried no match data for '{}' (league id {})",
                                resolved.canonical_key, league_id
                            );
                            failures += 1;
                        }
                    }
                }
                Err(e) => {
                    warn!(
                        "GraphQL fetch failed for '{}' (league id {}): {}",
                        resolved.canonical_key, league_id, e
                    );
                    failures += 1;
                }
            }
        }

        if records.is_empty() && failures == resolved.provider_ids.len() {
            return Err(AppError::no_data("all provider fetches failed", &url));
        }

        Ok(sort_by_start(records))
    }

    /// Fetches and normalizes Valorant matches for the default rolling
    /// window starting today.
    pub async fn valorant_schedule(&self, alias: &str) -> Result<Vec<CanonicalMatch>, AppError> {
        self.valorant_schedule_between(alias, TimeWindow::rolling_days(VALORANT_WINDOW_DAYS))
            .await
    }

    /// Fetches and normalizes Valorant matches within an explicit window.
    /// All serie ids of the league go into one query.
    #[instrument(skip(self))]
    pub async fn valorant_schedule_between(
        &self,
        alias: &str,
        window: TimeWindow,
    ) -> Result<Vec<CanonicalMatch>, AppError> {
        let resolved = Self::resolve_with(&self.valorant, alias)?;
        let url = valorant_graphql_url(&self.config.graphql_api_domain);
        let body = valorant_matches_body(&resolved.provider_ids, &window);

        let response = self
            .transport
            .post_json(&url, &body, &GRAPHQL_HEADERS)
            .await
            .map_err(|e| Self::upstream_unavailable(e, &url))?;

        let node = response
            .get("data")
            .and_then(|d| d.get("matchesBySeries"))
            .filter(|node| !node.is_null())
            .ok_or_else(|| AppError::no_data("GraphQL response carried no match data", &url))?;

        let raws = flatten_matches(node);
        Ok(sort_by_start(normalize_matches(&raws, Provider::OpggValorant)))
    }

    /// Collects the next `limit` LoL matches starting today or later,
    /// walking the months index forward from the current month.
    #[instrument(skip(self))]
    pub async fn upcoming_lol_matches(
        &self,
        alias: &str,
        limit: Option<usize>,
    ) -> Result<Vec<CanonicalMatch>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_UPCOMING_LIMIT);
        let now = Utc::now();
        let current_month = now.format("%Y-%m").to_string();
        let today_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();

        let months = self.lol_schedule_months(alias, now.year()).await?;

        let mut upcoming = Vec::new();
        for month_token in months.into_iter().filter(|m| *m >= current_month) {
            match self.lol_schedule_for_month(alias, &month_token).await {
                Ok(records) => {
                    upcoming.extend(
                        records
                            .into_iter()
                            .filter(|record| record.start_time >= today_start),
                    );
                }
                Err(e) => {
                    warn!("Skipping month {}: {}", month_token, e);
                    continue;
                }
            }
            if upcoming.len() >= limit {
                break;
            }
        }

        let mut upcoming = sort_by_start(upcoming);
        upcoming.truncate(limit);
        Ok(upcoming)
    }

    fn upstream_unavailable(err: AppError, url: &str) -> AppError {
        warn!("Upstream failure, reporting no data: {err}");
        match err {
            e @ AppError::NoData { .. } => e,
            e => AppError::no_data(e.to_string(), url),
        }
    }
}

/// Stable ascending sort by start time; equal timestamps keep the
/// provider-given relative order.
fn sort_by_start(mut records: Vec<CanonicalMatch>) -> Vec<CanonicalMatch> {
    records.sort_by_key(|record| record.start_time);
    records
}
