//! League alias resolution
//!
//! Users type league names in free form ("LCK", "lck", "퍼시픽"); providers
//! want their own identifiers ("lck" as a Naver topLeagueId, "622" as an
//! OP.GG serie ID). Each provider family gets its own immutable table
//! mapping aliases to a canonical key and the canonical key to an ordered
//! list of provider identifiers. Tables are plain data injected at
//! construction, so tests can substitute their own.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

/// Why an alias failed to resolve.
///
/// Both variants surface to end users identically ("league not found"), but
/// `MissingProviderIds` is a configuration-integrity fault on our side and
/// is logged at error level by callers, not warn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no league matches alias: {input}")]
    UnknownAlias { input: String },

    #[error("league {canonical_key} has no provider ids configured")]
    MissingProviderIds { canonical_key: String },
}

/// Result of a successful alias lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLeague {
    pub canonical_key: String,
    /// Provider identifiers in priority order; never empty.
    pub provider_ids: Vec<String>,
}

/// Immutable alias table for one provider family.
#[derive(Debug, Clone)]
pub struct LeagueTable {
    aliases: HashMap<String, String>,
    provider_ids: HashMap<String, Vec<String>>,
}

impl LeagueTable {
    pub fn new(
        aliases: HashMap<String, String>,
        provider_ids: HashMap<String, Vec<String>>,
    ) -> Self {
        LeagueTable {
            aliases,
            provider_ids,
        }
    }

    /// Resolves free-form user input to a canonical key and its provider
    /// identifiers.
    ///
    /// ASCII input is matched case-insensitively by lowercasing before
    /// lookup; localized-script aliases (which have no case) are matched
    /// verbatim. Pure lookup over immutable data, no side effects.
    pub fn resolve(&self, input: &str) -> Result<ResolvedLeague, ResolveError> {
        let key = input.to_lowercase();
        let canonical_key = self
            .aliases
            .get(&key)
            .ok_or_else(|| ResolveError::UnknownAlias {
                input: input.to_string(),
            })?;

        let provider_ids = self
            .provider_ids
            .get(canonical_key)
            .filter(|ids| !ids.is_empty())
            .ok_or_else(|| ResolveError::MissingProviderIds {
                canonical_key: canonical_key.clone(),
            })?;

        Ok(ResolvedLeague {
            canonical_key: canonical_key.clone(),
            provider_ids: provider_ids.clone(),
        })
    }

    /// All canonical keys this table knows, for help/error output
    pub fn canonical_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.provider_ids.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

fn build_table(aliases: &[(&str, &str)], ids: &[(&str, &[&str])]) -> LeagueTable {
    let aliases = aliases
        .iter()
        .map(|(alias, key)| (alias.to_string(), key.to_string()))
        .collect();
    let provider_ids = ids
        .iter()
        .map(|(key, list)| {
            (
                key.to_string(),
                list.iter().map(|id| id.to_string()).collect(),
            )
        })
        .collect();
    LeagueTable::new(aliases, provider_ids)
}

/// LoL leagues on the Naver REST API; provider ids are `topLeagueId` codes.
static LOL_REST_TABLE: Lazy<LeagueTable> = Lazy::new(|| {
    build_table(
        &[
            ("lck", "lck"),
            ("lpl", "lpl"),
            ("lec", "lec"),
            ("lcs", "lcs"),
            ("msi", "msi"),
            ("worlds", "wrl"),
            ("wrl", "wrl"),
            ("ljl", "ljl"),
        ],
        &[
            ("lck", &["lck"]),
            ("lpl", &["lpl"]),
            ("lec", &["lec"]),
            ("lcs", &["lcs"]),
            ("msi", &["msi"]),
            ("wrl", &["wrl"]),
            ("ljl", &["ljl"]),
        ],
    )
});

/// LoL leagues on the OP.GG GraphQL API; provider ids are numeric league ids.
static LOL_GRAPHQL_TABLE: Lazy<LeagueTable> = Lazy::new(|| {
    build_table(
        &[("lck", "lck"), ("lpl", "lpl")],
        &[("lck", &["99"]), ("lpl", &["98"])],
    )
});

/// Valorant leagues on the OP.GG GraphQL API; provider ids are serie ids,
/// several per league since OP.GG splits a league into one serie per split.
static VALORANT_TABLE: Lazy<LeagueTable> = Lazy::new(|| {
    build_table(
        &[
            ("masters", "masters"),
            ("master", "masters"),
            ("마스터스", "masters"),
            ("emea", "emea"),
            ("pacific", "pacific"),
            ("퍼시픽", "pacific"),
            ("americas", "americas"),
            ("아메리카", "americas"),
            ("na", "na"),
            ("japan", "japan"),
            ("jp", "japan"),
            ("brazil", "brazil"),
            ("br", "brazil"),
        ],
        &[
            ("masters", &["608", "581"]),
            ("emea", &["624", "607", "585", "580", "564"]),
            ("pacific", &["622", "590", "566"]),
            ("na", &["601"]),
            ("americas", &["625", "584", "565"]),
            ("japan", &["623"]),
            ("brazil", &["633"]),
        ],
    )
});

/// Built-in LoL table for the Naver REST provider
pub fn lol_rest_table() -> &'static LeagueTable {
    &LOL_REST_TABLE
}

/// Built-in LoL table for the OP.GG GraphQL provider
pub fn lol_graphql_table() -> &'static LeagueTable {
    &LOL_GRAPHQL_TABLE
}

/// Built-in Valorant table for the OP.GG GraphQL provider
pub fn valorant_table() -> &'static LeagueTable {
    &VALORANT_TABLE
}
