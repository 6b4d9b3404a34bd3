//! URL building utilities for API endpoints

/// Builds the Naver REST URL listing which months of a year have matches.
///
/// # Arguments
/// * `api_domain` - The base API domain
///
/// # Returns
/// * `String` - The complete months-index URL
///
/// # Example
/// ```
/// use esports_schedule::data_fetcher::api::rest_months_url;
///
/// let url = rest_months_url("https://api.example.com/service");
/// assert_eq!(url, "https://api.example.com/service/v1/schedule/year/months");
/// ```
pub fn rest_months_url(api_domain: &str) -> String {
    format!("{api_domain}/v1/schedule/year/months")
}

/// Builds the Naver REST URL for one month of league matches.
///
/// # Arguments
/// * `api_domain` - The base API domain
///
/// # Returns
/// * `String` - The complete monthly schedule URL
///
/// # Example
/// ```
/// use esports_schedule::data_fetcher::api::rest_month_url;
///
/// let url = rest_month_url("https://api.example.com/service");
/// assert_eq!(url, "https://api.example.com/service/v2/schedule/month");
/// ```
pub fn rest_month_url(api_domain: &str) -> String {
    format!("{api_domain}/v2/schedule/month")
}

/// Builds the OP.GG GraphQL URL for the LoL paged-matches query.
///
/// OP.GG routes each persisted query through its own path suffix.
///
/// # Example
/// ```
/// use esports_schedule::data_fetcher::api::lol_graphql_url;
///
/// let url = lol_graphql_url("https://esports.example.com");
/// assert_eq!(
///     url,
///     "https://esports.example.com/matches/graphql/__query__ListPagedAllMatches"
/// );
/// ```
pub fn lol_graphql_url(api_domain: &str) -> String {
    format!("{api_domain}/matches/graphql/__query__ListPagedAllMatches")
}

/// Builds the OP.GG GraphQL URL for the Valorant matches-by-series query.
///
/// # Example
/// ```
/// use esports_schedule::data_fetcher::api::valorant_graphql_url;
///
/// let url = valorant_graphql_url("https://esports.example.com");
/// assert_eq!(
///     url,
///     "https://esports.example.com/valorant/graphql/__query__GetMatchesBySeries"
/// );
/// ```
pub fn valorant_graphql_url(api_domain: &str) -> String {
    format!("{api_domain}/valorant/graphql/__query__GetMatchesBySeries")
}
