//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default base URL for the Naver esports REST API
pub const DEFAULT_REST_API_DOMAIN: &str = "https://esports-api.game.naver.com/service";

/// Default base URL for the OP.GG esports GraphQL API
pub const DEFAULT_GRAPHQL_API_DOMAIN: &str = "https://esports.op.gg";

/// Number of upcoming matches shown by default
pub const DEFAULT_UPCOMING_LIMIT: usize = 4;

/// Width of the rolling Valorant schedule window in days
pub const VALORANT_WINDOW_DAYS: i64 = 30;

/// UTC offset of Korea Standard Time in seconds (UTC+9)
pub const KST_OFFSET_SECONDS: i32 = 9 * 3600;

/// UTC offset sent to the LoL GraphQL endpoint, in minutes (KST)
pub const GRAPHQL_UTC_OFFSET_MINUTES: i32 = 540;

/// Request headers the providers expect
pub mod headers {
    /// Origin header for the Naver esports REST API
    pub const REST_ORIGIN: &str = "https://game.naver.com";

    /// Origin header for the OP.GG GraphQL API
    pub const GRAPHQL_ORIGIN: &str = "https://esports.op.gg";

    /// Browser user-agent both providers are served for
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
         AppleWebKit/537.36 (KHTML, like Gecko) Chrome/136.0.0.0 Safari/537.36";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for REST API domain override
    pub const REST_API_DOMAIN: &str = "ESPORTS_REST_API_DOMAIN";

    /// Environment variable for GraphQL API domain override
    pub const GRAPHQL_API_DOMAIN: &str = "ESPORTS_GRAPHQL_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "ESPORTS_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds (default: 30)
    pub const HTTP_TIMEOUT: &str = "ESPORTS_HTTP_TIMEOUT";
}
