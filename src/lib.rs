//! Esports Match Schedule Library
//!
//! This library fetches League of Legends and Valorant match schedules
//! from two upstream providers - the Naver esports REST API and the OP.GG
//! esports GraphQL API - and normalizes their inconsistent response shapes
//! into one canonical match record.
//!
//! # Examples
//!
//! ```rust,no_run
//! use esports_schedule::config::Config;
//! use esports_schedule::data_fetcher::api::{HttpTransport, ScheduleService};
//! use esports_schedule::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let transport = HttpTransport::new(config.http_timeout_seconds)?;
//!     let service = ScheduleService::new(config, transport);
//!
//!     // Next four LCK matches, soonest first
//!     let matches = service.upcoming_lol_matches("LCK", None).await?;
//!     for m in &matches {
//!         println!(
//!             "{} {} vs {} [{}]",
//!             m.start_time, m.home_team_name, m.away_team_name, m.status
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{HttpTransport, ScheduleService, ScheduleTransport};
pub use data_fetcher::leagues::{LeagueTable, ResolveError, ResolvedLeague};
pub use data_fetcher::models::{CanonicalMatch, MatchId, MatchStatus, Provider, TimeWindow};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
