pub mod api;
pub mod leagues;
pub mod models;
pub mod processors;

pub use api::{HttpTransport, ScheduleService, ScheduleTransport};
pub use leagues::{LeagueTable, ResolveError, ResolvedLeague};
pub use models::{CanonicalMatch, MatchId, MatchStatus, Provider, TimeWindow};
