pub mod extract;
pub mod flatten;
pub mod normalize;
pub mod time_formatting;

pub use extract::{first_number, first_string, team_logo, team_name};
pub use flatten::{flatten_matches, response_succeeded};
pub use normalize::{normalize_match, normalize_matches};
pub use time_formatting::{format_kst, parse_start_time, parse_year_month, to_kst};
