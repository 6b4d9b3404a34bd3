pub mod http_client;
pub mod queries;
pub mod service;
pub mod transport;
pub mod urls;

pub use http_client::create_http_client_with_timeout;
pub use queries::{lol_matches_body, valorant_matches_body};
pub use service::ScheduleService;
pub use transport::{HttpTransport, ScheduleTransport};
pub use urls::{lol_graphql_url, rest_month_url, rest_months_url, valorant_graphql_url};
