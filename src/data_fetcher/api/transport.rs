//! Transport collaborator boundary
//!
//! The normalization core never issues requests itself; it asks a
//! [`ScheduleTransport`] for JSON and only needs failure to be
//! distinguishable from success. [`HttpTransport`] is the production
//! implementation over reqwest. There is deliberately no retry logic at
//! this layer - a failed fetch surfaces to the caller, who decides.

use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info};

use super::http_client::create_http_client_with_timeout;

/// Minimal fetch contract the schedule core consumes.
///
/// Implementations must resolve to parsed JSON on success and an
/// [`AppError`] on any failure (network, HTTP status, unparseable body).
#[async_trait]
pub trait ScheduleTransport: Send + Sync {
    /// GET `url` with the given query parameters and headers.
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<Value, AppError>;

    /// POST a JSON `body` to `url` with the given headers.
    async fn post_json(
        &self,
        url: &str,
        body: &Value,
        headers: &[(&str, &str)],
    ) -> Result<Value, AppError>;
}

/// Production transport over a pooled reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a transport with its own pooled client and the given timeout.
    pub fn new(timeout_seconds: u64) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(timeout_seconds)?;
        Ok(HttpTransport { client })
    }

    /// Wraps an existing client, e.g. one shared across services.
    pub fn with_client(client: Client) -> Self {
        HttpTransport { client }
    }

    fn apply_headers(
        mut request: reqwest::RequestBuilder,
        headers: &[(&str, &str)],
    ) -> reqwest::RequestBuilder {
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        request
    }

    async fn handle_response(response: reqwest::Response, url: &str) -> Result<Value, AppError> {
        let status = response.status();
        debug!("Response status for {url}: {status}");

        if !status.is_success() {
            let status_code = status.as_u16();
            let reason = status.canonical_reason().unwrap_or("Unknown error");

            error!("HTTP {} - {} (URL: {})", status_code, reason, url);

            return Err(match status_code {
                404 => AppError::api_not_found(url),
                429 => AppError::api_rate_limit(reason, url),
                400..=499 => AppError::api_client_error(status_code, reason, url),
                _ => AppError::api_server_error(status_code, reason, url),
            });
        }

        let response_text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to read response text from URL {}: {}", url, e);
                return Err(AppError::ApiFetch(e));
            }
        };

        debug!("Response length: {} bytes", response_text.len());

        if response_text.trim().is_empty() {
            return Err(AppError::no_data("Response body is empty", url));
        }

        match serde_json::from_str::<Value>(&response_text) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                error!("Failed to parse API response: {} (URL: {})", e, url);
                error!(
                    "Response text (first 200 chars): {}",
                    &response_text.chars().take(200).collect::<String>()
                );
                Err(AppError::api_malformed_json(e.to_string(), url))
            }
        }
    }

    fn classify_request_error(e: reqwest::Error, url: &str) -> AppError {
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    }
}

#[async_trait]
impl ScheduleTransport for HttpTransport {
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<Value, AppError> {
        info!("Fetching data from URL: {url}");

        let request = Self::apply_headers(self.client.get(url).query(query), headers);
        let response = request
            .send()
            .await
            .map_err(|e| Self::classify_request_error(e, url))?;

        Self::handle_response(response, url).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &Value,
        headers: &[(&str, &str)],
    ) -> Result<Value, AppError> {
        info!("Posting query to URL: {url}");

        let request = Self::apply_headers(self.client.post(url).json(body), headers);
        let response = request
            .send()
            .await
            .map_err(|e| Self::classify_request_error(e, url))?;

        Self::handle_response(response, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_transport() -> HttpTransport {
        HttpTransport::with_client(create_test_http_client())
    }

    #[tokio::test]
    async fn test_get_json_success_with_query_and_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/schedule/month"))
            .and(query_param("month", "2025-03"))
            .and(header("origin", "https://game.naver.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 200 })))
            .mount(&mock_server)
            .await;

        let transport = create_test_transport();
        let url = format!("{}/v2/schedule/month", mock_server.uri());
        let result = transport
            .get_json(
                &url,
                &[("month", "2025-03")],
                &[("origin", "https://game.naver.com")],
            )
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap()["code"], 200);
    }

    #[tokio::test]
    async fn test_post_json_sends_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_partial_json(json!({ "operationName": "Test" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
            .mount(&mock_server)
            .await;

        let transport = create_test_transport();
        let url = format!("{}/graphql", mock_server.uri());
        let result = transport
            .post_json(&url, &json!({ "operationName": "Test" }), &[])
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_json_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let transport = create_test_transport();
        let url = format!("{}/missing", mock_server.uri());
        let result = transport.get_json(&url, &[], &[]).await;

        assert!(matches!(result, Err(AppError::ApiNotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_json_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let transport = create_test_transport();
        let url = format!("{}/broken", mock_server.uri());
        let result = transport.get_json(&url, &[], &[]).await;

        assert!(matches!(result, Err(AppError::ApiServerError { .. })));
    }

    #[tokio::test]
    async fn test_get_json_rate_limited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/limited"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let transport = create_test_transport();
        let url = format!("{}/limited", mock_server.uri());
        let result = transport.get_json(&url, &[], &[]).await;

        assert!(matches!(result, Err(AppError::ApiRateLimit { .. })));
    }

    #[tokio::test]
    async fn test_get_json_empty_body_is_no_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&mock_server)
            .await;

        let transport = create_test_transport();
        let url = format!("{}/empty", mock_server.uri());
        let result = transport.get_json(&url, &[], &[]).await;

        assert!(matches!(result, Err(AppError::NoData { .. })));
    }

    #[tokio::test]
    async fn test_get_json_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/garbled"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&mock_server)
            .await;

        let transport = create_test_transport();
        let url = format!("{}/garbled", mock_server.uri());
        let result = transport.get_json(&url, &[], &[]).await;

        assert!(matches!(result, Err(AppError::ApiMalformedJson { .. })));
    }
}
