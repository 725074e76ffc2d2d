//! HTTP request gateway
//!
//! Every API call the console makes funnels through [`ApiGateway::request`]:
//! it builds the request, issues it, validates the HTTP-level outcome, parses
//! the body as JSON, and either returns the payload or propagates the failure
//! unchanged. Failures are logged before propagating; the gateway never
//! recovers on the caller's behalf.

use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// Default content type applied when the caller does not override it.
const DEFAULT_CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

/// Caller-supplied request configuration.
///
/// Defaults merge with caller overrides; caller entries win verbatim on a
/// case-insensitive header name collision.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    /// Pre-serialized payload; absent for GET.
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

/// Shared request-issuing abstraction in front of the dashboard API.
///
/// Holds a single `reqwest` client with the configured timeout enforced as a
/// per-request deadline. No retries, no caching, no cancellation beyond the
/// deadline; once issued, a request runs to completion or transport failure.
pub struct ApiGateway {
    client: Client,
    base_url: String,
}

impl ApiGateway {
    /// Create a gateway from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue a request against a relative endpoint path.
    ///
    /// Resolves with the parsed JSON body on success. On failure the error
    /// is logged and propagated without transformation: transport errors as
    /// [`ApiError::Transport`], non-2xx statuses as
    /// [`ApiError::RequestFailed`] regardless of body content, and malformed
    /// JSON as [`ApiError::Parse`].
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4();
        let headers = merge_headers(&options.headers);

        let mut builder = self
            .client
            .request(options.method.clone(), &url)
            .header("x-request-id", request_id.to_string());
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        debug!(%url, %request_id, method = %options.method, "issuing request");

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(%url, %request_id, error = %e, "transport failure");
                return Err(ApiError::Transport(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string();
            error!(%url, %request_id, status = status.as_u16(), "request failed");
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                status_text,
            });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!(%url, %request_id, error = %e, "failed to read response body");
                return Err(ApiError::Transport(e));
            }
        };

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                error!(%url, %request_id, error = %e, "response body is not valid JSON");
                Err(ApiError::Parse(e.to_string()))
            }
        }
    }

    /// GET request wrapper.
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.request(path, RequestOptions::default()).await
    }

    /// POST request wrapper. Serializes `data` to JSON; serialization
    /// failure propagates as [`ApiError::Serialize`].
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, data: &T) -> Result<Value> {
        let body = serde_json::to_string(data).map_err(|e| {
            error!(path, error = %e, "failed to serialize request body");
            ApiError::Serialize(e.to_string())
        })?;

        self.request(
            path,
            RequestOptions {
                method: Method::POST,
                headers: Vec::new(),
                body: Some(body),
            },
        )
        .await
    }

    /// Base URL this gateway resolves relative paths against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Merge caller headers over the defaults.
///
/// Caller entries replace a colliding default wholesale, so they reach the
/// wire exactly as supplied; the default content type is present only when
/// the caller does not override it.
fn merge_headers(caller: &[(String, String)]) -> Vec<(String, String)> {
    let mut merged = vec![(
        DEFAULT_CONTENT_TYPE.0.to_string(),
        DEFAULT_CONTENT_TYPE.1.to_string(),
    )];

    for (name, value) in caller {
        if let Some(existing) = merged
            .iter_mut()
            .find(|(existing_name, _)| existing_name.eq_ignore_ascii_case(name))
        {
            *existing = (name.clone(), value.clone());
        } else {
            merged.push((name.clone(), value.clone()));
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(base_url: &str) -> ApiGateway {
        ApiGateway::new(&ApiConfig {
            base_url: base_url.to_string(),
            request_timeout_ms: 10_000,
        })
        .unwrap()
    }

    #[test]
    fn test_default_options_are_get_with_no_body() {
        let options = RequestOptions::default();
        assert_eq!(options.method, Method::GET);
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
    }

    #[test]
    fn test_merge_keeps_default_content_type_when_not_overridden() {
        let merged = merge_headers(&[("x-custom".to_string(), "1".to_string())]);
        assert_eq!(
            merged,
            vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("x-custom".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_merge_caller_wins_on_collision() {
        let merged = merge_headers(&[("Content-Type".to_string(), "text/plain".to_string())]);
        // The caller entry replaces the default verbatim, casing included.
        assert_eq!(
            merged,
            vec![("Content-Type".to_string(), "text/plain".to_string())]
        );
    }

    #[test]
    fn test_merge_with_no_caller_headers() {
        let merged = merge_headers(&[]);
        assert_eq!(
            merged,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn test_trailing_slash_is_stripped_from_base_url() {
        let gateway = gateway("http://localhost:5000/");
        assert_eq!(gateway.base_url(), "http://localhost:5000");
    }
}
