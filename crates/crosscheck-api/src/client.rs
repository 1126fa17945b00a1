//! Uniform request dispatch and response interpretation
//!
//! All typed clients funnel through [`HttpClient`]: build the request, send
//! it once, then either classify the failure or deserialize the body. No
//! retries, no caching — a failed call surfaces immediately.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crosscheck_core::ApiSettings;

use crate::error::{ApiError, ApiResult, classify_failure};

/// Unprocessed transport response, for callers that want custom handling
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// HTTP client base shared by the typed clients.
///
/// Owns the transport handle and the base URL; cloning shares the underlying
/// connection pool. The handle is released when the last clone drops.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl HttpClient {
    /// Build a client from API settings
    ///
    /// # Errors
    ///
    /// Returns error if the underlying transport cannot be constructed
    pub fn new(settings: &ApiSettings) -> ApiResult<Self> {
        Self::with_base_url(
            &settings.base_url,
            Duration::from_millis(settings.timeout_ms),
        )
    }

    /// Build a client against an explicit base URL
    ///
    /// # Errors
    ///
    /// Returns error if the underlying transport cannot be constructed
    pub fn with_base_url(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET and deserialize the response body
    ///
    /// # Errors
    ///
    /// Returns the classified failure, or a deserialize error on a 2xx body
    /// that does not parse as `T`
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        interpret(self.dispatch(Method::GET, path, None::<&()>, &[])?)
    }

    /// POST a JSON body and deserialize the response
    ///
    /// # Errors
    ///
    /// Returns the classified failure, or a deserialize error on a 2xx body
    /// that does not parse as `T`
    pub fn post<B: Serialize, T: DeserializeOwned>(&self, body: &B, path: &str) -> ApiResult<T> {
        interpret(self.dispatch(Method::POST, path, Some(body), &[])?)
    }

    /// POST with additional per-request headers
    ///
    /// # Errors
    ///
    /// Returns the classified failure, or a deserialize error on a 2xx body
    /// that does not parse as `T`
    pub fn post_with_headers<B: Serialize, T: DeserializeOwned>(
        &self,
        body: &B,
        path: &str,
        headers: &[(&str, &str)],
    ) -> ApiResult<T> {
        interpret(self.dispatch(Method::POST, path, Some(body), headers)?)
    }

    /// PUT a JSON body and deserialize the response
    ///
    /// # Errors
    ///
    /// Returns the classified failure, or a deserialize error on a 2xx body
    /// that does not parse as `T`
    pub fn put<B: Serialize, T: DeserializeOwned>(&self, body: &B, path: &str) -> ApiResult<T> {
        interpret(self.dispatch(Method::PUT, path, Some(body), &[])?)
    }

    /// DELETE, ignoring any response body.
    ///
    /// Deletion responses have no expected shape, so the body is never
    /// inspected beyond failure classification.
    ///
    /// # Errors
    ///
    /// Returns the classified failure for a non-success status
    pub fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self.dispatch(Method::DELETE, path, None::<&()>, &[])?;
        if !response.is_success() {
            return Err(classify_failure(response.status, response.body));
        }
        Ok(())
    }

    /// GET returning the unprocessed response
    ///
    /// # Errors
    ///
    /// Returns error only for transport failures; any status passes through
    pub fn get_raw(&self, path: &str) -> ApiResult<RawResponse> {
        self.dispatch(Method::GET, path, None::<&()>, &[])
    }

    /// POST returning the unprocessed response
    ///
    /// # Errors
    ///
    /// Returns error only for transport failures; any status passes through
    pub fn post_raw<B: Serialize>(&self, body: &B, path: &str) -> ApiResult<RawResponse> {
        self.dispatch(Method::POST, path, Some(body), &[])
    }

    /// Single-attempt dispatch. Transport-level failures (no response at
    /// all) are the only errors produced here.
    fn dispatch<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        headers: &[(&str, &str)],
    ) -> ApiResult<RawResponse> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "dispatching request");

        let mut request = self.http.request(method, &url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send()?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect();
        let body = response.text()?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Interpret a raw response as a typed value: classify failures, then
/// deserialize the body or report the target type it failed to match.
fn interpret<T: DeserializeOwned>(response: RawResponse) -> ApiResult<T> {
    if !response.is_success() {
        return Err(classify_failure(response.status, response.body));
    }

    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialize {
        target: std::any::type_name::<T>(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crosscheck_core::Product;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            headers: HashMap::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn success_bounds() {
        assert!(!raw(199, "").is_success());
        assert!(raw(200, "").is_success());
        assert!(raw(299, "").is_success());
        assert!(!raw(300, "").is_success());
    }

    #[test]
    fn interpret_deserializes_success_body() {
        let body = r#"{"id": 7, "name": "Widget", "category": "Tools", "price": 9.99}"#;
        let product: Product = interpret(raw(200, body)).unwrap();

        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Widget");
    }

    #[test]
    fn interpret_classifies_failure_status() {
        let err = interpret::<Product>(raw(404, "missing")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn interpret_rejects_empty_success_body() {
        let err = interpret::<Product>(raw(200, "")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Deserialize);
        assert!(err.to_string().contains("Product"));
    }

    #[test]
    fn interpret_rejects_malformed_success_body() {
        let err = interpret::<Product>(raw(200, "<html>oops</html>")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Deserialize);
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client =
            HttpClient::with_base_url("http://localhost:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
