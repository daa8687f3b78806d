//! Generic HTTP request handling shared by the listing endpoints.
//!
//! Each endpoint builds its own `RequestBuilder`; this module owns the common
//! flow: send, log, map statuses to [`FetchError`], read the body, parse JSON, and
//! optionally retry transient failures.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::FetchError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the body of a 2xx response.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers)
    /// * `endpoint` - endpoint name, used in logs and errors
    /// * `url` - full URL, used in logs
    ///
    /// # Returns
    /// * `Ok(response_text)` - body of a 2xx response
    /// * `Err(FetchError::NetworkError | Timeout)` - the request never completed
    /// * `Err(FetchError::RateLimited)` - HTTP 429
    /// * `Err(FetchError::HttpStatus)` - any other non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        endpoint: &str,
        url: &str,
    ) -> Result<String, FetchError> {
        log::debug!("[{endpoint}] GET {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            } else {
                FetchError::NetworkError {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{endpoint}] Response Status: {status_code}");

        // Extract Retry-After header (before consuming response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{endpoint}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(FetchError::RateLimited {
                endpoint: endpoint.to_string(),
                retry_after,
                raw_message: Some(truncate_for_log(&body)),
            });
        }

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = FetchError::HttpStatus {
                endpoint: endpoint.to_string(),
                status: status_code,
                raw_message: Some(truncate_for_log(&body)),
            };
            log::log!(
                error.log_level(),
                "[{endpoint}] HTTP {status_code}: {}",
                truncate_for_log(&body)
            );
            return Err(error);
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| FetchError::NetworkError {
                endpoint: endpoint.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{endpoint}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }

    /// Parse a JSON response body.
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(FetchError::ParseError)` - the body is not valid JSON of shape `T`
    pub fn parse_json<T>(response_text: &str, endpoint: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{endpoint}] JSON parse failed: {e}");
            log::error!("[{endpoint}] Raw response: {}", truncate_for_log(response_text));
            FetchError::ParseError {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Performs an HTTP request, retrying transient failures.
    ///
    /// `max_retries = 0` sends exactly one request.
    ///
    /// # Retry strategy
    /// - Only transient errors are retried (see `is_retryable`)
    /// - Exponential backoff: 100ms, 200ms, 400ms, ... (maximum 10 seconds)
    /// - `Retry-After` on HTTP 429 is honoured, capped at 30 seconds
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        endpoint: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<String, FetchError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, endpoint, url).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder can only be sent once
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{endpoint}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, endpoint, url).await;
            };

            match Self::execute_request(req, endpoint, url).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < max_retries && is_retryable(&e) => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        endpoint,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| FetchError::NetworkError {
            endpoint: endpoint.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Whether a failure is worth retrying.
///
/// Gateway errors (502-504) are retried; other statuses and parse errors are not.
fn is_retryable(error: &FetchError) -> bool {
    match error {
        FetchError::NetworkError { .. }
        | FetchError::Timeout { .. }
        | FetchError::RateLimited { .. } => true,
        FetchError::HttpStatus { status, .. } => matches!(status, 502..=504),
        FetchError::ParseError { .. } => false,
    }
}

/// `Retry-After` (capped at 30s) for rate limiting, exponential backoff otherwise.
fn retry_delay(error: &FetchError, attempt: u32) -> Duration {
    if let FetchError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// 100ms, 200ms, 400ms, 800ms, 1.6s, ... capped at 10 seconds.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // Prevent 2^attempt from overflowing
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}
