//! Retry helper for HTTP requests with exponential backoff.
//!
//! This module provides functionality to automatically retry HTTP requests
//! that fail with HTTP 429 (Too Many Requests) status codes, using
//! exponential backoff between retry attempts.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics;
use crate::models::MessageResponse;

/// Maximum number of retry attempts for rate-limited requests.
const DEFAULT_MAX_RETRIES: usize = 3;

/// Sends an HTTP request with automatic retry logic for HTTP 429 responses.
///
/// This function wraps a `reqwest::RequestBuilder` with retry logic that:
/// - Detects HTTP 429 (Too Many Requests) status codes
/// - Implements exponential backoff (1s, 2s, 4s = 2^attempt)
/// - Respects the `max_retries` parameter
/// - Returns `MaxRetriesExceeded` when retries are exhausted
///
/// The `endpoint` argument is only used for logging and metric labels.
///
/// # Errors
///
/// Returns `ClientError::MaxRetriesExceeded` when all retry attempts are
/// exhausted, `ClientError::ApiError` for non-success statuses, and
/// propagates transport errors as `ClientError::HttpError`.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    let max_retries = if max_retries == 0 {
        DEFAULT_MAX_RETRIES
    } else {
        max_retries
    };

    metrics::record_request(endpoint, method);

    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                // Streaming bodies cannot be cloned; a single attempt is
                // all we can offer then.
                if attempt == 0 {
                    debug!(endpoint, "request builder cannot be cloned, single attempt only");
                    return builder.send().await.map_err(ClientError::from);
                }
                debug!(endpoint, "cannot clone request builder for retry");
                return Err(ClientError::MaxRetriesExceeded(attempt));
            }
        };

        match attempt_builder.send().await {
            Ok(response) if response.status().as_u16() == 429 => {
                if attempt < max_retries {
                    let backoff_secs = 2u64.pow(attempt as u32);
                    debug!(
                        endpoint,
                        attempt = attempt + 1,
                        max_retries = max_retries + 1,
                        backoff_secs,
                        "rate limited (HTTP 429), retrying with exponential backoff"
                    );
                    metrics::record_retry(endpoint);
                    tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
                } else {
                    debug!(
                        endpoint,
                        attempts = attempt + 1,
                        "max retries exhausted for rate-limited request"
                    );
                    metrics::record_error(endpoint, 429);
                    return Err(ClientError::MaxRetriesExceeded(max_retries + 1));
                }
            }
            Ok(response) => {
                if response.status().is_success() {
                    if attempt > 0 {
                        debug!(endpoint, attempt = attempt + 1, "request succeeded after retry");
                    }
                    return Ok(response);
                }

                let status = response.status().as_u16();
                let url = response.url().to_string();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "could not read error response body".to_string());

                // The backend wraps errors in a {message} envelope; fall
                // back to the raw body when it does not.
                let message = match serde_json::from_str::<MessageResponse>(&body) {
                    Ok(envelope) if !envelope.message.is_empty() => envelope.message,
                    _ => body,
                };

                metrics::record_error(endpoint, status);
                return Err(ClientError::ApiError {
                    status,
                    url,
                    message,
                });
            }
            Err(e) => {
                metrics::record_error(endpoint, 0);
                return Err(ClientError::from(e));
            }
        }
    }

    // Unreachable: the loop always returns, but handle it for completeness.
    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}
