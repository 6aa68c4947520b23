//! Authenticated GET with optional retries and status classification

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::retry::BASE_DELAY_MS;
use crate::error::AppError;

/// Fetches `url` with the bearer token and parses the JSON body into `T`.
///
/// Only `200 OK` counts as success. Timeouts, connection failures, 429 and
/// 5xx responses are retried up to `max_retries` times with exponential
/// backoff (honouring `Retry-After`); with `max_retries == 0` the first
/// failure is returned. Other 4xx responses are never retried.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
/// * `token` - Bearer token for the `Authorization` header
/// * `max_retries` - Extra attempts allowed for transient failures
#[instrument(skip(client, token))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    token: &str,
    max_retries: u32,
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let mut attempt = 0u32;
    let mut backoff = Duration::from_millis(BASE_DELAY_MS);
    let response = loop {
        let (err, retry_after) = match client.get(url).bearer_auth(token).send().await {
            Ok(resp) if resp.status() == StatusCode::OK => break resp,
            Ok(resp) => {
                let retry_after = resp
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs);
                (status_error(resp.status(), url), retry_after)
            }
            Err(e) => (transport_error(e, url), None),
        };

        if err.is_retryable() && attempt < max_retries {
            let wait = retry_after.unwrap_or(backoff);
            warn!(
                "Transient failure for {}: {}. Retrying in {:?} (attempt {}/{})",
                url,
                err,
                wait,
                attempt + 1,
                max_retries
            );
            tokio::time::sleep(wait).await;
            attempt += 1;
            backoff = backoff.saturating_mul(2);
            continue;
        }

        error!("Request failed for URL {}: {}", url, err);
        return Err(err);
    };

    debug!("Response status: {}", response.status());

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                // Valid JSON but a required key is missing or mistyped
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Maps a non-200 response status to its error.
fn status_error(status: StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");
    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        500..=599 => AppError::api_server_error(status_code, reason, url),
        _ => AppError::api_unexpected_status(status_code, url),
    }
}

/// Maps a transport failure to its error.
fn transport_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}
