//! Client.

use std::time::Duration;

use ctrlhora_config::Config;
use reqwest::{Client, ClientBuilder, Response, Url};
use serde_json::Value;

use crate::errors::HttpApiError;

const MAX_DETAIL_LEN: usize = 200;

/// Build the shared HTTP client.
pub fn build_client(config: &Config) -> Result<Client, HttpApiError> {
    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.connect_timeout))
        .timeout(Duration::from_millis(config.api.timeout))
        .user_agent(format!("ctrlhora/{}", config.version))
        .build()
        .map_err(Into::into)
}

/// Build an API URL.
pub fn build_api_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!(
        "{}{}",
        config.api.root_url.trim_end_matches('/'),
        path.into()
    )
}

/// Build an API URL ending with an escaped path segment.
pub fn build_api_url_with_segment(
    config: &Config,
    path: &str,
    segment: &str,
) -> Result<Url, HttpApiError> {
    let base = build_api_url(config, path);
    let mut url = Url::parse(&base).map_err(|e| HttpApiError::InvalidUrl {
        url: base.clone(),
        message: e.to_string(),
    })?;

    url.path_segments_mut()
        .map_err(|_| HttpApiError::InvalidUrl {
            url: base.clone(),
            message: "URL cannot be a base".into(),
        })?
        .push(segment);

    Ok(url)
}

/// Turn non-success responses into errors.
pub async fn check_status(response: Response) -> Result<Response, HttpApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = extract_detail(&body)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "unknown error".into());

    Err(HttpApiError::UnexpectedStatus {
        status: status.as_u16(),
        detail,
    })
}

/// Extract an error detail from a response body.
///
/// The backend answers errors with `{"detail": "..."}`; validation errors carry a
/// list of objects with a `msg` field instead.
fn extract_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let detail = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(detail)) => detail.clone(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("; "),
            _ => body.to_string(),
        },
        _ => body.to_string(),
    };

    if detail.is_empty() {
        None
    } else {
        Some(truncate(detail))
    }
}

fn truncate(mut value: String) -> String {
    if value.chars().count() > MAX_DETAIL_LEN {
        value = value.chars().take(MAX_DETAIL_LEN).collect();
        value.push_str("...");
    }

    // Keep messages on one line.
    value.replace(['\n', '\r'], " ")
}
