use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("could not encode the request: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("{}", rejection_summary(*status, message.as_deref()))]
    Rejected {
        status: u16,
        message: Option<String>,
        field_errors: BTreeMap<String, String>,
    },
}

fn rejection_summary(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) => message.to_string(),
        None => format!("the server rejected the request (status {status})"),
    }
}

#[derive(Debug, Default, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: BTreeMap<String, String>,
}

pub fn parse_rejection(status: u16, body: &str) -> SubmitError {
    let parsed = serde_json::from_str::<RejectionBody>(body).unwrap_or_default();
    let message = parsed
        .message
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty());
    SubmitError::Rejected {
        status,
        message,
        field_errors: parsed.errors,
    }
}

/// Sends `payload` to `endpoint`, or simulates a successful delivery after
/// `delay_ms` when no endpoint is configured.
pub async fn deliver<T: Serialize>(
    endpoint: Option<&str>,
    delay_ms: u32,
    payload: &T,
) -> Result<(), SubmitError> {
    let body = serde_json::to_string(payload).map_err(|err| SubmitError::Encode(err.to_string()))?;
    match endpoint.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => post_json(url, &body).await,
        None => {
            tracing::info!("submission: simulated delivery {body}");
            simulate_latency(delay_ms).await;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn simulate_latency(delay_ms: u32) {
    gloo_timers::future::TimeoutFuture::new(delay_ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn simulate_latency(_delay_ms: u32) {}

#[cfg(target_arch = "wasm32")]
async fn post_json(url: &str, body: &str) -> Result<(), SubmitError> {
    use gloo_net::http::Request;

    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|err| SubmitError::Encode(err.to_string()))?
        .send()
        .await
        .map_err(|err| SubmitError::Transport(err.to_string()))?;
    if response.ok() {
        tracing::info!("submission: delivered to {url}");
        return Ok(());
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Err(parse_rejection(status, &text))
}

#[cfg(not(target_arch = "wasm32"))]
async fn post_json(url: &str, _body: &str) -> Result<(), SubmitError> {
    Err(SubmitError::Transport(format!(
        "cannot reach {url} outside the browser"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rejection_body_carries_field_errors() {
        let err = parse_rejection(
            422,
            r#"{ "message": "Invalid order", "errors": { "email": "Email is blocked" } }"#,
        );
        let SubmitError::Rejected {
            status,
            message,
            field_errors,
        } = &err
        else {
            panic!("expected rejection, got {err:?}");
        };
        assert_eq!(*status, 422);
        assert_eq!(message.as_deref(), Some("Invalid order"));
        assert_eq!(field_errors["email"], "Email is blocked");
        assert_eq!(err.to_string(), "Invalid order");
    }

    #[test]
    fn unreadable_rejection_still_reports_status() {
        let err = parse_rejection(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err.to_string(),
            "the server rejected the request (status 502)"
        );
    }

    #[test]
    fn blank_message_is_dropped() {
        let err = parse_rejection(400, r#"{ "message": "  " }"#);
        assert!(matches!(err, SubmitError::Rejected { message: None, .. }));
    }
}
