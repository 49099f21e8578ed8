//! API utilities for frontend-backend communication
//!
//! Provides the base URL, bearer-token attachment, a typed error and the small
//! set of request helpers every `api.rs` module is built from.

use contracts::system::auth::MessageResponse;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config;
use crate::system::auth::storage;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("HTTP {status}{}", status_suffix(.message))]
    Status { status: u16, message: Option<String> },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
    #[error("Browser API failed: {0}")]
    Browser(String),
}

fn status_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

impl ApiError {
    /// Backend-provided message if there is one, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

/// Get the base URL for API requests
///
/// Same host the page was served from, port from config.
///
/// # Returns
/// - API base URL like "http://localhost:8080"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, config::config().api.port)
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Attach `Authorization: Bearer <token>` when a token is stored
pub fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Turns non-2xx responses into `ApiError::Status`, reading `{message}` if the body has one
pub async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| parse_error_message(&body));
    Err(ApiError::Status { status, message })
}

fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageResponse>(body)
        .ok()
        .map(|m| m.message)
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = with_auth(builder)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
    let request = with_auth(builder)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET `path` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send(Request::get(&api_url(path))).await?;
    decode(response).await
}

/// POST a JSON body to `path` and decode the JSON answer
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = send_json(Request::post(&api_url(path)), body).await?;
    decode(response).await
}

/// PUT a JSON body to `path` and decode the JSON answer
pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = send_json(Request::put(&api_url(path)), body).await?;
    decode(response).await
}

/// DELETE `path`; the body (204 No Content) is never parsed
pub async fn delete(path: &str) -> Result<(), ApiError> {
    send(Request::delete(&api_url(path))).await?;
    Ok(())
}

/// GET `path` as raw bytes
pub async fn get_bytes(path: &str) -> Result<Vec<u8>, ApiError> {
    let response = send(Request::get(&api_url(path))).await?;
    response
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST a multipart form to `path` and decode the JSON answer
///
/// Content-Type is left to the browser so it can add the boundary.
pub async fn post_form<T: DeserializeOwned>(path: &str, form: web_sys::FormData) -> Result<T, ApiError> {
    let request = with_auth(Request::post(&api_url(path)))
        .body(form)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(ensure_ok(response).await?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::Status {
            status: 401,
            message: Some("Credenciales incorrectas".into()),
        };
        assert_eq!(err.user_message("fallback"), "Credenciales incorrectas");
    }

    #[test]
    fn test_user_message_fallback() {
        let blank = ApiError::Status {
            status: 400,
            message: Some("  ".into()),
        };
        assert_eq!(blank.user_message("Falló el registro"), "Falló el registro");
        let network = ApiError::Network("offline".into());
        assert_eq!(network.user_message("Falló la conexión"), "Falló la conexión");
        assert!(network.is_network());
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP 500");
        let err = ApiError::Status {
            status: 404,
            message: Some("Cliente no encontrado".into()),
        };
        assert_eq!(err.to_string(), "HTTP 404: Cliente no encontrado");
    }

    #[test]
    fn test_parse_error_message() {
        assert_eq!(
            parse_error_message(r#"{"message":"Error: duplicate"}"#).as_deref(),
            Some("Error: duplicate")
        );
        assert_eq!(parse_error_message("<html>"), None);
    }
}
