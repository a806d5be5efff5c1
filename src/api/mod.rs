//! Backend API
//!
//! Fetch boundary to the PrijsMaatje REST backend, organized by domain.
//! Every request carries the session cookie; a JSON content type is
//! attached only when a body is present.

pub mod auth;
pub mod billing;
pub mod compare;
pub mod premium;
pub mod products;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Headers, Request, RequestCredentials, RequestInit, Response};

/// Backend origin, fixed at build time
pub fn base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("http://127.0.0.1:8000")
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response with whatever body text came with it
    #[error("{}", status_line(.status, .status_text, .body))]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },
    /// Transport failure before a response arrived
    #[error("netwerkfout: {0}")]
    Network(String),
    /// Response arrived but could not be decoded
    #[error("ongeldig antwoord: {0}")]
    Decode(String),
    /// Request superseded and aborted; never shown to the user
    #[error("verzoek afgebroken")]
    Aborted,
}

fn status_line(status: &u16, status_text: &str, body: &str) -> String {
    if body.is_empty() {
        format!("{} {}", status, status_text)
    } else {
        format!("{} {} — {}", status, status_text, body)
    }
}

impl ApiError {
    /// The backend signals a free-tier usage limit with 402
    pub fn is_paywall(&self) -> bool {
        matches!(self, ApiError::Status { status: 402, .. })
    }

    /// Inline display text: an explicit message or detail string, a
    /// joined validation-detail list, then the raw status line.
    pub fn user_message(&self) -> String {
        if let ApiError::Status { body, .. } = self {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
                if let Some(text) = body_message(&value) {
                    return text;
                }
            }
        }
        self.to_string()
    }
}

/// Pull display text out of an error body: `detail` as a string, a
/// validation list of `{msg}` objects, or the common message keys.
fn body_message(value: &serde_json::Value) -> Option<String> {
    match value.get("detail") {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => {
            return Some(s.clone());
        }
        Some(serde_json::Value::Array(items)) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|d| {
                    d.get("msg")
                        .or_else(|| d.get("message"))
                        .and_then(|m| m.as_str())
                })
                .filter(|m| !m.trim().is_empty())
                .collect();
            if !msgs.is_empty() {
                return Some(msgs.join(", "));
            }
            return Some("Ongeldige invoer".to_string());
        }
        _ => {}
    }
    for key in ["message", "error", "msg"] {
        if let Some(s) = value.get(key).and_then(|v| v.as_str()) {
            if !s.trim().is_empty() {
                return Some(s.to_string());
            }
        }
    }
    None
}

fn js_error(value: &JsValue) -> ApiError {
    let name = js_sys::Reflect::get(value, &JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string());
    if name.as_deref() == Some("AbortError") {
        return ApiError::Aborted;
    }
    let message = js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Network(message)
}

async fn send(
    method: &str,
    path: &str,
    body: Option<String>,
    signal: Option<&AbortSignal>,
) -> Result<Response, ApiError> {
    let init = RequestInit::new();
    init.set_method(method);
    init.set_credentials(RequestCredentials::Include);
    init.set_signal(signal);

    let headers = Headers::new().map_err(|e| js_error(&e))?;
    if let Some(body) = &body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| js_error(&e))?;
        init.set_body(&JsValue::from_str(body));
    }
    init.set_headers(&headers);

    let url = format!("{}{}", base_url(), path);
    let request = Request::new_with_str_and_init(&url, &init).map_err(|e| js_error(&e))?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("geen window".into()))?;
    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error(&e))?;
    let resp: Response = resp
        .dyn_into()
        .map_err(|_| ApiError::Decode("geen Response-object".into()))?;

    if !resp.ok() {
        let body_text = response_text(&resp).await.unwrap_or_default();
        return Err(ApiError::Status {
            status: resp.status(),
            status_text: resp.status_text(),
            body: body_text,
        });
    }
    Ok(resp)
}

async fn response_text(resp: &Response) -> Option<String> {
    let promise = resp.text().ok()?;
    JsFuture::from(promise).await.ok()?.as_string()
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let promise = resp.json().map_err(|e| js_error(&e))?;
    let value = JsFuture::from(promise).await.map_err(|e| js_error(&e))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn request<T, B>(
    method: &str,
    path: &str,
    body: Option<&B>,
    signal: Option<&AbortSignal>,
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let body = match body {
        Some(b) => Some(serde_json::to_string(b).map_err(|e| ApiError::Decode(e.to_string()))?),
        None => None,
    };
    let resp = send(method, path, body, signal).await?;
    decode(resp).await
}

/// Mutation call whose response body is irrelevant
pub(crate) async fn request_discard<B: Serialize>(
    method: &str,
    path: &str,
    body: Option<&B>,
) -> Result<(), ApiError> {
    let body = match body {
        Some(b) => Some(serde_json::to_string(b).map_err(|e| ApiError::Decode(e.to_string()))?),
        None => None,
    };
    send(method, path, body, None).await?;
    Ok(())
}

pub(crate) async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request::<T, ()>("GET", path, None, None).await
}

pub(crate) async fn post<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    request("POST", path, Some(body), None).await
}

/// POST without a body, for the billing session endpoints
pub(crate) async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request::<T, ()>("POST", path, None, None).await
}

pub(crate) fn encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16, text: &str, body: &str) -> ApiError {
        ApiError::Status {
            status: code,
            status_text: text.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_status_display_matches_wire_format() {
        let err = status(500, "Internal Server Error", "boom");
        assert_eq!(err.to_string(), "500 Internal Server Error — boom");

        let err = status(404, "Not Found", "");
        assert_eq!(err.to_string(), "404 Not Found");
    }

    #[test]
    fn test_paywall_is_402_only() {
        assert!(status(402, "Payment Required", "limiet bereikt").is_paywall());
        assert!(!status(400, "Bad Request", "").is_paywall());
        assert!(!status(500, "Internal Server Error", "").is_paywall());
        assert!(!ApiError::Network("offline".into()).is_paywall());
    }

    #[test]
    fn test_user_message_prefers_detail_string() {
        let err = status(401, "Unauthorized", r#"{"detail": "Onjuist wachtwoord"}"#);
        assert_eq!(err.user_message(), "Onjuist wachtwoord");
    }

    #[test]
    fn test_user_message_joins_validation_details() {
        let body = r#"{"detail": [
            {"loc": ["body", "email"], "msg": "value is not a valid email address"},
            {"loc": ["body", "password"], "msg": "ensure this value has at least 8 characters"}
        ]}"#;
        let err = status(422, "Unprocessable Entity", body);
        assert_eq!(
            err.user_message(),
            "value is not a valid email address, ensure this value has at least 8 characters"
        );
    }

    #[test]
    fn test_user_message_falls_back_to_message_keys_then_raw() {
        let err = status(400, "Bad Request", r#"{"error": "al geregistreerd"}"#);
        assert_eq!(err.user_message(), "al geregistreerd");

        let err = status(400, "Bad Request", "plain text body");
        assert_eq!(err.user_message(), "400 Bad Request — plain text body");

        let err = ApiError::Network("offline".into());
        assert_eq!(err.user_message(), "netwerkfout: offline");
    }
}
