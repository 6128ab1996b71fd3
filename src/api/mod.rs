//! Catalog API
//!
//! Browser `fetch` bindings to the remote catalog, organized by endpoint.

mod catalog;

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

// Re-export all public items
pub use catalog::*;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("no API key configured (set TMDB_API_KEY at build time)")]
    MissingApiKey,
    #[error("browser window is not available")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    fn network(value: JsValue) -> Self {
        ApiError::Network(js_error_message(&value))
    }
}

/// Best-effort message from a thrown JS value
fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// GET `url` and decode the JSON body
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::network)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(ApiError::network)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::network)?;
    let response: Response = response
        .dyn_into()
        .map_err(|value| ApiError::Decode(js_error_message(&value)))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let body = JsFuture::from(response.json().map_err(ApiError::network)?)
        .await
        .map_err(|value| ApiError::Decode(js_error_message(&value)))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}
