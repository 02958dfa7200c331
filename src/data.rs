//! Menu Data Source
//!
//! One read-only fetch of the menu file at startup.

use std::collections::HashSet;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::MenuError;
use crate::models::MenuItem;

/// Fetch and parse the menu document at `url`
pub async fn load_menu(url: &str) -> Result<Vec<MenuItem>, MenuError> {
    let window = web_sys::window().ok_or(MenuError::Unavailable)?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| MenuError::Network(describe(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| MenuError::Network(describe(&e)))?;

    if !response.ok() {
        return Err(MenuError::Status(response.status()));
    }

    let body = response.text().map_err(|e| MenuError::Body(describe(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| MenuError::Body(describe(&e)))?;
    let text = body
        .as_string()
        .ok_or_else(|| MenuError::Body("response body is not text".to_string()))?;

    parse_menu(&text)
}

/// Parse a menu document, rejecting repeated identifiers
pub fn parse_menu(text: &str) -> Result<Vec<MenuItem>, MenuError> {
    let items: Vec<MenuItem> = serde_json::from_str(text)?;

    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(&item.id) {
            return Err(MenuError::DuplicateId(item.id.clone()));
        }
    }

    Ok(items)
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
