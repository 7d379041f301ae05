//! HTTP Data Client
//!
//! Fetches the insights dataset from the remote collection endpoint.

use gloo_net::http::Request;

use crate::state::global::Record;

/// Default dataset endpoint
pub const DEFAULT_DATA_URL: &str = "https://apiflask-14.onrender.com/data";

/// Get the dataset URL from local storage or use the default
pub fn get_data_url() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("insights_data_url") {
                url
            } else {
                DEFAULT_DATA_URL.to_string()
            }
        } else {
            DEFAULT_DATA_URL.to_string()
        }
    } else {
        DEFAULT_DATA_URL.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Fetch the full dataset.
///
/// One GET, no parameters, no auth. The response is expected to be a JSON
/// array of records; anything else surfaces as a parse error.
pub async fn fetch_records() -> Result<Vec<Record>, String> {
    let response = Request::get(&get_data_url())
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
