//! API utilities for frontend-backend communication.

use contracts::shared::error::ApiError;
use contracts::shared::lookup::IdName;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET `path` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = gloo_net::http::Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch an id/name list for one of the filter selects (customers,
/// salesmen, receivers), scoped to the selected company.
pub async fn fetch_id_name_list(path: &str, company_id: &str) -> Result<Vec<IdName>, ApiError> {
    let url = format!("{}?companyId={}", path, urlencoding::encode(company_id));
    get_json(&url).await
}
