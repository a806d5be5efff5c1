//! Product Search Endpoint

use web_sys::AbortSignal;

use super::ApiError;
use crate::models::Suggestion;

/// Autosuggest search across all stores. The signal lets a newer query
/// abort this one mid-flight.
pub async fn search(
    query: &str,
    limit: u32,
    signal: Option<&AbortSignal>,
) -> Result<Vec<Suggestion>, ApiError> {
    let path = format!("/products/search?q={}&limit={}", super::encode(query), limit);
    super::request::<Vec<Suggestion>, ()>("GET", &path, None, signal).await
}
