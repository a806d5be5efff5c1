//! Premium Endpoints
//!
//! Saved comparisons and fixed lists. These endpoints predate the
//! cookie session and identify the user by an explicit `user_id`.

use serde::Serialize;

use super::ApiError;
use crate::models::{
    CompareRequest, CompareResponse, EntryId, HistoryResponse, ListsResponse, PremiumStatus,
};

#[derive(Serialize)]
struct RenameBody<'a> {
    user_id: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct SaveListBody<'a> {
    user_id: &'a str,
    name: &'a str,
    items: &'a [serde_json::Value],
}

#[derive(Serialize)]
struct SaveCompareBody<'a> {
    user_id: &'a str,
    payload: &'a CompareRequest,
    result: &'a CompareResponse,
    name: Option<&'a str>,
}

pub async fn status(user_id: &str) -> Result<PremiumStatus, ApiError> {
    let path = format!("/premium/status?user_id={}", super::encode(user_id));
    super::get(&path).await
}

pub async fn lists(user_id: &str) -> Result<ListsResponse, ApiError> {
    let path = format!("/premium/lists?user_id={}", super::encode(user_id));
    super::get(&path).await
}

pub async fn history(user_id: &str, limit: u32) -> Result<HistoryResponse, ApiError> {
    let path = format!(
        "/premium/history?user_id={}&limit={}",
        super::encode(user_id),
        limit
    );
    super::get(&path).await
}

pub async fn rename_list(id: &EntryId, user_id: &str, name: &str) -> Result<(), ApiError> {
    let path = format!("/premium/lists/{}/rename", super::encode(&id.to_string()));
    super::request_discard("POST", &path, Some(&RenameBody { user_id, name })).await
}

pub async fn delete_list(id: &EntryId, user_id: &str) -> Result<(), ApiError> {
    let path = format!(
        "/premium/lists/{}?user_id={}",
        super::encode(&id.to_string()),
        super::encode(user_id)
    );
    super::request_discard::<()>("DELETE", &path, None).await
}

pub async fn rename_history(id: &EntryId, user_id: &str, name: &str) -> Result<(), ApiError> {
    let path = format!("/premium/history/{}/name", super::encode(&id.to_string()));
    super::request_discard("PATCH", &path, Some(&RenameBody { user_id, name })).await
}

/// Promote an item collection to a fixed list
pub async fn save_list(
    user_id: &str,
    name: &str,
    items: &[serde_json::Value],
) -> Result<(), ApiError> {
    let body = SaveListBody { user_id, name, items };
    super::request_discard("POST", "/premium/save_list", Some(&body)).await
}

pub async fn delete_history(id: &EntryId, user_id: &str) -> Result<(), ApiError> {
    let path = format!(
        "/premium/history/{}?user_id={}",
        super::encode(&id.to_string()),
        super::encode(user_id)
    );
    super::request_discard::<()>("DELETE", &path, None).await
}

/// Best-effort persistence of a finished comparison
pub async fn save_compare(
    user_id: &str,
    payload: &CompareRequest,
    result: &CompareResponse,
    name: Option<&str>,
) -> Result<(), ApiError> {
    let body = SaveCompareBody { user_id, payload, result, name };
    super::request_discard("POST", "/premium/save_compare", Some(&body)).await
}
