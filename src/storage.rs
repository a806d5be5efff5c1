//! Local Storage
//!
//! Browser localStorage boundary: the compare draft snapshot, the
//! one-shot history hand-off pair, the premium save intent, and the
//! pseudonymous user id used by the legacy premium endpoints. Storage
//! failures (private mode, quota) are swallowed; the draft cache is
//! best-effort by design.

use serde::{Deserialize, Serialize};
use web_sys::Storage;

use crate::models::{CompareRequest, CompareResponse};
use crate::store::DraftState;

pub const DRAFT_KEY: &str = "pm_compare_draft_v7";
pub const HANDOFF_FLAG_KEY: &str = "pm_loaded_from_history";
pub const HANDOFF_ITEMS_KEY: &str = "pm_manual_items_list";
pub const INTENT_KEY: &str = "pm_premium_intent_v1";
pub const USER_ID_KEY: &str = "pm_user_id";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Snapshot the draft; called after every relevant state change
pub fn save_draft(draft: &DraftState) {
    if let Ok(json) = serde_json::to_string(draft) {
        set(DRAFT_KEY, &json);
    }
}

pub fn load_draft() -> Option<DraftState> {
    serde_json::from_str(&get(DRAFT_KEY)?).ok()
}

/// Write the hand-off pair the compare page consumes on its next load
pub fn store_handoff(lines: &[String]) {
    if let Ok(json) = serde_json::to_string(lines) {
        set(HANDOFF_ITEMS_KEY, &json);
        set(HANDOFF_FLAG_KEY, "true");
    }
}

/// Consume the hand-off exactly once: both keys present and the parsed
/// list non-empty, then both keys are removed. A corrupt payload leaves
/// the keys alone and the regular draft restore runs instead.
pub fn take_handoff() -> Option<Vec<String>> {
    let flag = get(HANDOFF_FLAG_KEY)?;
    if flag.is_empty() {
        return None;
    }
    let raw = get(HANDOFF_ITEMS_KEY)?;
    let parsed: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(list) => list,
        Err(err) => {
            web_sys::console::error_1(
                &format!("hand-off lijst onleesbaar: {}", err).into(),
            );
            return None;
        }
    };
    let cleaned = clean_handoff_lines(&parsed);
    if cleaned.is_empty() {
        return None;
    }
    remove(HANDOFF_ITEMS_KEY);
    remove(HANDOFF_FLAG_KEY);
    Some(cleaned)
}

fn clean_handoff_lines(values: &[serde_json::Value]) -> Vec<String> {
    values
        .iter()
        .map(|v| match v {
            serde_json::Value::String(s) => s.trim().to_string(),
            serde_json::Value::Null => String::new(),
            other => other.to_string().trim().to_string(),
        })
        .filter(|s| !s.is_empty())
        .collect()
}

/// "Save this comparison" snapshot stored for post-upgrade recovery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumIntent {
    pub intent: String,
    pub from: String,
    pub created_at: String,
    pub user_id: String,
    pub name: Option<String>,
    pub draft: DraftState,
    pub compare: IntentCompare,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentCompare {
    pub payload: CompareRequest,
    pub result: Option<CompareResponse>,
}

pub fn save_intent(intent: &PremiumIntent) {
    if let Ok(json) = serde_json::to_string(intent) {
        set(INTENT_KEY, &json);
    }
}

/// Stable pseudonymous id for the legacy premium endpoints, minted on
/// first use
pub fn pseudonymous_user_id() -> String {
    if let Some(id) = get(USER_ID_KEY) {
        if !id.is_empty() {
            return id;
        }
    }
    let id = web_sys::window()
        .and_then(|w| w.crypto().ok())
        .map(|c| c.random_uuid())
        .unwrap_or_default();
    set(USER_ID_KEY, &id);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_handoff_lines() {
        let values = vec![json!("Brood"), json!("  Kaas  "), json!(""), json!(null)];
        assert_eq!(clean_handoff_lines(&values), vec!["Brood", "Kaas"]);
    }

    #[test]
    fn test_intent_snapshot_shape() {
        let intent = PremiumIntent {
            intent: "save_compare".to_string(),
            from: "/vergelijken".to_string(),
            created_at: "2026-08-05T12:00:00.000Z".to_string(),
            user_id: "u-1".to_string(),
            name: Some("Weekboodschappen".to_string()),
            draft: DraftState::default(),
            compare: IntentCompare {
                payload: CompareRequest { stores: vec![], items: vec![] },
                result: None,
            },
        };
        let wire = serde_json::to_value(&intent).unwrap();
        assert_eq!(wire["intent"], "save_compare");
        assert_eq!(wire["compare"]["result"], serde_json::Value::Null);
        assert!(wire["draft"]["stores"]["AH"].as_bool().unwrap());

        let back: PremiumIntent = serde_json::from_value(wire).unwrap();
        assert_eq!(back, intent);
    }
}
