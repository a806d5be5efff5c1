//! Compare Draft Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! compare-workspace draft. The same struct is the local-storage
//! snapshot shape, so the stored field names stay stable.

use std::collections::HashMap;

use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::models::{SelectedProduct, StoreSelection};

/// In-progress compare state, mirrored to local storage on every change
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Store)]
#[serde(default)]
pub struct DraftState {
    /// Free-text shopping list, one product per line
    #[serde(rename = "manualText")]
    pub manual_text: String,
    /// Store checkboxes
    pub stores: StoreSelection,
    /// Optional name for a saved comparison
    #[serde(rename = "listName")]
    pub list_name: String,
    /// Line text -> product metadata from an autosuggest pick
    #[serde(rename = "selectionMap")]
    pub selection: HashMap<String, SelectedProduct>,
}

/// Type alias for the store
pub type DraftStore = Store<DraftState>;

/// Drop selection metadata for lines that no longer appear in the list
pub fn prune_selection(selection: &mut HashMap<String, SelectedProduct>, lines: &[String]) {
    selection.retain(|label, _| lines.iter().any(|l| l == label));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use crate::models::{Store as Shop, Suggestion};

    fn pick(label: &str) -> SelectedProduct {
        SelectedProduct::from_suggestion(&Suggestion {
            product_id: 1,
            label: label.to_string(),
            store: Shop::Ah,
            image_url: None,
        })
    }

    #[test]
    fn test_selection_present_after_pick_absent_after_removal() {
        let mut draft = DraftState::default();

        // Autosuggest pick: line appended, metadata recorded.
        draft.manual_text = list::append_line(&draft.manual_text, "AH Bananen");
        draft.selection.insert("AH Bananen".to_string(), pick("AH Bananen"));

        let lines = list::split_lines(&draft.manual_text);
        prune_selection(&mut draft.selection, &lines);
        assert!(draft.selection.contains_key("AH Bananen"));

        // Line removed from the text: metadata must go with it.
        draft.manual_text = list::remove_line(&draft.manual_text, "AH Bananen");
        let lines = list::split_lines(&draft.manual_text);
        prune_selection(&mut draft.selection, &lines);
        assert!(draft.selection.is_empty());
    }

    #[test]
    fn test_prune_keeps_lines_still_present() {
        let mut selection = HashMap::new();
        selection.insert("Melk".to_string(), pick("Melk"));
        selection.insert("Kaas".to_string(), pick("Kaas"));

        let lines = vec!["Melk".to_string()];
        prune_selection(&mut selection, &lines);
        assert!(selection.contains_key("Melk"));
        assert!(!selection.contains_key("Kaas"));
    }

    #[test]
    fn test_draft_snapshot_field_names() {
        let mut draft = DraftState {
            manual_text: "Melk\n".to_string(),
            list_name: "Weekboodschappen".to_string(),
            ..Default::default()
        };
        draft.stores.set_on(Shop::Dirk, false);
        draft.selection.insert("Melk".to_string(), pick("Melk"));

        let wire = serde_json::to_value(&draft).unwrap();
        assert_eq!(wire["manualText"], "Melk\n");
        assert_eq!(wire["listName"], "Weekboodschappen");
        assert_eq!(wire["stores"]["AH"], true);
        assert_eq!(wire["stores"]["Dirk"], false);
        assert!(wire["selectionMap"]["Melk"].is_object());

        let back: DraftState = serde_json::from_value(wire).unwrap();
        assert_eq!(back, draft);
    }

    #[test]
    fn test_partial_snapshot_fills_defaults() {
        let back: DraftState = serde_json::from_str(r#"{"manualText": "Brood\n"}"#).unwrap();
        assert_eq!(back.manual_text, "Brood\n");
        assert!(back.stores.ah && back.stores.jumbo && back.stores.dirk);
        assert!(back.selection.is_empty());
    }
}
