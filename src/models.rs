//! Frontend Models
//!
//! Data structures matching backend responses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Session identity from `/auth/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub is_premium: bool,
}

/// The supermarkets the backend knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Store {
    #[serde(rename = "AH")]
    Ah,
    Jumbo,
    Dirk,
}

impl Store {
    pub const ALL: [Store; 3] = [Store::Ah, Store::Jumbo, Store::Dirk];

    /// Short code as the backend sends it
    pub fn code(&self) -> &'static str {
        match self {
            Store::Ah => "AH",
            Store::Jumbo => "Jumbo",
            Store::Dirk => "Dirk",
        }
    }

    /// Display name for the store checkboxes
    pub fn label(&self) -> &'static str {
        match self {
            Store::Ah => "Albert Heijn",
            Store::Jumbo => "Jumbo",
            Store::Dirk => "Dirk",
        }
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Store checkbox state, defaults to everything on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSelection {
    #[serde(rename = "AH")]
    pub ah: bool,
    #[serde(rename = "Jumbo")]
    pub jumbo: bool,
    #[serde(rename = "Dirk")]
    pub dirk: bool,
}

impl Default for StoreSelection {
    fn default() -> Self {
        Self { ah: true, jumbo: true, dirk: true }
    }
}

impl StoreSelection {
    pub fn is_on(&self, store: Store) -> bool {
        match store {
            Store::Ah => self.ah,
            Store::Jumbo => self.jumbo,
            Store::Dirk => self.dirk,
        }
    }

    pub fn set_on(&mut self, store: Store, on: bool) {
        match store {
            Store::Ah => self.ah = on,
            Store::Jumbo => self.jumbo = on,
            Store::Dirk => self.dirk = on,
        }
    }

    /// Enabled stores in fixed display order
    pub fn selected(&self) -> Vec<Store> {
        Store::ALL.iter().copied().filter(|s| self.is_on(*s)).collect()
    }
}

/// Autosuggest row from `/products/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub product_id: u64,
    pub label: String,
    pub store: Store,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Selection metadata a list line carries after an autosuggest pick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedProduct {
    pub store: Store,
    #[serde(default)]
    pub product_id: Option<u64>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl SelectedProduct {
    pub fn from_suggestion(s: &Suggestion) -> Self {
        Self {
            store: s.store,
            product_id: Some(s.product_id),
            label: Some(s.label.clone()),
            query: Some(s.label.clone()),
            image_url: s.image_url.clone(),
        }
    }
}

/// Matched-product reference sent to `/compare` for mapped lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRef {
    pub store: Store,
    pub product_id: u64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

/// `/compare` accepts a mixed list of free text and product references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemPayload {
    Product(ItemRef),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareRequest {
    pub stores: Vec<Store>,
    pub items: Vec<ItemPayload>,
}

/// One product row of the comparison matrix. The backend keys the
/// per-store columns `AH` / `AH_naam` / `AH_img` and so on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchRow {
    pub product: String,
    #[serde(rename = "AH", default)]
    pub ah_price: Option<f64>,
    #[serde(rename = "AH_naam", default)]
    pub ah_name: Option<String>,
    #[serde(rename = "AH_img", default)]
    pub ah_img: Option<String>,
    #[serde(rename = "Jumbo", default)]
    pub jumbo_price: Option<f64>,
    #[serde(rename = "Jumbo_naam", default)]
    pub jumbo_name: Option<String>,
    #[serde(rename = "Jumbo_img", default)]
    pub jumbo_img: Option<String>,
    #[serde(rename = "Dirk", default)]
    pub dirk_price: Option<f64>,
    #[serde(rename = "Dirk_naam", default)]
    pub dirk_name: Option<String>,
    #[serde(rename = "Dirk_img", default)]
    pub dirk_img: Option<String>,
}

impl MatchRow {
    pub fn price(&self, store: Store) -> Option<f64> {
        match store {
            Store::Ah => self.ah_price,
            Store::Jumbo => self.jumbo_price,
            Store::Dirk => self.dirk_price,
        }
    }

    /// Store-specific product name, falling back to the requested product
    pub fn name(&self, store: Store) -> &str {
        let name = match store {
            Store::Ah => &self.ah_name,
            Store::Jumbo => &self.jumbo_name,
            Store::Dirk => &self.dirk_name,
        };
        name.as_deref().unwrap_or(&self.product)
    }

    pub fn image(&self, store: Store) -> Option<&str> {
        let img = match store {
            Store::Ah => &self.ah_img,
            Store::Jumbo => &self.jumbo_img,
            Store::Dirk => &self.dirk_img,
        };
        img.as_deref()
    }
}

/// Cheapest store for a single product, absent when no store priced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheapestRow {
    pub product: String,
    #[serde(default)]
    pub store: Option<Store>,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreTotal {
    pub store: Store,
    #[serde(default)]
    pub total: f64,
}

/// Full `/compare` result, replaced wholesale on every run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompareResponse {
    #[serde(default)]
    pub matches: Vec<MatchRow>,
    #[serde(default)]
    pub cheapest_per_product: Vec<CheapestRow>,
    #[serde(default)]
    pub totals: Vec<StoreTotal>,
}

/// Subscription state from `/billing/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingStatus {
    pub is_premium: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub current_period_end: Option<String>,
    #[serde(default)]
    pub cancel_at_period_end: bool,
    #[serde(default)]
    pub trial_used: Option<bool>,
    #[serde(default)]
    pub trial_started_at: Option<String>,
}

/// Legacy pseudonymous premium check from `/premium/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumStatus {
    pub is_premium: bool,
}

/// Backend ids arrive as numbers or strings depending on the table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Num(i64),
    Text(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Num(n) => write!(f, "{}", n),
            EntryId::Text(s) => f.write_str(s),
        }
    }
}

/// A user-curated reusable shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedList {
    pub id: EntryId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoryPayload {
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
    #[serde(default)]
    pub stores: Vec<String>,
}

/// A persisted snapshot of a past comparison run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: EntryId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub payload: Option<HistoryPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListsResponse {
    #[serde(default)]
    pub lists: Vec<FixedList>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// Checkout/portal redirect target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUrl {
    pub url: String,
}

/// Premium auto-save indicator on the compare page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed,
}

/// Saved-list items are strings or `{label, query}` objects; render the
/// usable line of each, skipping blanks.
pub fn items_to_text(items: &[serde_json::Value]) -> String {
    let mut lines = Vec::new();
    for item in items {
        let line = match item {
            serde_json::Value::Object(map) => map
                .get("label")
                .or_else(|| map.get("query"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .trim()
                .to_string(),
            serde_json::Value::String(s) => s.trim().to_string(),
            serde_json::Value::Null => String::new(),
            other => other.to_string().trim().to_string(),
        };
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compare_response_wire_shape() {
        let raw = json!({
            "matches": [{
                "product": "Melk 1L",
                "AH": 1.19,
                "AH_naam": "AH Halfvolle melk 1L",
                "AH_img": "https://img/ah.png",
                "Jumbo": null,
                "Jumbo_naam": null,
                "Jumbo_img": null,
                "Dirk": 1.09,
                "Dirk_naam": "Dirk melk",
                "Dirk_img": null
            }],
            "cheapest_per_product": [
                {"product": "Melk 1L", "store": "Dirk", "price": 1.09}
            ],
            "totals": [
                {"store": "AH", "total": 1.19},
                {"store": "Dirk", "total": 1.09}
            ]
        });
        let resp: CompareResponse = serde_json::from_value(raw).unwrap();
        let row = &resp.matches[0];
        assert_eq!(row.price(Store::Ah), Some(1.19));
        assert_eq!(row.price(Store::Jumbo), None);
        assert_eq!(row.name(Store::Ah), "AH Halfvolle melk 1L");
        assert_eq!(row.name(Store::Jumbo), "Melk 1L");
        assert_eq!(row.image(Store::Ah), Some("https://img/ah.png"));
        assert_eq!(resp.cheapest_per_product[0].store, Some(Store::Dirk));
        assert_eq!(resp.totals[1].total, 1.09);
    }

    #[test]
    fn test_item_payload_mixed_list() {
        let req = CompareRequest {
            stores: vec![Store::Ah, Store::Jumbo],
            items: vec![
                ItemPayload::Product(ItemRef {
                    store: Store::Ah,
                    product_id: 42,
                    label: Some("AH Bananen".into()),
                    query: Some("Bananen".into()),
                }),
                ItemPayload::Text("Brood".into()),
            ],
        };
        let wire = serde_json::to_value(&req).unwrap();
        assert_eq!(wire["stores"], json!(["AH", "Jumbo"]));
        assert_eq!(wire["items"][0]["product_id"], json!(42));
        assert_eq!(wire["items"][1], json!("Brood"));
    }

    #[test]
    fn test_entry_id_number_or_string() {
        let a: EntryId = serde_json::from_value(json!(7)).unwrap();
        let b: EntryId = serde_json::from_value(json!("abc-1")).unwrap();
        assert_eq!(a.to_string(), "7");
        assert_eq!(b.to_string(), "abc-1");
    }

    #[test]
    fn test_items_to_text_mixed_objects_and_strings() {
        let items = vec![json!({"label": "Brood"}), json!("Kaas")];
        assert_eq!(items_to_text(&items), "Brood\nKaas");

        let items = vec![json!({"query": " Melk "}), json!("  "), json!(null)];
        assert_eq!(items_to_text(&items), "Melk");
    }

    #[test]
    fn test_store_selection_default_and_selected() {
        let mut sel = StoreSelection::default();
        assert_eq!(sel.selected(), vec![Store::Ah, Store::Jumbo, Store::Dirk]);
        sel.set_on(Store::Dirk, false);
        assert_eq!(sel.selected(), vec![Store::Ah, Store::Jumbo]);
        assert!(!sel.is_on(Store::Dirk));
    }
}
