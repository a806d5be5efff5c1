//! Result Aggregation
//!
//! Derived views over a `/compare` response: per-store totals, the
//! winning store, and the cheapest-per-product breakdown.

use std::collections::HashMap;

use crate::models::{CheapestRow, CompareResponse, Store};

/// Totals per store. Every selected store gets an entry, defaulting to
/// zero when the backend sent none for it.
pub fn totals_map(data: &CompareResponse, selected: &[Store]) -> HashMap<Store, f64> {
    let mut map: HashMap<Store, f64> = HashMap::new();
    for t in &data.totals {
        map.insert(t.store, t.total);
    }
    for store in selected {
        map.entry(*store).or_insert(0.0);
    }
    map
}

/// Store with the lowest summed total among the selected ones. Ties go
/// to the earlier store in selection order.
pub fn cheapest_store(selected: &[Store], totals: &HashMap<Store, f64>) -> Option<Store> {
    let mut best: Option<Store> = None;
    let mut best_val = f64::INFINITY;
    for store in selected {
        let v = totals.get(store).copied().unwrap_or(0.0);
        if v < best_val {
            best_val = v;
            best = Some(*store);
        }
    }
    best
}

/// Cheapest-per-product rows bucketed by winning store, with per-store
/// subtotals and the products no store priced.
pub struct CheapestBreakdown {
    pub buckets: HashMap<Store, Vec<CheapestRow>>,
    pub subtotals: HashMap<Store, f64>,
    pub unpriced: Vec<String>,
}

pub fn cheapest_breakdown(data: &CompareResponse) -> CheapestBreakdown {
    let mut buckets: HashMap<Store, Vec<CheapestRow>> = HashMap::new();
    let mut unpriced = Vec::new();

    for row in &data.cheapest_per_product {
        match row.store {
            Some(store) => buckets.entry(store).or_default().push(row.clone()),
            None => unpriced.push(row.product.clone()),
        }
    }

    let mut subtotals = HashMap::new();
    for (store, rows) in &buckets {
        let sum = rows.iter().filter_map(|r| r.price).filter(|p| p.is_finite()).sum();
        subtotals.insert(*store, sum);
    }

    CheapestBreakdown { buckets, subtotals, unpriced }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StoreTotal;

    fn response(totals: Vec<(Store, f64)>) -> CompareResponse {
        CompareResponse {
            totals: totals
                .into_iter()
                .map(|(store, total)| StoreTotal { store, total })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_totals_restricted_to_selected_stores() {
        // AH and Jumbo selected, Dirk not: the table shows exactly the
        // selected pair and the lower sum wins.
        let data = response(vec![(Store::Ah, 12.50), (Store::Jumbo, 11.80)]);
        let selected = vec![Store::Ah, Store::Jumbo];

        let totals = totals_map(&data, &selected);
        assert_eq!(totals.len(), 2);
        assert!(!totals.contains_key(&Store::Dirk));
        assert_eq!(totals[&Store::Jumbo], 11.80);

        assert_eq!(cheapest_store(&selected, &totals), Some(Store::Jumbo));
    }

    #[test]
    fn test_missing_total_defaults_to_zero() {
        let data = response(vec![(Store::Ah, 4.0)]);
        let selected = vec![Store::Ah, Store::Dirk];
        let totals = totals_map(&data, &selected);
        assert_eq!(totals[&Store::Dirk], 0.0);
        // A zero total still counts as cheapest, as the original did.
        assert_eq!(cheapest_store(&selected, &totals), Some(Store::Dirk));
    }

    #[test]
    fn test_no_selection_has_no_winner() {
        let data = response(vec![]);
        let totals = totals_map(&data, &[]);
        assert_eq!(cheapest_store(&[], &totals), None);
    }

    #[test]
    fn test_cheapest_breakdown_buckets_and_subtotals() {
        let data = CompareResponse {
            cheapest_per_product: vec![
                CheapestRow { product: "Melk".into(), store: Some(Store::Ah), price: Some(1.0) },
                CheapestRow { product: "Kaas".into(), store: Some(Store::Ah), price: Some(4.5) },
                CheapestRow { product: "Brood".into(), store: Some(Store::Jumbo), price: Some(2.0) },
                CheapestRow { product: "Wasmiddel".into(), store: None, price: None },
            ],
            ..Default::default()
        };
        let breakdown = cheapest_breakdown(&data);
        assert_eq!(breakdown.buckets[&Store::Ah].len(), 2);
        assert_eq!(breakdown.subtotals[&Store::Ah], 5.5);
        assert_eq!(breakdown.subtotals[&Store::Jumbo], 2.0);
        assert_eq!(breakdown.unpriced, vec!["Wasmiddel"]);
    }
}
