//! Receipt Cards
//!
//! Per-store result cards for the compare page.

use leptos::prelude::*;

use crate::format::euro;
use crate::models::Store;

/// Card framing one store's share of the result, optionally marked as
/// the cheapest total
#[component]
pub fn ReceiptCard(
    store: Store,
    #[prop(optional)] winner: bool,
    #[prop(optional, into)] subtitle: String,
    children: Children,
) -> impl IntoView {
    let card_class = if winner {
        "pm-receipt pm-receipt-winner"
    } else {
        "pm-receipt"
    };

    view! {
        <div class=card_class>
            <div class="pm-receipt-head">
                <div class="pm-receipt-store">{store.code()}</div>
                <Show when=move || winner>
                    <div class="pm-receipt-flag">"✅ Goedkoopste totaal"</div>
                </Show>
            </div>
            {(!subtitle.is_empty()).then(|| view! { <div class="pm-receipt-sub">{subtitle.clone()}</div> })}
            <div class="pm-receipt-body">{children()}</div>
        </div>
    }
}

/// One product row: thumbnail, name, price (or a dash when unmatched)
#[component]
pub fn LineItem(
    #[prop(optional, into)] img: Option<String>,
    #[prop(into)] name: String,
    price: Option<f64>,
) -> impl IntoView {
    let price_text = match price {
        Some(p) => euro(Some(p)),
        None => "—".to_string(),
    };

    view! {
        <div class="pm-line-item">
            {match img {
                Some(src) => view! { <img src=src class="pm-line-thumb" alt="" /> }.into_any(),
                None => view! { <div class="pm-line-thumb pm-line-thumb-empty"></div> }.into_any(),
            }}
            <div class="pm-line-name">{name}</div>
            <div class="pm-line-price">{price_text}</div>
        </div>
    }
}
