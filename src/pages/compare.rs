//! Compare Workspace
//!
//! The main page: free-text shopping list with autosuggest, store
//! selection, draft persistence, comparison results and premium
//! auto-save.

use std::collections::HashMap;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use web_sys::AbortController;

use crate::api::{self, ApiError};
use crate::components::{LineItem, ReceiptCard};
use crate::context::use_auth;
use crate::format::euro;
use crate::list;
use crate::models::{
    CompareRequest, CompareResponse, ItemPayload, ItemRef, SaveStatus, SelectedProduct, Store,
    Suggestion,
};
use crate::results;
use crate::storage;
use crate::store::{prune_selection, DraftState, DraftStateStoreFields, DraftStore};
use crate::suggest::{self, SuggestState};

const PAYWALL_MESSAGE: &str = "Je hebt je gratis limiet bereikt. Bekijk Premium om onbeperkt te \
                               vergelijken en je resultaten op te slaan.";

#[component]
pub fn ComparePage() -> impl IntoView {
    let auth = use_auth();
    let navigate = StoredValue::new_local(use_navigate());

    // A list handed over from the history page wins over the stored
    // draft, for this load only.
    let initial = match storage::take_handoff() {
        Some(lines) => DraftState {
            manual_text: list::join_lines(&lines),
            ..Default::default()
        },
        None => storage::load_draft().unwrap_or_default(),
    };
    let draft = DraftStore::new(initial);

    // Suggestion state
    let (suggest_query, set_suggest_query) = signal(String::new());
    let (fetch_query, set_fetch_query) = signal(String::new());
    let (suggest_open, set_suggest_open) = signal(false);
    let (suggest_loading, set_suggest_loading) = signal(false);
    let (suggest_error, set_suggest_error) = signal(String::new());
    let (suggestions, set_suggestions) = signal(Vec::<Suggestion>::new());
    let suggest_state = StoredValue::new(SuggestState::default());
    let abort_handle = StoredValue::new_local(Option::<AbortController>::None);

    // Comparison state
    let (loading, set_loading) = signal(false);
    let (data, set_data) = signal(Option::<CompareResponse>::None);
    let (error, set_error) = signal(String::new());
    let (paywall, set_paywall) = signal(Option::<String>::None);
    let (save_status, set_save_status) = signal(SaveStatus::Idle);

    let manual_list = Memo::new(move |_| list::split_lines(&draft.manual_text().get()));
    let selected_stores = Memo::new(move |_| draft.stores().get().selected());

    // Selection metadata lives only as long as its line does
    Effect::new(move |_| {
        let lines = manual_list.get();
        prune_selection(&mut draft.selection().write(), &lines);
    });

    // Mirror the draft to local storage on every change
    Effect::new(move |_| {
        let snapshot = DraftState {
            manual_text: draft.manual_text().get(),
            stores: draft.stores().get(),
            list_name: draft.list_name().get(),
            selection: draft.selection().get(),
        };
        storage::save_draft(&snapshot);
    });

    let add_suggestion = move |s: Suggestion| {
        let label = s.label.trim().to_string();
        if label.is_empty() {
            return;
        }
        let text = draft.manual_text().get_untracked();
        draft.manual_text().set(list::append_line(&text, &label));
        draft
            .selection()
            .write()
            .insert(label, SelectedProduct::from_suggestion(&s));
        set_suggest_query.set(String::new());
        set_fetch_query.set(String::new());
        set_suggest_open.set(false);
    };

    let remove_selected = move |label: String| {
        let text = draft.manual_text().get_untracked();
        draft.manual_text().set(list::remove_line(&text, &label));
        draft.selection().write().remove(&label);
    };

    // Typed text drives the background fetch query
    Effect::new(move |_| {
        let typed = suggest_query.get();
        let typed = typed.trim();
        if !typed.is_empty() {
            set_fetch_query.set(typed.to_string());
        }
    });

    // Debounced, cached, latest-request-wins search
    Effect::new(move |_| {
        let q = fetch_query.get().trim().to_string();
        set_suggest_error.set(String::new());

        if q.is_empty() {
            set_suggestions.set(Vec::new());
            set_suggest_loading.set(false);
            return;
        }
        let prefill = suggest::is_prefill(&q, &suggest_query.get_untracked());
        if q.chars().count() < suggest::min_query_len(prefill) {
            set_suggestions.set(Vec::new());
            set_suggest_loading.set(false);
            return;
        }

        let Some(seq) = suggest_state.try_update_value(|s| s.begin()) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(suggest::DEBOUNCE_MS).await;
            if suggest_state.try_with_value(|s| s.is_current(seq)) != Some(true) {
                return;
            }

            if let Some(hit) = suggest_state.try_with_value(|s| s.cached(&q)).flatten() {
                set_suggestions.set(hit);
                set_suggest_loading.set(false);
                return;
            }

            // Supersede whatever is still in flight
            let _ = abort_handle.try_update_value(|handle| {
                if let Some(ctl) = handle.take() {
                    ctl.abort();
                }
            });
            let controller = AbortController::new().ok();
            let abort_signal = controller.as_ref().map(|c| c.signal());
            let _ = abort_handle.try_set_value(controller);

            set_suggest_loading.set(true);
            let result = api::products::search(&q, suggest::LIMIT, abort_signal.as_ref()).await;
            if suggest_state.try_with_value(|s| s.is_current(seq)) != Some(true) {
                return;
            }
            match result {
                Ok(rows) => {
                    let _ = suggest_state.try_update_value(|s| s.insert(&q, rows.clone()));
                    set_suggestions.set(rows);
                }
                Err(ApiError::Aborted) => {}
                Err(err) => {
                    set_suggestions.set(Vec::new());
                    set_suggest_error.set(err.user_message());
                }
            }
            set_suggest_loading.set(false);
        });
    });

    let on_focus = move |_| {
        set_suggest_open.set(true);
        // Prefill suggestions behind the scenes for an empty field
        if suggest_query.get_untracked().trim().is_empty() {
            set_fetch_query.set(suggest::PREFILL_QUERY.to_string());
        }
    };

    let on_blur = move |_| {
        spawn_local(async move {
            TimeoutFuture::new(suggest::BLUR_CLOSE_MS).await;
            set_suggest_open.set(false);
        });
        // Abandon the prefill when leaving an untouched field
        if suggest_query.get_untracked().trim().is_empty() {
            set_fetch_query.set(String::new());
            set_suggestions.set(Vec::new());
            abort_handle.update_value(|handle| {
                if let Some(ctl) = handle.take() {
                    ctl.abort();
                }
            });
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            if let Some(first) = suggestions.get_untracked().first().cloned() {
                add_suggestion(first);
            }
        }
    };

    // Mapped lines become product references, the rest plain text
    let build_items = move || -> Vec<ItemPayload> {
        let selection = draft.selection().get_untracked();
        manual_list
            .get_untracked()
            .into_iter()
            .map(|label| {
                let mapped = selection
                    .get(&label)
                    .and_then(|m| m.product_id.map(|pid| (m.clone(), pid)));
                match mapped {
                    Some((meta, product_id)) => ItemPayload::Product(ItemRef {
                        store: meta.store,
                        product_id,
                        label: Some(meta.label.unwrap_or_else(|| label.clone())),
                        query: Some(meta.query.unwrap_or_else(|| label.clone())),
                    }),
                    None => ItemPayload::Text(label),
                }
            })
            .collect()
    };

    let run_compare = move |_| {
        set_error.set(String::new());
        set_paywall.set(None);
        set_data.set(None);
        set_save_status.set(SaveStatus::Idle);

        if manual_list.get_untracked().is_empty() {
            set_error.set("Voeg minimaal 1 product toe.".to_string());
            return;
        }
        let stores = draft.stores().get_untracked().selected();
        if stores.is_empty() {
            set_error.set("Selecteer minimaal 1 supermarkt.".to_string());
            return;
        }

        set_loading.set(true);
        let request = CompareRequest { stores, items: build_items() };
        let premium = auth.is_premium();
        let user_id = auth.user_id();
        let list_name = draft.list_name().get_untracked().trim().to_string();
        spawn_local(async move {
            match api::compare::run(&request).await {
                Ok(result) => {
                    set_data.set(Some(result.clone()));

                    // Premium auto-save: best effort, shown as a status
                    // line instead of an error
                    if premium {
                        if let Some(user_id) = user_id {
                            set_save_status.set(SaveStatus::Saving);
                            let name = (!list_name.is_empty()).then_some(list_name.as_str());
                            match api::premium::save_compare(&user_id, &request, &result, name)
                                .await
                            {
                                Ok(()) => set_save_status.set(SaveStatus::Saved),
                                Err(_) => set_save_status.set(SaveStatus::Failed),
                            }
                        }
                    }
                }
                Err(err) if err.is_paywall() => {
                    set_paywall.set(Some(PAYWALL_MESSAGE.to_string()));
                }
                Err(err) => set_error.set(err.user_message()),
            }
            set_loading.set(false);
        });
    };

    // Without premium, stash the draft and result as a save intent and
    // send the user to the upsell page
    let save_for_later = move |_| {
        let Some(user_id) = auth.user_id() else {
            navigate.with_value(|nav| {
                nav(
                    "/premium?next=%2Fvergelijken&intent=save_compare",
                    Default::default(),
                )
            });
            return;
        };

        let snapshot = DraftState {
            manual_text: draft.manual_text().get_untracked(),
            stores: draft.stores().get_untracked(),
            list_name: draft.list_name().get_untracked(),
            selection: draft.selection().get_untracked(),
        };
        let name = snapshot.list_name.trim().to_string();
        let payload = CompareRequest {
            stores: snapshot.stores.selected(),
            items: build_items(),
        };
        let intent = storage::PremiumIntent {
            intent: "save_compare".to_string(),
            from: "/vergelijken".to_string(),
            created_at: String::from(js_sys::Date::new_0().to_iso_string()),
            user_id,
            name: (!name.is_empty()).then_some(name),
            draft: snapshot,
            compare: storage::IntentCompare {
                payload,
                result: data.get_untracked(),
            },
        };
        storage::save_intent(&intent);
        navigate.with_value(|nav| nav("/premium?intent=save_compare", Default::default()));
    };

    let goto_premium = move |_| {
        navigate.with_value(|nav| nav("/premium?next=%2Fvergelijken", Default::default()));
    };

    let save_status_text = move || match save_status.get() {
        SaveStatus::Idle => "",
        SaveStatus::Saving => "Opslaan…",
        SaveStatus::Saved => "✅ Opgeslagen",
        SaveStatus::Failed => "⚠️ Kon niet opslaan (probeer opnieuw)",
    };

    view! {
        <div class="pm-page">
            <header class="pm-header">
                <h1 class="pm-title">"Vergelijken 🔎"</h1>
                <p class="pm-subtitle">"Vergelijk je boodschappen tussen supermarkten."</p>
            </header>

            // Premium info / upsell
            <div class="pm-card">
                <Show
                    when=move || auth.is_premium()
                    fallback=move || {
                        view! {
                            <div class="pm-split">
                                <div class="pm-text">
                                    <div class="pm-strong">"Wil je je vergelijkingen bewaren?"</div>
                                    <div class="pm-muted">
                                        "Met Premium kun je je vergelijkingen opslaan, later terugkijken, aanpassen en hergebruiken. Handig voor weekboodschappen of vaste lijstjes."
                                    </div>
                                    <div class="pm-caption">
                                        {move || {
                                            if auth.user.get().is_some() {
                                                "Status: ingelogd"
                                            } else {
                                                "Status: niet ingelogd"
                                            }
                                        }}
                                    </div>
                                </div>
                                <button class="pm-btn" on:click=save_for_later>
                                    "💾 Sla vergelijking op (Premium)"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="pm-split">
                        <div class="pm-text">
                            <div class="pm-strong">"💎 Premium is actief"</div>
                            <div class="pm-muted">
                                "Je vergelijking wordt automatisch opgeslagen in "
                                <a href="/geschiedenis">"Geschiedenis"</a>
                                "."
                            </div>
                            <Show when=move || data.get().is_some()>
                                <div class="pm-save-status">{save_status_text}</div>
                            </Show>
                        </div>
                        <div class="pm-caption">
                            "Tip: geef je vergelijking een naam voor je historie."
                        </div>
                    </div>
                </Show>
            </div>

            <div class="pm-section">
                <h2 class="pm-h2">"Kies winkels"</h2>
                <div class="pm-check-row">
                    {Store::ALL
                        .iter()
                        .map(|s| {
                            let s = *s;
                            view! {
                                <label class="pm-check-pill">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || draft.stores().get().is_on(s)
                                        on:change=move |ev| {
                                            let on = event_target_checked(&ev);
                                            draft.stores().write().set_on(s, on);
                                        }
                                    />
                                    {s.label()}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="pm-section">
                <h2 class="pm-h2">"Producten kiezen"</h2>

                <div class="pm-three-col">
                    // Autosuggest
                    <div>
                        <label class="pm-label">"Kies producten uit de suggestielijst"</label>
                        <div class="pm-suggest-wrap">
                            <input
                                type="text"
                                placeholder="Begin met typen..."
                                autocomplete="off"
                                prop:value=move || suggest_query.get()
                                on:input=move |ev| {
                                    set_suggest_query.set(event_target_value(&ev));
                                    set_suggest_open.set(true);
                                }
                                on:focus=on_focus
                                on:blur=on_blur
                                on:keydown=on_keydown
                            />

                            <Show when=move || suggest_open.get()>
                                <div class="pm-suggest-panel">
                                    {move || {
                                        if suggest_loading.get() {
                                            return view! {
                                                <div class="pm-suggest-note">"Zoeken…"</div>
                                            }
                                                .into_any();
                                        }
                                        let err = suggest_error.get();
                                        if !err.is_empty() {
                                            return view! {
                                                <div class="pm-suggest-error">{err}</div>
                                            }
                                                .into_any();
                                        }
                                        let rows = suggestions.get();
                                        if rows.is_empty() {
                                            return view! {
                                                <div class="pm-suggest-note">"Geen resultaten"</div>
                                            }
                                                .into_any();
                                        }
                                        view! {
                                            <ul class="pm-suggest-list">
                                                {rows
                                                    .into_iter()
                                                    .map(|opt| {
                                                        let label = opt.label.clone();
                                                        let store = opt.store;
                                                        let img = opt.image_url.clone();
                                                        view! {
                                                            <li>
                                                                <button
                                                                    type="button"
                                                                    class="pm-suggest-item"
                                                                    on:mousedown=move |ev| ev.prevent_default()
                                                                    on:click=move |_| add_suggestion(opt.clone())
                                                                >
                                                                    {match img {
                                                                        Some(src) => {
                                                                            view! {
                                                                                <img src=src class="pm-line-thumb" alt="" />
                                                                            }
                                                                                .into_any()
                                                                        }
                                                                        None => {
                                                                            view! {
                                                                                <div class="pm-line-thumb pm-line-thumb-empty"></div>
                                                                            }
                                                                                .into_any()
                                                                        }
                                                                    }}
                                                                    <span class="pm-suggest-label">{label}</span>
                                                                    <span class="pm-suggest-store">
                                                                        {format!("({})", store)}
                                                                    </span>
                                                                </button>
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        }
                                            .into_any()
                                    }}
                                </div>
                            </Show>
                        </div>
                        <div class="pm-help">"Tip: Enter voegt de eerste match toe."</div>
                    </div>

                    // Selected lines with their metadata
                    <div>
                        <div class="pm-label">"Geselecteerd (klik om te verwijderen)"</div>
                        <div class="pm-selected-box">
                            {move || {
                                let selection = draft.selection().get();
                                let lines = manual_list.get();
                                if lines.is_empty() {
                                    return view! {
                                        <div class="pm-caption">"Nog geen producten geselecteerd."</div>
                                    }
                                        .into_any();
                                }
                                view! {
                                    <ul class="pm-selected-list">
                                        {lines
                                            .into_iter()
                                            .map(|label| {
                                                let meta = selection.get(&label).cloned();
                                                let store_tag = meta
                                                    .as_ref()
                                                    .map(|m| format!("({})", m.store));
                                                let img = meta.and_then(|m| m.image_url);
                                                let label_remove = label.clone();
                                                let shown = label.clone();
                                                view! {
                                                    <li class="pm-selected-row">
                                                        {match img {
                                                            Some(src) => {
                                                                view! {
                                                                    <img src=src class="pm-line-thumb" alt="" />
                                                                }
                                                                    .into_any()
                                                            }
                                                            None => {
                                                                view! {
                                                                    <div class="pm-line-thumb pm-line-thumb-empty"></div>
                                                                }
                                                                    .into_any()
                                                            }
                                                        }}
                                                        <span class="pm-selected-label">
                                                            {shown}
                                                            {store_tag
                                                                .map(|t| {
                                                                    view! { <span class="pm-caption">{t}</span> }
                                                                })}
                                                        </span>
                                                        <button
                                                            type="button"
                                                            class="pm-btn pm-btn-small"
                                                            on:click=move |_| remove_selected(label_remove.clone())
                                                        >
                                                            "Verwijder"
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }}
                        </div>
                    </div>

                    // Free-text list
                    <div>
                        <label class="pm-label">"Boodschappenlijst (één product per regel)"</label>
                        <textarea
                            placeholder="Bijv.\nMelk 1L\nBananen\nBrood volkoren"
                            prop:value=move || draft.manual_text().get()
                            on:input=move |ev| draft.manual_text().set(event_target_value(&ev))
                        ></textarea>
                    </div>
                </div>
            </div>

            <div class="pm-field">
                <label class="pm-label">"Naam voor deze lijst (optioneel)"</label>
                <input
                    type="text"
                    placeholder="Bijv. Weekboodschappen"
                    prop:value=move || draft.list_name().get()
                    on:input=move |ev| draft.list_name().set(event_target_value(&ev))
                />
            </div>

            // Paywall panel instead of a generic error on a 402
            {move || {
                paywall
                    .get()
                    .map(|message| {
                        view! {
                            <div class="pm-card pm-paywall">
                                <h2 class="pm-h2">"🔒 Premium vereist"</h2>
                                <p class="pm-text">{message}</p>
                                <ul class="pm-bullets">
                                    <li>"Onbeperkt vergelijken"</li>
                                    <li>"Vergelijkingen opslaan"</li>
                                    <li>"Geschiedenis & vaste lijstjes gebruiken"</li>
                                </ul>
                                <div class="pm-cta-wrap">
                                    <button class="pm-cta-btn" on:click=goto_premium>
                                        "💎 Bekijk Premium"
                                    </button>
                                </div>
                                <p class="pm-caption">
                                    "Lees eerst wat Premium je oplevert. Activeren kan daarna."
                                </p>
                            </div>
                        }
                    })
            }}

            <button class="pm-btn" type="button" on:click=run_compare disabled=move || loading.get()>
                {move || if loading.get() { "Bezig…" } else { "Vergelijk prijzen" }}
            </button>

            <Show when=move || !error.get().is_empty()>
                <div class="pm-error">{move || error.get()}</div>
            </Show>

            // Results
            {move || {
                data.get()
                    .map(|resp| {
                        let selected = selected_stores.get();
                        let totals = results::totals_map(&resp, &selected);
                        let winner = results::cheapest_store(&selected, &totals);
                        let breakdown = results::cheapest_breakdown(&resp);
                        let by_product: HashMap<String, crate::models::MatchRow> = resp
                            .matches
                            .iter()
                            .map(|m| (m.product.clone(), m.clone()))
                            .collect();

                        view! {
                            <div class="pm-results">
                                // Totals per store
                                <div class="pm-totals-grid">
                                    {selected
                                        .iter()
                                        .map(|s| {
                                            let s = *s;
                                            let total = totals.get(&s).copied();
                                            let card_class = if winner == Some(s) {
                                                "pm-total-card pm-total-card-winner"
                                            } else {
                                                "pm-total-card"
                                            };
                                            view! {
                                                <div class=card_class>
                                                    <div class="pm-caption">{s.code()}</div>
                                                    <div class="pm-total-amount">{euro(total)}</div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>

                                // Every product per store
                                <div class="pm-card">
                                    <h2 class="pm-h2">"Alle producten per winkel"</h2>
                                    <div class="pm-receipt-grid">
                                        {selected
                                            .iter()
                                            .map(|s| {
                                                let s = *s;
                                                let is_winner = winner == Some(s);
                                                let rows = resp
                                                    .matches
                                                    .iter()
                                                    .map(|row| {
                                                        let img = row.image(s).map(str::to_string);
                                                        let name = row.name(s).to_string();
                                                        let price = row.price(s);
                                                        view! { <LineItem img=img name=name price=price /> }
                                                    })
                                                    .collect_view();
                                                view! {
                                                    <ReceiptCard
                                                        store=s
                                                        winner=is_winner
                                                        subtitle="Alle gekozen producten (— = niet gevonden)"
                                                    >
                                                        {rows}
                                                    </ReceiptCard>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>

                                // Cheapest product per store
                                <div class="pm-card">
                                    <h2 class="pm-h2">"Goedkoopste product per winkel"</h2>
                                    <div class="pm-receipt-grid">
                                        {selected
                                            .iter()
                                            .map(|s| {
                                                let s = *s;
                                                let bucket = breakdown
                                                    .buckets
                                                    .get(&s)
                                                    .cloned()
                                                    .unwrap_or_default();
                                                let subtotal = breakdown
                                                    .subtotals
                                                    .get(&s)
                                                    .copied()
                                                    .unwrap_or(0.0);
                                                let rows = bucket
                                                    .iter()
                                                    .map(|row| {
                                                        let m = by_product.get(&row.product);
                                                        let name = m
                                                            .map(|m| m.name(s).to_string())
                                                            .unwrap_or_else(|| row.product.clone());
                                                        let img = m
                                                            .and_then(|m| m.image(s))
                                                            .map(str::to_string);
                                                        view! {
                                                            <LineItem img=img name=name price=row.price />
                                                        }
                                                    })
                                                    .collect_view();
                                                view! {
                                                    <ReceiptCard
                                                        store=s
                                                        subtitle="Alleen producten die hier het goedkoopst zijn"
                                                    >
                                                        {if bucket.is_empty() {
                                                            view! { <div class="pm-caption">"—"</div> }
                                                                .into_any()
                                                        } else {
                                                            view! { <div>{rows}</div> }.into_any()
                                                        }}
                                                        <div class="pm-receipt-total">
                                                            "Totaal: "
                                                            <b>{euro(Some(subtotal))}</b>
                                                        </div>
                                                    </ReceiptCard>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    {(!breakdown.unpriced.is_empty())
                                        .then(|| {
                                            view! {
                                                <p class="pm-caption">
                                                    {format!(
                                                        "Bij geen enkele winkel gevonden: {}",
                                                        breakdown.unpriced.join(", "),
                                                    )}
                                                </p>
                                            }
                                        })}
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
