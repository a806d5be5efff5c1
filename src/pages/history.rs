//! History Workspace
//!
//! Saved comparisons and fixed lists for premium sessions. Every
//! mutation is followed by a full reload of both collections; the
//! backend stays the single source of truth.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiError};
use crate::components::DeleteConfirmButton;
use crate::format::timestamp;
use crate::list;
use crate::models::{items_to_text, EntryId, FixedList, HistoryEntry};
use crate::storage;

const HISTORY_LIMIT: u32 = 30;
const NO_NAME: &str = "Zonder naam";
const DEFAULT_FIXED_NAME: &str = "Vaste lijst";

async fn load_all(user_id: &str) -> Result<(Vec<FixedList>, Vec<HistoryEntry>), ApiError> {
    let lists = api::premium::lists(user_id).await?.lists;
    let history = api::premium::history(user_id, HISTORY_LIMIT).await?.history;
    Ok((lists, history))
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let navigate = StoredValue::new_local(use_navigate());
    let user_id = StoredValue::new(storage::pseudonymous_user_id());

    let (is_premium, set_is_premium) = signal(false);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());

    let (fixed_lists, set_fixed_lists) = signal(Vec::<FixedList>::new());
    let (history, set_history) = signal(Vec::<HistoryEntry>::new());

    // Editable name fields, keyed by entry id
    let (rename_fixed, set_rename_fixed) = signal(HashMap::<String, String>::new());
    let (rename_hist, set_rename_hist) = signal(HashMap::<String, String>::new());
    let (save_as_fixed, set_save_as_fixed) = signal(HashMap::<String, String>::new());

    // Trigger to reload both collections after a mutation
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let reload = move || set_reload_trigger.update(|v| *v += 1);

    // Premium gate via the legacy pseudonymous endpoint
    Effect::new(move |_| {
        let uid = user_id.get_value();
        spawn_local(async move {
            match api::premium::status(&uid).await {
                Ok(status) => set_is_premium.set(status.is_premium),
                Err(_) => set_is_premium.set(false),
            }
        });
    });

    // Load both collections when premium, and again after every mutation
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        if !is_premium.get() {
            return;
        }
        let uid = user_id.get_value();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(String::new());
            match load_all(&uid).await {
                Ok((lists, entries)) => {
                    let mut rf = HashMap::new();
                    for l in &lists {
                        rf.insert(
                            l.id.to_string(),
                            l.name.clone().unwrap_or_else(|| NO_NAME.to_string()),
                        );
                    }
                    let mut rh = HashMap::new();
                    let mut sf = HashMap::new();
                    for h in &entries {
                        let name = h.name.clone().unwrap_or_else(|| NO_NAME.to_string());
                        rh.insert(h.id.to_string(), name.clone());
                        sf.insert(h.id.to_string(), name);
                    }
                    set_rename_fixed.set(rf);
                    set_rename_hist.set(rh);
                    set_save_as_fixed.set(sf);
                    set_fixed_lists.set(lists);
                    set_history.set(entries);
                }
                Err(err) => set_error.set(err.user_message()),
            }
            set_loading.set(false);
        });
    });

    // Typed name for an entry, falling back to the placeholder
    let field_name = |map: ReadSignal<HashMap<String, String>>, id: &EntryId, fallback: &str| {
        map.get_untracked()
            .get(&id.to_string())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    };

    let rename_fixed_action = move |id: EntryId| {
        let uid = user_id.get_value();
        let name = field_name(rename_fixed, &id, NO_NAME);
        spawn_local(async move {
            match api::premium::rename_list(&id, &uid, &name).await {
                Ok(()) => reload(),
                Err(err) => set_error.set(err.user_message()),
            }
        });
    };

    let delete_fixed_action = move |id: EntryId| {
        let uid = user_id.get_value();
        spawn_local(async move {
            match api::premium::delete_list(&id, &uid).await {
                Ok(()) => reload(),
                Err(err) => set_error.set(err.user_message()),
            }
        });
    };

    let rename_hist_action = move |id: EntryId| {
        let uid = user_id.get_value();
        let name = field_name(rename_hist, &id, NO_NAME);
        spawn_local(async move {
            match api::premium::rename_history(&id, &uid, &name).await {
                Ok(()) => reload(),
                Err(err) => set_error.set(err.user_message()),
            }
        });
    };

    let save_as_fixed_action = move |id: EntryId, items: Vec<serde_json::Value>| {
        let uid = user_id.get_value();
        let name = field_name(save_as_fixed, &id, DEFAULT_FIXED_NAME);
        spawn_local(async move {
            match api::premium::save_list(&uid, &name, &items).await {
                Ok(()) => reload(),
                Err(err) => set_error.set(err.user_message()),
            }
        });
    };

    let delete_hist_action = move |id: EntryId| {
        let uid = user_id.get_value();
        spawn_local(async move {
            match api::premium::delete_history(&id, &uid).await {
                Ok(()) => reload(),
                Err(err) => set_error.set(err.user_message()),
            }
        });
    };

    // Hand the items to the compare page and go there
    let use_items = move |items: Vec<serde_json::Value>| {
        let text = items_to_text(&items);
        let lines = list::split_lines(&text);
        storage::store_handoff(&lines);
        navigate.with_value(|nav| nav("/vergelijken", Default::default()));
    };

    view! {
        <div class="pm-page">
            <header class="pm-header">
                <h1 class="pm-title">"Geschiedenis 🕒"</h1>
                <p class="pm-subtitle">
                    "Je opgeslagen vergelijkingen en vaste lijsten (Premium)."
                </p>
            </header>

            <Show when=move || !is_premium.get()>
                <div class="pm-card">
                    <h2 class="pm-h2">"🔒 Premium vereist"</h2>
                    <p class="pm-caption">
                        "Activeer Premium om je vergelijkingsgeschiedenis en vaste lijsten te bekijken."
                    </p>
                    <div class="pm-cta-wrap">
                        <a class="pm-btn" href="/premium">
                            "Ga naar Premium"
                        </a>
                    </div>
                </div>
            </Show>

            <Show when=move || is_premium.get()>
                <Show when=move || loading.get()>
                    <p class="pm-caption">"Laden…"</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <div class="pm-error">{move || error.get()}</div>
                </Show>

                <Show when=move || !loading.get() && error.get().is_empty()>
                    // Fixed lists
                    <section class="pm-card">
                        <h2 class="pm-h2">"⭐ Vaste lijsten"</h2>

                        <Show when=move || fixed_lists.get().is_empty()>
                            <p class="pm-caption">
                                "Nog geen vaste lijsten. Je kunt er één maken vanuit je geschiedenis hieronder."
                            </p>
                        </Show>

                        <For
                            each=move || fixed_lists.get()
                            key=|lst| lst.id.to_string()
                            children=move |lst| {
                                let id = lst.id.clone();
                                let lid = id.to_string();
                                let lid_input = lid.clone();
                                let name = lst.name.clone().unwrap_or_else(|| NO_NAME.to_string());
                                let created = timestamp(lst.created_at.as_deref().unwrap_or(""));
                                let items = lst.items.clone();
                                let text = items_to_text(&items);
                                let count = list::split_lines(&text).len();
                                let shown_text = if text.is_empty() { "—".to_string() } else { text };
                                let rename_id = id.clone();
                                let delete_id = id.clone();

                                view! {
                                    <details class="pm-entry">
                                        <summary>
                                            {format!("{} — {} — {} items", name, created, count)}
                                        </summary>

                                        <pre class="pm-code">{shown_text}</pre>

                                        <div class="pm-two-col">
                                            <button
                                                class="pm-btn"
                                                on:click=move |_| use_items(items.clone())
                                            >
                                                "📋 Gebruik deze lijst"
                                            </button>
                                            <DeleteConfirmButton
                                                label="🗑️ Verwijder vaste lijst"
                                                on_confirm=Callback::new(move |_| {
                                                    delete_fixed_action(delete_id.clone())
                                                })
                                            />
                                        </div>

                                        <div class="pm-field">
                                            <span class="pm-label">"Hernoem"</span>
                                            <input
                                                type="text"
                                                prop:value=move || {
                                                    rename_fixed.get().get(&lid).cloned().unwrap_or_default()
                                                }
                                                on:input=move |ev| {
                                                    let v = event_target_value(&ev);
                                                    set_rename_fixed.update(|m| {
                                                        m.insert(lid_input.clone(), v);
                                                    });
                                                }
                                            />
                                            <button
                                                class="pm-btn"
                                                on:click=move |_| rename_fixed_action(rename_id.clone())
                                            >
                                                "💾 Opslaan naam"
                                            </button>
                                        </div>
                                    </details>
                                }
                            }
                        />
                    </section>

                    // Saved comparisons
                    <section class="pm-card">
                        <h2 class="pm-h2">"🧾 Geschiedenis"</h2>

                        <Show when=move || history.get().is_empty()>
                            <p class="pm-caption">"Nog geen opgeslagen vergelijkingen."</p>
                        </Show>

                        <For
                            each=move || history.get()
                            key=|h| h.id.to_string()
                            children=move |entry| {
                                let id = entry.id.clone();
                                let hid = id.to_string();
                                let hid_rename = hid.clone();
                                let hid_save = hid.clone();
                                let hid_save_input = hid.clone();
                                let name = entry.name.clone().unwrap_or_else(|| NO_NAME.to_string());
                                let created = timestamp(entry.created_at.as_deref().unwrap_or(""));
                                let payload = entry.payload.clone().unwrap_or_default();
                                let stores = payload.stores.join(", ");
                                let items = payload.items.clone();
                                let items_for_save = items.clone();
                                let text = items_to_text(&items);
                                let count = list::split_lines(&text).len();
                                let shown_text = if text.is_empty() { "—".to_string() } else { text };
                                let rename_id = id.clone();
                                let save_id = id.clone();
                                let delete_id = id.clone();

                                view! {
                                    <details class="pm-entry">
                                        <summary>
                                            {format!(
                                                "{} — {} — Winkels: {} — Items: {}",
                                                name,
                                                created,
                                                stores,
                                                count,
                                            )}
                                        </summary>

                                        <pre class="pm-code">{shown_text}</pre>

                                        <div class="pm-field">
                                            <span class="pm-label">"Naam"</span>
                                            <input
                                                type="text"
                                                prop:value=move || {
                                                    rename_hist.get().get(&hid).cloned().unwrap_or_default()
                                                }
                                                on:input=move |ev| {
                                                    let v = event_target_value(&ev);
                                                    set_rename_hist.update(|m| {
                                                        m.insert(hid_rename.clone(), v);
                                                    });
                                                }
                                            />
                                        </div>

                                        <div class="pm-two-col">
                                            <button
                                                class="pm-btn"
                                                on:click=move |_| use_items(items.clone())
                                            >
                                                "📋 Gebruik deze lijst"
                                            </button>
                                            <button
                                                class="pm-btn"
                                                on:click=move |_| rename_hist_action(rename_id.clone())
                                            >
                                                "💾 Opslaan naam"
                                            </button>
                                        </div>

                                        <div class="pm-field">
                                            <span class="pm-label">"Naam vaste lijst"</span>
                                            <input
                                                type="text"
                                                prop:value=move || {
                                                    save_as_fixed.get().get(&hid_save).cloned().unwrap_or_default()
                                                }
                                                on:input=move |ev| {
                                                    let v = event_target_value(&ev);
                                                    set_save_as_fixed.update(|m| {
                                                        m.insert(hid_save_input.clone(), v);
                                                    });
                                                }
                                            />
                                        </div>

                                        <div class="pm-two-col">
                                            <button
                                                class="pm-btn"
                                                on:click=move |_| {
                                                    save_as_fixed_action(save_id.clone(), items_for_save.clone())
                                                }
                                            >
                                                "⭐ Opslaan als vaste lijst"
                                            </button>
                                            <DeleteConfirmButton
                                                label="🗑️ Verwijder uit geschiedenis"
                                                on_confirm=Callback::new(move |_| {
                                                    delete_hist_action(delete_id.clone())
                                                })
                                            />
                                        </div>
                                    </details>
                                }
                            }
                        />
                    </section>
                </Show>
            </Show>
        </div>
    }
}
