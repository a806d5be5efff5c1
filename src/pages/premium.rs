//! Premium Page
//!
//! Subscription status plus the checkout/portal entry points.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::api;
use crate::context::use_auth;
use crate::format::date_nl;
use crate::models::BillingStatus;
use crate::pages::{redirect_to, safe_next};

#[component]
pub fn PremiumPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = StoredValue::new_local(use_navigate());
    let query = use_query_map();

    let (billing, set_billing) = signal(Option::<BillingStatus>::None);
    let (error, set_error) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let next_path = move || safe_next(query.with(|q| q.get("next")));

    // Billing status follows the session user; a failed fetch simply
    // means not premium.
    Effect::new(move |_| {
        if auth.user.get().is_none() {
            set_billing.set(None);
            return;
        }
        spawn_local(async move {
            match api::billing::status().await {
                Ok(status) => set_billing.set(Some(status)),
                Err(_) => set_billing.set(None),
            }
        });
    });

    let is_premium = move || billing.get().map(|b| b.is_premium).unwrap_or(false);

    let activate = move |_| {
        set_error.set(String::new());
        if auth.user.get().is_none() {
            navigate.with_value(|nav| nav("/register?next=%2Fpremium", Default::default()));
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::billing::checkout_session().await {
                Ok(session) => redirect_to(&session.url),
                Err(err) => {
                    set_error.set(err.user_message());
                    set_busy.set(false);
                }
            }
        });
    };

    let open_portal = move |_| {
        set_error.set(String::new());
        if auth.user.get().is_none() {
            navigate.with_value(|nav| nav("/register?next=%2Fpremium", Default::default()));
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::billing::portal_session().await {
                Ok(session) => redirect_to(&session.url),
                Err(err) => {
                    set_error.set(err.user_message());
                    set_busy.set(false);
                }
            }
        });
    };

    let renewal_text = move || {
        billing.get().and_then(|b| {
            let end = b.current_period_end?;
            let date = date_nl(&end);
            Some(if b.cancel_at_period_end {
                format!("Je abonnement stopt op {}.", date)
            } else {
                format!("Volgende verlenging op {}.", date)
            })
        })
    };

    let trial_used = move || {
        billing
            .get()
            .and_then(|b| b.trial_used)
            .unwrap_or(false)
    };

    view! {
        <div class="pm-page">
            <Show
                when=move || !auth.loading.get()
                fallback=|| view! { <p class="pm-caption">"Laden…"</p> }
            >
                <header class="pm-header">
                    <h1 class="pm-title">"PrijsMaatje Premium 💎"</h1>
                    <p class="pm-subtitle">"Meer besparen, meer overzicht, geen limieten."</p>
                </header>

                <div class="pm-sep"></div>

                <div class="pm-card">
                    <h2 class="pm-h2">"Wat krijg je met Premium?"</h2>
                    <ul class="pm-bullets">
                        <li>"🔓 Onbeperkt vergelijken"</li>
                        <li>"💾 Vergelijkingen opslaan"</li>
                        <li>"📊 Geschiedenis & vaste lijstjes"</li>
                        <li>"🔔 Prijsalerts (binnenkort)"</li>
                        <li>"🧪 7 dagen gratis proefperiode (1x)"</li>
                    </ul>

                    <Show
                        when=is_premium
                        fallback=move || {
                            view! {
                                <button class="pm-btn" on:click=activate disabled=move || busy.get()>
                                    {move || {
                                        if busy.get() {
                                            "Doorsturen…"
                                        } else {
                                            "Activeer Premium (7 dagen gratis)"
                                        }
                                    }}
                                </button>
                                <Show when=trial_used>
                                    <p class="pm-text pm-muted">
                                        "Je gratis proefperiode is al gebruikt. Je start direct met een betaald abonnement."
                                    </p>
                                </Show>
                            }
                        }
                    >
                        <div class="pm-status pm-status-active">"Premium is actief 💎"</div>
                        {move || renewal_text().map(|text| view! { <p class="pm-text">{text}</p> })}
                        <div class="pm-cta-wrap">
                            <button class="pm-btn" on:click=open_portal disabled=move || busy.get()>
                                {move || if busy.get() { "Even wachten…" } else { "Abonnement beheren" }}
                            </button>
                        </div>
                        {move || {
                            next_path()
                                .map(|_| {
                                    view! {
                                        <p class="pm-text pm-muted">
                                            "Tip: je kunt nu terug naar je vorige pagina."
                                        </p>
                                    }
                                })
                        }}
                    </Show>

                    <Show when=move || !error.get().is_empty()>
                        <p class="pm-error">{move || error.get()}</p>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
