//! Premium Success Page
//!
//! Post-checkout confirmation: one session refresh, one billing-status
//! fetch, and a five-second countdown back into the app.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::api;
use crate::context::use_auth;
use crate::format::date_nl;
use crate::models::BillingStatus;
use crate::pages::{redirect_to, safe_next};

const COUNTDOWN_SECS: u32 = 5;

#[component]
pub fn PremiumSuccessPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();

    let (countdown, set_countdown) = signal(COUNTDOWN_SECS);
    let (billing, set_billing) = signal(Option::<BillingStatus>::None);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(String::new());

    let next_path = move || {
        safe_next(query.with_untracked(|q| q.get("next")))
            .unwrap_or_else(|| "/vergelijken".to_string())
    };

    // One-shot bootstrap. The three tasks are independent: the redirect
    // fires when the countdown elapses whether or not the fetches
    // finished.
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            spawn_local(async move {
                auth.refresh().await;
            });

            spawn_local(async move {
                match api::billing::status().await {
                    Ok(status) => set_billing.set(Some(status)),
                    Err(_) => set_billing.set(None),
                }
            });

            let navigate = navigate.clone();
            let target = next_path();
            spawn_local(async move {
                for _ in 0..COUNTDOWN_SECS {
                    TimeoutFuture::new(1_000).await;
                    set_countdown.update(|c| *c = c.saturating_sub(1));
                }
                navigate(&target, Default::default());
            });
        });
    }

    let go_now = {
        let navigate = navigate.clone();
        move |_| {
            navigate(&next_path(), Default::default());
        }
    };

    let open_portal = move |_| {
        set_error.set(String::new());
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

    view! {
        <div class="pm-page">
            <div class="pm-card">
                <h1 class="pm-title">"🎉 Premium geactiveerd"</h1>

                <p class="pm-text">"Bedankt voor je betaling! Je Premium-account is actief."</p>

                {move || renewal_text().map(|text| view! { <p class="pm-text pm-muted">{text}</p> })}

                <p class="pm-text">
                    "Je wordt automatisch doorgestuurd over "
                    <b>{move || countdown.get()}</b>
                    " seconden."
                </p>

                <div class="pm-cta-wrap">
                    <button class="pm-btn" on:click=go_now>
                        "Ga vergelijken →"
                    </button>
                    <button class="pm-btn" on:click=open_portal disabled=move || busy.get()>
                        {move || if busy.get() { "Even wachten…" } else { "Abonnement beheren" }}
                    </button>
                </div>

                <Show when=move || !error.get().is_empty()>
                    <p class="pm-error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
