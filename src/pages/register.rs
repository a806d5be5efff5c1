//! Register Page
//!
//! Mirror of the login form; the backend sets the session cookie right
//! after registration, so the flow continues without a separate login.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::context::use_auth;
use crate::pages::safe_next;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let next_query = move || query.with(|q| q.get("next"));

    let login_href = move || match next_query() {
        Some(next) => format!("/login?next={}", crate::api::encode(&next)),
        None => "/login".to_string(),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        set_error.set(None);
        set_submitting.set(true);

        let email = email.get();
        let password = password.get();
        let target = safe_next(next_query()).unwrap_or_else(|| "/".to_string());
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.register(&email, &password).await {
                Ok(()) => navigate(&target, Default::default()),
                Err(err) => set_error.set(Some(err.user_message())),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="pm-page">
            <header class="pm-header">
                <h1 class="pm-title">"PrijsMaatje 🛒"</h1>
                <p class="pm-subtitle">
                    "Maak een account om je vergelijkingen te bewaren."
                </p>
            </header>

            <div class="pm-sep"></div>

            <div class="pm-card pm-card-narrow">
                <h2 class="pm-h2">"Registreren"</h2>
                <p class="pm-text">"Binnen een minuut geregeld."</p>

                <form class="pm-form" on:submit=on_submit>
                    <label class="pm-field">
                        <span class="pm-label">"Email"</span>
                        <input
                            type="email"
                            required
                            placeholder="jij@voorbeeld.nl"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="pm-field">
                        <span class="pm-label">"Wachtwoord"</span>
                        <input
                            type="password"
                            required
                            placeholder="Kies een wachtwoord"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>

                    {move || error.get().map(|msg| view! { <div class="pm-error">{msg}</div> })}

                    <button class="pm-btn" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Bezig..." } else { "Registreren" }}
                    </button>
                </form>

                <p class="pm-caption">
                    "Al een account? "
                    <a href=login_href>"Inloggen"</a>
                </p>
            </div>
        </div>
    }
}
