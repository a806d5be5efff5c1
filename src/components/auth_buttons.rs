//! Auth Buttons
//!
//! Login/register links for visitors, email + logout for a session.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_auth;

#[component]
pub fn AuthButtons() -> impl IntoView {
    let auth = use_auth();

    let logout = move |_| {
        spawn_local(async move {
            let _ = auth.logout().await;
        });
    };

    view! {
        <Show when=move || !auth.loading.get()>
            {move || match auth.user.get() {
                None => view! {
                    <div class="pm-auth-links">
                        <a href="/login">"Inloggen"</a>
                        <a href="/register">"Registreren"</a>
                    </div>
                }
                    .into_any(),
                Some(user) => view! {
                    <div class="pm-auth-links">
                        <span class="pm-auth-email">{user.email.clone()}</span>
                        {if user.is_premium {
                            view! { <span class="pm-pill">"Premium"</span> }.into_any()
                        } else {
                            view! { <a href="/premium">"Upgrade"</a> }.into_any()
                        }}
                        <button on:click=logout>"Uitloggen"</button>
                    </div>
                }
                    .into_any(),
            }}
        </Show>
    }
}
