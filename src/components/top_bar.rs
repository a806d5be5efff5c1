//! Top Bar
//!
//! Premium badge plus the login/logout corner.

use leptos::prelude::*;

use crate::components::AuthButtons;
use crate::context::use_auth;

#[component]
pub fn TopBar() -> impl IntoView {
    let auth = use_auth();

    let badge_class = move || {
        if auth.is_premium() {
            "pm-badge pm-badge-on"
        } else {
            "pm-badge pm-badge-off"
        }
    };
    let badge_text = move || {
        if auth.loading.get() {
            "..."
        } else if auth.is_premium() {
            "Actief"
        } else {
            "Upgrade"
        }
    };

    view! {
        <div class="pm-topbar">
            <div class="pm-topbar-right">
                <a href="/premium" class=badge_class>
                    <span>"💎 Premium"</span>
                    <span class="pm-badge-text">{badge_text}</span>
                </a>
                <AuthButtons />
            </div>
        </div>
    }
}
