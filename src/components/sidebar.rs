//! Sidebar Navigation

use leptos::prelude::*;

const NAV: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/vergelijken", "🔎 Vergelijken"),
    ("/premium", "💎 Premium"),
    ("/geschiedenis", "🕒 Geschiedenis"),
];

/// Fixed left-hand menu; the router intercepts the internal links
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="pm-sidebar">
            <div class="pm-side-header">
                <div class="pm-brand">"PrijsMaatje"</div>
                <div class="pm-side-sub">"menu"</div>
            </div>

            <nav class="pm-nav">
                {NAV
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a href=*href class="pm-nav-item">
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
