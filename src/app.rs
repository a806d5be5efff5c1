//! PrijsMaatje Frontend App
//!
//! Root component: session bootstrap, shell layout and routes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Sidebar, TopBar};
use crate::context::AuthContext;
use crate::models::User;
use crate::pages::{
    ComparePage, HistoryPage, HomePage, LoginPage, PremiumPage, PremiumSuccessPage, RegisterPage,
};

#[component]
pub fn App() -> impl IntoView {
    let user = signal(Option::<User>::None);
    let loading = signal(true);
    let auth = AuthContext::new(user, loading);

    // Provide session state to all children
    provide_context(auth);

    // Fetch the session once on load
    Effect::new(move |_| {
        spawn_local(async move {
            auth.refresh().await;
        });
    });

    view! {
        <Router>
            <div class="pm-shell">
                <Sidebar />
                <div class="pm-main">
                    <TopBar />
                    <main class="pm-content">
                        <div class="pm-accent"></div>
                        <Routes fallback=|| view! { <p class="pm-caption">"Pagina niet gevonden."</p> }>
                            <Route path=path!("/") view=HomePage />
                            <Route path=path!("/vergelijken") view=ComparePage />
                            <Route path=path!("/geschiedenis") view=HistoryPage />
                            <Route path=path!("/premium") view=PremiumPage />
                            <Route path=path!("/premium/success") view=PremiumSuccessPage />
                            <Route path=path!("/login") view=LoginPage />
                            <Route path=path!("/register") view=RegisterPage />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}
