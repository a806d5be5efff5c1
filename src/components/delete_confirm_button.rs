//! Delete Confirm Button Component
//!
//! Inline two-step confirmation for destructive actions.

use leptos::prelude::*;

/// Shows the labelled delete button first; clicking it swaps in a
/// confirm/cancel pair so a stray click never deletes anything.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button class="pm-btn" on:click=move |_| set_confirming.set(true)>
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="pm-delete-confirm">
                <span>"Weet je het zeker?"</span>
                <button
                    class="pm-btn pm-btn-danger"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Ja, verwijder"
                </button>
                <button class="pm-btn" on:click=move |_| set_confirming.set(false)>
                    "Annuleer"
                </button>
            </span>
        </Show>
    }
}
