//! Loading placeholder.

use leptos::prelude::*;

use crate::util::i18n::use_messages;

/// Spinner with a localized label, reserving `min_height` of vertical space.
#[component]
pub fn Loader(#[prop(default = "0")] min_height: &'static str) -> impl IntoView {
    let messages = use_messages();
    let label = move || messages.with(|m| m.format("Loader.loading"));

    view! {
        <div class="loader" style=format!("min-height: {min_height};") role="status">
            <span class="loader__spinner" aria-hidden="true"></span>
            <span class="loader__label">{label}</span>
        </div>
    }
}
