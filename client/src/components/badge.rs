//! Small colored label used next to menu entries.

use leptos::prelude::*;

/// Foreground and background color pair of a badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeColors {
    pub background: &'static str,
    pub text: &'static str,
}

/// An inline pill with fixed colors.
#[component]
pub fn Badge(colors: BadgeColors, #[prop(into)] text: Signal<String>) -> impl IntoView {
    let style = format!("background-color: {}; color: {};", colors.background, colors.text);
    view! { <span class="badge" style=style>{move || text.get()}</span> }
}
