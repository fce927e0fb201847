//! Inline SVG icons.

use leptos::prelude::*;

/// Circled "i" shown next to metric names.
#[component]
pub fn InformationIcon(color: &'static str) -> impl IntoView {
    view! {
        <svg class="icon icon--information" width="16" height="16" viewBox="0 0 16 16" aria-hidden="true">
            <circle cx="8" cy="8" r="7" fill="none" stroke=color stroke-width="1.5"/>
            <rect x="7.25" y="7" width="1.5" height="5" rx="0.75" fill=color/>
            <circle cx="8" cy="4.75" r="0.9" fill=color/>
        </svg>
    }
}

/// Right-pointing chevron at the end of a menu row.
#[component]
pub fn MenuArrowIcon(#[prop(into)] color: Signal<&'static str>) -> impl IntoView {
    view! {
        <svg class="icon icon--menu-arrow" width="8" height="12" viewBox="0 0 8 12" aria-hidden="true">
            <path
                d="M1.5 1.5L6 6l-4.5 4.5"
                fill="none"
                stroke=move || color.get()
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}
