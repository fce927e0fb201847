//! Project overview: the side menu and a prompt to pick an audit target.

use leptos::prelude::*;

use crate::components::menu_container::ConnectedMenu;
use crate::util::i18n::use_messages;

#[component]
pub fn ProjectPage() -> impl IntoView {
    let messages = use_messages();

    view! {
        <div class="project-page">
            <aside class="project-page__menu">
                <ConnectedMenu/>
            </aside>
            <main class="project-page__content">
                <p>{move || messages.with(|m| m.format("Project.select_target"))}</p>
            </main>
        </div>
    }
}
