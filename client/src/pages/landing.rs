//! Landing page listing the user's projects.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::loader::Loader;
use crate::state::projects::ProjectsState;
use crate::util::i18n::use_messages;
use crate::util::routes::project_path;

/// Name and link of each loaded project, in server order.
pub fn project_links(state: &ProjectsState) -> Vec<(String, String)> {
    state.items.iter().map(|project| (project.name.clone(), project_path(&project.uuid))).collect()
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let messages = use_messages();

    view! {
        <main class="landing-page">
            <h1 class="landing-page__title">{move || messages.with(|m| m.format("Landing.title"))}</h1>
            <Show when=move || projects.with(|s| s.error.is_some())>
                <p class="landing-page__error">{move || projects.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || !projects.with(|s| s.loading) fallback=|| view! { <Loader/> }>
                <Show
                    when=move || projects.with(|s| !s.items.is_empty())
                    fallback=move || view! { <p>{move || messages.with(|m| m.format("Landing.empty"))}</p> }
                >
                    <ul class="landing-page__projects">
                        {move || {
                            projects
                                .with(project_links)
                                .into_iter()
                                .map(|(name, href)| {
                                    view! {
                                        <li class="landing-page__project">
                                            <a href=href>{name}</a>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </Show>
        </main>
    }
}
