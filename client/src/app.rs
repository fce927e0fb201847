//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    OptionalParamSegment, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{audit_details::AuditDetailsPage, landing::LandingPage, project::ProjectPage};
use crate::state::{audit_results::AuditResultsState, auth::AuthState, projects::ProjectsState};
use crate::util::i18n::{Locale, Messages};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, loads the session user and project list
/// in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let projects = RwSignal::new(ProjectsState { loading: true, ..ProjectsState::default() });
    let audit_results = RwSignal::new(AuditResultsState::default());
    // Server render is English; the browser locale is applied after hydration.
    let messages = RwSignal::new(Arc::new(Messages::for_locale(Locale::En)));

    provide_context(auth);
    provide_context(projects);
    provide_context(audit_results);
    provide_context(messages);

    Effect::new(move || {
        let locale = Locale::detect();
        if locale != messages.with_untracked(|m| m.locale()) {
            messages.set(Arc::new(Messages::for_locale(locale)));
        }
    });

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_projects().await;
            projects.update(|s| {
                s.loading = false;
                match result {
                    Ok(items) => s.items = items,
                    Err(e) => {
                        log::warn!("project list failed: {e}");
                        s.error = Some(e);
                    }
                }
            });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/falco.css"/>
        <Title text="Falco"/>

        <Router>
            <Header/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route
                    path=(StaticSegment("project"), ParamSegment("projectId"), StaticSegment("audits"))
                    view=ProjectPage
                />
                <Route
                    path=(
                        StaticSegment("project"),
                        ParamSegment("projectId"),
                        StaticSegment("audits"),
                        ParamSegment("pageOrScriptId"),
                        StaticSegment("audit-parameters"),
                        OptionalParamSegment("auditParametersId"),
                    )
                    view=AuditDetailsPage
                />
            </Routes>
        </Router>
    }
}
