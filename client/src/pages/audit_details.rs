//! Audit details: metric graphs for one page or script.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route parameters select the project, the audited target and optionally the
//! audit parameters. Results are fetched whenever that selection changes and
//! stored in shared state keyed by the selection, so a late response for a
//! previous selection is discarded.

#[cfg(test)]
#[path = "audit_details_test.rs"]
mod audit_details_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::loader::Loader;
use crate::components::menu_container::ConnectedMenu;
use crate::components::metric_graph::MetricGraph;
use crate::net::types::{AuditTargetKind, Project};
use crate::state::audit_results::{AuditResultsState, DEFAULT_GRAPH_METRICS, ResultsKey};
use crate::state::parameters::RouteParameters;
use crate::state::projects::ProjectsState;

/// What to fetch for the current route, once its project is loaded.
pub fn results_request(projects: &ProjectsState, params: &RouteParameters) -> Option<(ResultsKey, AuditTargetKind)> {
    let project = projects.current(params.project_id.as_deref())?;
    let target = params.page_or_script_id.as_deref()?;
    let kind = project.target_kind(target)?;
    let audit_parameters_id = params
        .audit_parameters_id
        .clone()
        .or_else(|| project.default_audit_parameters_id().map(str::to_owned));
    Some((
        ResultsKey {
            project_id: project.uuid.clone(),
            page_or_script_id: target.to_owned(),
            audit_parameters_id,
        },
        kind,
    ))
}

/// Display name of a page or script.
pub fn target_title(project: &Project, target_id: &str) -> Option<String> {
    project
        .pages
        .iter()
        .find(|page| page.uuid == target_id)
        .map(|page| page.name.clone())
        .or_else(|| project.scripts.iter().find(|script| script.uuid == target_id).map(|s| s.name.clone()))
}

fn load_audit_results(state: RwSignal<AuditResultsState>, key: ResultsKey, kind: AuditTargetKind) {
    state.set(AuditResultsState { key: Some(key.clone()), results: Vec::new(), loading: true, error: None });
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_audit_results(
            &key.project_id,
            kind,
            &key.page_or_script_id,
            key.audit_parameters_id.as_deref(),
        )
        .await;
        state.update(|s| {
            if s.key.as_ref() != Some(&key) {
                return;
            }
            s.loading = false;
            match result {
                Ok(results) => s.results = results,
                Err(e) => {
                    log::warn!("audit results for {} failed: {e}", key.page_or_script_id);
                    s.error = Some(e);
                }
            }
        });
    });
}

#[component]
pub fn AuditDetailsPage() -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let audit_results = expect_context::<RwSignal<AuditResultsState>>();
    let params_map = use_params_map();

    let params = Memo::new(move |_| params_map.with(|map| RouteParameters::from_lookup(|name| map.get(name))));
    let request = Memo::new(move |_| params.with(|p| projects.with(|s| results_request(s, p))));

    Effect::new(move || {
        let Some((key, kind)) = request.get() else {
            return;
        };
        if audit_results.with_untracked(|s| s.key.as_ref() == Some(&key)) {
            return;
        }
        load_audit_results(audit_results, key, kind);
    });

    let title = move || {
        params.with(|p| {
            let project = projects.with(|s| s.current(p.project_id.as_deref()).cloned())?;
            target_title(&project, p.page_or_script_id.as_deref()?)
        })
    };
    let graph_data = Signal::derive(move || audit_results.with(AuditResultsState::graph_data));

    view! {
        <div class="audit-details-page">
            <aside class="audit-details-page__menu">
                <ConnectedMenu/>
            </aside>
            <main class="audit-details-page__content">
                <h1 class="audit-details-page__title">{move || title().unwrap_or_default()}</h1>
                <Show when=move || audit_results.with(|s| s.error.is_some())>
                    <p class="audit-details-page__error">
                        {move || audit_results.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <Show when=move || !audit_results.with(|s| s.loading) fallback=|| view! { <Loader min_height="300px"/> }>
                    <div class="audit-details-page__graphs">
                        {DEFAULT_GRAPH_METRICS
                            .into_iter()
                            .map(|metric| {
                                view! {
                                    <section class="audit-details-page__graph">
                                        <MetricGraph audit_results=graph_data metrics=vec![metric]/>
                                    </section>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </main>
        </div>
    }
}
