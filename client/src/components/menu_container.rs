//! State-connected side menu.
//!
//! DESIGN
//! ======
//! `menu_inputs` is the whole mapping from shared state to `Menu` props. It is
//! a plain function so the mapping can be checked without a router or a
//! reactive runtime; the component only gathers its arguments.

#[cfg(test)]
#[path = "menu_container_test.rs"]
mod menu_container_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_params_map};

use crate::components::menu::Menu;
use crate::net::types::Project;
use crate::state::parameters::RouteParameters;
use crate::state::projects::ProjectsState;

/// Props handed to [`Menu`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuInputs {
    pub project: Option<Project>,
    pub current_url: String,
    pub audit_parameters_id: Option<String>,
}

/// Map shared state to menu props.
///
/// The route's audit parameters pass through as they are, so links stay on
/// the same tree as the URL being shown.
pub fn menu_inputs(projects: &ProjectsState, params: &RouteParameters, current_url: &str) -> MenuInputs {
    let project = projects.current(params.project_id.as_deref()).cloned();
    MenuInputs {
        project,
        current_url: current_url.to_owned(),
        audit_parameters_id: params.audit_parameters_id.clone(),
    }
}

/// Request audits for a project and track the pending flag.
pub fn launch_audits(projects: RwSignal<ProjectsState>, project_id: String) {
    if projects.with_untracked(|s| s.launch_pending) {
        return;
    }
    projects.update(|s| {
        s.launch_pending = true;
        s.error = None;
    });
    leptos::task::spawn_local(async move {
        let result = crate::net::api::launch_audits(&project_id).await;
        projects.update(|s| {
            s.launch_pending = false;
            if let Err(e) = result {
                log::warn!("launch audits for project {project_id} failed: {e}");
                s.error = Some(e);
            }
        });
    });
}

/// [`Menu`] bound to the project list, the route and the current location.
#[component]
pub fn ConnectedMenu() -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let params_map = use_params_map();
    let location = use_location();

    let inputs = Memo::new(move |_| {
        let params = params_map.with(|map| RouteParameters::from_lookup(|name| map.get(name)));
        projects.with(|state| menu_inputs(state, &params, &location.pathname.get()))
    });

    let on_launch_audits = Callback::new(move |project_id: String| launch_audits(projects, project_id));

    view! {
        <Menu
            project=Signal::derive(move || inputs.get().project)
            current_url=Signal::derive(move || inputs.get().current_url)
            audit_parameters_id=Signal::derive(move || inputs.get().audit_parameters_id)
            on_launch_audits=on_launch_audits
        />
    }
}
