use super::*;
use crate::components::menu::menu_rows;
use crate::net::types::{AuditParameters, Page};

fn project(uuid: &str, audit_parameters: &[&str]) -> Project {
    Project {
        uuid: uuid.to_owned(),
        name: format!("Project {uuid}"),
        pages: vec![Page { uuid: "pg1".to_owned(), name: "Home".to_owned(), url: String::new() }],
        scripts: Vec::new(),
        audit_parameters_list: audit_parameters
            .iter()
            .map(|id| AuditParameters { uuid: (*id).to_owned(), name: format!("Params {id}") })
            .collect(),
    }
}

fn state(projects: Vec<Project>) -> ProjectsState {
    ProjectsState { items: projects, ..ProjectsState::default() }
}

fn params(project_id: Option<&str>, audit_parameters_id: Option<&str>) -> RouteParameters {
    RouteParameters {
        project_id: project_id.map(str::to_owned),
        page_or_script_id: None,
        audit_parameters_id: audit_parameters_id.map(str::to_owned),
    }
}

#[test]
fn inputs_pick_route_project_and_parameters() {
    let s = state(vec![project("p1", &["ap1", "ap2"]), project("p2", &[])]);
    let inputs = menu_inputs(&s, &params(Some("p1"), Some("ap2")), "/project/p1/audits");
    assert_eq!(inputs.project.map(|p| p.uuid), Some("p1".to_owned()));
    assert_eq!(inputs.current_url, "/project/p1/audits");
    assert_eq!(inputs.audit_parameters_id.as_deref(), Some("ap2"));
}

#[test]
fn inputs_keep_missing_audit_parameters_missing() {
    let s = state(vec![project("p1", &["ap1", "ap2"])]);
    let inputs = menu_inputs(&s, &params(Some("p1"), None), "/project/p1/audits");
    assert!(inputs.audit_parameters_id.is_none());
}

#[test]
fn displayed_page_without_audit_parameters_is_highlighted() {
    let url = "/project/p1/audits/pg1/audit-parameters/";
    let s = state(vec![project("p1", &["ap1"])]);
    let inputs = menu_inputs(&s, &params(Some("p1"), None), url);
    let project = inputs.project.expect("project p1 is in state");
    let rows = menu_rows(&project, &inputs.current_url, inputs.audit_parameters_id.as_deref());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].entry.link_path, url);
    assert!(rows[0].active);
}

#[test]
fn inputs_without_project_keep_url_only() {
    let s = state(vec![project("p1", &["ap1"])]);
    let inputs = menu_inputs(&s, &params(None, None), "/");
    assert!(inputs.project.is_none());
    assert!(inputs.audit_parameters_id.is_none());
    assert_eq!(inputs.current_url, "/");
}

#[test]
fn inputs_for_unknown_project_have_no_project() {
    let s = state(vec![project("p1", &["ap1"])]);
    let inputs = menu_inputs(&s, &params(Some("p9"), Some("ap1")), "/project/p9/audits");
    assert!(inputs.project.is_none());
    assert_eq!(inputs.audit_parameters_id.as_deref(), Some("ap1"));
}
