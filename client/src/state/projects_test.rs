use super::*;

fn project(uuid: &str, name: &str) -> Project {
    Project {
        uuid: uuid.to_owned(),
        name: name.to_owned(),
        pages: Vec::new(),
        scripts: Vec::new(),
        audit_parameters_list: Vec::new(),
    }
}

#[test]
fn projects_state_defaults() {
    let s = ProjectsState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(!s.launch_pending);
    assert!(s.error.is_none());
}

#[test]
fn find_matches_on_uuid() {
    let s = ProjectsState { items: vec![project("p1", "Shop"), project("p2", "Blog")], ..ProjectsState::default() };
    assert_eq!(s.find("p2").map(|p| p.name.as_str()), Some("Blog"));
    assert!(s.find("Blog").is_none());
}

#[test]
fn current_requires_route_parameter() {
    let s = ProjectsState { items: vec![project("p1", "Shop")], ..ProjectsState::default() };
    assert!(s.current(None).is_none());
    assert!(s.current(Some("missing")).is_none());
    assert_eq!(s.current(Some("p1")).map(|p| p.uuid.as_str()), Some("p1"));
}
