use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name| map.get(name).cloned()
}

#[test]
fn from_lookup_reads_all_three_segments() {
    let params = RouteParameters::from_lookup(lookup(&[
        ("projectId", "p1"),
        ("pageOrScriptId", "pg1"),
        ("auditParametersId", "ap1"),
    ]));
    assert_eq!(params.project_id.as_deref(), Some("p1"));
    assert_eq!(params.page_or_script_id.as_deref(), Some("pg1"));
    assert_eq!(params.audit_parameters_id.as_deref(), Some("ap1"));
}

#[test]
fn from_lookup_treats_empty_segments_as_absent() {
    let params = RouteParameters::from_lookup(lookup(&[("projectId", "p1"), ("auditParametersId", "")]));
    assert_eq!(params.project_id.as_deref(), Some("p1"));
    assert!(params.page_or_script_id.is_none());
    assert!(params.audit_parameters_id.is_none());
}
