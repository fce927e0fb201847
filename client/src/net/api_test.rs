use super::*;

#[test]
fn projects_endpoint_is_collection_root() {
    assert_eq!(PROJECTS_ENDPOINT, "/api/projects");
}

#[test]
fn audit_results_endpoint_for_page_with_parameters() {
    assert_eq!(
        audit_results_endpoint("p1", AuditTargetKind::Page, "pg1", Some("ap1")),
        "/api/projects/p1/audit_results?page=pg1&audit_parameters=ap1"
    );
}

#[test]
fn audit_results_endpoint_for_script_without_parameters() {
    assert_eq!(
        audit_results_endpoint("p1", AuditTargetKind::Script, "s1", None),
        "/api/projects/p1/audit_results?script=s1"
    );
    assert_eq!(
        audit_results_endpoint("p1", AuditTargetKind::Script, "s1", Some("")),
        "/api/projects/p1/audit_results?script=s1"
    );
}

#[test]
fn launch_audits_endpoint_formats_expected_path() {
    assert_eq!(launch_audits_endpoint("p1"), "/api/projects/p1/audits");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("projects", 401), "projects request failed: 401");
}
