//! Route templates and link construction.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates carry `:projectId`, `:pageOrScriptId` and `:auditParametersId`
//! tokens that are filled by literal first-occurrence replacement. The token
//! spelling is shared with the router, so paths built here always match the
//! routes declared in `app`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Landing page; also the post-logout redirect target.
pub const LANDING_PATH: &str = "/";

/// Project overview route.
pub const PROJECT_PATH: &str = "/project/:projectId/audits";

/// Audit details for one page or script under one set of audit parameters.
pub const AUDITS_DETAILS_PATH: &str = "/project/:projectId/audits/:pageOrScriptId/audit-parameters/:auditParametersId";

/// Trailing portion of [`AUDITS_DETAILS_PATH`] removed to get a project's base path.
const AUDITS_DETAILS_SUFFIX: &str = ":pageOrScriptId/audit-parameters/:auditParametersId";

/// External product documentation.
pub const DOCS_URL: &str = "https://getfal.co";

/// Back-office administration, staff only.
pub const ADMIN_URL: &str = "/admin/";

/// Build an audit-details link. A missing audit parameters id leaves the slot empty.
pub fn audits_details_path(project_id: &str, page_or_script_id: &str, audit_parameters_id: Option<&str>) -> String {
    AUDITS_DETAILS_PATH
        .replacen(":projectId", project_id, 1)
        .replacen(":pageOrScriptId", page_or_script_id, 1)
        .replacen(":auditParametersId", audit_parameters_id.unwrap_or(""), 1)
}

/// Prefix shared by every audit-details link of one project.
pub fn project_audits_base_path(project_id: &str) -> String {
    AUDITS_DETAILS_PATH
        .replacen(":projectId", project_id, 1)
        .replacen(AUDITS_DETAILS_SUFFIX, "", 1)
}

/// Build the project overview link.
pub fn project_path(project_id: &str) -> String {
    PROJECT_PATH.replacen(":projectId", project_id, 1)
}
