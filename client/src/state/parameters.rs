//! Identifiers selected by the current route.

#[cfg(test)]
#[path = "parameters_test.rs"]
mod parameters_test;

/// Route parameters of the project and audit-details pages.
///
/// Empty segments count as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParameters {
    pub project_id: Option<String>,
    pub page_or_script_id: Option<String>,
    pub audit_parameters_id: Option<String>,
}

impl RouteParameters {
    /// Read the parameters through a name lookup such as a router params map.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| get(name).filter(|value| !value.is_empty());
        Self {
            project_id: non_empty("projectId"),
            page_or_script_id: non_empty("pageOrScriptId"),
            audit_parameters_id: non_empty("auditParametersId"),
        }
    }
}
