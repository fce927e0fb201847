//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuditResult, AuditTargetKind, Project, User};

#[cfg(any(test, feature = "hydrate"))]
const PROJECTS_ENDPOINT: &str = "/api/projects";

#[cfg(any(test, feature = "hydrate"))]
fn audit_results_endpoint(
    project_id: &str,
    kind: AuditTargetKind,
    target_id: &str,
    audit_parameters_id: Option<&str>,
) -> String {
    let mut url = format!("/api/projects/{project_id}/audit_results?{}={target_id}", kind.query_key());
    if let Some(ap) = audit_parameters_id.filter(|ap| !ap.is_empty()) {
        url.push_str("&audit_parameters=");
        url.push_str(ap);
    }
    url
}

#[cfg(any(test, feature = "hydrate"))]
fn launch_audits_endpoint(project_id: &str) -> String {
    format!("/api/projects/{project_id}/audits")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch the projects the current user belongs to.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not parse.
pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PROJECTS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("projects", resp.status()));
        }
        resp.json::<Vec<Project>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the audit results of one page or script, oldest first.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not parse.
pub async fn fetch_audit_results(
    project_id: &str,
    kind: AuditTargetKind,
    target_id: &str,
    audit_parameters_id: Option<&str>,
) -> Result<Vec<AuditResult>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = audit_results_endpoint(project_id, kind, target_id, audit_parameters_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("audit results", resp.status()));
        }
        resp.json::<Vec<AuditResult>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, kind, target_id, audit_parameters_id);
        Err("not available on server".to_owned())
    }
}

/// Ask the server to run audits for every page and script of a project.
///
/// # Errors
///
/// Returns an error string if the request is rejected.
pub async fn launch_audits(project_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&launch_audits_endpoint(project_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("launch audits", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = project_id;
        Err("not available on server".to_owned())
    }
}
