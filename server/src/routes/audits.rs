//! Audit result and audit launch routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use client::net::types::AuditResult;
use serde_json::json;
use uuid::Uuid;

use super::auth::AuthUser;
use super::projects::project_error_response;
use crate::services::audit::{self, AuditError, AuditResultsQuery};
use crate::state::AppState;

pub(crate) fn audit_error_response(err: AuditError) -> Response {
    match err {
        AuditError::InvalidTarget => (StatusCode::BAD_REQUEST, Json(json!({ "detail": err.to_string() }))).into_response(),
        AuditError::Project(e) => project_error_response(e),
        AuditError::Database(e) => {
            tracing::error!(error = %e, "audit query failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `GET /api/projects/{project_id}/audit_results?page=..|script=..&audit_parameters=..`
pub async fn list_audit_results(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
    Query(query): Query<AuditResultsQuery>,
) -> Result<Json<Vec<AuditResult>>, Response> {
    let target = query.target().map_err(audit_error_response)?;
    audit::list_audit_results(&state.pool, project_id, auth.user.id, target, query.audit_parameters)
        .await
        .map(Json)
        .map_err(audit_error_response)
}

/// `POST /api/projects/{project_id}/audits`: queue an audit run.
pub async fn launch_audits(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
) -> Result<(StatusCode, Json<serde_json::Value>), Response> {
    let id = audit::request_audits(&state.pool, project_id, auth.user.id)
        .await
        .map_err(audit_error_response)?;
    Ok((StatusCode::ACCEPTED, Json(json!({ "uuid": id }))))
}

#[cfg(test)]
#[path = "audits_test.rs"]
mod tests;
