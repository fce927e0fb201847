//! Project and page REST routes.
//!
//! Handlers authenticate through [`AuthUser`], delegate to the project
//! service, and translate its errors into status codes here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use client::net::types::{Page, Project};
use serde_json::json;
use uuid::Uuid;

use super::auth::AuthUser;
use crate::services::project::{self, PageInput, ProjectError, ProjectInput};
use crate::state::AppState;

pub(crate) fn project_error_to_status(err: &ProjectError) -> StatusCode {
    match err {
        ProjectError::NotFound(_) | ProjectError::PageNotFound(_) => StatusCode::NOT_FOUND,
        ProjectError::Forbidden(_) => StatusCode::FORBIDDEN,
        ProjectError::PageOutsideProject { .. } | ProjectError::Invalid(_) => StatusCode::BAD_REQUEST,
        ProjectError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Full error response. Validation failures carry their field errors.
pub(crate) fn project_error_response(err: ProjectError) -> Response {
    let status = project_error_to_status(&err);
    match err {
        ProjectError::Invalid(errors) => (status, Json(errors)).into_response(),
        ProjectError::Database(e) => {
            tracing::error!(error = %e, "project query failed");
            status.into_response()
        }
        _ => status.into_response(),
    }
}

// =============================================================================
// PROJECTS
// =============================================================================

/// `GET /api/projects`: projects the caller is a member of.
pub async fn list_projects(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<Project>>, Response> {
    project::list_projects(&state.pool, auth.user.id)
        .await
        .map(Json)
        .map_err(project_error_response)
}

/// `POST /api/projects`
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<ProjectInput>,
) -> Result<(StatusCode, Json<serde_json::Value>), Response> {
    let valid = project::validate_project(&body).map_err(|e| project_error_response(ProjectError::Invalid(e)))?;
    let id = project::create_project(&state.pool, auth.user.id, &valid)
        .await
        .map_err(project_error_response)?;
    Ok((StatusCode::CREATED, Json(json!({ "uuid": id, "name": valid.name }))))
}

/// `GET /api/projects/{project_id}`
pub async fn get_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
) -> Result<Json<Project>, Response> {
    project::get_project(&state.pool, project_id, auth.user.id)
        .await
        .map(Json)
        .map_err(project_error_response)
}

/// `PUT /api/projects/{project_id}`
pub async fn update_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
    Json(body): Json<ProjectInput>,
) -> Result<Json<Project>, Response> {
    // Membership first: outsiders get 403/404, never field errors.
    project::ensure_member(&state.pool, project_id, auth.user.id)
        .await
        .map_err(project_error_response)?;
    let valid = project::validate_project(&body).map_err(|e| project_error_response(ProjectError::Invalid(e)))?;
    project::update_project(&state.pool, project_id, auth.user.id, &valid)
        .await
        .map_err(project_error_response)?;
    get_project(State(state), auth, Path(project_id)).await
}

/// `DELETE /api/projects/{project_id}`
pub async fn delete_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
) -> Result<StatusCode, Response> {
    project::delete_project(&state.pool, project_id, auth.user.id)
        .await
        .map_err(project_error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// PAGES
// =============================================================================

/// `GET /api/projects/{project_id}/pages`
pub async fn list_pages(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
) -> Result<Json<Vec<Page>>, Response> {
    project::list_pages(&state.pool, project_id, auth.user.id)
        .await
        .map(Json)
        .map_err(project_error_response)
}

/// `POST /api/projects/{project_id}/pages`
pub async fn create_page(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
    Json(body): Json<PageInput>,
) -> Result<(StatusCode, Json<Page>), Response> {
    project::ensure_member(&state.pool, project_id, auth.user.id)
        .await
        .map_err(project_error_response)?;
    let valid = project::validate_page(&body).map_err(|e| project_error_response(ProjectError::Invalid(e)))?;
    let id = project::create_page(&state.pool, project_id, auth.user.id, &valid)
        .await
        .map_err(project_error_response)?;
    Ok((StatusCode::CREATED, Json(Page { uuid: id.to_string(), name: valid.name, url: valid.url })))
}

/// `GET /api/projects/{project_id}/pages/{page_id}`
pub async fn get_page(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((project_id, page_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Page>, Response> {
    project::get_page(&state.pool, project_id, page_id, auth.user.id)
        .await
        .map(Json)
        .map_err(project_error_response)
}

/// `PUT /api/projects/{project_id}/pages/{page_id}`
pub async fn update_page(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((project_id, page_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<PageInput>,
) -> Result<Json<Page>, Response> {
    project::get_page(&state.pool, project_id, page_id, auth.user.id)
        .await
        .map_err(project_error_response)?;
    let valid = project::validate_page(&body).map_err(|e| project_error_response(ProjectError::Invalid(e)))?;
    project::update_page(&state.pool, project_id, page_id, auth.user.id, &valid)
        .await
        .map(Json)
        .map_err(project_error_response)
}

/// `DELETE /api/projects/{project_id}/pages/{page_id}`
pub async fn delete_page(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((project_id, page_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, Response> {
    project::delete_page(&state.pool, project_id, page_id, auth.user.id)
        .await
        .map_err(project_error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod tests;
