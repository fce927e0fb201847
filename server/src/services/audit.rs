//! Audit results and audit launch requests.
//!
//! Results are stored per page or per script, optionally tied to audit
//! parameters, with their metrics as a JSON object. Only numeric metric
//! values reach the dashboard.

use std::collections::BTreeMap;

use client::net::types::AuditResult;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::services::project::{self, ProjectError};

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("exactly one of `page` or `script` is required")]
    InvalidTarget,
    #[error(transparent)]
    Project(#[from] ProjectError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Query string of the audit results endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct AuditResultsQuery {
    pub page: Option<Uuid>,
    pub script: Option<Uuid>,
    pub audit_parameters: Option<Uuid>,
}

/// What a set of results was measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditTarget {
    Page(Uuid),
    Script(Uuid),
}

impl AuditResultsQuery {
    /// Resolve the target named by the query.
    ///
    /// # Errors
    ///
    /// `InvalidTarget` unless exactly one of `page`/`script` is present.
    pub fn target(&self) -> Result<AuditTarget, AuditError> {
        match (self.page, self.script) {
            (Some(page), None) => Ok(AuditTarget::Page(page)),
            (None, Some(script)) => Ok(AuditTarget::Script(script)),
            _ => Err(AuditError::InvalidTarget),
        }
    }
}

/// Keep the numeric entries of a stored metrics object.
#[must_use]
pub fn numeric_metrics(raw: &serde_json::Value) -> BTreeMap<String, f64> {
    raw.as_object()
        .map(|object| {
            object
                .iter()
                .filter_map(|(key, value)| value.as_f64().map(|n| (key.clone(), n)))
                .collect()
        })
        .unwrap_or_default()
}

/// Results of one target in a project, oldest first.
///
/// # Errors
///
/// Project membership errors, or a database error.
pub async fn list_audit_results(
    pool: &PgPool,
    project_id: Uuid,
    user_id: Uuid,
    target: AuditTarget,
    audit_parameters_id: Option<Uuid>,
) -> Result<Vec<AuditResult>, AuditError> {
    project::ensure_member(pool, project_id, user_id).await?;

    let (page_id, script_id) = match target {
        AuditTarget::Page(id) => (Some(id), None),
        AuditTarget::Script(id) => (None, Some(id)),
    };

    let rows = sqlx::query_as::<_, (Uuid, i64, serde_json::Value)>(
        "SELECT id,
                (extract(epoch FROM created_at) * 1000)::bigint AS created_at_ms,
                metrics
         FROM audit_results
         WHERE project_id = $1
           AND page_id IS NOT DISTINCT FROM $2
           AND script_id IS NOT DISTINCT FROM $3
           AND ($4::uuid IS NULL OR audit_parameters_id = $4)
         ORDER BY created_at, id",
    )
    .bind(project_id)
    .bind(page_id)
    .bind(script_id)
    .bind(audit_parameters_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, created_at, metrics)| AuditResult {
            uuid: id.to_string(),
            created_at,
            metrics: numeric_metrics(&metrics),
        })
        .collect())
}

/// Record a request to audit every target of a project.
///
/// # Errors
///
/// Project membership errors, or a database error.
pub async fn request_audits(pool: &PgPool, project_id: Uuid, user_id: Uuid) -> Result<Uuid, AuditError> {
    project::ensure_member(pool, project_id, user_id).await?;

    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO audit_requests (id, project_id, requested_by) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(project_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    tracing::info!(request_id = %id, %project_id, %user_id, "audits requested");
    Ok(id)
}

#[cfg(test)]
#[path = "audit_test.rs"]
mod tests;
