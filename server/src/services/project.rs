//! Project service: membership checks, validation, and CRUD for projects and
//! their pages.
//!
//! DESIGN
//! ======
//! Every read or write goes through a membership check first. A missing
//! project is reported before a membership failure, so callers can tell a
//! typo from a permission problem. Pages are addressed by both project and
//! page id; a page that exists under another project is a distinct error.
//! Single-page lookups report a missing page before a membership failure.
//!
//! Project payloads sent to the dashboard embed pages, scripts and audit
//! parameters, each list ordered by creation time.

use std::collections::{BTreeMap, HashMap};

use client::net::types::{AuditParameters, Page, Project, Script};
use serde::Deserialize;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub const NAME_MAX_CHARS: usize = 100;
pub const URL_MAX_CHARS: usize = 500;

// =============================================================================
// TYPES
// =============================================================================

/// Validation failures keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("project not found: {0}")]
    NotFound(Uuid),
    #[error("not a member of project {0}")]
    Forbidden(Uuid),
    #[error("page not found: {0}")]
    PageNotFound(Uuid),
    #[error("page {page_id} does not belong to project {project_id}")]
    PageOutsideProject { project_id: Uuid, page_id: Uuid },
    #[error("invalid payload")]
    Invalid(FieldErrors),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Incoming project body. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectInput {
    #[serde(default)]
    pub name: Option<String>,
}

/// Incoming page body. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct PageInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProject {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPage {
    pub name: String,
    pub url: String,
}

// =============================================================================
// VALIDATION
// =============================================================================

fn validate_name(raw: Option<&str>, errors: &mut FieldErrors) -> String {
    let Some(raw) = raw else {
        errors.entry("name").or_default().push("This field is required.".to_owned());
        return String::new();
    };
    let name = raw.trim();
    if name.is_empty() {
        errors.entry("name").or_default().push("This field may not be blank.".to_owned());
    } else if name.chars().count() > NAME_MAX_CHARS {
        errors
            .entry("name")
            .or_default()
            .push(format!("Ensure this field has no more than {NAME_MAX_CHARS} characters."));
    }
    name.to_owned()
}

fn validate_url(raw: Option<&str>, errors: &mut FieldErrors) -> String {
    let Some(raw) = raw else {
        errors.entry("url").or_default().push("This field is required.".to_owned());
        return String::new();
    };
    let url = raw.trim();
    if url.is_empty() {
        errors.entry("url").or_default().push("This field may not be blank.".to_owned());
        return String::new();
    }
    let messages = errors.entry("url").or_default();
    let host_and_path = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://"));
    let well_formed = host_and_path
        .is_some_and(|rest| !rest.is_empty() && !rest.starts_with('/') && !rest.contains(char::is_whitespace));
    if !well_formed {
        messages.push("Enter a valid URL.".to_owned());
    }
    if url.chars().count() > URL_MAX_CHARS {
        messages.push(format!("Ensure this field has no more than {URL_MAX_CHARS} characters."));
    }
    if messages.is_empty() {
        errors.remove("url");
    }
    url.to_owned()
}

/// Check a project body.
///
/// # Errors
///
/// Returns the field errors when the name is missing, blank, or too long.
pub fn validate_project(input: &ProjectInput) -> Result<ValidProject, FieldErrors> {
    let mut errors = FieldErrors::new();
    let name = validate_name(input.name.as_deref(), &mut errors);
    if errors.is_empty() { Ok(ValidProject { name }) } else { Err(errors) }
}

/// Check a page body.
///
/// # Errors
///
/// Returns the field errors for the name and url rules, both fields at once.
pub fn validate_page(input: &PageInput) -> Result<ValidPage, FieldErrors> {
    let mut errors = FieldErrors::new();
    let name = validate_name(input.name.as_deref(), &mut errors);
    let url = validate_url(input.url.as_deref(), &mut errors);
    if errors.is_empty() { Ok(ValidPage { name, url }) } else { Err(errors) }
}

// =============================================================================
// MEMBERSHIP
// =============================================================================

/// Ensure the project exists and `user_id` is one of its members.
///
/// # Errors
///
/// `NotFound` when the project is missing, `Forbidden` when the user is not
/// a member.
pub async fn ensure_member(pool: &PgPool, project_id: Uuid, user_id: Uuid) -> Result<(), ProjectError> {
    match membership(pool, project_id, user_id).await? {
        None => Err(ProjectError::NotFound(project_id)),
        Some(true) => Ok(()),
        Some(false) => Err(ProjectError::Forbidden(project_id)),
    }
}

/// `None` when the project is missing, otherwise whether `user_id` is a member.
async fn membership(pool: &PgPool, project_id: Uuid, user_id: Uuid) -> Result<Option<bool>, ProjectError> {
    let row = sqlx::query(
        "SELECT EXISTS (
             SELECT 1 FROM project_members WHERE project_id = p.id AND user_id = $2
         ) AS is_member
         FROM projects p
         WHERE p.id = $1",
    )
    .bind(project_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.get::<bool, _>("is_member")))
}

// =============================================================================
// PROJECTS
// =============================================================================

async fn load_projects(pool: &PgPool, rows: Vec<(Uuid, String)>) -> Result<Vec<Project>, ProjectError> {
    let ids: Vec<Uuid> = rows.iter().map(|(id, _)| *id).collect();
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut pages: HashMap<Uuid, Vec<Page>> = HashMap::new();
    for (id, project_id, name, url) in sqlx::query_as::<_, (Uuid, Uuid, String, String)>(
        "SELECT id, project_id, name, url FROM pages WHERE project_id = ANY($1) ORDER BY created_at, id",
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?
    {
        pages
            .entry(project_id)
            .or_default()
            .push(Page { uuid: id.to_string(), name, url });
    }

    let mut scripts: HashMap<Uuid, Vec<Script>> = HashMap::new();
    for (id, project_id, name) in sqlx::query_as::<_, (Uuid, Uuid, String)>(
        "SELECT id, project_id, name FROM scripts WHERE project_id = ANY($1) ORDER BY created_at, id",
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?
    {
        scripts
            .entry(project_id)
            .or_default()
            .push(Script { uuid: id.to_string(), name });
    }

    let mut parameters: HashMap<Uuid, Vec<AuditParameters>> = HashMap::new();
    for (id, project_id, name) in sqlx::query_as::<_, (Uuid, Uuid, String)>(
        "SELECT id, project_id, name FROM audit_parameters WHERE project_id = ANY($1) ORDER BY created_at, id",
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?
    {
        parameters
            .entry(project_id)
            .or_default()
            .push(AuditParameters { uuid: id.to_string(), name });
    }

    Ok(rows
        .into_iter()
        .map(|(id, name)| Project {
            uuid: id.to_string(),
            name,
            pages: pages.remove(&id).unwrap_or_default(),
            scripts: scripts.remove(&id).unwrap_or_default(),
            audit_parameters_list: parameters.remove(&id).unwrap_or_default(),
        })
        .collect())
}

/// List the projects `user_id` is a member of, oldest first.
///
/// # Errors
///
/// Returns a database error if a query fails.
pub async fn list_projects(pool: &PgPool, user_id: Uuid) -> Result<Vec<Project>, ProjectError> {
    let rows = sqlx::query_as::<_, (Uuid, String)>(
        "SELECT p.id, p.name
         FROM projects p
         JOIN project_members m ON m.project_id = p.id
         WHERE m.user_id = $1
         ORDER BY p.created_at, p.id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    load_projects(pool, rows).await
}

/// Fetch one project with its pages, scripts and audit parameters.
///
/// # Errors
///
/// `NotFound`/`Forbidden` from the membership check, or a database error.
pub async fn get_project(pool: &PgPool, project_id: Uuid, user_id: Uuid) -> Result<Project, ProjectError> {
    ensure_member(pool, project_id, user_id).await?;

    let rows = sqlx::query_as::<_, (Uuid, String)>("SELECT id, name FROM projects WHERE id = $1")
        .bind(project_id)
        .fetch_all(pool)
        .await?;

    load_projects(pool, rows)
        .await?
        .pop()
        .ok_or(ProjectError::NotFound(project_id))
}

/// Create a project and make its creator the first member.
///
/// # Errors
///
/// Returns a database error if either insert fails; nothing is kept then.
pub async fn create_project(pool: &PgPool, creator_id: Uuid, project: &ValidProject) -> Result<Uuid, ProjectError> {
    let id = Uuid::new_v4();
    let mut tx = pool.begin().await?;
    sqlx::query("INSERT INTO projects (id, name) VALUES ($1, $2)")
        .bind(id)
        .bind(&project.name)
        .execute(&mut *tx)
        .await?;
    sqlx::query("INSERT INTO project_members (project_id, user_id) VALUES ($1, $2)")
        .bind(id)
        .bind(creator_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::info!(%id, %creator_id, "project created");
    Ok(id)
}

/// Rename a project.
///
/// # Errors
///
/// `NotFound`/`Forbidden` from the membership check, or a database error.
pub async fn update_project(
    pool: &PgPool,
    project_id: Uuid,
    user_id: Uuid,
    project: &ValidProject,
) -> Result<(), ProjectError> {
    ensure_member(pool, project_id, user_id).await?;
    sqlx::query("UPDATE projects SET name = $2 WHERE id = $1")
        .bind(project_id)
        .bind(&project.name)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete a project with everything it owns.
///
/// # Errors
///
/// `NotFound`/`Forbidden` from the membership check, or a database error.
pub async fn delete_project(pool: &PgPool, project_id: Uuid, user_id: Uuid) -> Result<(), ProjectError> {
    ensure_member(pool, project_id, user_id).await?;
    sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(project_id)
        .execute(pool)
        .await?;
    tracing::info!(%project_id, %user_id, "project deleted");
    Ok(())
}

// =============================================================================
// PAGES
// =============================================================================

/// List the pages of a project, oldest first.
///
/// # Errors
///
/// `NotFound`/`Forbidden` from the membership check, or a database error.
pub async fn list_pages(pool: &PgPool, project_id: Uuid, user_id: Uuid) -> Result<Vec<Page>, ProjectError> {
    ensure_member(pool, project_id, user_id).await?;
    let rows = sqlx::query_as::<_, (Uuid, String, String)>(
        "SELECT id, name, url FROM pages WHERE project_id = $1 ORDER BY created_at, id",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, url)| Page { uuid: id.to_string(), name, url })
        .collect())
}

/// Add a page to a project.
///
/// # Errors
///
/// `NotFound`/`Forbidden` from the membership check, or a database error.
pub async fn create_page(
    pool: &PgPool,
    project_id: Uuid,
    user_id: Uuid,
    page: &ValidPage,
) -> Result<Uuid, ProjectError> {
    ensure_member(pool, project_id, user_id).await?;
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO pages (id, project_id, name, url) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(project_id)
        .bind(&page.name)
        .bind(&page.url)
        .execute(pool)
        .await?;
    Ok(id)
}

/// Fetch one page of a project.
///
/// # Errors
///
/// Checked in order: `NotFound` for a missing project, `PageNotFound` for a
/// missing page, `PageOutsideProject` when the page lives elsewhere, then
/// `Forbidden` for non-members.
pub async fn get_page(pool: &PgPool, project_id: Uuid, page_id: Uuid, user_id: Uuid) -> Result<Page, ProjectError> {
    let Some(is_member) = membership(pool, project_id, user_id).await? else {
        return Err(ProjectError::NotFound(project_id));
    };
    let row = sqlx::query_as::<_, (Uuid, Uuid, String, String)>(
        "SELECT id, project_id, name, url FROM pages WHERE id = $1",
    )
    .bind(page_id)
    .fetch_optional(pool)
    .await?;

    let Some((id, owner, name, url)) = row else {
        return Err(ProjectError::PageNotFound(page_id));
    };
    if owner != project_id {
        return Err(ProjectError::PageOutsideProject { project_id, page_id });
    }
    if !is_member {
        return Err(ProjectError::Forbidden(project_id));
    }
    Ok(Page { uuid: id.to_string(), name, url })
}

/// Replace the name and url of a page.
///
/// # Errors
///
/// Same as [`get_page`], or a database error.
pub async fn update_page(
    pool: &PgPool,
    project_id: Uuid,
    page_id: Uuid,
    user_id: Uuid,
    page: &ValidPage,
) -> Result<Page, ProjectError> {
    get_page(pool, project_id, page_id, user_id).await?;
    sqlx::query("UPDATE pages SET name = $2, url = $3 WHERE id = $1")
        .bind(page_id)
        .bind(&page.name)
        .bind(&page.url)
        .execute(pool)
        .await?;
    Ok(Page { uuid: page_id.to_string(), name: page.name.clone(), url: page.url.clone() })
}

/// Delete one page and its audit results.
///
/// # Errors
///
/// Same as [`get_page`], or a database error.
pub async fn delete_page(pool: &PgPool, project_id: Uuid, page_id: Uuid, user_id: Uuid) -> Result<(), ProjectError> {
    get_page(pool, project_id, page_id, user_id).await?;
    sqlx::query("DELETE FROM pages WHERE id = $1")
        .bind(page_id)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
