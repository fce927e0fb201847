use super::*;
use crate::services::project::ProjectError;

#[test]
fn invalid_target_is_a_bad_request() {
    assert_eq!(audit_error_response(AuditError::InvalidTarget).status(), StatusCode::BAD_REQUEST);
}

#[test]
fn project_errors_keep_their_status() {
    let forbidden = AuditError::Project(ProjectError::Forbidden(Uuid::nil()));
    assert_eq!(audit_error_response(forbidden).status(), StatusCode::FORBIDDEN);

    let missing = AuditError::Project(ProjectError::NotFound(Uuid::nil()));
    assert_eq!(audit_error_response(missing).status(), StatusCode::NOT_FOUND);
}

#[test]
fn database_errors_are_internal() {
    let err = AuditError::Database(sqlx::Error::PoolTimedOut);
    assert_eq!(audit_error_response(err).status(), StatusCode::INTERNAL_SERVER_ERROR);
}
