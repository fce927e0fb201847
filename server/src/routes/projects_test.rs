use super::*;
use axum::body::to_bytes;
use crate::services::project::FieldErrors;

#[test]
fn missing_rows_map_to_not_found() {
    assert_eq!(project_error_to_status(&ProjectError::NotFound(Uuid::nil())), StatusCode::NOT_FOUND);
    assert_eq!(project_error_to_status(&ProjectError::PageNotFound(Uuid::nil())), StatusCode::NOT_FOUND);
}

#[test]
fn non_members_are_forbidden() {
    assert_eq!(project_error_to_status(&ProjectError::Forbidden(Uuid::nil())), StatusCode::FORBIDDEN);
}

#[test]
fn page_from_another_project_is_a_bad_request() {
    let err = ProjectError::PageOutsideProject { project_id: Uuid::nil(), page_id: Uuid::from_u128(1) };
    assert_eq!(project_error_to_status(&err), StatusCode::BAD_REQUEST);
}

#[test]
fn database_errors_are_internal() {
    let err = ProjectError::Database(sqlx::Error::RowNotFound);
    assert_eq!(project_error_to_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn validation_errors_are_sent_as_field_map() {
    let mut errors = FieldErrors::new();
    errors.insert("name", vec!["This field may not be blank.".to_owned()]);
    let response = project_error_response(ProjectError::Invalid(errors));
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "name": ["This field may not be blank."] }));
}
