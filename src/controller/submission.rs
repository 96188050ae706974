use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::submission::{CreateSubmissionParam, SubmissionStatus},
    service::submission::SubmissionService,
    state::AppState,
};

/// Request body for creating a submission.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitDto {
    pub lesson_id: i32,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Request body for resolving a submission.
#[derive(Deserialize)]
pub struct ReviewDto {
    pub status: SubmissionStatus,
    #[serde(default)]
    pub comment: Option<String>,
}

/// GET /api/lessons/{id}/review - Review queue for a lesson
///
/// Returns the submissions still awaiting a decision; resolved submissions
/// are excluded.
///
/// # Authentication
/// Requires admin permission
///
/// # Path Parameters
/// - `id`: Lesson id
///
/// # Returns
/// - `200 OK`: JSON array of SubmissionDto
/// - `401 Unauthorized`: No session user
/// - `403 Forbidden`: User is not an admin
/// - `404 Not Found`: No lesson with that id
pub async fn get_review_queue(
    State(state): State<AppState>,
    Path(lesson_id): Path<i32>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::Admin]).await?;

    let submissions = SubmissionService::new(&state.db)
        .open_for_review(lesson_id)
        .await?;

    let submissions_dto: Vec<_> = submissions.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(submissions_dto)))
}

/// POST /api/submissions - Submit a challenge solution
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `201 Created`: JSON SubmissionDto in the `open` state
/// - `401 Unauthorized`: No session user
/// - `404 Not Found`: No lesson with that id
pub async fn create_submission(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<SubmitDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    let submission = SubmissionService::new(&state.db)
        .submit(CreateSubmissionParam {
            lesson_id: dto.lesson_id,
            user_id: user.id,
            comment: dto.comment,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(submission.into_dto())))
}

/// POST /api/submissions/{id}/review - Resolve a submission
///
/// # Authentication
/// Requires admin permission
///
/// # Path Parameters
/// - `id`: Submission id
///
/// # Returns
/// - `200 OK`: JSON SubmissionDto with the review decision applied
/// - `400 Bad Request`: Status does not resolve the submission
/// - `401 Unauthorized`: No session user
/// - `403 Forbidden`: User is not an admin
/// - `404 Not Found`: No submission with that id
pub async fn review_submission(
    State(state): State<AppState>,
    Path(submission_id): Path<i32>,
    session: Session,
    Json(dto): Json<ReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::Admin]).await?;

    let submission = SubmissionService::new(&state.db)
        .review(submission_id, dto.status, dto.comment)
        .await?;

    Ok((StatusCode::OK, Json(submission.into_dto())))
}
