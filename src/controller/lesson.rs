use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::lesson::LessonParam,
    service::lesson::LessonService,
    state::AppState,
};

/// GET /api/lessons - Lesson catalog
///
/// Returns every lesson ordered by catalog position. Public; browsing the
/// curriculum requires no account.
///
/// # Returns
/// - `200 OK`: JSON array of LessonDto
pub async fn get_lessons(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let lessons = LessonService::new(&state.db).list().await?;

    let lessons_dto: Vec<_> = lessons.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(lessons_dto)))
}

/// POST /api/lessons - Create a lesson
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `201 Created`: JSON LessonDto for the new lesson
/// - `401 Unauthorized`: No session user
/// - `403 Forbidden`: User is not an admin
pub async fn create_lesson(
    State(state): State<AppState>,
    session: Session,
    Json(param): Json<LessonParam>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::Admin]).await?;

    let lesson = LessonService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(lesson.into_dto())))
}

/// PUT /api/lessons/{id} - Update a lesson
///
/// # Authentication
/// Requires admin permission
///
/// # Path Parameters
/// - `id`: Lesson id
///
/// # Returns
/// - `200 OK`: JSON LessonDto for the updated lesson
/// - `401 Unauthorized`: No session user
/// - `403 Forbidden`: User is not an admin
/// - `404 Not Found`: No lesson with that id
pub async fn update_lesson(
    State(state): State<AppState>,
    Path(lesson_id): Path<i32>,
    session: Session,
    Json(param): Json<LessonParam>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::Admin]).await?;

    let lesson = LessonService::new(&state.db)
        .update(lesson_id, param)
        .await?;

    Ok((StatusCode::OK, Json(lesson.into_dto())))
}
