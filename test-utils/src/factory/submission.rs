//! Submission factory for creating test submission entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an open submission for the given lesson and user.
///
/// # Arguments
/// - `db` - Database connection
/// - `lesson_id` - Lesson the submission belongs to
/// - `user_id` - Submitting user
///
/// # Returns
/// - `Ok(entity::submission::Model)` - Created submission entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_submission(
    db: &DatabaseConnection,
    lesson_id: i32,
    user_id: i32,
) -> Result<entity::submission::Model, DbErr> {
    create_submission_with_status(db, lesson_id, user_id, "open").await
}

/// Creates a submission with a specific review status.
///
/// # Arguments
/// - `db` - Database connection
/// - `lesson_id` - Lesson the submission belongs to
/// - `user_id` - Submitting user
/// - `status` - Review status string (`open`, `under_review`, `passed`, `needs_rework`)
///
/// # Returns
/// - `Ok(entity::submission::Model)` - Created submission entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_submission_with_status(
    db: &DatabaseConnection,
    lesson_id: i32,
    user_id: i32,
    status: &str,
) -> Result<entity::submission::Model, DbErr> {
    let now = Utc::now();
    entity::submission::ActiveModel {
        lesson_id: ActiveValue::Set(lesson_id),
        user_id: ActiveValue::Set(user_id),
        status: ActiveValue::Set(status.to_string()),
        comment: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
