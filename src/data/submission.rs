//! Submission data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::submission::{CreateSubmissionParam, Submission, SubmissionStatus},
};

/// Repository providing database operations for challenge submissions.
pub struct SubmissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionRepository<'a> {
    /// Creates a new SubmissionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SubmissionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new submission in the `open` state.
    ///
    /// # Arguments
    /// - `param` - Lesson, submitting user, and optional comment
    ///
    /// # Returns
    /// - `Ok(Submission)` - The created submission
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreateSubmissionParam) -> Result<Submission, AppError> {
        let now = Utc::now();
        let entity = entity::submission::ActiveModel {
            lesson_id: ActiveValue::Set(param.lesson_id),
            user_id: ActiveValue::Set(param.user_id),
            status: ActiveValue::Set(SubmissionStatus::Open.as_str().to_string()),
            comment: ActiveValue::Set(param.comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Submission::from_entity(entity)?)
    }

    /// Finds a submission by its id.
    ///
    /// # Arguments
    /// - `submission_id` - Submission id
    ///
    /// # Returns
    /// - `Ok(Some(Submission))` - Submission found
    /// - `Ok(None)` - No submission with that id
    /// - `Err(AppError)` - Database error during query or unknown stored status
    pub async fn find_by_id(&self, submission_id: i32) -> Result<Option<Submission>, AppError> {
        let entity = entity::prelude::Submission::find_by_id(submission_id)
            .one(self.db)
            .await?;

        entity
            .map(|e| Submission::from_entity(e).map_err(AppError::from))
            .transpose()
    }

    /// Gets the submissions for a lesson that still need reviewer attention.
    ///
    /// Excludes submissions already resolved as `passed` or `needs_rework`,
    /// newest first.
    ///
    /// # Arguments
    /// - `lesson_id` - Lesson whose queue to fetch
    ///
    /// # Returns
    /// - `Ok(Vec<Submission>)` - Unresolved submissions for the lesson
    /// - `Err(AppError)` - Database error during query or unknown stored status
    pub async fn get_open_by_lesson(&self, lesson_id: i32) -> Result<Vec<Submission>, AppError> {
        let entities = entity::prelude::Submission::find()
            .filter(entity::submission::Column::LessonId.eq(lesson_id))
            .filter(entity::submission::Column::Status.is_not_in([
                SubmissionStatus::Passed.as_str(),
                SubmissionStatus::NeedsRework.as_str(),
            ]))
            .order_by_desc(entity::submission::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|e| Submission::from_entity(e).map_err(AppError::from))
            .collect()
    }

    /// Sets the review status of a submission.
    ///
    /// # Arguments
    /// - `submission_id` - Submission to update
    /// - `status` - New review status
    /// - `comment` - Optional reviewer comment replacing the stored one
    ///
    /// # Returns
    /// - `Ok(Submission)` - The updated submission
    /// - `Err(AppError)` - Database error during update, including when no row
    ///   with that id exists
    pub async fn set_status(
        &self,
        submission_id: i32,
        status: SubmissionStatus,
        comment: Option<String>,
    ) -> Result<Submission, AppError> {
        let mut active = entity::submission::ActiveModel {
            id: ActiveValue::Unchanged(submission_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        if let Some(comment) = comment {
            active.comment = ActiveValue::Set(Some(comment));
        }

        let entity = active.update(self.db).await?;

        Ok(Submission::from_entity(entity)?)
    }
}
