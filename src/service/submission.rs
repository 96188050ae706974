//! Submission and review workflow.

use sea_orm::DatabaseConnection;

use crate::{
    data::{lesson::LessonRepository, submission::SubmissionRepository},
    error::AppError,
    model::submission::{CreateSubmissionParam, Submission, SubmissionStatus},
};

/// Service providing business logic for submissions and reviews.
pub struct SubmissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionService<'a> {
    /// Creates a new SubmissionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SubmissionService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new submission for a lesson.
    ///
    /// # Arguments
    /// - `param` - Lesson, submitting user, and optional comment
    ///
    /// # Returns
    /// - `Ok(Submission)` - The created submission in the `open` state
    /// - `Err(AppError::NotFound)` - The lesson does not exist
    /// - `Err(AppError)` - Database failure
    pub async fn submit(&self, param: CreateSubmissionParam) -> Result<Submission, AppError> {
        if LessonRepository::new(self.db)
            .find_by_id(param.lesson_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Lesson {} not found",
                param.lesson_id
            )));
        }

        SubmissionRepository::new(self.db).create(param).await
    }

    /// Lists the submissions for a lesson that still need reviewer attention.
    ///
    /// Resolved submissions (`passed`, `needs_rework`) are excluded.
    ///
    /// # Arguments
    /// - `lesson_id` - Lesson whose review queue to fetch
    ///
    /// # Returns
    /// - `Ok(Vec<Submission>)` - Unresolved submissions, newest first
    /// - `Err(AppError::NotFound)` - The lesson does not exist
    /// - `Err(AppError)` - Database failure
    pub async fn open_for_review(&self, lesson_id: i32) -> Result<Vec<Submission>, AppError> {
        if LessonRepository::new(self.db)
            .find_by_id(lesson_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("Lesson {} not found", lesson_id)));
        }

        SubmissionRepository::new(self.db)
            .get_open_by_lesson(lesson_id)
            .await
    }

    /// Resolves a submission with a review decision.
    ///
    /// Only the two resolving statuses are accepted; a review cannot move a
    /// submission back to `open` or `under_review`.
    ///
    /// # Arguments
    /// - `submission_id` - Submission to resolve
    /// - `status` - `Passed` or `NeedsRework`
    /// - `comment` - Optional reviewer comment
    ///
    /// # Returns
    /// - `Ok(Submission)` - The resolved submission
    /// - `Err(AppError::BadRequest)` - Status does not resolve the submission
    /// - `Err(AppError::NotFound)` - The submission does not exist
    /// - `Err(AppError)` - Database failure
    pub async fn review(
        &self,
        submission_id: i32,
        status: SubmissionStatus,
        comment: Option<String>,
    ) -> Result<Submission, AppError> {
        if !status.is_resolved() {
            return Err(AppError::BadRequest(
                "A review must resolve the submission to passed or needs_rework".to_string(),
            ));
        }

        let submission_repo = SubmissionRepository::new(self.db);

        if submission_repo.find_by_id(submission_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Submission {} not found",
                submission_id
            )));
        }

        submission_repo
            .set_status(submission_id, status, comment)
            .await
    }
}
