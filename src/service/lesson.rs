//! Lesson catalog management.

use sea_orm::DatabaseConnection;

use crate::{
    data::lesson::LessonRepository,
    error::AppError,
    model::lesson::{Lesson, LessonParam},
};

/// Service providing business logic for the lesson catalog.
pub struct LessonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonService<'a> {
    /// Creates a new LessonService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LessonService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the full catalog in display order.
    pub async fn list(&self) -> Result<Vec<Lesson>, AppError> {
        LessonRepository::new(self.db).get_all().await
    }

    /// Creates a new lesson.
    ///
    /// # Arguments
    /// - `param` - Lesson fields
    ///
    /// # Returns
    /// - `Ok(Lesson)` - The created lesson
    /// - `Err(AppError)` - Database failure, including duplicate slugs
    pub async fn create(&self, param: LessonParam) -> Result<Lesson, AppError> {
        LessonRepository::new(self.db).create(param).await
    }

    /// Updates an existing lesson.
    ///
    /// Validates the lesson id before writing so an update against a missing
    /// lesson reports cleanly instead of surfacing a bare database error.
    ///
    /// # Arguments
    /// - `lesson_id` - Id of the lesson to update
    /// - `param` - Replacement lesson fields
    ///
    /// # Returns
    /// - `Ok(Lesson)` - The updated lesson
    /// - `Err(AppError::NotFound)` - No lesson with that id
    /// - `Err(AppError)` - Database failure during update
    pub async fn update(&self, lesson_id: i32, param: LessonParam) -> Result<Lesson, AppError> {
        let lesson_repo = LessonRepository::new(self.db);

        if lesson_repo.find_by_id(lesson_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Lesson {} not found", lesson_id)));
        }

        lesson_repo.update(lesson_id, param).await
    }
}
