//! Lesson data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    error::AppError,
    model::lesson::{Lesson, LessonParam},
};

/// Repository providing database operations for the lesson catalog.
pub struct LessonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonRepository<'a> {
    /// Creates a new LessonRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LessonRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new lesson.
    ///
    /// # Arguments
    /// - `param` - Lesson fields
    ///
    /// # Returns
    /// - `Ok(Lesson)` - The created lesson
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: LessonParam) -> Result<Lesson, AppError> {
        let entity = entity::lesson::ActiveModel {
            slug: ActiveValue::Set(param.slug),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            order: ActiveValue::Set(param.order),
            doc_url: ActiveValue::Set(param.doc_url),
            github_url: ActiveValue::Set(param.github_url),
            video_url: ActiveValue::Set(param.video_url),
            chat_url: ActiveValue::Set(param.chat_url),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Lesson::from_entity(entity))
    }

    /// Overwrites an existing lesson's fields.
    ///
    /// # Arguments
    /// - `lesson_id` - Id of the lesson to update
    /// - `param` - Replacement lesson fields
    ///
    /// # Returns
    /// - `Ok(Lesson)` - The updated lesson
    /// - `Err(AppError::DbErr)` - Database error during update, including when
    ///   no row with that id exists
    pub async fn update(&self, lesson_id: i32, param: LessonParam) -> Result<Lesson, AppError> {
        let entity = entity::lesson::ActiveModel {
            id: ActiveValue::Unchanged(lesson_id),
            slug: ActiveValue::Set(param.slug),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            order: ActiveValue::Set(param.order),
            doc_url: ActiveValue::Set(param.doc_url),
            github_url: ActiveValue::Set(param.github_url),
            video_url: ActiveValue::Set(param.video_url),
            chat_url: ActiveValue::Set(param.chat_url),
        }
        .update(self.db)
        .await?;

        Ok(Lesson::from_entity(entity))
    }

    /// Finds a lesson by its id.
    ///
    /// # Arguments
    /// - `lesson_id` - Lesson id
    ///
    /// # Returns
    /// - `Ok(Some(Lesson))` - Lesson found
    /// - `Ok(None)` - No lesson with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, lesson_id: i32) -> Result<Option<Lesson>, AppError> {
        let entity = entity::prelude::Lesson::find_by_id(lesson_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Lesson::from_entity))
    }

    /// Gets all lessons ordered by catalog position.
    ///
    /// # Returns
    /// - `Ok(Vec<Lesson>)` - All lessons, lowest `order` first
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Lesson>, AppError> {
        let entities = entity::prelude::Lesson::find()
            .order_by_asc(entity::lesson::Column::Order)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Lesson::from_entity).collect())
    }
}
