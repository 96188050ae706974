//! Lesson factory for creating test lesson entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lessons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::lesson::LessonFactory;
///
/// let lesson = LessonFactory::new(&db)
///     .slug("js0")
///     .title("Foundations of JavaScript")
///     .order(0)
///     .build()
///     .await?;
/// ```
pub struct LessonFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    title: String,
    description: String,
    order: i32,
}

impl<'a> LessonFactory<'a> {
    /// Creates a new LessonFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"lesson-{id}"` where id is auto-incremented
    /// - title: `"Lesson {id}"`
    /// - description: `"Description for lesson {id}"`
    /// - order: the auto-incremented id
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `LessonFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("lesson-{}", id),
            title: format!("Lesson {}", id),
            description: format!("Description for lesson {}", id),
            order: id as i32,
        }
    }

    /// Sets the slug for the lesson.
    ///
    /// # Arguments
    /// - `slug` - Unique URL slug
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the title for the lesson.
    ///
    /// # Arguments
    /// - `title` - Display title
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the catalog position for the lesson.
    ///
    /// # Arguments
    /// - `order` - Zero-based catalog position
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Builds and inserts the lesson entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::lesson::Model)` - Created lesson entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::lesson::Model, DbErr> {
        entity::lesson::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            order: ActiveValue::Set(self.order),
            doc_url: ActiveValue::Set(None),
            github_url: ActiveValue::Set(None),
            video_url: ActiveValue::Set(None),
            chat_url: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lesson with default values.
///
/// Shorthand for `LessonFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::lesson::Model)` - Created lesson entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_lesson(db: &DatabaseConnection) -> Result<entity::lesson::Model, DbErr> {
    LessonFactory::new(db).build().await
}
