//! Lesson domain models and parameters.

use serde::{Deserialize, Serialize};

/// Curriculum lesson shown in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Zero-based catalog position.
    pub order: i32,
    pub doc_url: Option<String>,
    pub github_url: Option<String>,
    pub video_url: Option<String>,
    pub chat_url: Option<String>,
}

impl Lesson {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::lesson::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            title: entity.title,
            description: entity.description,
            order: entity.order,
            doc_url: entity.doc_url,
            github_url: entity.github_url,
            video_url: entity.video_url,
            chat_url: entity.chat_url,
        }
    }

    /// Converts the lesson domain model to a DTO for API responses.
    pub fn into_dto(self) -> LessonDto {
        LessonDto {
            id: self.id,
            slug: self.slug,
            title: self.title,
            description: self.description,
            order: self.order,
            doc_url: self.doc_url,
            github_url: self.github_url,
            video_url: self.video_url,
            chat_url: self.chat_url,
        }
    }
}

/// Lesson representation returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub order: i32,
    pub doc_url: Option<String>,
    pub github_url: Option<String>,
    pub video_url: Option<String>,
    pub chat_url: Option<String>,
}

/// Fields accepted when creating or updating a lesson.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonParam {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub order: i32,
    #[serde(default)]
    pub doc_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub chat_url: Option<String>,
}
