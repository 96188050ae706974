use crate::{data::lesson::LessonRepository, error::AppError, model::lesson::LessonParam};
use test_utils::builder::TestBuilder;

mod create;
mod get_all;
mod update;

fn lesson_param(slug: &str, order: i32) -> LessonParam {
    LessonParam {
        slug: slug.to_string(),
        title: format!("Lesson {}", slug),
        description: "Write a function that returns things".to_string(),
        order,
        doc_url: Some(format!("https://example.com/docs/{}", slug)),
        github_url: None,
        video_url: None,
        chat_url: None,
    }
}
