use super::*;

/// Tests creating a new lesson.
///
/// Expected: Ok with the stored fields returned
#[tokio::test]
async fn creates_new_lesson() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lesson)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LessonRepository::new(db);
    let result = repo.create(lesson_param("js0", 0)).await;

    assert!(result.is_ok());
    let lesson = result.unwrap();
    assert_eq!(lesson.slug, "js0");
    assert_eq!(lesson.order, 0);
    assert_eq!(lesson.doc_url.as_deref(), Some("https://example.com/docs/js0"));

    Ok(())
}

/// Tests the unique constraint on lesson slugs.
///
/// Expected: Err on the second create with the same slug
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lesson)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LessonRepository::new(db);
    repo.create(lesson_param("js0", 0)).await?;

    let result = repo.create(lesson_param("js0", 1)).await;

    assert!(result.is_err());

    Ok(())
}
