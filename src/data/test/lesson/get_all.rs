use super::*;

/// Tests catalog ordering.
///
/// Verifies that lessons come back sorted by their catalog position rather
/// than insertion order.
///
/// Expected: lessons ordered by ascending `order`
#[tokio::test]
async fn returns_lessons_in_catalog_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lesson)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LessonRepository::new(db);
    repo.create(lesson_param("js2", 2)).await?;
    repo.create(lesson_param("js0", 0)).await?;
    repo.create(lesson_param("js1", 1)).await?;

    let lessons = repo.get_all().await?;

    let slugs: Vec<_> = lessons.iter().map(|l| l.slug.as_str()).collect();
    assert_eq!(slugs, ["js0", "js1", "js2"]);

    Ok(())
}

/// Tests an empty catalog.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_no_lessons() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lesson)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LessonRepository::new(db);
    let lessons = repo.get_all().await?;

    assert!(lessons.is_empty());

    Ok(())
}
