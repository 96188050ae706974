use super::*;

/// Tests overwriting a lesson's fields.
///
/// Expected: Ok with updated fields persisted
#[tokio::test]
async fn updates_existing_lesson() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lesson)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LessonRepository::new(db);
    let created = repo.create(lesson_param("js0", 0)).await?;

    let mut param = lesson_param("js0", 5);
    param.title = "Foundations of JavaScript".to_string();
    let updated = repo.update(created.id, param).await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Foundations of JavaScript");
    assert_eq!(updated.order, 5);

    let refetched = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(refetched.title, "Foundations of JavaScript");

    Ok(())
}

/// Tests updating a lesson id that does not exist.
///
/// Expected: Err from the update
#[tokio::test]
async fn fails_for_missing_lesson() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lesson)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LessonRepository::new(db);
    let result = repo.update(42, lesson_param("js0", 0)).await;

    assert!(result.is_err());

    Ok(())
}
