use super::*;

/// Tests the review queue filter.
///
/// Verifies that resolved submissions (`passed`, `needs_rework`) are excluded
/// while `open` and `under_review` submissions are returned, and that other
/// lessons' submissions stay out of the queue.
///
/// Expected: only the two unresolved submissions for the queried lesson
#[tokio::test]
async fn excludes_resolved_submissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let lesson = factory::lesson::create_lesson(db).await?;
    let other_lesson = factory::lesson::create_lesson(db).await?;

    let open =
        factory::submission::create_submission_with_status(db, lesson.id, user.id, "open").await?;
    let under_review =
        factory::submission::create_submission_with_status(db, lesson.id, user.id, "under_review")
            .await?;
    factory::submission::create_submission_with_status(db, lesson.id, user.id, "passed").await?;
    factory::submission::create_submission_with_status(db, lesson.id, user.id, "needs_rework")
        .await?;
    factory::submission::create_submission_with_status(db, other_lesson.id, user.id, "open")
        .await?;

    let repo = SubmissionRepository::new(db);
    let queue = repo.get_open_by_lesson(lesson.id).await?;

    let mut ids: Vec<_> = queue.iter().map(|s| s.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, [open.id, under_review.id]);

    Ok(())
}

/// Tests a lesson with no submissions.
///
/// Expected: Ok with an empty queue
#[tokio::test]
async fn returns_empty_queue_for_no_submissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lesson = factory::lesson::create_lesson(db).await?;

    let repo = SubmissionRepository::new(db);
    let queue = repo.get_open_by_lesson(lesson.id).await?;

    assert!(queue.is_empty());

    Ok(())
}
