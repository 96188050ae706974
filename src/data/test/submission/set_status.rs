use super::*;

/// Tests resolving a submission with a review decision.
///
/// Expected: status updated, reviewer comment stored
#[tokio::test]
async fn resolves_submission_with_comment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let lesson = factory::lesson::create_lesson(db).await?;
    let submission = factory::submission::create_submission(db, lesson.id, user.id).await?;

    let repo = SubmissionRepository::new(db);
    let updated = repo
        .set_status(
            submission.id,
            SubmissionStatus::Passed,
            Some("Nice work".to_string()),
        )
        .await?;

    assert_eq!(updated.status, SubmissionStatus::Passed);
    assert_eq!(updated.comment.as_deref(), Some("Nice work"));

    Ok(())
}

/// Tests that updating the status keeps the submitter's comment when the
/// reviewer adds none.
///
/// Expected: status updated, original comment preserved
#[tokio::test]
async fn preserves_comment_when_none_given() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let lesson = factory::lesson::create_lesson(db).await?;

    let repo = SubmissionRepository::new(db);
    let submission = repo
        .create(CreateSubmissionParam {
            lesson_id: lesson.id,
            user_id: user.id,
            comment: Some("Please look at the loop".to_string()),
        })
        .await?;

    let updated = repo
        .set_status(submission.id, SubmissionStatus::UnderReview, None)
        .await?;

    assert_eq!(updated.status, SubmissionStatus::UnderReview);
    assert_eq!(updated.comment.as_deref(), Some("Please look at the loop"));

    Ok(())
}

/// Tests resolving a submission id that does not exist.
///
/// Expected: Err from the update
#[tokio::test]
async fn fails_for_missing_submission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubmissionRepository::new(db);
    let result = repo
        .set_status(42, SubmissionStatus::Passed, None)
        .await;

    assert!(result.is_err());

    Ok(())
}
