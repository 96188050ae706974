use super::*;

/// Tests creating a new submission.
///
/// Expected: Ok with the submission in the `open` state
#[tokio::test]
async fn creates_open_submission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let lesson = factory::lesson::create_lesson(db).await?;

    let repo = SubmissionRepository::new(db);
    let result = repo
        .create(CreateSubmissionParam {
            lesson_id: lesson.id,
            user_id: user.id,
            comment: Some("First attempt".to_string()),
        })
        .await;

    assert!(result.is_ok());
    let submission = result.unwrap();
    assert_eq!(submission.lesson_id, lesson.id);
    assert_eq!(submission.user_id, user.id);
    assert_eq!(submission.status, SubmissionStatus::Open);
    assert_eq!(submission.comment.as_deref(), Some("First attempt"));

    Ok(())
}
