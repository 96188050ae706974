use super::*;

/// Tests creating a new user account.
///
/// Verifies that the user repository successfully creates a new user record
/// with the specified identity fields and safe defaults.
///
/// Expected: Ok with user created, not admin, no linked Discord account
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: "student".to_string(),
            email: "student@example.com".to_string(),
            name: "Student".to_string(),
            password_hash: "$argon2id$stub".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.username, "student");
    assert_eq!(user.email, "student@example.com");
    assert!(!user.is_admin);
    assert!(user.discord_id.is_none());

    Ok(())
}

/// Tests the unique constraint on usernames.
///
/// Verifies that inserting a second account with an existing username fails
/// at the database layer.
///
/// Expected: Err on the second create
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParam {
        username: "student".to_string(),
        email: "first@example.com".to_string(),
        name: "First".to_string(),
        password_hash: "$argon2id$stub".to_string(),
    })
    .await?;

    let result = repo
        .create(CreateUserParam {
            username: "student".to_string(),
            email: "second@example.com".to_string(),
            name: "Second".to_string(),
            password_hash: "$argon2id$stub".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests the duplicate check used by signup.
///
/// Expected: true for a taken username or email, false otherwise
#[tokio::test]
async fn reports_taken_username_or_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParam {
        username: "student".to_string(),
        email: "student@example.com".to_string(),
        name: "Student".to_string(),
        password_hash: "$argon2id$stub".to_string(),
    })
    .await?;

    assert!(repo.username_or_email_taken("student", "other@example.com").await?);
    assert!(repo.username_or_email_taken("other", "student@example.com").await?);
    assert!(!repo.username_or_email_taken("other", "other@example.com").await?);

    Ok(())
}
