use super::*;
use test_utils::factory;

/// Tests finding a user row by username.
///
/// Verifies that the full entity comes back, including the stored password
/// hash needed by the credential check.
///
/// Expected: Ok(Some(Model)) with the stored hash present
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("fakeUser")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_username("fakeUser").await;

    assert!(result.is_ok());
    let user = result.unwrap().unwrap();
    assert_eq!(user.username, "fakeUser");
    assert!(!user.password_hash.is_empty());

    Ok(())
}

/// Tests querying an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_by_username("nobody").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
