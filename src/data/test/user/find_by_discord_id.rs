use super::*;
use test_utils::factory;

/// Tests finding a user by their linked Discord ID.
///
/// Verifies that the repository retrieves a user record when queried with a
/// Discord ID some account has linked.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_linked_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("fakeUser")
        .discord_id("123456789")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_discord_id("123456789").await;

    assert!(result.is_ok());
    let user = result.unwrap().unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.username, "fakeUser");
    assert_eq!(user.discord_id.as_deref(), Some("123456789"));

    Ok(())
}

/// Tests querying a Discord ID no account has linked.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_no_user_linked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    // An unlinked user must not match either
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_discord_id("999999999").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
