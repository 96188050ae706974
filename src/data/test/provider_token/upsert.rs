use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Tests storing tokens for a user with no existing row.
///
/// Expected: Ok with the stored values returned
#[tokio::test]
async fn creates_token_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = ProviderTokenRepository::new(db);
    let result = repo.upsert(user.id, &token_set("first-access")).await;

    assert!(result.is_ok());
    let tokens = result.unwrap();
    assert_eq!(tokens.user_id, user.id);
    assert_eq!(tokens.access_token, "first-access");
    assert_eq!(tokens.refresh_token, "first-access-refresh");

    Ok(())
}

/// Tests upsert idempotency for repeated token writes.
///
/// Verifies that a second upsert for the same user overwrites the existing
/// row rather than inserting a duplicate, with the second call's values
/// winning.
///
/// Expected: exactly one row holding the second call's values
#[tokio::test]
async fn second_upsert_overwrites_without_duplicating() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = ProviderTokenRepository::new(db);
    repo.upsert(user.id, &token_set("first-access")).await?;
    let second = repo.upsert(user.id, &token_set("second-access")).await?;

    assert_eq!(second.access_token, "second-access");
    assert_eq!(second.refresh_token, "second-access-refresh");

    let rows = entity::prelude::ProviderToken::find().count(db).await?;
    assert_eq!(rows, 1);

    let stored = repo.get(user.id).await?.unwrap();
    assert_eq!(stored.access_token, "second-access");

    Ok(())
}

/// Tests that token rows for different users stay independent.
///
/// Expected: two rows, each holding its own user's values
#[tokio::test]
async fn keeps_rows_per_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user_a = factory::user::create_user(db).await?;
    let user_b = factory::user::create_user(db).await?;

    let repo = ProviderTokenRepository::new(db);
    repo.upsert(user_a.id, &token_set("a-access")).await?;
    repo.upsert(user_b.id, &token_set("b-access")).await?;

    let rows = entity::prelude::ProviderToken::find().count(db).await?;
    assert_eq!(rows, 2);

    assert_eq!(repo.get(user_a.id).await?.unwrap().access_token, "a-access");
    assert_eq!(repo.get(user_b.id).await?.unwrap().access_token, "b-access");

    Ok(())
}
