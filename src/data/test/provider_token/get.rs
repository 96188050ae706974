use super::*;

/// Tests reading stored tokens back.
///
/// Expected: Ok(Some(ProviderTokens)) matching the upserted values
#[tokio::test]
async fn returns_stored_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = ProviderTokenRepository::new(db);
    repo.upsert(user.id, &token_set("stored-access")).await?;

    let tokens = repo.get(user.id).await?;

    let tokens = tokens.unwrap();
    assert_eq!(tokens.access_token, "stored-access");
    assert!(!tokens.is_expired());

    Ok(())
}

/// Tests reading tokens for a user who never linked a provider account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = ProviderTokenRepository::new(db);
    let tokens = repo.get(user.id).await?;

    assert!(tokens.is_none());

    Ok(())
}
