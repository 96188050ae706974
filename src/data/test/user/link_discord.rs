use super::*;
use test_utils::factory;

/// Tests recording a Discord link on an unlinked user.
///
/// Expected: the user becomes findable by the linked Discord ID
#[tokio::test]
async fn records_discord_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.link_discord(user.id, "123456789").await?;

    let linked = repo.find_by_discord_id("123456789").await?;
    assert_eq!(linked.unwrap().id, user.id);

    Ok(())
}

/// Tests relinking a user to a different Discord account.
///
/// Expected: the old Discord ID no longer matches, the new one does
#[tokio::test]
async fn overwrites_previous_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_discord_id(db, "111111111").await?;

    let repo = UserRepository::new(db);
    repo.link_discord(user.id, "222222222").await?;

    assert!(repo.find_by_discord_id("111111111").await?.is_none());
    assert_eq!(repo.find_by_discord_id("222222222").await?.unwrap().id, user.id);

    Ok(())
}
