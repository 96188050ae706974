//! Stored OAuth token factory.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a stored token row for the given user with a one-week expiry.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user
///
/// # Returns
/// - `Ok(entity::provider_token::Model)` - Created token entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_tokens(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::provider_token::Model, DbErr> {
    entity::provider_token::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        access_token: ActiveValue::Set("stored-access-token".to_string()),
        refresh_token: ActiveValue::Set("stored-refresh-token".to_string()),
        expires_at: ActiveValue::Set(Utc::now() + Duration::days(7)),
    }
    .insert(db)
    .await
}

/// Creates a stored token row that expired an hour ago.
///
/// Used to exercise the refresh-on-expiry path of the Discord profile service.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user
///
/// # Returns
/// - `Ok(entity::provider_token::Model)` - Created token entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_expired_tokens(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::provider_token::Model, DbErr> {
    entity::provider_token::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        access_token: ActiveValue::Set("expired-access-token".to_string()),
        refresh_token: ActiveValue::Set("stored-refresh-token".to_string()),
        expires_at: ActiveValue::Set(Utc::now() - Duration::hours(1)),
    }
    .insert(db)
    .await
}
