use chrono::{Duration, Utc};

use crate::{data::provider_token::ProviderTokenRepository, error::AppError, model::token::TokenSet};
use test_utils::{builder::TestBuilder, factory};

mod get;
mod upsert;

/// A token set as it would come back from a completed exchange.
fn token_set(access: &str) -> TokenSet {
    TokenSet {
        access_token: access.to_string(),
        refresh_token: format!("{}-refresh", access),
        expires_at: Utc::now() + Duration::hours(1),
    }
}
