use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError, middleware::auth::AuthGuard, service::discord::DiscordService,
    state::AppState,
};

/// GET /api/discord/user - Discord profile of the current user
///
/// Returns the linked Discord account's profile, refreshing stored tokens if
/// they expired. Backs the post-link success page.
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK`: JSON ProviderProfile for the linked account
/// - `401 Unauthorized`: No session user
/// - `404 Not Found`: The user has not linked a Discord account
/// - `502 Bad Gateway`: Refresh or profile fetch against Discord failed
pub async fn get_discord_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    let discord_service = DiscordService::new(&state.db, &state.provider);

    let Some(profile) = discord_service.get_user_info(user.id).await? else {
        return Err(AppError::NotFound(
            "No Discord account is connected to this user".to_string(),
        ));
    };

    Ok((StatusCode::OK, Json(profile)))
}
