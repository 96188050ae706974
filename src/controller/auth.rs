use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::{
        pipeline::{get_user_session, RequestPipeline},
        session::{AuthSession, CsrfSession},
    },
    model::auth::{
        ProviderAccount, SessionPrincipal, SignInCallback, SignInOutcome, CURRICULUM_PATH,
        DISCORD_PROVIDER,
    },
    service::auth::{provider::IdentityProvider, signin::SignInService},
    state::AppState,
};

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord for token exchange.
    pub code: String,
}

/// GET /api/auth/login - Start the Discord OAuth flow
///
/// Stores a fresh CSRF token in the session and redirects the browser to
/// Discord's authorize page.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let (url, csrf_token) = state.provider.login_url();

    // Store CSRF token in session for verification during callback
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// GET /api/auth/callback - Discord OAuth callback
///
/// Validates the CSRF state, resolves the request's principal through the
/// middleware pipeline, and hands the callback to the sign-in orchestrator.
/// For an anonymous arrival the handshake is completed here first so the
/// orchestrator can look the account up by its Discord id; on the link path
/// the orchestrator performs its own exchange. A returning linked user gets a
/// session established before the redirect.
///
/// # Returns
/// - `307` - Redirect to the orchestrator's outcome path
/// - `400 Bad Request` - CSRF state mismatch
/// - `502 Bad Gateway` - Token exchange or profile fetch failed
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.0.state).await?;

    let ctx = RequestPipeline::new(&state.db, &session).run().await?;
    let principal = ctx.principal();

    let external_user_id = match &principal {
        // The link flow identifies the account from its own exchange.
        SessionPrincipal::Authenticated(_) => String::new(),
        // Anonymous arrivals need the handshake completed up front to know
        // which Discord identity is asking to sign in.
        SessionPrincipal::Anonymous => {
            let handshake = state.provider.exchange_code(&params.0.code).await?;
            state
                .provider
                .fetch_profile(&handshake.access_token)
                .await?
                .provider_id
        }
    };

    let callback = SignInCallback {
        account: ProviderAccount {
            provider: DISCORD_PROVIDER.to_string(),
            external_user_id,
            code: params.0.code.clone(),
        },
        user_id: String::new(),
    };

    let outcome = SignInService::new(&state.db, &state.provider)
        .sign_in(&callback, &principal)
        .await?;

    // A returning linked user is signed in before being redirected.
    if outcome == SignInOutcome::ConnectedRedirect(CURRICULUM_PATH) {
        if let Some(user) = UserRepository::new(&state.db)
            .find_by_discord_id(&callback.account.external_user_id)
            .await?
        {
            AuthSession::new(&session).set_user_id(user.id).await?;
        }
    }

    match outcome.redirect_path() {
        Some(path) => Ok(Redirect::temporary(path)),
        None => Ok(Redirect::temporary(CURRICULUM_PATH)),
    }
}

/// GET /api/auth/logout - End the current session
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::OK)
}

/// GET /api/auth/user - Current session user
///
/// Runs the resolution pipeline and returns the signed-in user, or `null`
/// when the request carries no resolvable user. Never an error for the
/// anonymous case.
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = get_user_session(&state.db, &session).await?;

    Ok((StatusCode::OK, Json(user.map(|u| u.into_dto()))))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
