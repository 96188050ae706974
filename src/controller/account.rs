use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::{pipeline::RequestPipeline, session::AuthSession},
    model::{
        auth::{ProviderAccount, SignInCallback, SignInOutcome},
        user::SignupParam,
    },
    service::{account::AccountService, auth::signin::SignInService},
    state::AppState,
};

/// Request body for account creation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupDto {
    pub username: String,
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Request body for local credential login.
#[derive(Deserialize)]
pub struct SigninDto {
    pub username: String,
    pub password: String,
}

/// POST /api/signup - Create a local account
///
/// Creates the account and signs the new user in immediately.
///
/// # Returns
/// - `201 Created`: JSON UserDto for the new account
/// - `400 Bad Request`: Username or email already in use
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AccountService::new(&state.db)
        .signup(SignupParam {
            username: dto.username,
            email: dto.email,
            name: dto.name,
            password: dto.password,
        })
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /api/signin - Local credential login
///
/// Verifies the credentials, routes the attempt through the sign-in
/// orchestrator (which passes local logins straight through), and
/// establishes the session.
///
/// # Returns
/// - `200 OK`: JSON UserDto for the signed-in account
/// - `401 Unauthorized`: Unknown username or wrong password
pub async fn signin(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<SigninDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AccountService::new(&state.db)
        .login(&dto.username, &dto.password)
        .await?;

    let ctx = RequestPipeline::new(&state.db, &session).run().await?;

    let callback = SignInCallback {
        account: ProviderAccount {
            provider: "credentials".to_string(),
            external_user_id: String::new(),
            code: String::new(),
        },
        user_id: user.id.to_string(),
    };

    let outcome = SignInService::new(&state.db, &state.provider)
        .sign_in(&callback, &ctx.principal())
        .await?;

    if outcome != SignInOutcome::ContinueLocal {
        return Err(AppError::InternalError(format!(
            "unexpected sign-in outcome for credentials login: {:?}",
            outcome
        )));
    }

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
