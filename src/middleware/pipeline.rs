//! Request resolution pipeline.
//!
//! Resolves an inbound request into a `RequestContext` through three strictly
//! ordered stages: logging, session resolution, then user resolution. The
//! context starts empty and each stage only augments it; user resolution runs
//! after session resolution because the user lookup depends on the session's
//! user id. Stages have no side effects beyond the augmentation (the logging
//! stage only emits tracing events).

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::AppError,
    middleware::session::AuthSession,
    model::{auth::SessionPrincipal, user::User},
};

/// Per-request context accumulated by the resolution pipeline.
#[derive(Debug, Default)]
pub struct RequestContext {
    /// User id found in the cookie session, set by the session stage.
    pub session_user_id: Option<i32>,
    /// Internal user for that id, set by the user stage.
    pub user: Option<User>,
}

impl RequestContext {
    /// Collapses the resolved context into the sign-in principal.
    pub fn principal(self) -> SessionPrincipal {
        match self.user {
            Some(user) => SessionPrincipal::Authenticated(user),
            None => SessionPrincipal::Anonymous,
        }
    }
}

/// The ordered middleware chain for one request.
pub struct RequestPipeline<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> RequestPipeline<'a> {
    /// Creates a new pipeline over the request's session and the database.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `session` - The request's cookie session
    ///
    /// # Returns
    /// A new RequestPipeline instance
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Runs logging, session, and user resolution in order.
    ///
    /// # Returns
    /// - `Ok(RequestContext)` - Context with whatever the stages could resolve;
    ///   both fields stay `None` for anonymous requests
    /// - `Err(AppError::SessionErr | AppError::DbErr)` - Session store or
    ///   database failure during resolution
    pub async fn run(&self) -> Result<RequestContext, AppError> {
        let mut ctx = RequestContext::default();

        self.logging_stage();
        self.session_stage(&mut ctx).await?;
        self.user_stage(&mut ctx).await?;

        Ok(ctx)
    }

    /// Records pipeline execution. No control-flow impact.
    fn logging_stage(&self) {
        tracing::debug!(session_id = ?self.session.id(), "resolving request context");
    }

    /// Reads the signed-in user id out of the cookie session, if present.
    async fn session_stage(&self, ctx: &mut RequestContext) -> Result<(), AppError> {
        ctx.session_user_id = AuthSession::new(self.session).get_user_id().await?;

        Ok(())
    }

    /// Loads the internal user for the session's user id.
    ///
    /// Leaves `ctx.user` unset when the session carries no id or the id no
    /// longer matches a row.
    async fn user_stage(&self, ctx: &mut RequestContext) -> Result<(), AppError> {
        if let Some(user_id) = ctx.session_user_id {
            ctx.user = UserRepository::new(self.db).find_by_id(user_id).await?;
        }

        Ok(())
    }
}

/// Resolves the current request to its signed-in user.
///
/// Runs the full logging → session → user pipeline and returns exactly the
/// user the user stage attached. A request with no resolved user yields
/// `Ok(None)`, never an error.
///
/// # Arguments
/// - `db` - Reference to the database connection
/// - `session` - The request's cookie session
///
/// # Returns
/// - `Ok(Some(User))` - The signed-in user
/// - `Ok(None)` - No session user, or the session user no longer exists
/// - `Err(AppError)` - Session store or database failure
pub async fn get_user_session(
    db: &DatabaseConnection,
    session: &Session,
) -> Result<Option<User>, AppError> {
    let ctx = RequestPipeline::new(db, session).run().await?;

    Ok(ctx.user)
}
