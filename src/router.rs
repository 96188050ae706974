use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{
    controller::{
        account::{signin, signup},
        auth::{callback, get_user, login, logout},
        discord::get_discord_user,
        lesson::{create_lesson, get_lessons, update_lesson},
        submission::{create_submission, get_review_queue, review_submission},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(login))
        .route("/api/auth/callback", get(callback))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/signup", post(signup))
        .route("/api/signin", post(signin))
        .route("/api/lessons", get(get_lessons).post(create_lesson))
        .route("/api/lessons/{id}", put(update_lesson))
        .route("/api/lessons/{id}/review", get(get_review_queue))
        .route("/api/submissions", post(create_submission))
        .route("/api/submissions/{id}/review", post(review_submission))
        .route("/api/discord/user", get(get_discord_user))
}
