use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod repo;
pub mod services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .route("/users", get(handlers::list_users))
        .route("/users/:id", get(handlers::get_user_by_id))
        .route("/users/email/:email", get(handlers::get_user_by_email))
}
