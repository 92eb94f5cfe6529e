use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use super::dto::{CreatePostRequest, UpdatePostRequest};
use super::services;
use crate::auth::extractor::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[instrument(skip(state, payload))]
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let post = services::create_post(&state, user_id, &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Post created successfully",
            json!({ "post": post }),
        )),
    ))
}

#[instrument(skip(state))]
pub async fn list_posts(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let posts = services::list_all(&state).await?;
    Ok(Json(ApiResponse::ok(
        "Posts fetched successfully",
        json!({ "posts": posts }),
    )))
}

#[instrument(skip(state))]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let post = services::get_by_id(&state, id).await?;
    Ok(Json(ApiResponse::ok(
        "Post fetched successfully",
        json!({ "post": post }),
    )))
}

#[instrument(skip(state))]
pub async fn my_posts(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let posts = services::list_by_author(&state, user_id).await?;
    Ok(Json(ApiResponse::ok(
        "Your posts fetched successfully",
        json!({ "posts": posts }),
    )))
}

#[instrument(skip(state, payload))]
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let post = services::update_post(&state, user_id, id, &payload).await?;
    Ok(Json(ApiResponse::ok(
        "Post updated successfully",
        json!({ "post": post }),
    )))
}

#[instrument(skip(state))]
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    services::delete_post(&state, user_id, id).await?;
    Ok(Json(ApiResponse::message("Post deleted successfully")))
}
