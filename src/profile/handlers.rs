use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use super::dto::UpdateProfileRequest;
use super::services;
use crate::auth::extractor::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let user = services::get_own_profile(&state, user_id).await?;
    Ok(Json(ApiResponse::ok(
        "Profile fetched successfully",
        json!({ "user": user }),
    )))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = services::upsert_profile(&state, user_id, &payload).await?;
    Ok(Json(ApiResponse::ok(
        "Profile updated successfully",
        json!({ "profile": profile }),
    )))
}

/// Same merge as `update_profile`; kept as the initial-completion endpoint
/// the SPA calls once after signup, hence the 201.
#[instrument(skip(state, payload))]
pub async fn complete_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = services::upsert_profile(&state, user_id, &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Profile completed successfully",
            json!({ "profile": profile }),
        )),
    ))
}

#[instrument(skip(state))]
pub async fn get_public_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = services::get_public_profile(&state, id).await?;
    Ok(Json(ApiResponse::ok(
        "Public profile fetched successfully",
        json!({ "profile": profile }),
    )))
}
