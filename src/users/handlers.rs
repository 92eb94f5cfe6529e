use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use super::dto::{LoginRequest, SignupRequest};
use super::services;
use crate::auth::extractor::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::validation;

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validation::validate_signup(&payload.name, &payload.email, &payload.password)?;
    let user = services::register(&state, &payload.name, &payload.email, &payload.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "User registered successfully",
            json!({ "user": user }),
        )),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validation::validate_login(&payload.email, &payload.password)?;
    let (user, token) = services::authenticate(&state, &payload.email, &payload.password).await?;
    Ok(Json(ApiResponse::ok(
        "Login successful",
        json!({ "user": user, "token": token }),
    )))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let (users, count) = services::list_all(&state).await?;
    Ok(Json(ApiResponse::ok(
        "Users fetched successfully",
        json!({ "users": users, "count": count }),
    )))
}

#[instrument(skip(state))]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let user = services::get_by_id(&state, id).await?;
    Ok(Json(ApiResponse::ok(
        "User fetched successfully",
        json!({ "user": user }),
    )))
}

#[instrument(skip(state))]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if !validation::is_valid_email(email.trim()) {
        return Err(ApiError::Validation(vec![
            "Please provide a valid email".to_string(),
        ]));
    }
    let user = services::get_by_email(&state, &email).await?;
    Ok(Json(ApiResponse::ok(
        "User fetched successfully",
        json!({ "user": user }),
    )))
}
