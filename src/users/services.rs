use axum::extract::FromRef;
use tracing::{info, warn};
use uuid::Uuid;

use super::dto::{UserResponse, UserSummary};
use super::repo::User;
use crate::auth::{jwt::JwtKeys, password};
use crate::error::ApiError;
use crate::state::AppState;
use crate::validation;

fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

/// Create a user. No token is issued here; tokens are login-only.
pub async fn register(
    state: &AppState,
    name: &str,
    email: &str,
    password_plain: &str,
) -> Result<UserResponse, ApiError> {
    let email = email.trim().to_lowercase();
    let name = name.trim();

    let mut errors = Vec::new();
    if name.chars().count() < 2 {
        errors.push("Name must be at least 2 characters long".to_string());
    }
    if !validation::is_valid_email(&email) {
        errors.push("Valid email is required".to_string());
    }
    if password_plain.chars().count() < 6 {
        errors.push("Password must be at least 6 characters long".to_string());
    }
    if !errors.is_empty() {
        warn!(?errors, "signup rejected");
        return Err(ApiError::Validation(errors));
    }

    if User::find_by_email(&state.db, &email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Err(ApiError::Conflict("User with this email already exists".into()));
    }

    let hash = password::hash_password(password_plain.to_string()).await?;

    let user = match User::create(&state.db, name, &email, &hash).await {
        Ok(user) => user,
        // Lost the race against a concurrent signup for the same email.
        Err(e) if is_unique_violation(&e) => {
            warn!(email = %email, "email already registered");
            return Err(ApiError::Conflict("User with this email already exists".into()));
        }
        Err(e) => return Err(ApiError::internal("Failed to register user", e)),
    };

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(UserResponse::from(user))
}

/// Verify credentials and mint a session token. The failure is deliberately
/// identical for an unknown email and a wrong password.
pub async fn authenticate(
    state: &AppState,
    email: &str,
    password_plain: &str,
) -> Result<(UserResponse, String), ApiError> {
    let email = email.trim().to_lowercase();
    if !validation::is_valid_email(&email) {
        return Err(ApiError::Validation(vec!["Valid email is required".to_string()]));
    }

    let user = match User::find_by_email(&state.db, &email).await? {
        Some(user) => user,
        None => {
            warn!(email = %email, "login for unknown email");
            return Err(ApiError::Unauthorized("Invalid credentials".into()));
        }
    };

    let valid = password::verify_password(password_plain.to_string(), user.password_hash.clone())
        .await?;
    if !valid {
        warn!(user_id = %user.id, "login with invalid password");
        return Err(ApiError::Unauthorized("Invalid credentials".into()));
    }

    let keys = JwtKeys::from_ref(state);
    let token = keys.sign(user.id)?;
    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok((UserResponse::from(user), token))
}

pub async fn get_by_id(state: &AppState, id: Uuid) -> Result<UserSummary, ApiError> {
    User::find_by_id(&state.db, id)
        .await?
        .map(UserSummary::from)
        .ok_or_else(|| ApiError::NotFound("User not found".into()))
}

pub async fn get_by_email(state: &AppState, email: &str) -> Result<UserSummary, ApiError> {
    let email = email.trim().to_lowercase();
    User::find_by_email(&state.db, &email)
        .await?
        .map(UserSummary::from)
        .ok_or_else(|| ApiError::NotFound("User not found".into()))
}

pub async fn list_all(state: &AppState) -> Result<(Vec<UserSummary>, usize), ApiError> {
    let users: Vec<UserSummary> = User::list_all(&state.db)
        .await?
        .into_iter()
        .map(UserSummary::from)
        .collect();
    let count = users.len();
    Ok((users, count))
}
