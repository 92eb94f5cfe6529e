use tracing::{info, warn};
use uuid::Uuid;

use super::dto::{PublicProfile, UpdateProfileRequest};
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::UserResponse;
use crate::users::repo::User;
use crate::validation;

/// Merge the provided fields into the caller's profile. Fields left out of
/// the request are untouched. A missing user is an error here: registration
/// is the only path that creates accounts.
pub async fn upsert_profile(
    state: &AppState,
    user_id: Uuid,
    changes: &UpdateProfileRequest,
) -> Result<UserResponse, ApiError> {
    let mut errors = Vec::new();
    if let Some(bio) = &changes.bio {
        errors.extend(validation::bio_error(bio));
    }
    if let Some(avatar) = &changes.avatar {
        errors.extend(validation::avatar_error(avatar));
    }
    if let Some(dob) = changes.date_of_birth {
        errors.extend(validation::date_of_birth_error(dob));
    }
    if !errors.is_empty() {
        warn!(user_id = %user_id, ?errors, "profile update rejected");
        return Err(ApiError::Validation(errors));
    }

    let updated = User::update_profile(
        &state.db,
        user_id,
        changes.bio.as_deref(),
        changes.avatar.as_deref(),
        changes.date_of_birth,
    )
    .await?;

    match updated {
        Some(user) => {
            info!(user_id = %user.id, "profile updated");
            Ok(UserResponse::from(user))
        }
        None => Err(ApiError::NotFound("User not found".into())),
    }
}

/// The caller's own view: all fields, date of birth included.
pub async fn get_own_profile(state: &AppState, user_id: Uuid) -> Result<UserResponse, ApiError> {
    User::find_by_id(&state.db, user_id)
        .await?
        .map(UserResponse::from)
        .ok_or_else(|| ApiError::NotFound("Profile not found".into()))
}

pub async fn get_public_profile(state: &AppState, user_id: Uuid) -> Result<PublicProfile, ApiError> {
    User::find_by_id(&state.db, user_id)
        .await?
        .map(PublicProfile::from)
        .ok_or_else(|| ApiError::NotFound("Public profile not found".into()))
}
