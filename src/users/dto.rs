use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::repo::User;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Sanitized user: everything except the password hash. Returned wherever the
/// caller owns the record (signup, login, own profile, profile updates).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<Date>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            bio: user.bio,
            avatar: user.avatar,
            date_of_birth: user.date_of_birth,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Directory projection for the user lookup endpoints; profile fields stay
/// out of it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::repo::fixtures;

    #[test]
    fn user_response_has_no_password_field() {
        let response = UserResponse::from(fixtures::user());
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("password").is_none());
        assert!(value.get("passwordHash").is_none());
        // unset profile fields serialize as explicit nulls
        assert!(value["bio"].is_null());
        assert!(value["dateOfBirth"].is_null());
    }

    #[test]
    fn summary_excludes_profile_fields() {
        let mut user = fixtures::user();
        user.bio = Some("about me".into());
        let value = serde_json::to_value(UserSummary::from(user)).unwrap();
        assert!(value.get("bio").is_none());
        assert!(value.get("dateOfBirth").is_none());
        assert!(value.get("email").is_some());
    }
}
