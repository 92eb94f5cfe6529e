use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::users::repo::User;

/// Partial update: absent fields are left untouched, never nulled.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<Date>,
}

/// Projection safe for anyone to see: no email, no date of birth.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    pub id: Uuid,
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for PublicProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            bio: user.bio,
            avatar: user.avatar,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::repo::fixtures;
    use time::macros::date;

    #[test]
    fn public_profile_never_exposes_private_fields() {
        let mut user = fixtures::user();
        user.bio = Some("likes rust".into());
        user.avatar = Some("https://cdn.example.com/a.png".into());
        user.date_of_birth = Some(date!(1990 - 05 - 20));

        let value = serde_json::to_value(PublicProfile::from(user)).unwrap();
        assert!(value.get("dateOfBirth").is_none());
        assert!(value.get("date_of_birth").is_none());
        assert!(value.get("email").is_none());
        assert_eq!(value["bio"], serde_json::json!("likes rust"));
    }

    #[test]
    fn update_request_treats_absent_fields_as_none() {
        let req: UpdateProfileRequest = serde_json::from_str(r#"{"bio": "x"}"#).unwrap();
        assert_eq!(req.bio.as_deref(), Some("x"));
        assert!(req.avatar.is_none());
        assert!(req.date_of_birth.is_none());
    }

    #[test]
    fn update_request_parses_iso_date() {
        let req: UpdateProfileRequest =
            serde_json::from_str(r#"{"dateOfBirth": "1990-05-20"}"#).unwrap();
        assert_eq!(req.date_of_birth, Some(date!(1990 - 05 - 20)));
    }
}
