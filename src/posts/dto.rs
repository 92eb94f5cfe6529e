use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo::PostWithAuthorRow;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub img: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub img: Option<String>,
}

/// What readers need to attribute a post; nothing private.
#[derive(Debug, Serialize)]
pub struct AuthorInfo {
    pub id: Uuid,
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub img: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub author: AuthorInfo,
}

impl From<PostWithAuthorRow> for PostResponse {
    fn from(row: PostWithAuthorRow) -> Self {
        Self {
            id: row.id,
            author_id: row.author_id,
            title: row.title,
            content: row.content,
            img: row.img,
            created_at: row.created_at,
            updated_at: row.updated_at,
            author: AuthorInfo {
                id: row.author_id,
                name: row.author_name,
                avatar: row.author_avatar,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn post_response_embeds_author_projection() {
        let author_id = Uuid::new_v4();
        let row = PostWithAuthorRow {
            id: Uuid::new_v4(),
            author_id,
            title: "My First Test Post".into(),
            content: "Some content that is long enough".into(),
            img: None,
            created_at: datetime!(2024-01-01 00:00:00 UTC),
            updated_at: datetime!(2024-01-01 00:00:00 UTC),
            author_name: "Alice".into(),
            author_avatar: Some("https://cdn.example.com/alice.png".into()),
        };

        let value = serde_json::to_value(PostResponse::from(row)).unwrap();
        assert_eq!(value["title"], serde_json::json!("My First Test Post"));
        assert_eq!(value["author"]["name"], serde_json::json!("Alice"));
        assert_eq!(value["author"]["id"], value["authorId"]);
        assert!(value["author"].get("email").is_none());
    }
}
