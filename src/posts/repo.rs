use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

const POST_COLUMNS: &str = "id, author_id, title, content, img, created_at, updated_at";

// Author columns aliased flat; sqlx has no nested FromRow.
const POST_WITH_AUTHOR_QUERY: &str = r#"
    SELECT p.id, p.author_id, p.title, p.content, p.img, p.created_at, p.updated_at,
           u.name AS author_name, u.avatar AS author_avatar
    FROM posts p
    JOIN users u ON u.id = p.author_id
"#;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub img: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Post row joined with its author's display fields.
#[derive(Debug, Clone, FromRow)]
pub struct PostWithAuthorRow {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub img: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub author_name: String,
    pub author_avatar: Option<String>,
}

impl Post {
    pub async fn insert(
        db: &PgPool,
        author_id: Uuid,
        title: &str,
        content: &str,
        img: Option<&str>,
    ) -> anyhow::Result<Post> {
        let post = sqlx::query_as::<_, Post>(&format!(
            r#"
            INSERT INTO posts (author_id, title, content, img)
            VALUES ($1, $2, $3, $4)
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(author_id)
        .bind(title)
        .bind(content)
        .bind(img)
        .fetch_one(db)
        .await?;
        Ok(post)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(&format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(post)
    }

    pub async fn find_with_author(
        db: &PgPool,
        id: Uuid,
    ) -> anyhow::Result<Option<PostWithAuthorRow>> {
        let row = sqlx::query_as::<_, PostWithAuthorRow>(&format!(
            "{POST_WITH_AUTHOR_QUERY} WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn list_all_with_author(db: &PgPool) -> anyhow::Result<Vec<PostWithAuthorRow>> {
        let rows = sqlx::query_as::<_, PostWithAuthorRow>(&format!(
            "{POST_WITH_AUTHOR_QUERY} ORDER BY p.created_at DESC"
        ))
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn list_by_author(db: &PgPool, author_id: Uuid) -> anyhow::Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts
            WHERE author_id = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(author_id)
        .fetch_all(db)
        .await?;
        Ok(posts)
    }

    /// Partial merge; NULL parameters keep the stored value. Bumps updated_at.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        title: Option<&str>,
        content: Option<&str>,
        img: Option<&str>,
    ) -> anyhow::Result<Post> {
        let post = sqlx::query_as::<_, Post>(&format!(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                img = COALESCE($4, img),
                updated_at = now()
            WHERE id = $1
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(title)
        .bind(content)
        .bind(img)
        .fetch_one(db)
        .await?;
        Ok(post)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
