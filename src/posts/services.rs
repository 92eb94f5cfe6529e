use tracing::{info, warn};
use uuid::Uuid;

use super::dto::{AuthorInfo, CreatePostRequest, PostResponse, UpdatePostRequest};
use super::repo::Post;
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::repo::User;

fn profile_complete(user: &User) -> bool {
    user.bio.is_some() && user.avatar.is_some() && user.date_of_birth.is_some()
}

fn validate_new_post(title: &str, content: &str) -> Result<(), ApiError> {
    let mut errors = Vec::new();
    if title.chars().count() < 3 {
        errors.push("Title must be at least 3 characters long".to_string());
    }
    if content.chars().count() < 10 {
        errors.push("Content must be at least 10 characters long".to_string());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

/// Create a post. The author's profile completeness is re-read here rather
/// than trusted from the client; the check and the insert are not one
/// transaction, a stale read at worst misjudges a concurrent profile edit.
pub async fn create_post(
    state: &AppState,
    author_id: Uuid,
    req: &CreatePostRequest,
) -> Result<PostResponse, ApiError> {
    let author = User::find_by_id(&state.db, author_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    if !profile_complete(&author) {
        warn!(user_id = %author_id, "post rejected, profile incomplete");
        return Err(ApiError::PreconditionFailed(
            "Please complete your profile (bio, avatar, and date of birth) before creating a post"
                .into(),
        ));
    }

    let title = req.title.trim();
    let content = req.content.trim();
    validate_new_post(title, content)?;

    let post = Post::insert(&state.db, author_id, title, content, req.img.as_deref()).await?;
    info!(post_id = %post.id, user_id = %author_id, "post created");

    Ok(PostResponse {
        id: post.id,
        author_id: post.author_id,
        title: post.title,
        content: post.content,
        img: post.img,
        created_at: post.created_at,
        updated_at: post.updated_at,
        author: AuthorInfo {
            id: author.id,
            name: author.name,
            avatar: author.avatar,
        },
    })
}

pub async fn list_all(state: &AppState) -> Result<Vec<PostResponse>, ApiError> {
    let posts = Post::list_all_with_author(&state.db)
        .await?
        .into_iter()
        .map(PostResponse::from)
        .collect();
    Ok(posts)
}

pub async fn get_by_id(state: &AppState, post_id: Uuid) -> Result<PostResponse, ApiError> {
    Post::find_with_author(&state.db, post_id)
        .await?
        .map(PostResponse::from)
        .ok_or_else(|| ApiError::NotFound("Post not found".into()))
}

pub async fn list_by_author(state: &AppState, author_id: Uuid) -> Result<Vec<Post>, ApiError> {
    Ok(Post::list_by_author(&state.db, author_id).await?)
}

/// Merge the supplied fields into an owned post. Not-found outranks the
/// ownership check so callers can't probe which ids exist via 403s.
pub async fn update_post(
    state: &AppState,
    author_id: Uuid,
    post_id: Uuid,
    req: &UpdatePostRequest,
) -> Result<PostResponse, ApiError> {
    let existing = Post::find_by_id(&state.db, post_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Post not found".into()))?;

    if existing.author_id != author_id {
        warn!(post_id = %post_id, user_id = %author_id, "update of foreign post rejected");
        return Err(ApiError::Forbidden("You can only update your own posts".into()));
    }

    Post::update(
        &state.db,
        post_id,
        req.title.as_deref().map(str::trim),
        req.content.as_deref().map(str::trim),
        req.img.as_deref(),
    )
    .await?;

    info!(post_id = %post_id, user_id = %author_id, "post updated");

    Post::find_with_author(&state.db, post_id)
        .await?
        .map(PostResponse::from)
        .ok_or_else(|| ApiError::NotFound("Post not found".into()))
}

pub async fn delete_post(state: &AppState, author_id: Uuid, post_id: Uuid) -> Result<(), ApiError> {
    let existing = Post::find_by_id(&state.db, post_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Post not found".into()))?;

    if existing.author_id != author_id {
        warn!(post_id = %post_id, user_id = %author_id, "delete of foreign post rejected");
        return Err(ApiError::Forbidden("You can only delete your own posts".into()));
    }

    Post::delete(&state.db, post_id).await?;
    info!(post_id = %post_id, user_id = %author_id, "post deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::repo::fixtures;
    use time::macros::date;

    #[test]
    fn completeness_requires_all_three_fields() {
        let mut user = fixtures::user();
        assert!(!profile_complete(&user));

        user.bio = Some("about".into());
        assert!(!profile_complete(&user));

        user.avatar = Some("https://cdn.example.com/a.png".into());
        assert!(!profile_complete(&user));

        user.date_of_birth = Some(date!(1990 - 05 - 20));
        assert!(profile_complete(&user));
    }

    #[test]
    fn new_post_rules_apply_to_trimmed_lengths() {
        assert!(validate_new_post("abc", "ten chars!").is_ok());
        assert!(validate_new_post("ab", "long enough content").is_err());
        assert!(validate_new_post("fine title", "short").is_err());

        match validate_new_post("ab", "short") {
            Err(ApiError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
