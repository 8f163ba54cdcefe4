//! Blog post retrieval.

use serde_json::Value;

use crate::sources::{ApiClient, Result, list_from_value};
use crate::state::BlogPost;
use crate::util::percent_encode;

/// What: Fetch the published posts for the public blog listing.
///
/// Output:
/// - Posts in backend order; the list envelope (bare array or
///   `{"posts": [...]}`) is normalized away.
///
/// # Errors
/// - Network failures, non-2xx statuses, malformed payloads.
pub async fn fetch_published(api: &ApiClient) -> Result<Vec<BlogPost>> {
    let value = api.get_json("/api/posts").await?;
    let posts = list_from_value::<BlogPost>(value, "posts")?;
    tracing::debug!(count = posts.len(), "fetched published posts");
    Ok(posts)
}

/// What: Fetch a single post by slug.
///
/// Inputs:
/// - `slug`: URL slug of the article
///
/// Output:
/// - `Ok(None)` when the backend reports 404, so the caller can render a
///   not-found page instead of an error panel.
///
/// # Errors
/// - Network failures, non-404 error statuses, malformed payloads.
pub async fn fetch_by_slug(api: &ApiClient, slug: &str) -> Result<Option<BlogPost>> {
    let path = format!("/api/posts/{}", percent_encode(slug));
    match api.get_json_opt(&path).await? {
        None => Ok(None),
        Some(value) => {
            // Detail endpoints sometimes wrap the record: {"post": {...}}
            let record = if let Some(inner) = value.get("post") {
                inner.clone()
            } else {
                value
            };
            Ok(Some(serde_json::from_value(record)?))
        }
    }
}

/// What: Bump the view counter of a post, best effort.
///
/// Inputs:
/// - `slug`: URL slug of the viewed article
///
/// Details:
/// - Spawned fire-and-forget by the detail handler; a failure is logged
///   at debug and never surfaces to the page.
pub async fn record_view(api: &ApiClient, slug: &str) {
    let path = format!("/api/posts/{}/views", percent_encode(slug));
    if let Err(err) = api.post_json(&path, &Value::Null).await {
        tracing::debug!(slug, error = %err, "view count bump failed");
    }
}

/// What: Fetch every post, drafts included, for the admin screen.
///
/// # Errors
/// - Network failures, non-2xx statuses, malformed payloads.
pub async fn fetch_all(api: &ApiClient) -> Result<Vec<BlogPost>> {
    let value = api.get_json("/api/admin/posts").await?;
    list_from_value::<BlogPost>(value, "posts")
}

/// What: Delete a post by id.
///
/// # Errors
/// - Network failures and non-2xx statuses.
pub async fn delete(api: &ApiClient, id: &str) -> Result<()> {
    api.delete(&format!("/api/admin/posts/{}", percent_encode(id)))
        .await?;
    tracing::info!(id, "deleted post");
    Ok(())
}
