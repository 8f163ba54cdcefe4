//! Author management calls.

use crate::sources::{ApiClient, Result, list_from_value};
use crate::state::Author;
use crate::util::percent_encode;

/// What: Fetch all authors.
///
/// # Errors
/// - Network failures, non-2xx statuses, malformed payloads.
pub async fn fetch_authors(api: &ApiClient) -> Result<Vec<Author>> {
    let value = api.get_json("/api/admin/authors").await?;
    list_from_value::<Author>(value, "authors")
}

/// What: Create an author.
///
/// # Errors
/// - Network failures and non-2xx statuses.
pub async fn create_author(api: &ApiClient, name: &str, email: &str) -> Result<()> {
    api.post_json(
        "/api/admin/authors",
        &serde_json::json!({"name": name, "email": email}),
    )
    .await?;
    tracing::info!(name, "created author");
    Ok(())
}

/// What: Delete an author by id.
///
/// # Errors
/// - Network failures and non-2xx statuses.
pub async fn delete_author(api: &ApiClient, id: &str) -> Result<()> {
    api.delete(&format!("/api/admin/authors/{}", percent_encode(id)))
        .await?;
    tracing::info!(id, "deleted author");
    Ok(())
}
