//! Technology catalogue calls.

use crate::sources::{ApiClient, Result, list_from_value};
use crate::state::Technology;
use crate::util::percent_encode;

/// What: Fetch all technologies.
///
/// # Errors
/// - Network failures, non-2xx statuses, malformed payloads.
pub async fn fetch_technologies(api: &ApiClient) -> Result<Vec<Technology>> {
    let value = api.get_json("/api/admin/technologies").await?;
    list_from_value::<Technology>(value, "technologies")
}

/// What: Create a technology entry.
///
/// # Errors
/// - Network failures and non-2xx statuses.
pub async fn create_technology(api: &ApiClient, name: &str, icon_url: &str) -> Result<()> {
    api.post_json(
        "/api/admin/technologies",
        &serde_json::json!({"name": name, "iconUrl": icon_url}),
    )
    .await?;
    tracing::info!(name, "created technology");
    Ok(())
}

/// What: Delete a technology by id.
///
/// # Errors
/// - Network failures and non-2xx statuses.
pub async fn delete_technology(api: &ApiClient, id: &str) -> Result<()> {
    api.delete(&format!("/api/admin/technologies/{}", percent_encode(id)))
        .await?;
    tracing::info!(id, "deleted technology");
    Ok(())
}
