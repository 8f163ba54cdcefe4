//! Team member calls, shared by the about page and the admin screen.

use crate::sources::{ApiClient, Result, list_from_value};
use crate::state::TeamMember;
use crate::util::percent_encode;

/// What: Fetch all team members.
///
/// # Errors
/// - Network failures, non-2xx statuses, malformed payloads.
pub async fn fetch_members(api: &ApiClient) -> Result<Vec<TeamMember>> {
    let value = api.get_json("/api/admin/team-members").await?;
    list_from_value::<TeamMember>(value, "teamMembers")
}

/// What: Create a team member.
///
/// # Errors
/// - Network failures and non-2xx statuses.
pub async fn create_member(api: &ApiClient, name: &str, role: &str) -> Result<()> {
    api.post_json(
        "/api/admin/team-members",
        &serde_json::json!({"name": name, "role": role}),
    )
    .await?;
    tracing::info!(name, "created team member");
    Ok(())
}

/// What: Delete a team member by id.
///
/// # Errors
/// - Network failures and non-2xx statuses.
pub async fn delete_member(api: &ApiClient, id: &str) -> Result<()> {
    api.delete(&format!("/api/admin/team-members/{}", percent_encode(id)))
        .await?;
    tracing::info!(id, "deleted team member");
    Ok(())
}
