//! Portfolio retrieval, including the category side fetch.

use crate::sources::{ApiClient, Result, list_from_value};
use crate::state::{Category, PortfolioItem};
use crate::util::percent_encode;

/// What: Fetch the published portfolio items.
///
/// # Errors
/// - Network failures, non-2xx statuses, malformed payloads.
pub async fn fetch_items(api: &ApiClient) -> Result<Vec<PortfolioItem>> {
    let value = api.get_json("/api/portfolio").await?;
    let items = list_from_value::<PortfolioItem>(value, "portfolio")?;
    tracing::debug!(count = items.len(), "fetched portfolio items");
    Ok(items)
}

/// What: Fetch the portfolio category list for the filter dropdown.
///
/// # Errors
/// - Network failures, non-2xx statuses, malformed payloads.
pub async fn fetch_categories(api: &ApiClient) -> Result<Vec<Category>> {
    let value = api.get_json("/api/portfolio/categories").await?;
    list_from_value::<Category>(value, "categories")
}

/// What: Fetch items and categories concurrently for the listing page.
///
/// Output:
/// - The items result untouched, plus the category list with failures
///   already degraded to empty.
///
/// Details:
/// - The two fetches are independent: a missing category list only costs
///   the dropdown, so it degrades to empty with a warning while an item
///   failure is left for the caller to surface as the page error state.
pub async fn fetch_listing(api: &ApiClient) -> (Result<Vec<PortfolioItem>>, Vec<Category>) {
    let (items, categories) = futures::join!(fetch_items(api), fetch_categories(api));
    let categories = match categories {
        Ok(list) => list,
        Err(err) => {
            tracing::warn!(error = %err, "portfolio categories unavailable; dropdown will be empty");
            Vec::new()
        }
    };
    (items, categories)
}

/// What: Fetch a single portfolio item by slug.
///
/// Output:
/// - `Ok(None)` on backend 404.
///
/// # Errors
/// - Network failures, non-404 error statuses, malformed payloads.
pub async fn fetch_by_slug(api: &ApiClient, slug: &str) -> Result<Option<PortfolioItem>> {
    let path = format!("/api/portfolio/{}", percent_encode(slug));
    match api.get_json_opt(&path).await? {
        None => Ok(None),
        Some(value) => {
            let record = if let Some(inner) = value.get("portfolio") {
                inner.clone()
            } else {
                value
            };
            Ok(Some(serde_json::from_value(record)?))
        }
    }
}

/// Fields for creating a portfolio item from the admin form.
#[derive(Clone, Debug)]
pub struct NewPortfolioItem {
    /// Project title.
    pub title: String,
    /// Client the project was delivered for.
    pub client_name: String,
    /// Category display name; the backend derives the slug.
    pub category: String,
    /// Short project description.
    pub description: String,
}

/// What: Fetch every portfolio item, drafts included, for the admin screen.
///
/// # Errors
/// - Network failures, non-2xx statuses, malformed payloads.
pub async fn fetch_all(api: &ApiClient) -> Result<Vec<PortfolioItem>> {
    let value = api.get_json("/api/admin/portfolio").await?;
    list_from_value::<PortfolioItem>(value, "portfolio")
}

/// What: Create a portfolio item as a draft.
///
/// # Errors
/// - Network failures and non-2xx statuses.
pub async fn create(api: &ApiClient, item: &NewPortfolioItem) -> Result<()> {
    api.post_json(
        "/api/admin/portfolio",
        &serde_json::json!({
            "title": item.title,
            "clientName": item.client_name,
            "category": item.category,
            "description": item.description,
            "published": false,
        }),
    )
    .await?;
    tracing::info!(title = %item.title, "created portfolio item");
    Ok(())
}

/// What: Set the published flag of a portfolio item.
///
/// # Errors
/// - Network failures and non-2xx statuses.
pub async fn set_published(api: &ApiClient, id: &str, published: bool) -> Result<()> {
    api.put_json(
        &format!("/api/admin/portfolio/{}", percent_encode(id)),
        &serde_json::json!({"published": published}),
    )
    .await?;
    tracing::info!(id, published, "updated portfolio publication state");
    Ok(())
}

/// What: Delete a portfolio item by id.
///
/// # Errors
/// - Network failures and non-2xx statuses.
pub async fn delete(api: &ApiClient, id: &str) -> Result<()> {
    api.delete(&format!("/api/admin/portfolio/{}", percent_encode(id)))
        .await?;
    tracing::info!(id, "deleted portfolio item");
    Ok(())
}
