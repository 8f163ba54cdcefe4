//! Core value types for CMS-owned content.
//!
//! Everything here mirrors the JSON the backend returns, normalized once at
//! deserialization time so the rest of the crate never sees wire-format
//! quirks (string-vs-object categories, numeric ids, missing flags).

use crate::logic::filter::Filterable;
use crate::logic::slug::slugify;

/// Content category, normalized to a display name plus a canonical slug.
///
/// The backend serves categories in two historical shapes: a bare string
/// (`"web-development"`) or an object (`{"name": "Web Development",
/// "slug": "web-development"}`). Both collapse into this struct during
/// deserialization; no other code ever branches on the wire shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "CategoryWire")]
pub struct Category {
    /// Human-readable category name.
    pub name: String,
    /// Lowercase URL-safe slug; derived from `name` when the backend
    /// does not provide one.
    pub slug: String,
}

/// Wire-side category shapes accepted from the backend.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum CategoryWire {
    /// Object form, with an optional explicit slug.
    Named {
        #[serde(default)]
        name: String,
        #[serde(default)]
        slug: Option<String>,
    },
    /// Legacy bare-string form; the string doubles as name and slug source.
    Bare(String),
}

impl From<CategoryWire> for Category {
    fn from(wire: CategoryWire) -> Self {
        match wire {
            CategoryWire::Bare(raw) => {
                let name = raw.trim().to_string();
                let slug = slugify(&name);
                Self { name, slug }
            }
            CategoryWire::Named { name, slug } => {
                let name = name.trim().to_string();
                let slug = match slug {
                    Some(s) if !s.trim().is_empty() => s.trim().to_lowercase(),
                    _ => slugify(&name),
                };
                let name = if name.is_empty() { slug.clone() } else { name };
                Self { name, slug }
            }
        }
    }
}

/// Blog article as served by the posts endpoints.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Backend identifier; tolerated as string or number on the wire.
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    /// Article title.
    pub title: String,
    /// URL slug of the article.
    #[serde(default)]
    pub slug: String,
    /// Short teaser shown on listing cards.
    #[serde(default)]
    pub excerpt: String,
    /// Full article body (HTML authored in the CMS).
    #[serde(default)]
    pub content: String,
    /// Normalized category.
    #[serde(default)]
    pub category: Category,
    /// Display name of the author.
    #[serde(default)]
    pub author_name: String,
    /// Publication flag; drafts are only visible on admin screens.
    #[serde(default)]
    pub published: bool,
    /// Whether the article is pinned as featured.
    #[serde(default)]
    pub featured: bool,
    /// Lifetime view count.
    #[serde(default)]
    pub views: u64,
    /// Creation timestamp as reported by the backend (RFC 3339).
    #[serde(default)]
    pub created_at: String,
}

/// Portfolio case study as served by the portfolio endpoints.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    /// Backend identifier; tolerated as string or number on the wire.
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    /// Project title.
    pub title: String,
    /// URL slug of the project.
    #[serde(default)]
    pub slug: String,
    /// Client the project was delivered for.
    #[serde(default)]
    pub client_name: String,
    /// Short project description.
    #[serde(default)]
    pub description: String,
    /// Cover image URL, when the CMS has one.
    #[serde(default)]
    pub image_url: String,
    /// Normalized category.
    #[serde(default)]
    pub category: Category,
    /// Publication flag; drafts are only visible on admin screens.
    #[serde(default)]
    pub published: bool,
    /// Whether the project is pinned as featured.
    #[serde(default)]
    pub featured: bool,
    /// Lifetime view count.
    #[serde(default)]
    pub views: u64,
    /// Creation timestamp as reported by the backend (RFC 3339).
    #[serde(default)]
    pub created_at: String,
}

/// Blog author managed on the admin screens.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Backend identifier; tolerated as string or number on the wire.
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact e-mail.
    #[serde(default)]
    pub email: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: String,
}

/// Team member shown on the about page and managed in admin.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// Backend identifier; tolerated as string or number on the wire.
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Role or job title.
    #[serde(default)]
    pub role: String,
    /// Portrait image URL.
    #[serde(default)]
    pub photo_url: String,
}

/// Technology entry managed in admin and shown on portfolio cards.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    /// Backend identifier; tolerated as string or number on the wire.
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    /// Technology name.
    pub name: String,
    /// Icon image URL.
    #[serde(default)]
    pub icon_url: String,
}

impl Filterable for BlogPost {
    fn category(&self) -> &Category {
        &self.category
    }

    fn published(&self) -> bool {
        self.published
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.excerpt]
    }
}

impl Filterable for PortfolioItem {
    fn category(&self) -> &Category {
        &self.category
    }

    fn published(&self) -> bool {
        self.published
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.client_name]
    }
}

/// What: Deserialize a backend id that may be a JSON string or number.
///
/// Inputs:
/// - `deserializer`: Field deserializer for the `id` position
///
/// Output:
/// - The id as a string; empty when the field is null or an unexpected type.
fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    /// What: Bare-string categories normalize into name plus derived slug
    ///
    /// - Input: `"Web Development"` as a category value
    /// - Output: Name kept verbatim, slug slugified
    fn types_category_from_bare_string() {
        let cat: Category =
            serde_json::from_value(json!("Web Development")).expect("bare category");
        assert_eq!(cat.name, "Web Development");
        assert_eq!(cat.slug, "web-development");
    }

    #[test]
    /// What: Object categories keep an explicit slug and fall back to slugify
    ///
    /// - Input: Objects with and without a `slug` field
    /// - Output: Explicit slug wins (lowercased); otherwise derived from name
    fn types_category_from_object() {
        let explicit: Category =
            serde_json::from_value(json!({"name": "Web Development", "slug": "Web-Development"}))
                .expect("object category");
        assert_eq!(explicit.slug, "web-development");

        let derived: Category =
            serde_json::from_value(json!({"name": "UI / UX Design"})).expect("object category");
        assert_eq!(derived.name, "UI / UX Design");
        assert_eq!(derived.slug, "ui-ux-design");
    }

    #[test]
    /// What: A slug-only object still yields a usable display name
    ///
    /// - Input: Object with `slug` but no `name`
    /// - Output: Slug doubles as the name
    fn types_category_slug_only_object() {
        let cat: Category =
            serde_json::from_value(json!({"slug": "branding"})).expect("slug-only category");
        assert_eq!(cat.name, "branding");
        assert_eq!(cat.slug, "branding");
    }

    #[test]
    /// What: Posts deserialize from camelCase wire fields with defaults
    ///
    /// - Input: Minimal post JSON with numeric id and bare category
    /// - Output: Id stringified, optional fields defaulted, category normalized
    fn types_blog_post_wire_tolerance() {
        let post: BlogPost = serde_json::from_value(json!({
            "id": 42,
            "title": "Laravel Tips",
            "slug": "laravel-tips",
            "category": "Web Development",
            "createdAt": "2024-05-01T08:00:00Z"
        }))
        .expect("post");
        assert_eq!(post.id, "42");
        assert_eq!(post.category.slug, "web-development");
        assert_eq!(post.created_at, "2024-05-01T08:00:00Z");
        assert!(!post.published);
        assert_eq!(post.views, 0);
    }

    #[test]
    /// What: Portfolio items map camelCase fields onto snake_case struct fields
    ///
    /// - Input: Item JSON with `clientName` and object category
    /// - Output: Fields land on `client_name` and the normalized category
    fn types_portfolio_item_camel_case() {
        let item: PortfolioItem = serde_json::from_value(json!({
            "id": "ck9x",
            "title": "Harbor Rebrand",
            "slug": "harbor-rebrand",
            "clientName": "Harbor Co",
            "category": {"name": "Branding", "slug": "branding"},
            "published": true
        }))
        .expect("portfolio item");
        assert_eq!(item.client_name, "Harbor Co");
        assert_eq!(item.category.name, "Branding");
        assert!(item.published);
    }
}
