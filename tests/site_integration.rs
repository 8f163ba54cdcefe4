//! End-to-end tests that exercise the site over real HTTP.
//!
//! Each test boots the full router on an ephemeral port with its own
//! temporary config directory, pointing the backend client at a local
//! HTTP mock where the page under test fetches content.
//!
//! Tests cover:
//! - The document shell: localized chrome, navigation, 404 fallback
//! - Listing pages rendering fetched content through the filter pipeline
//! - Backend failures rendering an error panel inside an intact shell
//! - Preference mutations: theme toggle persistence, redirect hygiene,
//!   and the two-phase language switch end to end
//! - Management screens posting trimmed payloads to the backend

use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use tokio::sync::oneshot;

use bajraweb::i18n::{I18n, Language};
use bajraweb::server;
use bajraweb::settings::SettingsStore;
use bajraweb::sources::ApiClient;
use bajraweb::state::SiteState;

/// A running site instance bound to an ephemeral port.
///
/// Holds the shared state for direct assertions and the temp config dir
/// so persisted settings can be read back; dropping it shuts the server
/// down.
struct TestSite {
    base: String,
    state: SiteState,
    client: reqwest::Client,
    _config: TempDir,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Drop for TestSite {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// What: Boot the site against `api_base` and wait for it to accept requests.
///
/// Inputs:
/// - `api_base`: Backend origin, usually a mock server's base URL
///
/// Output:
/// - Running [`TestSite`] with a redirect-preserving HTTP client, so 303
///   responses can be asserted instead of silently followed.
async fn spawn_site(api_base: &str) -> TestSite {
    let config = TempDir::new().expect("config dir");
    let settings = Arc::new(SettingsStore::load_or_init(
        config.path().join("settings.conf"),
    ));
    let language = settings.get().language;
    let i18n = Arc::new(I18n::load(None, language));
    let state = SiteState::with_system_clock(ApiClient::new(api_base), i18n, settings);

    let app = server::router(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
            .expect("serve");
    });

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("http client");

    TestSite {
        base: format!("http://{addr}"),
        state,
        client,
        _config: config,
        shutdown: Some(shutdown_tx),
    }
}

impl TestSite {
    async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{path}", self.base))
            .send()
            .await
            .expect("GET request")
    }

    async fn get_text(&self, path: &str) -> String {
        self.get(path).await.text().await.expect("response body")
    }

    async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(format!("{}{path}", self.base))
            .form(form)
            .send()
            .await
            .expect("POST request")
    }

    /// Persisted settings file content.
    fn settings_file(&self) -> String {
        std::fs::read_to_string(self.state.settings.path()).expect("settings file")
    }
}

/// Redirect target of a 303 response.
fn location(resp: &reqwest::Response) -> &str {
    resp.headers()
        .get("location")
        .expect("location header")
        .to_str()
        .expect("ascii location")
}

/// Poll `check` every 20ms until it holds or `deadline` passes.
async fn wait_until(deadline: Duration, mut check: impl FnMut() -> bool) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    check()
}

/// Backend base for pages that never fetch; connections fail fast.
const NO_BACKEND: &str = "http://127.0.0.1:9";

#[tokio::test]
/// What: The landing page renders the full localized chrome
///
/// - Input: GET / on a fresh site
/// - Output: English shell with brand, navigation, preference controls
///   and footer; the home link marked current
async fn site_home_shell_renders_localized_chrome() {
    let site = spawn_site(NO_BACKEND).await;
    let resp = site.get("/").await;
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body = resp.text().await.expect("body");
    assert!(body.contains("<html lang=\"en\">"));
    assert!(body.contains("<a class=\"brand\" href=\"/\">Bajramedia</a>"));
    assert!(body.contains("<a href=\"/\" aria-current=\"page\">Home</a>"));
    assert!(body.contains(">Portfolio</a>"));
    assert!(body.contains("Digital solutions that move your business"));
    assert!(body.contains("Dark mode"));
    assert!(body.contains("All rights reserved"));
    // Active language button is disabled, the other clickable.
    assert!(body.contains("disabled title=\"English\">EN</button>"));
    assert!(body.contains("title=\"Bahasa Indonesia\">ID</button>"));
}

#[tokio::test]
/// What: The liveness probe answers without the document shell
///
/// - Input: GET /healthz
/// - Output: Plain "ok"
async fn site_healthz_answers_plain() {
    let site = spawn_site(NO_BACKEND).await;
    let resp = site.get("/healthz").await;
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.expect("body"), "ok");
}

#[tokio::test]
/// What: Unknown routes fall through to the localized 404 page
///
/// - Input: GET /no-such-page
/// - Output: Status 404 with translated copy inside the intact shell
async fn site_unknown_route_renders_localized_not_found() {
    let site = spawn_site(NO_BACKEND).await;
    let resp = site.get("/no-such-page").await;
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    let body = resp.text().await.expect("body");
    assert!(body.contains("Page not found"));
    assert!(body.contains("Back to home"));
    assert!(body.contains("Bajramedia"), "shell must survive the 404");
    assert!(body.contains(">Portfolio</a>"));
}

#[tokio::test]
/// What: The blog listing renders fetched posts with a derived dropdown
///
/// - Input: Backend serving two published posts in distinct categories
/// - Output: Both titles on the page, both categories as options
async fn site_blog_lists_fetched_posts() {
    let backend = MockServer::start_async().await;
    backend
        .mock_async(|when, then| {
            when.method(GET).path("/api/posts");
            then.status(200).json_body(json!([
                {
                    "id": 1,
                    "title": "Tailwind at Scale",
                    "slug": "tailwind-at-scale",
                    "excerpt": "Utility classes beyond the prototype.",
                    "category": "Branding",
                    "published": true
                },
                {
                    "id": 2,
                    "title": "Rust on the Server",
                    "slug": "rust-on-the-server",
                    "category": "Web Development",
                    "published": true
                }
            ]));
        })
        .await;

    let site = spawn_site(&backend.base_url()).await;
    let body = site.get_text("/blog").await;

    assert!(body.contains("Tailwind at Scale"));
    assert!(body.contains("Rust on the Server"));
    assert!(body.contains("Utility classes beyond the prototype."));
    assert!(body.contains("<option value=\"branding\""));
    assert!(body.contains("<option value=\"web-development\""));
}

#[tokio::test]
/// What: Query parameters narrow the listing but not the dropdown
///
/// - Input: Three posts; request filtered by search text and category
/// - Output: Only the matching title rendered; every category still an
///   option, selected one marked
async fn site_blog_filter_narrows_but_keeps_all_categories() {
    let backend = MockServer::start_async().await;
    backend
        .mock_async(|when, then| {
            when.method(GET).path("/api/posts");
            then.status(200).json_body(json!([
                {"id": 1, "title": "Tailwind at Scale", "slug": "a", "category": "Branding", "published": true},
                {"id": 2, "title": "Harbor Case Study", "slug": "b", "category": "Branding", "published": true},
                {"id": 3, "title": "Rust on the Server", "slug": "c", "category": "Web Development", "published": true}
            ]));
        })
        .await;

    let site = spawn_site(&backend.base_url()).await;
    let body = site.get_text("/blog?q=tailwind&category=branding").await;

    assert!(body.contains("Tailwind at Scale"));
    assert!(!body.contains("Harbor Case Study"), "search must filter");
    assert!(!body.contains("Rust on the Server"), "category must filter");
    assert!(body.contains("<option value=\"branding\" selected>"));
    assert!(body.contains("<option value=\"web-development\""));
    assert!(body.contains("value=\"tailwind\""), "search box echoes query");
}

#[tokio::test]
/// What: A backend failure renders the error panel inside a working page
///
/// - Input: Posts endpoint answering 500
/// - Output: HTTP 200, localized error panel, retry link back to the
///   same filtered URL, navigation untouched
async fn site_blog_backend_failure_keeps_shell() {
    let backend = MockServer::start_async().await;
    backend
        .mock_async(|when, then| {
            when.method(GET).path("/api/posts");
            then.status(500);
        })
        .await;

    let site = spawn_site(&backend.base_url()).await;
    let resp = site.get("/blog?q=rust").await;
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body = resp.text().await.expect("body");
    assert!(body.contains("error-panel"));
    assert!(body.contains("Something went wrong"));
    assert!(body.contains("href=\"/blog?q=rust\">Try again</a>"));
    assert!(body.contains(">Portfolio</a>"), "navigation must survive");
}

#[tokio::test]
/// What: A missing article becomes the site's own 404
///
/// - Input: Backend 404 for the slug
/// - Output: Status 404 with the localized not-found copy
async fn site_blog_detail_missing_is_not_found() {
    let backend = MockServer::start_async().await;
    backend
        .mock_async(|when, then| {
            when.method(GET).path("/api/posts/ghost");
            then.status(404);
        })
        .await;

    let site = spawn_site(&backend.base_url()).await;
    let resp = site.get("/blog/ghost").await;
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    assert!(resp.text().await.expect("body").contains("Page not found"));
}

#[tokio::test]
/// What: Rendering an article fires exactly one view-count bump
///
/// - Input: Healthy detail endpoint plus a views endpoint
/// - Output: Article rendered; the spawned POST lands once shortly after
async fn site_blog_detail_bumps_view_count() {
    let backend = MockServer::start_async().await;
    backend
        .mock_async(|when, then| {
            when.method(GET).path("/api/posts/laravel-tips");
            then.status(200).json_body(json!({
                "id": 1,
                "title": "Laravel Tips",
                "slug": "laravel-tips",
                "content": "<p>Deep dive into queues.</p>",
                "authorName": "Ada",
                "published": true
            }));
        })
        .await;
    let views = backend
        .mock_async(|when, then| {
            when.method(POST).path("/api/posts/laravel-tips/views");
            then.status(204);
        })
        .await;

    let site = spawn_site(&backend.base_url()).await;
    let body = site.get_text("/blog/laravel-tips").await;
    assert!(body.contains("Laravel Tips"));
    assert!(body.contains("Deep dive into queues."));

    // The bump runs in a spawned task; give it a moment to land.
    let mut hits = views.hits_async().await;
    let deadline = std::time::Instant::now() + Duration::from_secs(2);
    while hits == 0 && std::time::Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(20)).await;
        hits = views.hits_async().await;
    }
    assert_eq!(hits, 1);
}

#[tokio::test]
/// What: The theme toggle flips, persists and redirects back
///
/// - Input: Two POSTs to /settings/theme with a next target
/// - Output: 303 to the target each time; dark mode persisted on, then
///   off again, and reflected in the rendered body class
async fn site_theme_toggle_persists_and_redirects() {
    let site = spawn_site(NO_BACKEND).await;

    let resp = site
        .post_form("/settings/theme", &[("next", "/blog?q=rust")])
        .await;
    assert_eq!(resp.status(), reqwest::StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/blog?q=rust");
    assert!(site.state.settings.get().dark_mode);
    assert!(site.settings_file().contains("dark_mode = true"));
    assert!(site.get_text("/").await.contains("<body class=\"dark\">"));

    let resp = site.post_form("/settings/theme", &[("next", "")]).await;
    assert_eq!(location(&resp), "/", "empty next falls back to the root");
    assert!(!site.state.settings.get().dark_mode);
    assert!(site.settings_file().contains("dark_mode = false"));
}

#[tokio::test]
/// What: Redirect targets outside the site are never honoured
///
/// - Input: Absolute and protocol-relative next values
/// - Output: Both redirects land on "/"
async fn site_prefs_redirect_rejects_external_next() {
    let site = spawn_site(NO_BACKEND).await;

    let resp = site
        .post_form("/settings/theme", &[("next", "https://evil.example")])
        .await;
    assert_eq!(location(&resp), "/");

    let resp = site
        .post_form(
            "/settings/language",
            &[("lang", "id"), ("next", "//evil.example")],
        )
        .await;
    assert_eq!(location(&resp), "/");
}

#[tokio::test]
/// What: A language switch walks both phases and ends applied
///
/// - Input: POST switching to Indonesian, then time passing
/// - Output: Transition busy right after the redirect; Indonesian active
///   and persisted once it completes; pages render in Indonesian
async fn site_language_switch_applies_after_transition() {
    let site = spawn_site(NO_BACKEND).await;
    assert_eq!(site.state.i18n.language(), Language::En);

    let resp = site
        .post_form("/settings/language", &[("lang", "id"), ("next", "/blog")])
        .await;
    assert_eq!(resp.status(), reqwest::StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/blog");
    assert!(site.state.language_changing());

    let state = site.state.clone();
    let applied = wait_until(Duration::from_secs(2), || {
        state.i18n.language() == Language::Id
    })
    .await;
    assert!(applied, "language never applied");
    let settled = wait_until(Duration::from_secs(2), || !state.language_changing()).await;
    assert!(settled, "transition never settled");

    assert!(site.settings_file().contains("language = id"));
    let body = site.get_text("/").await;
    assert!(body.contains("<html lang=\"id\">"));
    assert!(body.contains(">Beranda</a>"));
}

#[tokio::test]
/// What: An unknown language code is ignored outright
///
/// - Input: POST with lang=fr
/// - Output: Redirect only; no transition, English still active
async fn site_language_switch_ignores_unknown_code() {
    let site = spawn_site(NO_BACKEND).await;

    let resp = site
        .post_form("/settings/language", &[("lang", "fr"), ("next", "/about")])
        .await;
    assert_eq!(resp.status(), reqwest::StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/about");
    assert!(!site.state.language_changing());
    assert_eq!(site.state.i18n.language(), Language::En);
    assert!(site.settings_file().contains("language = en"));
}

#[tokio::test]
/// What: Re-selecting the active language starts nothing
///
/// - Input: POST with lang=en while English is active
/// - Output: Redirect only; the machine stays idle
async fn site_language_switch_same_code_is_noop() {
    let site = spawn_site(NO_BACKEND).await;

    let resp = site
        .post_form("/settings/language", &[("lang", "en"), ("next", "/")])
        .await;
    assert_eq!(resp.status(), reqwest::StatusCode::SEE_OTHER);
    assert!(!site.state.language_changing());
    assert_eq!(site.state.i18n.language(), Language::En);
}

#[tokio::test]
/// What: The admin portfolio table runs the full filter pipeline
///
/// - Input: Three items (mixed category and status); request filtered by
///   search, category and draft status at once
/// - Output: Only the matching draft rendered; dropdown still lists
///   every category; the create form is present
async fn site_admin_portfolio_filter_pipeline() {
    let backend = MockServer::start_async().await;
    backend
        .mock_async(|when, then| {
            when.method(GET).path("/api/admin/portfolio");
            then.status(200).json_body(json!([
                {
                    "id": 1,
                    "title": "Harbor Rebrand",
                    "slug": "harbor-rebrand",
                    "category": {"name": "Branding", "slug": "branding"},
                    "published": true
                },
                {
                    "id": 2,
                    "title": "Coastal App",
                    "slug": "coastal-app",
                    "category": "Branding",
                    "published": false
                },
                {
                    "id": 3,
                    "title": "Nusantara Site",
                    "slug": "nusantara-site",
                    "category": "Web Development",
                    "published": false
                }
            ]));
        })
        .await;

    let site = spawn_site(&backend.base_url()).await;
    let body = site
        .get_text("/admin/portfolio?q=coastal&category=branding&status=draft")
        .await;

    assert!(body.contains("Coastal App"));
    assert!(!body.contains("Harbor Rebrand"), "status must filter");
    assert!(!body.contains("Nusantara Site"), "category must filter");
    assert!(body.contains("<option value=\"branding\" selected>"));
    assert!(body.contains("<option value=\"web-development\""));
    assert!(body.contains("<option value=\"draft\" selected>"));
    assert!(body.contains("name=\"title\""), "create form present");
    assert!(body.contains("name=\"client_name\""));
}

#[tokio::test]
/// What: A rejected author fetch renders the panel instead of the table
///
/// - Input: Author listing with no backend running at all
/// - Output: Localized wrapper around the caught message; no table and
///   no create form rendered
async fn site_admin_authors_failure_renders_panel_without_table() {
    let site = spawn_site(NO_BACKEND).await;
    let resp = site.get("/admin/authors").await;
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body = resp.text().await.expect("body");
    assert!(body.contains("error-panel"));
    assert!(body.contains("We could not load this content:"));
    assert!(body.contains("href=\"/admin/authors\">Try again</a>"));
    assert!(!body.contains("<table>"), "no author table on failure");
    assert!(!body.contains("name=\"name\""), "no create form on failure");
}

#[tokio::test]
/// What: Creating an author posts the trimmed payload and redirects
///
/// - Input: Form values padded with whitespace
/// - Output: One backend POST with trimmed name and email; 303 back to
///   the author table
async fn site_admin_create_author_trims_and_posts() {
    let backend = MockServer::start_async().await;
    let create = backend
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/admin/authors")
                .json_body(json!({"name": "Ada", "email": "ada@example.com"}));
            then.status(201).json_body(json!({"id": 5}));
        })
        .await;

    let site = spawn_site(&backend.base_url()).await;
    let resp = site
        .post_form(
            "/admin/authors",
            &[("name", "  Ada  "), ("email", " ada@example.com ")],
        )
        .await;

    assert_eq!(resp.status(), reqwest::StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/authors");
    create.assert_async().await;
}

#[tokio::test]
/// What: An empty author name never reaches the backend
///
/// - Input: Form with a whitespace-only name
/// - Output: Redirect as usual, zero backend calls
async fn site_admin_create_author_empty_name_skips_backend() {
    let backend = MockServer::start_async().await;
    let create = backend
        .mock_async(|when, then| {
            when.method(POST).path("/api/admin/authors");
            then.status(201);
        })
        .await;

    let site = spawn_site(&backend.base_url()).await;
    let resp = site
        .post_form("/admin/authors", &[("name", "   "), ("email", "x@y.z")])
        .await;

    assert_eq!(resp.status(), reqwest::StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/authors");
    assert_eq!(create.hits_async().await, 0);
}

#[tokio::test]
/// What: The publish toggle forwards the desired flag
///
/// - Input: POST to the publish route with publish=true
/// - Output: One backend PUT with `{"published": true}`, then the
///   redirect back to the table
async fn site_admin_publish_toggle_sends_flag() {
    let backend = MockServer::start_async().await;
    let publish = backend
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/admin/portfolio/9")
                .json_body(json!({"published": true}));
            then.status(200);
        })
        .await;

    let site = spawn_site(&backend.base_url()).await;
    let resp = site
        .post_form("/admin/portfolio/9/publish", &[("publish", "true")])
        .await;

    assert_eq!(resp.status(), reqwest::StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/portfolio");
    publish.assert_async().await;
}
