//! REST retrieval from the CMS backend, split into per-resource modules.
//!
//! Every fetch is a plain `GET`/`POST` against the backend's JSON API.
//! List endpoints have drifted historically between returning a bare
//! array and an object wrapping the array under a named field;
//! [`list_from_value`] absorbs that so resource modules stay oblivious.

use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod authors;
pub mod portfolio;
pub mod posts;
pub mod team;
pub mod technologies;

/// Result alias for backend calls.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// HTTP client bound to the backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    /// What: Build a client for the given backend base URL.
    ///
    /// Inputs:
    /// - `base`: Backend origin, e.g. `http://127.0.0.1:3001`
    ///
    /// Output:
    /// - Ready client with a site user agent; trailing slashes on the
    ///   base are tolerated.
    #[must_use]
    pub fn new(base: &str) -> Self {
        let http = match reqwest::Client::builder()
            .user_agent(concat!("bajraweb/", env!("CARGO_PKG_VERSION")))
            .build()
        {
            Ok(client) => client,
            Err(err) => {
                tracing::warn!(error = %err, "custom HTTP client rejected; using defaults");
                reqwest::Client::new()
            }
        };
        Self {
            http,
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Backend base URL this client talks to.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// What: GET a JSON document.
    ///
    /// Inputs:
    /// - `path`: Absolute API path, e.g. `/api/posts`
    ///
    /// Output:
    /// - Parsed body on 2xx; an error naming the path and status code
    ///   otherwise.
    ///
    /// # Errors
    /// - Network failures, non-2xx statuses, and unparseable bodies.
    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let resp = self.http.get(self.url(path)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("GET {path} failed: {status}").into());
        }
        Ok(resp.json::<Value>().await?)
    }

    /// What: GET a JSON document, mapping 404 to `None`.
    ///
    /// Inputs:
    /// - `path`: Absolute API path for a single record
    ///
    /// Output:
    /// - `Ok(None)` on 404 so detail pages can render a proper not-found
    ///   screen; otherwise as [`Self::get_json`].
    ///
    /// # Errors
    /// - Same as [`Self::get_json`], except 404.
    pub async fn get_json_opt(&self, path: &str) -> Result<Option<Value>> {
        let resp = self.http.get(self.url(path)).send().await?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(format!("GET {path} failed: {status}").into());
        }
        Ok(Some(resp.json::<Value>().await?))
    }

    /// What: POST a JSON body.
    ///
    /// Inputs:
    /// - `path`: Absolute API path
    /// - `body`: JSON payload
    ///
    /// Output:
    /// - Response body as JSON when present, `Value::Null` for empty
    ///   2xx responses.
    ///
    /// # Errors
    /// - Network failures and non-2xx statuses.
    pub async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(format!("POST {path} failed: {status}").into());
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
    }

    /// What: PUT a JSON body, discarding the response payload.
    ///
    /// # Errors
    /// - Network failures and non-2xx statuses.
    pub async fn put_json(&self, path: &str, body: &Value) -> Result<()> {
        let resp = self.http.put(self.url(path)).json(body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("PUT {path} failed: {status}").into());
        }
        Ok(())
    }

    /// What: DELETE a resource.
    ///
    /// # Errors
    /// - Network failures and non-2xx statuses.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let resp = self.http.delete(self.url(path)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("DELETE {path} failed: {status}").into());
        }
        Ok(())
    }
}

/// What: Extract a typed list from a list-endpoint response body.
///
/// Inputs:
/// - `value`: Response body, either a bare array or an object wrapping
///   the array under `field`
/// - `field`: Field name used by the wrapped shape
///
/// Output:
/// - Deserialized items; an error when neither shape applies.
///
/// # Errors
/// - Returns `Err` when the body is not a list in either accepted shape,
///   or the items fail to deserialize.
pub fn list_from_value<T: DeserializeOwned>(value: Value, field: &str) -> Result<Vec<T>> {
    let candidate = if let Value::Object(map) = &value {
        map.get(field).cloned()
    } else {
        None
    };
    let list = candidate.unwrap_or(value);
    serde_json::from_value::<Vec<T>>(list)
        .map_err(|e| format!("unexpected {field} list payload: {e}").into())
}
