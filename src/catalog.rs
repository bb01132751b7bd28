//! Catalog client for the WordPress.org theme directory API.
//!
//! One query is issued per call; the runtime's fetching gate guarantees the
//! next call only starts after the previous one resolved, so there is never
//! more than one request in flight.

use std::collections::HashSet;
use std::sync::LazyLock;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::state::{QueryInput, ThemeRecord};
use crate::util::{f64_of, parse_last_updated, percent_encode, s, u64_of};

/// Base endpoint of the theme directory query API.
pub const API_URL: &str = "https://api.wordpress.org/themes/info/1.2/";

/// Fixed page size requested for both browse and search.
pub const PAGE_SIZE: usize = 60;

/// Fields projected into every query; the catalog omits unlisted fields.
const FIELDS: [&str; 9] = [
    "active_installs",
    "downloaded",
    "slug",
    "name",
    "last_updated",
    "screenshot_url",
    "version",
    "rating",
    "num_ratings",
];

/// Failure reported by a catalog fetch; both kinds surface identically.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Non-success response status or a network-level failure.
    #[error("catalog unreachable: {0}")]
    Transport(String),
    /// Body did not parse or decode as expected.
    #[error("catalog response malformed: {0}")]
    Malformed(String),
}

/// Shared HTTP client with connection pooling for catalog and preview probes.
/// Connection pooling is enabled by default in `reqwest::Client`.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(format!("themedex/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// Shared client accessor for other modules issuing requests.
pub(crate) fn http_client() -> &'static reqwest::Client {
    &HTTP_CLIENT
}

/// What: Build the full query URL for a browse or search intent.
///
/// Inputs:
/// - `text`: Raw query text; trimmed emptiness selects browse-popular.
///
/// Output:
/// - Complete URL with `action=query_themes`, page 1, fixed page size, the
///   browse/search selector, and the fixed field projection.
#[must_use]
pub fn build_query_url(text: &str) -> String {
    let trimmed = text.trim();
    let mut params: Vec<(String, String)> = vec![
        ("action".to_string(), "query_themes".to_string()),
        ("request[page]".to_string(), "1".to_string()),
        ("request[per_page]".to_string(), PAGE_SIZE.to_string()),
    ];
    if trimmed.is_empty() {
        params.push(("request[browse]".to_string(), "popular".to_string()));
    } else {
        params.push(("request[search]".to_string(), trimmed.to_string()));
    }
    for field in FIELDS {
        params.push((format!("request[fields][{field}]"), "true".to_string()));
    }
    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect();
    format!("{API_URL}?{}", query.join("&"))
}

/// What: Fetch one page of themes for the given intent.
///
/// Inputs:
/// - `query`: Intent carrying the (already trimmed) query text and its id.
///
/// Output:
/// - Records in service order on success; [`CatalogError`] on transport or
///   decode failure. A well-formed body without the list field is an empty
///   result, not an error.
///
/// # Errors
/// - [`CatalogError::Transport`] on network failure or non-success status.
/// - [`CatalogError::Malformed`] when the body is not valid JSON.
pub async fn fetch_themes(query: &QueryInput) -> Result<Vec<ThemeRecord>, CatalogError> {
    let url = build_query_url(&query.text);
    tracing::debug!(id = query.id, url = %url, "requesting theme catalog");
    let resp = http_client()
        .get(&url)
        .send()
        .await
        .map_err(|e| CatalogError::Transport(e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(CatalogError::Transport(format!("HTTP status {status}")));
    }
    let body: Value = resp
        .json()
        .await
        .map_err(|e| CatalogError::Malformed(e.to_string()))?;
    Ok(parse_theme_list(&body))
}

/// What: Normalize the response body into theme records.
///
/// Inputs:
/// - `body`: Parsed JSON response.
///
/// Output:
/// - Records in service order; empty when the `themes` list field is absent.
///
/// Details:
/// - Entries without a slug are skipped; duplicate slugs keep the first
///   occurrence so identifiers stay unique within the set.
#[must_use]
pub fn parse_theme_list(body: &Value) -> Vec<ThemeRecord> {
    let Some(arr) = body.get("themes").and_then(Value::as_array) else {
        tracing::warn!("catalog response has no themes field; treating as empty result");
        return Vec::new();
    };
    let mut items: Vec<ThemeRecord> = Vec::new();
    for entry in arr.iter().take(PAGE_SIZE) {
        let slug = s(entry, "slug");
        if slug.is_empty() {
            continue;
        }
        let last_updated = s(entry, "last_updated");
        items.push(ThemeRecord {
            slug,
            name: s(entry, "name"),
            version: s(entry, "version"),
            last_updated_ts: parse_last_updated(&last_updated),
            last_updated,
            active_installs: u64_of(entry, &["active_installs"]),
            downloads: u64_of(entry, &["downloaded"]),
            rating: f64_of(entry, &["rating"]),
            num_ratings: u64_of(entry, &["num_ratings"]),
            screenshot_url: s(entry, "screenshot_url"),
        });
    }
    let mut seen = HashSet::new();
    items.retain(|t| seen.insert(t.slug.clone()));
    items
}
