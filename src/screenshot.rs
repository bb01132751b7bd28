//! Preview image URL derivation and the deterministic fallback chain.
//!
//! The chain is decided purely from the URL's last path segment: the PNG
//! candidate degrades to a JPEG candidate with the same slug/version, the
//! JPEG degrades to a generic placeholder, and the placeholder has no
//! further fallback. Load failures past that point are swallowed.

/// Placeholder image used after both screenshot candidates fail.
pub const PLACEHOLDER_URL: &str = "https://placehold.co/600x450?text=No+Image";

/// Version used when the catalog did not report one.
const DEFAULT_VERSION: &str = "1.0";

/// What: Build the primary (PNG) preview candidate for a theme.
///
/// Inputs:
/// - `slug`: Theme identifier.
/// - `version_hint`: Version string; empty falls back to `1.0`.
///
/// Output:
/// - Deterministic screenshot URL on the theme file server.
#[must_use]
pub fn primary_url(slug: &str, version_hint: &str) -> String {
    let v = if version_hint.trim().is_empty() {
        DEFAULT_VERSION
    } else {
        version_hint.trim()
    };
    format!("https://i0.wp.com/themes.svn.wordpress.org/{slug}/{v}/screenshot.png?w=600&strip=all")
}

/// Last path segment of a URL, with query string and fragment stripped.
fn last_segment(url: &str) -> &str {
    let no_query = url.split(['?', '#']).next().unwrap_or(url);
    no_query.rsplit('/').next().unwrap_or(no_query)
}

/// What: Next URL in the fallback chain after `current` failed to load.
///
/// Inputs:
/// - `current`: URL whose load failed.
///
/// Output:
/// - `Some(next)` for the PNG → JPEG and JPEG → placeholder steps; `None`
///   once the chain is exhausted.
///
/// Details:
/// - The JPEG candidate keeps the identifier/version path and the query
///   string of the PNG candidate, only the extension changes.
#[must_use]
pub fn next_fallback(current: &str) -> Option<String> {
    match last_segment(current) {
        "screenshot.png" => {
            let (path, rest) = match current.split_once('?') {
                Some((p, q)) => (p, Some(q)),
                None => (current, None),
            };
            let jpg = path.strip_suffix("screenshot.png")?;
            let mut next = format!("{jpg}screenshot.jpg");
            if let Some(q) = rest {
                next.push('?');
                next.push_str(q);
            }
            Some(next)
        }
        "screenshot.jpg" => Some(PLACEHOLDER_URL.to_string()),
        _ => None,
    }
}

/// What: Walk the fallback chain with live status probes for one theme.
///
/// Inputs:
/// - `slug`: Theme identifier (echoed back for correlation).
/// - `version`: Version hint for the primary candidate.
///
/// Output:
/// - `(slug, url)` where `url` is the first candidate that answered with a
///   success status, or the end of the chain when none did.
///
/// Details:
/// - Probe failures are local to this function; they never surface to the
///   status region. An unreachable placeholder ends the walk with the
///   placeholder itself, there is nothing further to substitute.
pub async fn resolve_preview(slug: String, version: String) -> (String, String) {
    let mut candidate = primary_url(&slug, &version);
    loop {
        if probe(&candidate).await {
            tracing::debug!(slug = %slug, url = %candidate, "preview candidate accepted");
            return (slug, candidate);
        }
        match next_fallback(&candidate) {
            Some(next) => {
                tracing::debug!(slug = %slug, failed = %candidate, "preview candidate failed; degrading");
                candidate = next;
            }
            None => return (slug, candidate),
        }
    }
}

/// HEAD-probe a candidate; any transport error counts as a failed load.
async fn probe(url: &str) -> bool {
    match crate::catalog::http_client().head(url).send().await {
        Ok(resp) => resp.status().is_success(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Primary URL embeds slug and version, defaulting the version
    ///
    /// - Input: Slug with explicit version; slug with empty version
    /// - Output: PNG candidate path with `1.0` default
    fn screenshot_primary_url_shape() {
        assert_eq!(
            primary_url("astra", "4.6.2"),
            "https://i0.wp.com/themes.svn.wordpress.org/astra/4.6.2/screenshot.png?w=600&strip=all"
        );
        assert!(primary_url("neve", "").contains("/neve/1.0/screenshot.png"));
        assert!(primary_url("neve", "  ").contains("/neve/1.0/screenshot.png"));
    }

    #[test]
    /// What: The chain degrades PNG → JPEG → placeholder → nothing
    ///
    /// - Input: Each stage's URL in turn
    /// - Output: JPEG keeps the slug/version segment and query; placeholder is
    ///   terminal
    fn screenshot_fallback_chain() {
        let png = primary_url("astra", "4.6.2");
        let jpg = next_fallback(&png).expect("png degrades to jpg");
        assert!(jpg.contains("/astra/4.6.2/screenshot.jpg"));
        assert!(jpg.ends_with("?w=600&strip=all"));

        let placeholder = next_fallback(&jpg).expect("jpg degrades to placeholder");
        assert_eq!(placeholder, PLACEHOLDER_URL);

        assert_eq!(next_fallback(&placeholder), None);
    }

    #[test]
    /// What: Degradation keys off the last path segment only
    ///
    /// - Input: JPEG URL without query string; unrelated image URL
    /// - Output: Placeholder for the JPEG; no fallback for unknown segments
    fn screenshot_fallback_ignores_unknown_segments() {
        assert_eq!(
            next_fallback("https://example.org/a/b/screenshot.jpg"),
            Some(PLACEHOLDER_URL.to_string())
        );
        assert_eq!(next_fallback("https://example.org/a/b/banner.png"), None);
        assert_eq!(next_fallback(""), None);
    }
}
