//! State-transition handlers invoked by the event loop.

use tokio::sync::mpsc;

use crate::state::{AppState, FetchOutcome, FetchState, Modal, PreviewState, StatusTone};

/// What: Apply a fetch outcome to the application state.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `outcome`: Result correlated with the query that produced it.
/// - `preview_req_tx`: Channel for requesting the selected theme's preview.
///
/// Output: none.
///
/// Details:
/// - Outcomes whose id does not match the latest issued query are dropped.
/// - Success replaces the result set wholesale (re-sorted when a
///   non-relevance key is active) and restores the browse title for the
///   active sort key.
/// - Failure keeps the previous result set and sort order untouched; only
///   the status text (error tone) and an alert modal surface the message.
pub fn handle_fetch_outcome(
    app: &mut AppState,
    outcome: FetchOutcome,
    preview_req_tx: &mpsc::UnboundedSender<(String, String)>,
) {
    if outcome.id != app.latest_query_id {
        tracing::debug!(
            id = outcome.id,
            latest = app.latest_query_id,
            "stale fetch outcome dropped"
        );
        return;
    }
    match outcome.result {
        Ok(items) => {
            tracing::info!(id = outcome.id, count = items.len(), "catalog fetch succeeded");
            if items.is_empty() {
                tracing::warn!(id = outcome.id, "catalog returned an empty result set");
            }
            app.fetch_state = FetchState::Succeeded;
            crate::logic::replace_results(app, items);
            crate::logic::apply_sort_presentation(app);
            request_preview(app, preview_req_tx);
        }
        Err(err) => {
            let message = err.to_string();
            tracing::error!(id = outcome.id, error = %message, "catalog fetch failed");
            app.fetch_state = FetchState::Failed;
            app.status_text = format!("Error: {message}");
            app.status_tone = StatusTone::Error;
            app.modal = Modal::Alert {
                message: format!("Failed to fetch themes: {message}"),
            };
        }
    }
}

/// What: Flip the active layout between list and grid.
///
/// Inputs:
/// - `app`: Mutable application state.
///
/// Output: none. Pure presentation transition; the result set, its order,
/// and the fetch state are untouched. While a fetch is in flight the toggle
/// only updates bookkeeping, the visible body stays the loading indicator
/// until the fetch completes.
pub fn handle_view_toggle(app: &mut AppState) {
    app.view_mode = app.view_mode.toggled();
    tracing::debug!(view = app.view_mode.as_config_key(), "view toggled");
}

/// Record a resolved preview URL for a slug.
pub fn handle_preview_resolved(app: &mut AppState, slug: String, url: String) {
    app.preview_urls.insert(slug, PreviewState::Resolved(url));
}

/// What: Request preview resolution for the selected theme, once per slug.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `preview_req_tx`: Channel to the preview worker.
///
/// Output: none. Slugs already resolving or resolved are not re-probed.
pub fn request_preview(
    app: &mut AppState,
    preview_req_tx: &mpsc::UnboundedSender<(String, String)>,
) {
    let Some((slug, version)) = app
        .selected_theme()
        .map(|t| (t.slug.clone(), t.version.clone()))
    else {
        return;
    };
    if app.preview_urls.contains_key(&slug) {
        return;
    }
    app.preview_urls.insert(slug.clone(), PreviewState::Resolving);
    let _ = preview_req_tx.send((slug, version));
}
