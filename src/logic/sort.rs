use crate::state::{AppState, SortKey};

/// What: Apply the currently selected sort key to `app.results` in-place.
///
/// Inputs:
/// - `app`: Mutable application state (results, selected, sort_key)
///
/// Output:
/// - Sorts `app.results` and preserves selection by slug when possible; otherwise clamps index.
///
/// Details:
/// - `Relevance` leaves the service-assigned order untouched.
/// - All other keys sort descending on their numeric field, treating an
///   absent value as zero. The sort is stable, so ties keep their relative
///   order from before the sort and the service order remains the tiebreak.
pub fn sort_results_preserve_selection(app: &mut AppState) {
    if app.results.is_empty() {
        return;
    }
    let prev_slug = app.results.get(app.selected).map(|t| t.slug.clone());
    match app.sort_key {
        SortKey::Relevance => {}
        SortKey::Installs => {
            app.results
                .sort_by(|a, b| b.active_installs.unwrap_or(0).cmp(&a.active_installs.unwrap_or(0)));
        }
        SortKey::Recency => {
            app.results
                .sort_by(|a, b| b.last_updated_ts.unwrap_or(0).cmp(&a.last_updated_ts.unwrap_or(0)));
        }
        SortKey::Downloads => {
            app.results
                .sort_by(|a, b| b.downloads.unwrap_or(0).cmp(&a.downloads.unwrap_or(0)));
        }
    }
    if let Some(slug) = prev_slug {
        if let Some(pos) = app.results.iter().position(|t| t.slug == slug) {
            app.select(pos);
        } else {
            app.select(app.selected);
        }
    }
}
