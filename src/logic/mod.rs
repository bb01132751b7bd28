//! Interaction logic for the result store: wholesale replacement, in-place
//! sorting, sort-key changes, and selection movement.

mod query;
mod sort;

pub use query::{apply_fetching_presentation, apply_sort_presentation, submit_query};
pub use sort::sort_results_preserve_selection;

use crate::state::{AppState, SortKey, ThemeRecord};

/// What: Replace the held result set wholesale with a freshly fetched one.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `items`: New records in service order.
///
/// Output: none (mutates results and selection).
///
/// Details:
/// - The incoming order is the service-assigned relevance order. When a
///   non-relevance sort key is already active, the new set is reordered
///   under that key before it is considered current.
/// - Nothing else is reset; sort key and view mode survive the replacement.
pub fn replace_results(app: &mut AppState, items: Vec<ThemeRecord>) {
    app.results = items;
    app.select(0);
    if app.sort_key != SortKey::Relevance {
        sort_results_preserve_selection(app);
        app.select(0);
    }
}

/// What: Change the sort key and reorder the current set in place.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `key`: New sort key.
///
/// Output: none. Never triggers a fetch and never touches the fetch state.
pub fn set_sort_key(app: &mut AppState, key: SortKey) {
    app.sort_key = key;
    sort_results_preserve_selection(app);
    apply_sort_presentation(app);
}

/// Advance to the next sort key in the fixed cycle.
pub fn cycle_sort_key(app: &mut AppState) {
    set_sort_key(app, app.sort_key.next());
}

/// What: Move the selection by a signed delta, clamped to the result set.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `delta`: Rows to move; negative moves up.
///
/// Output: none (mutates selection).
pub fn move_selection(app: &mut AppState, delta: i64) {
    if app.results.is_empty() {
        return;
    }
    let cur = i64::try_from(app.selected).unwrap_or(0);
    let max = i64::try_from(app.results.len() - 1).unwrap_or(0);
    let next = (cur + delta).clamp(0, max);
    app.select(usize::try_from(next).unwrap_or(0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ViewMode;

    fn theme(slug: &str, downloads: Option<u64>) -> ThemeRecord {
        ThemeRecord {
            slug: slug.to_string(),
            name: slug.to_uppercase(),
            version: "1.0".to_string(),
            last_updated: String::new(),
            last_updated_ts: None,
            active_installs: None,
            downloads,
            rating: None,
            num_ratings: None,
            screenshot_url: String::new(),
        }
    }

    #[test]
    /// What: Replacement under an active non-relevance key re-sorts immediately
    ///
    /// - Input: Downloads key active; replace with unsorted records
    /// - Output: New set is current in downloads order
    fn logic_replace_resorts_under_active_key() {
        let mut app = AppState {
            sort_key: SortKey::Downloads,
            ..Default::default()
        };
        replace_results(
            &mut app,
            vec![theme("low", Some(3)), theme("high", Some(15_000)), theme("mid", Some(500))],
        );
        let slugs: Vec<&str> = app.results.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, vec!["high", "mid", "low"]);
        assert_eq!(app.selected, 0);
    }

    #[test]
    /// What: Replacement under relevance keeps service order verbatim
    ///
    /// - Input: Relevance key active; replace with records in service order
    /// - Output: Order unchanged
    fn logic_replace_keeps_service_order_for_relevance() {
        let mut app = AppState::default();
        replace_results(
            &mut app,
            vec![theme("b", Some(1)), theme("a", Some(2)), theme("c", None)],
        );
        let slugs: Vec<&str> = app.results.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a", "c"]);
    }

    #[test]
    /// What: Sort-key change reorders in place without touching view or fetch state
    ///
    /// - Input: Held set; set key to Downloads
    /// - Output: Reordered set, same contents, view mode untouched
    fn logic_set_sort_key_is_pure_store_operation() {
        let mut app = AppState {
            view_mode: ViewMode::Grid,
            ..Default::default()
        };
        replace_results(&mut app, vec![theme("a", Some(1)), theme("b", Some(9))]);
        let state_before = app.fetch_state;
        set_sort_key(&mut app, SortKey::Downloads);
        assert_eq!(app.results[0].slug, "b");
        assert_eq!(app.view_mode, ViewMode::Grid);
        assert_eq!(app.fetch_state, state_before);
        assert_eq!(app.results.len(), 2);
    }

    #[test]
    /// What: Selection movement clamps at both ends
    ///
    /// - Input: Three rows; move far up and far down
    /// - Output: Clamped to first and last rows
    fn logic_move_selection_clamps() {
        let mut app = AppState::default();
        replace_results(
            &mut app,
            vec![theme("a", None), theme("b", None), theme("c", None)],
        );
        move_selection(&mut app, -5);
        assert_eq!(app.selected, 0);
        move_selection(&mut app, 10);
        assert_eq!(app.selected, 2);
        move_selection(&mut app, -1);
        assert_eq!(app.selected, 1);
    }
}
