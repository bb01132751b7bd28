//! Owned application state for the themedex TUI.
//!
//! All mutable runtime state lives in [`AppState`] and is owned by the event
//! loop; there are no ambient globals. Background workers communicate
//! exclusively through channels and never touch this struct directly.

use std::collections::HashMap;

use ratatui::widgets::ListState;

use super::types::{FetchState, Modal, PreviewState, SortKey, StatusTone, ThemeRecord, ViewMode};

/// Central application state driving every frame.
pub struct AppState {
    /// Current contents of the search input.
    pub input: String,
    /// The held result set in its currently sorted order.
    pub results: Vec<ThemeRecord>,
    /// Index of the selected row/card within `results`.
    pub selected: usize,
    /// ratatui list scroll/selection state for the list layout.
    pub list_state: ListState,
    /// Active sort key; changing it re-sorts `results` in place.
    pub sort_key: SortKey,
    /// Active layout; switching never mutates `results`.
    pub view_mode: ViewMode,
    /// Lifecycle state of the current/most recent fetch.
    pub fetch_state: FetchState,
    /// Monotonic id of the most recently issued query.
    pub latest_query_id: u64,
    /// Trimmed query text of the most recently issued fetch; empty means browse.
    pub last_query: String,
    /// Title shown over the results block.
    pub results_title: String,
    /// Status text drawn on the results block's bottom border.
    pub status_text: String,
    /// Tone (normal/error) of the status text.
    pub status_tone: StatusTone,
    /// Modal overlay, if any.
    pub modal: Modal,
    /// Whether the dark palette is active.
    pub dark_mode: bool,
    /// Per-slug outcome of preview URL resolution.
    pub preview_urls: HashMap<String, PreviewState>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            results: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            sort_key: SortKey::Relevance,
            view_mode: ViewMode::List,
            fetch_state: FetchState::Idle,
            latest_query_id: 0,
            last_query: String::new(),
            results_title: "Popular Themes".to_string(),
            status_text: "Top rated themes".to_string(),
            status_tone: StatusTone::Info,
            modal: Modal::None,
            dark_mode: true,
            preview_urls: HashMap::new(),
        }
    }
}

impl AppState {
    /// What: Borrow the result set in its current sorted order.
    ///
    /// Inputs: none
    ///
    /// Output: Slice over the held records; empty before the first successful fetch.
    #[must_use]
    pub fn current(&self) -> &[ThemeRecord] {
        &self.results
    }

    /// The selected record, when the set is non-empty.
    #[must_use]
    pub fn selected_theme(&self) -> Option<&ThemeRecord> {
        self.results.get(self.selected)
    }

    /// What: Move selection to `index`, clamped to the result set, and sync the list widget.
    ///
    /// Inputs:
    /// - `index`: Target position; clamped to the last row when out of range.
    ///
    /// Output: none (mutates `selected` and `list_state`).
    pub fn select(&mut self, index: usize) {
        if self.results.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
            return;
        }
        self.selected = index.min(self.results.len() - 1);
        self.list_state.select(Some(self.selected));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slug: &str) -> ThemeRecord {
        ThemeRecord {
            slug: slug.to_string(),
            name: slug.to_uppercase(),
            version: "1.0".to_string(),
            last_updated: String::new(),
            last_updated_ts: None,
            active_installs: None,
            downloads: None,
            rating: None,
            num_ratings: None,
            screenshot_url: String::new(),
        }
    }

    #[test]
    /// What: Selection clamps to the result set and clears when empty
    ///
    /// - Input: Two records; select far out of range, then empty the set
    /// - Output: Clamped to the last row; `None` selection once empty
    fn app_state_select_clamps_and_clears() {
        let mut app = AppState {
            results: vec![record("a"), record("b")],
            ..Default::default()
        };
        app.select(99);
        assert_eq!(app.selected, 1);
        assert_eq!(app.list_state.selected(), Some(1));

        app.results.clear();
        app.select(0);
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    /// What: Defaults present the browse title before any fetch
    ///
    /// - Input: `AppState::default()`
    /// - Output: Popular Themes title, info tone, idle fetch state
    fn app_state_defaults() {
        let app = AppState::default();
        assert_eq!(app.results_title, "Popular Themes");
        assert_eq!(app.fetch_state, FetchState::Idle);
        assert_eq!(app.status_tone, StatusTone::Info);
        assert!(app.current().is_empty());
        assert!(app.selected_theme().is_none());
    }
}
