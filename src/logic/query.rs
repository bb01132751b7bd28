use tokio::sync::mpsc;

use crate::state::{AppState, FetchState, QueryInput, SortKey, StatusTone};

/// What: Submit the current input as a fetch intent, unless one is in flight.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `query_tx`: Channel to the background fetch worker.
///
/// Output:
/// - `true` when a fetch was issued; `false` when the intent was dropped.
///
/// Details:
/// - Intents arriving while `Fetching` are dropped entirely, not queued;
///   at most one request is ever outstanding.
/// - The query text is trimmed first, so a whitespace-only input is a browse.
pub fn submit_query(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) -> bool {
    if app.fetch_state == FetchState::Fetching {
        tracing::debug!("query ignored: fetch already in flight");
        return false;
    }
    let text = app.input.trim().to_string();
    app.latest_query_id += 1;
    app.last_query = text.clone();
    app.fetch_state = FetchState::Fetching;
    apply_fetching_presentation(app);
    tracing::info!(id = app.latest_query_id, query = %text, "issuing catalog fetch");
    let _ = query_tx.send(QueryInput {
        id: app.latest_query_id,
        text,
    });
    true
}

/// What: Set the title/status texts shown while a fetch is in flight.
///
/// Inputs:
/// - `app`: Mutable application state; reads `last_query`.
///
/// Output: none (mutates title, status text, and tone).
pub fn apply_fetching_presentation(app: &mut AppState) {
    if app.last_query.is_empty() {
        app.results_title = "Popular Themes".to_string();
        app.status_text = "Top rated themes".to_string();
    } else {
        app.results_title = format!("Results for \"{}\"", app.last_query);
        app.status_text = "Searching directory...".to_string();
    }
    app.status_tone = StatusTone::Info;
}

/// What: Retitle the results pane after a sort change while browsing.
///
/// Inputs:
/// - `app`: Mutable application state; reads `last_query` and `sort_key`.
///
/// Output: none (mutates title and status text when browsing; a search
/// keeps its "Results for" title regardless of sort).
pub fn apply_sort_presentation(app: &mut AppState) {
    if !app.last_query.is_empty() {
        return;
    }
    let (title, status) = match app.sort_key {
        SortKey::Relevance => ("Popular Themes", "Top rated themes"),
        SortKey::Installs => ("Most Popular Themes", "Ordered by active installations"),
        SortKey::Recency => ("Latest Themes", "Ordered by most recently updated"),
        SortKey::Downloads => ("Most Downloaded Themes", "Ordered by total downloads"),
    };
    app.results_title = title.to_string();
    app.status_text = status.to_string();
    app.status_tone = StatusTone::Info;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Submitting while fetching is dropped with no state change
    ///
    /// - Input: First submit, then a second submit during `Fetching`
    /// - Output: Only one query on the channel; id and state untouched by the second
    fn query_gate_drops_overlapping_intents() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState {
            input: "portfolio".to_string(),
            ..Default::default()
        };
        assert!(submit_query(&mut app, &tx));
        assert_eq!(app.fetch_state, FetchState::Fetching);
        assert_eq!(app.latest_query_id, 1);

        app.input = "another".to_string();
        assert!(!submit_query(&mut app, &tx));
        assert_eq!(app.latest_query_id, 1);
        assert_eq!(app.last_query, "portfolio");

        let first = rx.try_recv().expect("first query sent");
        assert_eq!(first.id, 1);
        assert_eq!(first.text, "portfolio");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Whitespace-only input is treated as a browse intent
    ///
    /// - Input: Input of spaces
    /// - Output: Empty query text, browse title and status
    fn query_whitespace_is_browse() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState {
            input: "   ".to_string(),
            ..Default::default()
        };
        assert!(submit_query(&mut app, &tx));
        let q = rx.try_recv().expect("query sent");
        assert!(q.text.is_empty());
        assert_eq!(app.results_title, "Popular Themes");
        assert_eq!(app.status_text, "Top rated themes");
    }

    #[test]
    /// What: Fetching presentation reflects browse vs. search intent
    ///
    /// - Input: Search text "portfolio"
    /// - Output: Literal query in the title, searching status, info tone
    fn query_fetching_presentation_search() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = AppState {
            input: " portfolio ".to_string(),
            status_tone: StatusTone::Error,
            ..Default::default()
        };
        submit_query(&mut app, &tx);
        assert_eq!(app.results_title, "Results for \"portfolio\"");
        assert_eq!(app.status_text, "Searching directory...");
        assert_eq!(app.status_tone, StatusTone::Info);
    }

    #[test]
    /// What: Sort retitle applies while browsing only
    ///
    /// - Input: Browse state cycling sort keys; then a search state
    /// - Output: Title/status follow the key when browsing; untouched for search
    fn query_sort_presentation() {
        let mut app = AppState {
            sort_key: SortKey::Downloads,
            ..Default::default()
        };
        apply_sort_presentation(&mut app);
        assert_eq!(app.results_title, "Most Downloaded Themes");
        assert_eq!(app.status_text, "Ordered by total downloads");

        app.last_query = "portfolio".to_string();
        app.results_title = "Results for \"portfolio\"".to_string();
        apply_sort_presentation(&mut app);
        assert_eq!(app.results_title, "Results for \"portfolio\"");
    }
}
