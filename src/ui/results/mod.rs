//! Results block: title spans, body (loading / empty / list / grid), and the
//! status line on the bottom border.

use ratatui::{
    Frame,
    layout::Alignment,
    prelude::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, FetchState, ViewMode};
use crate::theme::Theme;

mod grid;
mod list;
mod status;
mod title;

pub use title::count_label;

/// What: Render the results block with whichever body the state calls for.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state
/// - `area`: Target rectangle for the results block
/// - `th`: Active theme
///
/// Output:
/// - Draws the titled block, then exactly one body: the loading indicator
///   while fetching, the empty-state indicator for a held empty set, or the
///   layout matching the active view mode. The status label lands on the
///   bottom border last.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let title_spans = title::build_title_spans(app, th);
    let block = Block::default()
        .title(Line::from(title_spans))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2))
        .style(Style::default().bg(th.base));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.fetch_state == FetchState::Fetching {
        render_loading(f, inner, th);
    } else if app.results.is_empty() {
        render_empty_state(f, inner, th);
    } else {
        match app.view_mode {
            ViewMode::List => list::render_list(f, app, inner, th),
            ViewMode::Grid => grid::render_grid(f, app, inner, th),
        }
    }

    status::render_status(f, app, area, th);
}

/// Centered loading indicator shown while a fetch is in flight.
fn render_loading(f: &mut Frame, area: Rect, th: &Theme) {
    let body = Paragraph::new(vec![
        Line::raw(""),
        Line::styled(
            "Loading themes...",
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        ),
    ])
    .alignment(Alignment::Center);
    f.render_widget(body, area);
}

/// Centered empty-state indicator for a held empty result set.
fn render_empty_state(f: &mut Frame, area: Rect, th: &Theme) {
    let body = Paragraph::new(vec![
        Line::raw(""),
        Line::styled(
            "No themes found",
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Try a different search term.",
            Style::default().fg(th.subtext0),
        ),
    ])
    .alignment(Alignment::Center);
    f.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ThemeRecord;
    use ratatui::{Terminal, backend::TestBackend};

    fn theme(slug: &str, installs: Option<u64>) -> ThemeRecord {
        ThemeRecord {
            slug: slug.to_string(),
            name: format!("The {slug} theme"),
            version: "1.2.3".to_string(),
            last_updated: "2024-05-01".to_string(),
            last_updated_ts: crate::util::parse_last_updated("2024-05-01"),
            active_installs: installs,
            downloads: Some(1_500),
            rating: Some(90.0),
            num_ratings: Some(12),
            screenshot_url: String::new(),
        }
    }

    fn draw(app: &mut AppState) -> String {
        let backend = TestBackend::new(100, 24);
        let mut term = Terminal::new(backend).expect("failed to create test terminal");
        term.draw(|f| {
            let area = f.area();
            let th = crate::theme::Theme::dark();
            render_results(f, app, area, &th);
        })
        .expect("failed to draw test terminal");
        term.backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    /// What: Fetching shows only the loading indicator
    ///
    /// - Input: Fetching state with held results
    /// - Output: Loading text visible, neither rows nor empty-state
    fn results_fetching_shows_loading_only() {
        let mut app = AppState {
            results: vec![theme("astra", Some(10))],
            fetch_state: FetchState::Fetching,
            ..Default::default()
        };
        app.select(0);
        let text = draw(&mut app);
        assert!(text.contains("Loading themes..."));
        assert!(!text.contains("astra theme"));
        assert!(!text.contains("No themes found"));
    }

    #[test]
    /// What: A held empty set shows the empty-state indicator and zero count
    ///
    /// - Input: Succeeded state with no results
    /// - Output: Empty-state text and "0 Themes" in the title
    fn results_empty_state() {
        let mut app = AppState {
            fetch_state: FetchState::Succeeded,
            ..Default::default()
        };
        let text = draw(&mut app);
        assert!(text.contains("No themes found"));
        assert!(text.contains("0 Themes"));
    }

    #[test]
    /// What: List and grid render the same held set without mutating it
    ///
    /// - Input: Two records drawn in both view modes
    /// - Output: Both names visible each time; set untouched
    fn results_list_and_grid_render() {
        let mut app = AppState {
            results: vec![theme("astra", Some(1_000_000)), theme("neve", None)],
            fetch_state: FetchState::Succeeded,
            ..Default::default()
        };
        app.select(0);
        let text = draw(&mut app);
        assert!(text.contains("2 Themes"));
        assert!(text.contains("The astra theme"));
        assert!(text.contains("The neve theme"));

        app.view_mode = ViewMode::Grid;
        let text = draw(&mut app);
        assert!(text.contains("The astra theme"));
        assert!(text.contains("The neve theme"));
        assert_eq!(app.results.len(), 2);
        assert_eq!(app.results[0].slug, "astra");
    }

    #[test]
    /// What: Failure tone surfaces in the status line while rows stay visible
    ///
    /// - Input: Failed state with held results and an error status
    /// - Output: Error text on the border, rows still rendered
    fn results_failed_keeps_rows_and_shows_error() {
        let mut app = AppState {
            results: vec![theme("astra", Some(10))],
            fetch_state: FetchState::Failed,
            status_text: "Error: catalog unreachable: HTTP status 503".to_string(),
            status_tone: crate::state::StatusTone::Error,
            ..Default::default()
        };
        app.select(0);
        let text = draw(&mut app);
        assert!(text.contains("503"));
        assert!(text.contains("The astra theme"));
    }
}
