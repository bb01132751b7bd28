//! Title spans for the results block: title text, item count, view toggle
//! emphasis, and the active sort key.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::state::{AppState, ViewMode};
use crate::theme::Theme;

/// Item count label, e.g. `12 Themes`.
#[must_use]
pub fn count_label(n: usize) -> String {
    format!("{n} Themes")
}

/// What: Build the styled spans for the results block title line.
///
/// Inputs:
/// - `app`: Read-only application state.
/// - `th`: Active theme.
///
/// Output:
/// - Spans: title, count label, List/Grid toggle with the active layout
///   emphasized, and the current sort key.
#[must_use]
pub fn build_title_spans(app: &AppState, th: &Theme) -> Vec<Span<'static>> {
    let active = Style::default()
        .fg(th.lavender)
        .bg(th.surface1)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(th.overlay1);
    let (list_style, grid_style) = match app.view_mode {
        ViewMode::List => (active, inactive),
        ViewMode::Grid => (inactive, active),
    };
    vec![
        Span::styled(
            format!(" {} ", app.results_title),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {} ", count_label(app.results.len())),
            Style::default().fg(th.subtext0),
        ),
        Span::styled(" List ", list_style),
        Span::styled(" Grid ", grid_style),
        Span::styled(
            format!(" Sort: {} ", app.sort_key.label()),
            Style::default().fg(th.sapphire),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Count label wording matches the directory
    ///
    /// - Input: 0, 1, 12
    /// - Output: "<n> Themes"
    fn title_count_label_wording() {
        assert_eq!(count_label(0), "0 Themes");
        assert_eq!(count_label(1), "1 Themes");
        assert_eq!(count_label(12), "12 Themes");
    }

    #[test]
    /// What: Title spans carry title text, count, toggles, and sort label
    ///
    /// - Input: Default state (browse title, list view, relevance sort)
    /// - Output: Expected span contents in order
    fn title_spans_content() {
        let app = AppState::default();
        let th = crate::theme::Theme::dark();
        let spans = build_title_spans(&app, &th);
        let text: String = spans.iter().map(|s| s.content.clone().into_owned()).collect();
        assert!(text.contains("Popular Themes"));
        assert!(text.contains("0 Themes"));
        assert!(text.contains("List"));
        assert!(text.contains("Grid"));
        assert!(text.contains("Sort: Relevance"));
    }
}
