//! Frame composition for the themedex TUI.
//!
//! Layout regions, top to bottom: search input, results block, details strip
//! for the selection, and a one-line key hint footer. The alert modal is
//! drawn last, over everything.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, FetchState, Modal, PreviewState};
use crate::theme::{Theme, theme_for};

pub mod helpers;
pub mod results;

/// What: Render one full frame from the current application state.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (list scrolling mutates its widget state)
///
/// Output:
/// - Draws all regions; exactly one results body is visible per the
///   fetch/empty/view rules inside [`results::render_results`].
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme_for(app.dark_mode);
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(area);

    render_search(f, app, chunks[0], &th);
    results::render_results(f, app, chunks[1], &th);
    render_details(f, app, chunks[2], &th);
    render_footer(f, chunks[3], &th);
    render_modal(f, app, area, &th);
}

/// Search input block with the palette indicator and the trigger hint.
fn render_search(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let mode_icon = if app.dark_mode { "☾" } else { "☀" };
    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(
                " Search ",
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{mode_icon} "), Style::default().fg(th.yellow)),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2))
        .style(Style::default().bg(th.base));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let trigger = if app.fetch_state == FetchState::Fetching {
        Span::styled("  Searching...", Style::default().fg(th.yellow))
    } else {
        Span::styled("  Enter to search", Style::default().fg(th.overlay1))
    };
    let line = Line::from(vec![
        Span::styled(app.input.clone(), Style::default().fg(th.text)),
        Span::styled("█", Style::default().fg(th.lavender)),
        trigger,
    ]);
    f.render_widget(Paragraph::new(line), inner);
}

/// Details strip for the selected theme: name, rating, link, preview URL.
fn render_details(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let block = Block::default()
        .title(Span::styled(
            " Theme ",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2))
        .style(Style::default().bg(th.base));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(t) = app.selected_theme() else {
        f.render_widget(
            Paragraph::new(Line::styled(
                "No theme selected",
                Style::default().fg(th.subtext0),
            )),
            inner,
        );
        return;
    };

    let preview = match app.preview_urls.get(&t.slug) {
        Some(PreviewState::Resolved(url)) => url.clone(),
        Some(PreviewState::Resolving) => "resolving...".to_string(),
        None => crate::screenshot::primary_url(&t.slug, &t.version),
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(
                t.name.clone(),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" v{}", t.version), Style::default().fg(th.subtext0)),
            Span::raw("  "),
            Span::styled(
                helpers::rating_stars(t.rating, t.num_ratings),
                Style::default().fg(th.yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("https://wordpress.org/themes/{}/", t.slug),
                Style::default()
                    .fg(th.sapphire)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(
                format!("  Preview: {preview}"),
                Style::default().fg(th.overlay1),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

/// One-line key hint footer.
fn render_footer(f: &mut Frame, area: Rect, th: &Theme) {
    let hints = "Enter search · Tab view · Ctrl+S sort · Ctrl+T mode · ↑/↓ select · Esc quit";
    let line = Paragraph::new(Line::styled(hints, Style::default().fg(th.subtext0)))
        .style(Style::default().bg(th.mantle))
        .alignment(Alignment::Center);
    f.render_widget(line, area);
}

/// Centered alert overlay for fetch failures.
fn render_modal(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let Modal::Alert { message } = &app.modal else {
        return;
    };
    let rect = centered_rect(area, 60, 6);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(
            " Error ",
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.red))
        .style(Style::default().bg(th.mantle));
    let inner = block.inner(rect);
    f.render_widget(block, rect);
    let body = Paragraph::new(vec![
        Line::styled(message.clone(), Style::default().fg(th.text)),
        Line::raw(""),
        Line::styled("Press Enter to dismiss", Style::default().fg(th.overlay1)),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(body, inner);
}

/// Rectangle of the given size centered within `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &mut AppState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut term = Terminal::new(backend).expect("failed to create test terminal");
        term.draw(|f| ui(f, app)).expect("failed to draw test terminal");
        term.backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    /// What: A full frame renders all regions without panicking
    ///
    /// - Input: Default state
    /// - Output: Search title, browse title, footer hints present
    fn ui_full_frame_smoke() {
        let mut app = AppState::default();
        let text = draw(&mut app);
        assert!(text.contains("Search"));
        assert!(text.contains("Popular Themes"));
        assert!(text.contains("Esc quit"));
        assert!(text.contains("No theme selected"));
    }

    #[test]
    /// What: The alert modal overlays the frame with its message
    ///
    /// - Input: State with an open alert
    /// - Output: Message and dismissal hint visible
    fn ui_alert_modal_visible() {
        let mut app = AppState {
            modal: Modal::Alert {
                message: "Failed to fetch themes: HTTP status 503".to_string(),
            },
            ..Default::default()
        };
        let text = draw(&mut app);
        assert!(text.contains("503"));
        assert!(text.contains("Press Enter to dismiss"));
    }
}
