//! Status label drawn on the bottom border line of the results block.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppState, StatusTone};
use crate::theme::Theme;

/// What: Draw the status label on the bottom border line of the results block.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Read-only application state (status text and tone)
/// - `area`: Target rectangle of the results block
/// - `th`: Active theme
///
/// Output:
/// - Renders a colored dot plus the status text blended into the border.
///
/// Details:
/// - The dot is green for informational text and red for failures; failure
///   text itself is rendered in the error color.
pub fn render_status(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    if area.height < 2 {
        return;
    }
    let sx = area.x.saturating_add(2);
    let sy = area.y.saturating_add(area.height.saturating_sub(1));
    let maxw = area.width.saturating_sub(4);
    let full = format!("Status: {}", app.status_text);
    let content: String = full.chars().take(maxw as usize).collect();
    let (dot_color, text_color) = match app.status_tone {
        StatusTone::Info => (th.green, th.mauve),
        StatusTone::Error => (th.red, th.red),
    };
    let line = Paragraph::new(Line::from(vec![
        Span::styled(
            "●",
            Style::default()
                .fg(dot_color)
                .bg(th.base)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            content.clone(),
            Style::default()
                .fg(text_color)
                .bg(th.base)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    let cw = u16::try_from(content.chars().count() + 2)
        .unwrap_or(maxw)
        .min(maxw);
    let rect = Rect {
        x: sx,
        y: sy,
        width: cw,
        height: 1,
    };
    f.render_widget(line, rect);
}
