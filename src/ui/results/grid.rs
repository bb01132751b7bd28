//! Card grid layout: bordered cards in a selection-paged grid.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, ThemeRecord};
use crate::theme::Theme;
use crate::ui::helpers::{format_count, format_date, rating_stars, truncate_pad};

const CARD_H: u16 = 6;
const CARD_MIN_W: u16 = 30;

/// What: Render the grid layout into the results body.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Read-only application state
/// - `area`: Inner rectangle of the results block
/// - `th`: Active theme
///
/// Output:
/// - Draws one card per theme for the page containing the selection; a pure
///   projection of the held result set.
pub fn render_grid(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    if area.width < CARD_MIN_W / 2 || area.height < CARD_H {
        return;
    }
    let cols = (area.width / CARD_MIN_W).clamp(1, 4);
    let rows = (area.height / CARD_H).max(1);
    let per_page = (cols as usize) * (rows as usize);
    let page_start = (app.selected / per_page) * per_page;
    let col_w = area.width / cols;

    for (offset, t) in app
        .results
        .iter()
        .skip(page_start)
        .take(per_page)
        .enumerate()
    {
        let idx = page_start + offset;
        let Ok(o) = u16::try_from(offset) else {
            break;
        };
        let r = o / cols;
        let c = o % cols;
        let rect = Rect {
            x: area.x + c * col_w,
            y: area.y + r * CARD_H,
            width: col_w,
            height: CARD_H,
        };
        render_card(f, t, idx == app.selected, rect, th);
    }
}

/// One bordered card: name title plus version/rating, installs, downloads, date.
fn render_card(f: &mut Frame, t: &ThemeRecord, selected: bool, rect: Rect, th: &Theme) {
    let border = if selected { th.lavender } else { th.surface2 };
    let title_w = rect.width.saturating_sub(4) as usize;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(th.base))
        .title(Span::styled(
            truncate_pad(&t.name, title_w),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("v{}", t.version), Style::default().fg(th.subtext0)),
            Span::raw("  "),
            Span::styled(
                rating_stars(t.rating, t.num_ratings),
                Style::default().fg(th.yellow),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} installs", format_count(t.active_installs)),
            Style::default().fg(th.green),
        )),
        Line::from(Span::styled(
            format!("{} downloads", format_count(t.downloads)),
            Style::default().fg(th.overlay1),
        )),
        Line::from(Span::styled(
            format_date(&t.last_updated),
            Style::default().fg(th.subtext0),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}
