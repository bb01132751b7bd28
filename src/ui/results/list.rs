//! Dense list layout: one row per theme with aligned columns.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::state::{AppState, ThemeRecord};
use crate::theme::Theme;
use crate::ui::helpers::{format_count, format_date, truncate_pad};

const RANK_W: usize = 4;
const VERSION_W: usize = 9;
const DATE_W: usize = 13;
const COUNT_W: usize = 10;

/// Width left for the name column after the fixed columns and highlight gutter.
fn name_width(total: u16) -> usize {
    (total as usize)
        .saturating_sub(RANK_W + VERSION_W + DATE_W + 2 * COUNT_W + 4)
        .max(8)
}

/// What: Render the list layout into the results body.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (rows and `list_state` scrolling)
/// - `area`: Inner rectangle of the results block
/// - `th`: Active theme
///
/// Output:
/// - Draws a header row and the stateful list; a pure projection of the held
///   result set, nothing is mutated except the list scroll offset.
pub fn render_list(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    if area.height < 2 {
        return;
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let name_w = name_width(area.width);
    let header = Paragraph::new(Line::from(Span::styled(
        format!(
            "{:>3}  {}{}{}{:>9} {:>9}",
            "#",
            truncate_pad("Name", name_w),
            truncate_pad("Version", VERSION_W),
            truncate_pad("Updated", DATE_W),
            "Installs",
            "Downloads"
        ),
        Style::default()
            .fg(th.overlay1)
            .bg(th.mantle)
            .add_modifier(Modifier::UNDERLINED),
    )));
    f.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = app
        .results
        .iter()
        .enumerate()
        .map(|(i, t)| build_list_row(i, t, name_w, th))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .highlight_style(Style::default().bg(th.surface1))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, chunks[1], &mut app.list_state);
}

/// One aligned row: rank, name, version, updated date, installs, downloads.
fn build_list_row(index: usize, t: &ThemeRecord, name_w: usize, th: &Theme) -> ListItem<'static> {
    let line = Line::from(vec![
        Span::styled(format!("{:>3} ", index + 1), Style::default().fg(th.overlay1)),
        Span::styled(
            truncate_pad(&t.name, name_w),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            truncate_pad(&t.version, VERSION_W),
            Style::default().fg(th.subtext0),
        ),
        Span::styled(
            truncate_pad(&format_date(&t.last_updated), DATE_W),
            Style::default().fg(th.subtext0),
        ),
        Span::styled(
            format!("{:>9} ", format_count(t.active_installs)),
            Style::default().fg(th.green),
        ),
        Span::styled(
            format!("{:>9}", format_count(t.downloads)),
            Style::default().fg(th.overlay1),
        ),
    ]);
    ListItem::new(line)
}
