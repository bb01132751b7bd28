//! Keyboard input handling for the themedex TUI.
//!
//! All printable keys edit the search input; control chords drive sort,
//! view, and palette changes so they never collide with typing.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::app::handlers::{handle_view_toggle, request_preview};
use crate::state::{AppState, Modal, QueryInput};

/// What: Handle one terminal event.
///
/// Inputs:
/// - `ev`: Event from the reader thread.
/// - `app`: Mutable application state.
/// - `query_tx`: Channel for fetch intents.
/// - `preview_req_tx`: Channel for preview probes.
///
/// Output: `true` when the application should exit.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
    preview_req_tx: &mpsc::UnboundedSender<(String, String)>,
) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => {
            handle_key(ke, app, query_tx, preview_req_tx)
        }
        _ => false,
    }
}

/// Dispatch a single key press; modal dismissal takes precedence.
fn handle_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
    preview_req_tx: &mpsc::UnboundedSender<(String, String)>,
) -> bool {
    if matches!(app.modal, Modal::Alert { .. }) {
        if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
            app.modal = Modal::None;
        }
        return false;
    }

    if ke.modifiers.contains(KeyModifiers::CONTROL) {
        match ke.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('s') => crate::logic::cycle_sort_key(app),
            KeyCode::Char('t') => app.dark_mode = !app.dark_mode,
            _ => {}
        }
        return false;
    }

    match ke.code {
        KeyCode::Esc => return true,
        KeyCode::Enter => {
            crate::logic::submit_query(app, query_tx);
        }
        KeyCode::Tab => handle_view_toggle(app),
        KeyCode::Up => move_and_probe(app, -1, preview_req_tx),
        KeyCode::Down => move_and_probe(app, 1, preview_req_tx),
        KeyCode::Left => move_and_probe(app, -1, preview_req_tx),
        KeyCode::Right => move_and_probe(app, 1, preview_req_tx),
        KeyCode::PageUp => move_and_probe(app, -10, preview_req_tx),
        KeyCode::PageDown => move_and_probe(app, 10, preview_req_tx),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(ch) => app.input.push(ch),
        _ => {}
    }
    false
}

/// Move the selection and kick off preview resolution for the new row.
fn move_and_probe(
    app: &mut AppState,
    delta: i64,
    preview_req_tx: &mpsc::UnboundedSender<(String, String)>,
) {
    crate::logic::move_selection(app, delta);
    request_preview(app, preview_req_tx);
}
