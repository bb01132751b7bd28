//! Runtime entrypoint: terminal lifecycle, initial fetch, and the event loop.

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::args::RunOptions;
use crate::state::AppState;
use crate::ui::ui;

use super::channels::{Channels, spawn_event_thread};
use super::handlers::{handle_fetch_outcome, handle_preview_resolved};
use super::terminal::{restore_terminal, setup_terminal};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the themedex TUI end-to-end: initialize the terminal and state,
/// spawn background workers, issue the initial fetch, drive the event loop,
/// and restore the terminal on exit.
///
/// Inputs:
/// - `opts`: Resolved startup options (initial query, view, sort, palette).
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - The loop owns all mutable state; background workers only communicate
///   over channels, so no locking is needed anywhere.
/// - `THEMEDEX_TEST_HEADLESS=1` skips terminal setup and the event thread,
///   letting integration tests drive the same code paths directly.
pub async fn run(opts: RunOptions) -> Result<()> {
    let headless = std::env::var("THEMEDEX_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState {
        input: opts.initial_query.clone(),
        sort_key: opts.sort,
        view_mode: opts.view,
        dark_mode: opts.dark,
        ..Default::default()
    };

    let mut channels = Channels::new();
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    // Initial load: browse-popular, or the query given on the command line
    crate::logic::submit_query(&mut app, &channels.query_tx);

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        let exit = select! {
            Some(ev) = channels.event_rx.recv() => {
                crate::events::handle_event(
                    ev,
                    &mut app,
                    &channels.query_tx,
                    &channels.preview_req_tx,
                )
            }
            Some(outcome) = channels.fetch_res_rx.recv() => {
                handle_fetch_outcome(&mut app, outcome, &channels.preview_req_tx);
                false
            }
            Some((slug, url)) = channels.preview_res_rx.recv() => {
                handle_preview_resolved(&mut app, slug, url);
                false
            }
            else => true,
        };
        if exit {
            break;
        }
    }

    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
