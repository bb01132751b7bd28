//! Channel definitions and background workers for runtime communication.
//!
//! The event loop owns the receivers; workers own the senders. One fetch
//! worker serves the query channel sequentially, which combined with the
//! controller's fetching gate means a response can never race a newer one.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::{FetchOutcome, QueryInput};

/// All channel endpoints used between the event loop and background workers.
pub struct Channels {
    /// Terminal events forwarded from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver side of the terminal event stream.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Cooperative shutdown flag for the reader thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Fetch intents handed to the catalog worker.
    pub query_tx: mpsc::UnboundedSender<QueryInput>,
    /// Fetch outcomes coming back from the catalog worker.
    pub fetch_res_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    /// Preview probes requested for `(slug, version)` pairs.
    pub preview_req_tx: mpsc::UnboundedSender<(String, String)>,
    /// Resolved `(slug, url)` preview outcomes.
    pub preview_res_rx: mpsc::UnboundedReceiver<(String, String)>,
}

impl Channels {
    /// What: Create all channels and spawn the catalog and preview workers.
    ///
    /// Inputs: none (must be called from within a tokio runtime).
    ///
    /// Output: `Channels` with every sender/receiver wired up.
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (query_tx, query_rx) = mpsc::unbounded_channel::<QueryInput>();
        let (fetch_res_tx, fetch_res_rx) = mpsc::unbounded_channel::<FetchOutcome>();
        let (preview_req_tx, preview_req_rx) = mpsc::unbounded_channel::<(String, String)>();
        let (preview_res_tx, preview_res_rx) = mpsc::unbounded_channel::<(String, String)>();

        spawn_fetch_worker(query_rx, fetch_res_tx);
        spawn_preview_worker(preview_req_rx, preview_res_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            query_tx,
            fetch_res_rx,
            preview_req_tx,
            preview_res_rx,
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}

/// What: Spawn the background worker serving catalog fetches.
///
/// Inputs:
/// - `query_rx`: Channel receiver for fetch intents.
/// - `fetch_res_tx`: Channel sender for outcomes.
///
/// Details:
/// - Queries are served strictly one at a time; the controller's fetching
///   gate guarantees a new intent only arrives after the previous outcome
///   was delivered, so this loop never builds a backlog.
pub fn spawn_fetch_worker(
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    fetch_res_tx: mpsc::UnboundedSender<FetchOutcome>,
) {
    tokio::spawn(async move {
        while let Some(query) = query_rx.recv().await {
            let result = crate::catalog::fetch_themes(&query).await;
            if fetch_res_tx
                .send(FetchOutcome {
                    id: query.id,
                    result,
                })
                .is_err()
            {
                break;
            }
        }
    });
}

/// What: Spawn the background worker resolving preview URLs.
///
/// Inputs:
/// - `req_rx`: Channel receiver for `(slug, version)` probes.
/// - `res_tx`: Channel sender for `(slug, resolved_url)` outcomes.
pub fn spawn_preview_worker(
    mut req_rx: mpsc::UnboundedReceiver<(String, String)>,
    res_tx: mpsc::UnboundedSender<(String, String)>,
) {
    tokio::spawn(async move {
        while let Some((slug, version)) = req_rx.recv().await {
            let resolved = crate::screenshot::resolve_preview(slug, version).await;
            if res_tx.send(resolved).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the terminal event reader thread.
///
/// Inputs:
/// - `headless`: When `true` (tests), no thread is spawned.
/// - `event_tx`: Channel sender for forwarded events.
/// - `cancelled`: Flag checked between polls for prompt shutdown.
///
/// Details:
/// - Polls with a 50ms timeout so the thread notices cancellation without
///   blocking on a read.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                            break;
                        }
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // transient read errors are ignored
                    }
                },
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}
