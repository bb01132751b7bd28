//! themedex application module: runtime event loop, channels, and the
//! state-transition handlers that make up the view controller.

/// Channel plumbing and background workers.
pub mod channels;
/// Fetch/view/sort/preview transition handlers.
pub mod handlers;
/// Runtime event loop and entrypoint.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::run;
