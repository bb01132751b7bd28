//! Modularized state module.
//!
//! Splits the application state into value types and the owned [`AppState`]
//! while preserving a flat public API under `crate::state::*` via re-exports.

pub mod app_state;
pub mod types;

// Public re-exports to keep call sites short
pub use app_state::AppState;
pub use types::{
    FetchOutcome, FetchState, Modal, PreviewState, QueryInput, SortKey, StatusTone, ThemeRecord,
    ViewMode,
};
