//! Command line interface and startup option resolution.

use clap::Parser;

use crate::config::Config;
use crate::state::{SortKey, ViewMode};

/// Command line arguments; every flag overrides its config-file counterpart.
#[derive(Parser, Debug, Default)]
#[command(
    name = "themedex",
    version,
    about = "Browse and search the WordPress.org theme directory from the terminal"
)]
pub struct Args {
    /// Initial search query; omitted browses popular themes
    pub query: Option<String>,
    /// Layout to start in: list or grid
    #[arg(long)]
    pub view: Option<String>,
    /// Sort order to start with: relevance, installs, recency or downloads
    #[arg(long)]
    pub sort: Option<String>,
    /// Start with the light palette
    #[arg(long)]
    pub light: bool,
}

/// Fully resolved startup options handed to the runtime.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Query to issue on startup; empty browses popular themes.
    pub initial_query: String,
    /// Layout active at startup.
    pub view: ViewMode,
    /// Sort key active at startup.
    pub sort: SortKey,
    /// Whether the dark palette starts active.
    pub dark: bool,
}

impl Args {
    /// What: Merge CLI flags over config-file defaults into run options.
    ///
    /// Inputs:
    /// - `cfg`: Loaded configuration providing the defaults.
    ///
    /// Output: Resolved [`RunOptions`]; unknown flag strings are reported and
    /// fall back to the config value.
    #[must_use]
    pub fn run_options(&self, cfg: &Config) -> RunOptions {
        let view = match self.view.as_deref() {
            Some(raw) => ViewMode::from_config_key(raw).unwrap_or_else(|| {
                tracing::warn!(value = raw, "unknown --view value; using config default");
                cfg.view_mode()
            }),
            None => cfg.view_mode(),
        };
        let sort = match self.sort.as_deref() {
            Some(raw) => SortKey::from_config_key(raw).unwrap_or_else(|| {
                tracing::warn!(value = raw, "unknown --sort value; using config default");
                cfg.sort_key()
            }),
            None => cfg.sort_key(),
        };
        RunOptions {
            initial_query: self.query.clone().unwrap_or_default(),
            view,
            sort,
            dark: if self.light { false } else { cfg.dark },
        }
    }
}
