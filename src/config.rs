//! Configuration file loading and path resolution.
//!
//! Settings live in `~/.config/themedex/config.toml` (or under
//! `$XDG_CONFIG_HOME` when set). A missing or unreadable file falls back to
//! defaults; a malformed file is reported once and also falls back.

use std::env;
use std::path::PathBuf;

use serde::Deserialize;

use crate::state::{SortKey, ViewMode};

/// Parsed contents of `config.toml`; every field has a default.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Config-key string of the sort order to start with.
    pub default_sort: String,
    /// Config-key string of the layout to start in.
    pub default_view: String,
    /// Whether to start with the dark palette.
    pub dark: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_sort: "relevance".to_string(),
            default_view: "list".to_string(),
            dark: true,
        }
    }
}

impl Config {
    /// Initial sort key, falling back to relevance for unknown strings.
    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        SortKey::from_config_key(&self.default_sort).unwrap_or(SortKey::Relevance)
    }

    /// Initial view mode, falling back to the list layout.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        ViewMode::from_config_key(&self.default_view).unwrap_or(ViewMode::List)
    }
}

/// What: Resolve the themedex configuration directory, creating it if needed.
///
/// Inputs: none (reads `XDG_CONFIG_HOME` / `HOME`).
///
/// Output: `$XDG_CONFIG_HOME/themedex` when set, else `$HOME/.config/themedex`,
/// else `./.themedex` as a last resort.
#[must_use]
pub fn config_dir() -> PathBuf {
    let base = match env::var("XDG_CONFIG_HOME") {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        }
    };
    let dir = base.join("themedex");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Log directory under the config dir, created on first use.
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// What: Load the configuration, tolerating absence and malformed content.
///
/// Inputs: none (reads `config.toml` under [`config_dir`]).
///
/// Output: Parsed [`Config`], or defaults when the file is missing or bad.
#[must_use]
pub fn load() -> Config {
    let path = config_dir().join("config.toml");
    match std::fs::read_to_string(&path) {
        Ok(raw) => match toml::from_str::<Config>(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed config; using defaults");
                Config::default()
            }
        },
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Defaults map to relevance sort, list view, dark palette
    ///
    /// - Input: `Config::default()`
    /// - Output: Expected typed values
    fn config_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.sort_key(), SortKey::Relevance);
        assert_eq!(cfg.view_mode(), ViewMode::List);
        assert!(cfg.dark);
    }

    #[test]
    /// What: TOML parsing fills missing fields from defaults
    ///
    /// - Input: Partial TOML setting only the view
    /// - Output: Grid view, defaulted sort and palette
    fn config_partial_toml() {
        let cfg: Config = toml::from_str("default_view = \"grid\"").expect("parse");
        assert_eq!(cfg.view_mode(), ViewMode::Grid);
        assert_eq!(cfg.sort_key(), SortKey::Relevance);
        assert!(cfg.dark);
    }

    #[test]
    /// What: Unknown key strings degrade to safe defaults
    ///
    /// - Input: Config with bogus sort and view strings
    /// - Output: Relevance and list
    fn config_unknown_keys_degrade() {
        let cfg = Config {
            default_sort: "bogus".to_string(),
            default_view: "mosaic".to_string(),
            dark: false,
        };
        assert_eq!(cfg.sort_key(), SortKey::Relevance);
        assert_eq!(cfg.view_mode(), ViewMode::List);
    }
}
