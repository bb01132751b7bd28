//! Core value types used by themedex state.

/// One normalized theme directory entry.
///
/// This is compact enough to render in the list and grid layouts; richer
/// presentation (rating stars, preview URL) is derived from these fields at
/// render time.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ThemeRecord {
    /// Stable catalog key; non-empty and unique within a result set.
    pub slug: String,
    /// Human-readable theme name.
    pub name: String,
    /// Version string as reported by the catalog.
    pub version: String,
    /// Last-updated date string as reported by the catalog.
    pub last_updated: String,
    /// `last_updated` parsed to epoch seconds when possible; used by the recency sort.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_ts: Option<i64>,
    /// Active-install count when the catalog reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_installs: Option<u64>,
    /// Total download count when the catalog reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<u64>,
    /// Aggregate rating on the catalog's 0–100 scale; display only, never sorted on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Number of ratings behind `rating`; display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_ratings: Option<u64>,
    /// Preview-image hint URL as reported by the catalog.
    pub screenshot_url: String,
}

/// Search intent sent to the background fetch worker.
#[derive(Clone, Debug)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Trimmed query text; empty means browse-popular.
    pub text: String,
}

/// Outcome of a prior [`QueryInput`], success or typed failure.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Fetched records in service order, or the failure to report.
    pub result: Result<Vec<ThemeRecord>, crate::catalog::CatalogError>,
}

/// Sorting key for the held result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Service-assigned order; no client-side reordering.
    Relevance,
    /// Descending by active-install count.
    Installs,
    /// Descending by last-updated timestamp.
    Recency,
    /// Descending by total download count.
    Downloads,
}

impl SortKey {
    /// Return the string key used in the config file for this sort key.
    pub fn as_config_key(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Installs => "installs",
            SortKey::Recency => "recency",
            SortKey::Downloads => "downloads",
        }
    }

    /// Parse a sort key from its config string or aliases.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(SortKey)` on recognized value; `None` otherwise.
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "relevance" | "api_position" => Some(SortKey::Relevance),
            "installs" | "active_installs" => Some(SortKey::Installs),
            "recency" | "last_updated" => Some(SortKey::Recency),
            "downloads" | "downloaded" => Some(SortKey::Downloads),
            _ => None,
        }
    }

    /// Short label shown in the results title bar.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::Installs => "Installs",
            SortKey::Recency => "Recency",
            SortKey::Downloads => "Downloads",
        }
    }

    /// Next key in the fixed cycle order used by the sort shortcut.
    pub fn next(&self) -> Self {
        match self {
            SortKey::Relevance => SortKey::Installs,
            SortKey::Installs => SortKey::Recency,
            SortKey::Recency => SortKey::Downloads,
            SortKey::Downloads => SortKey::Relevance,
        }
    }
}

/// Which of the two layouts is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Dense rows, one theme per line.
    List,
    /// Card grid.
    Grid,
}

impl ViewMode {
    /// Return the string key used in the config file for this view.
    pub fn as_config_key(&self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Grid => "grid",
        }
    }

    /// Parse a view mode from its config string.
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "list" => Some(ViewMode::List),
            "grid" => Some(ViewMode::Grid),
            _ => None,
        }
    }

    /// The other layout; view toggling flips between exactly two.
    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::List => ViewMode::Grid,
            ViewMode::Grid => ViewMode::List,
        }
    }
}

/// Lifecycle state of the current/most recent catalog request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight; further intents are dropped.
    Fetching,
    /// Last request completed with a (possibly empty) result set.
    Succeeded,
    /// Last request failed; the previous result set is retained.
    Failed,
}

/// Visual tone of the status line on the results border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Normal informational text.
    Info,
    /// Failure text rendered in the error color.
    Error,
}

/// Resolution state of a theme's preview image URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewState {
    /// A background probe is walking the fallback chain.
    Resolving,
    /// Final URL after the chain settled (may be the placeholder).
    Resolved(String),
}

/// Modal overlay state; only the alert used for fetch failures exists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Interruptive notification with a dismissable message.
    Alert {
        /// Message text shown centered in the overlay.
        message: String,
    },
}
