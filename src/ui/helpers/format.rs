//! Formatting utilities for UI display.
//!
//! Pure, stateless string conversions from raw catalog fields to display
//! text. Nothing here touches application state.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// What: Format a count with `k`/`M` suffixes at one decimal place.
///
/// Inputs:
/// - `n`: Raw count; absent is treated like zero.
///
/// Output:
/// - `"0"` for absent/zero, `x.yk` at one thousand and above, `x.yM` at one
///   million and above, the literal integer otherwise.
#[must_use]
pub fn format_count(n: Option<u64>) -> String {
    let Some(n) = n else {
        return "0".to_string();
    };
    if n == 0 {
        return "0".to_string();
    }
    #[allow(clippy::cast_precision_loss)]
    let v = n as f64;
    if n >= 1_000_000 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}k", v / 1_000.0)
    } else {
        n.to_string()
    }
}

/// What: Render a catalog date string as a short human date.
///
/// Inputs:
/// - `raw`: Date string as reported by the catalog.
///
/// Output:
/// - `"May 1, 2024"`-style text, or `"N/A"` when absent or unparseable.
#[must_use]
pub fn format_date(raw: &str) -> String {
    match crate::util::parse_last_updated(raw)
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
    {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// What: Render the catalog's 0–100 rating as five stars plus a count.
///
/// Inputs:
/// - `rating`: Rating on the 0–100 scale, when present.
/// - `num_ratings`: Number of ratings behind the average.
///
/// Output:
/// - `"★★★★☆ (5432)"`-style text, or `"unrated"` when no rating exists.
#[must_use]
pub fn rating_stars(rating: Option<f64>, num_ratings: Option<u64>) -> String {
    let Some(r) = rating else {
        return "unrated".to_string();
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((r / 20.0).round().clamp(0.0, 5.0)) as usize;
    let mut stars = String::new();
    for i in 0..5 {
        stars.push(if i < filled { '★' } else { '☆' });
    }
    match num_ratings {
        Some(c) if c > 0 => format!("{stars} ({c})"),
        _ => stars,
    }
}

/// What: Truncate to a display width and right-pad with spaces.
///
/// Inputs:
/// - `text`: Source string.
/// - `width`: Target display width in terminal cells.
///
/// Output:
/// - String occupying exactly `width` cells, with a trailing `…` when the
///   source was cut.
#[must_use]
pub fn truncate_pad(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(text) <= width {
        let pad = width - UnicodeWidthStr::width(text);
        return format!("{text}{}", " ".repeat(pad));
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    let pad = width.saturating_sub(UnicodeWidthStr::width(out.as_str()));
    format!("{out}{}", " ".repeat(pad))
}
