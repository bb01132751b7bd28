//! UI helper utilities.

pub mod format;

pub use format::{format_count, format_date, rating_stars, truncate_pad};
