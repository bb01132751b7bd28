//! Color palettes for the two display modes.
//!
//! The dark and light palettes are fixed pairs; the active one is chosen per
//! frame from [`crate::state::AppState::dark_mode`]. There is no theme file,
//! the host toggle only ever switches between these two.

use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for selection backgrounds.
    pub surface1: Color,
    /// Muted border color for blocks.
    pub surface2: Color,
    /// Muted overlay color for de-emphasized glyphs.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for interactive highlights and links.
    pub sapphire: Color,
    /// Accent color for emphasized headings and the status label.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Rating/attention color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for subtle emphasis and active toggles.
    pub lavender: Color,
}

impl Theme {
    /// Dark palette (default).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }

    /// Light palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            base: Color::Rgb(0xef, 0xf1, 0xf5),
            mantle: Color::Rgb(0xe6, 0xe9, 0xef),
            surface1: Color::Rgb(0xbc, 0xc0, 0xcc),
            surface2: Color::Rgb(0xac, 0xb0, 0xbe),
            overlay1: Color::Rgb(0x8c, 0x8f, 0xa1),
            text: Color::Rgb(0x4c, 0x4f, 0x69),
            subtext0: Color::Rgb(0x6c, 0x6f, 0x85),
            sapphire: Color::Rgb(0x20, 0x9f, 0xb5),
            mauve: Color::Rgb(0x88, 0x39, 0xef),
            green: Color::Rgb(0x40, 0xa0, 0x2b),
            yellow: Color::Rgb(0xdf, 0x8e, 0x1d),
            red: Color::Rgb(0xd2, 0x0f, 0x39),
            lavender: Color::Rgb(0x72, 0x87, 0xfd),
        }
    }
}

/// Palette for the given display mode.
#[must_use]
pub fn theme_for(dark: bool) -> Theme {
    if dark { Theme::dark() } else { Theme::light() }
}
