use crate::view::command::Rgb;
use crate::view::Palette;
use ratatui::style::Color;

pub struct Theme {
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_key: Color,
    pub status_text: Color,
    pub comment: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_key: Color::Rgb(137, 180, 250),     // Blue for keybindings
    status_text: Color::Rgb(205, 214, 244),
    comment: Color::Rgb(108, 112, 134),
};

/// Grid palette for terminal rendering.
///
/// The core default palette targets a white surface; terminals are usually
/// dark, so the pane swaps in these values instead.
pub const TERMINAL_PALETTE: Palette = Palette {
    address: Rgb(137, 180, 250),  // Blue
    byte: Rgb(205, 214, 244),    // Foreground grey
    ascii: Rgb(166, 227, 161),   // Green
    highlight: Rgb(94, 80, 30),  // Dim yellow, readable under glyphs
    background: Rgb(30, 30, 46),
};

/// Convert a core palette color to a ratatui color
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
