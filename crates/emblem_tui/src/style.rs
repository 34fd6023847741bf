//! Map theme palette to ratatui styles.
//!
//! All colors come from [EmblemPalette]; use these helpers so badge
//! chrome (marker, label, border) stays consistent with the theme.

use ratatui::style::{Color, Style};

use crate::theme::Rgb;

/// Convert theme [Rgb] to ratatui [Color].
#[inline]
pub fn rgb_to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.tuple();
    Color::Rgb(r, g, b)
}

/// Style for primary label text (e.g. palette.text).
pub fn text_style(text_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_rgb))
}

/// Style for muted/secondary text (e.g. palette.text_muted).
pub fn text_muted_style(text_muted_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_muted_rgb))
}

/// Style for the in-progress spinner (e.g. palette.accent).
pub fn accent_style(accent_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(accent_rgb))
}

/// Style for the done marker (e.g. palette.success).
pub fn success_style(success_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(success_rgb))
}

/// Style for failure accents (e.g. palette.danger).
pub fn danger_style(danger_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(danger_rgb))
}

/// Style for the badge container border.
pub fn border_style(border_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(border_rgb))
}

/// Style for the badge container fill.
pub fn surface_style(surface_rgb: Rgb) -> Style {
    Style::default().bg(rgb_to_color(surface_rgb))
}
