//! emblem palette: semantic color roles used by the badge.
//!
//! Surfaces and borders for the badge container, text levels for the
//! label, and semantic colors (accent, success, danger) for the state
//! marker. All colors are roles, never raw hex at call sites.

use super::Appearance;
use super::rgb::Rgb;

/// One full palette for an appearance (dark or light).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmblemPalette {
    /// App / window background.
    pub background: Rgb,
    /// Badge container fill.
    pub surface_background: Rgb,
    /// Badge container border.
    pub border: Rgb,
    /// Label text.
    pub text: Rgb,
    /// Label text once the call is done.
    pub text_muted: Rgb,
    /// Spinner while in progress.
    pub accent: Rgb,
    /// Done marker.
    pub success: Rgb,
    /// Failure marker (for hosts that surface errored results).
    pub danger: Rgb,
}

impl EmblemPalette {
    /// Default emblem dark palette (deep blacks, soft accents).
    pub fn emblem_dark() -> Self {
        Self {
            background: Rgb(8, 8, 12),
            surface_background: Rgb(16, 17, 24),
            border: Rgb(28, 30, 42),
            text: Rgb(200, 210, 245),
            text_muted: Rgb(86, 95, 137),
            accent: Rgb(99, 148, 255),
            success: Rgb(120, 220, 120),
            danger: Rgb(255, 100, 120),
        }
    }

    /// Default emblem light palette.
    pub fn emblem_light() -> Self {
        Self {
            background: Rgb(255, 255, 255),
            surface_background: Rgb(248, 248, 248),
            border: Rgb(229, 229, 229),
            text: Rgb(26, 27, 38),
            text_muted: Rgb(86, 95, 137),
            accent: Rgb(122, 162, 247),
            success: Rgb(112, 168, 80),
            danger: Rgb(247, 118, 142),
        }
    }

    /// Palette for the given appearance.
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::emblem_dark(),
            Appearance::Light => Self::emblem_light(),
        }
    }
}
