//! emblem theme: semantic color palette for the badge shell.
//!
//! Same semantic roles a chat TUI theme uses (surfaces, borders, text,
//! semantic states), trimmed to what a badge actually consumes.
//!
//! # Example
//!
//! ```ignore
//! use emblem_tui::theme::{Appearance, EmblemPalette};
//!
//! let palette = EmblemPalette::emblem_dark();
//! let text = palette.text.tuple(); // (r, g, b) for ratatui
//!
//! let palette = EmblemPalette::for_appearance(Appearance::Light);
//! ```

mod appearance;
mod palette;
mod rgb;

pub use appearance::Appearance;
pub use palette::EmblemPalette;
pub use rgb::Rgb;
