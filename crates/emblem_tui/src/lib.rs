//! emblem-tui — ratatui rendering shell for emblem badges.
//!
//! Theming in `theme`; style helpers in [style]; spinner animation in
//! [spinner]; the badge line builder in [badge]. Formatting logic lives in
//! emblem-core; this crate only decides colors, padding, and the
//! spinner/done marker.

pub mod badge;
pub mod spinner;
pub mod style;
pub mod theme;
pub mod utils;

pub use badge::{badge_line, badge_spans};
pub use spinner::Spinner;
pub use theme::{Appearance, EmblemPalette, Rgb};
