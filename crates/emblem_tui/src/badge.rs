//! Badge line builder: state marker plus formatted label.
//!
//! Formatting comes from emblem-core; this module only picks the marker
//! glyph and colors. Colors from [crate::theme] only.

use emblem_core::{Indicator, ToolInvocation};
use ratatui::text::{Line, Span};

use crate::style::{accent_style, success_style, text_muted_style, text_style};
use crate::theme::EmblemPalette;
use crate::utils::{LEFT_PADDING, truncate_ellipsis};

/// Max label width in characters before truncation.
const LABEL_MAX_WIDTH: usize = 64;

/// Marker glyph for a completed call.
const DONE_MARKER: &str = "● ";

/// Build the spans for an already-formatted badge. In progress: spinner
/// frame in accent, label in text. Done: marker in success, label muted.
pub fn badge_spans(
    badge: &emblem_core::Badge,
    palette: &EmblemPalette,
    spinner_frame: &str,
) -> Vec<Span<'static>> {
    let label = truncate_ellipsis(&badge.label, LABEL_MAX_WIDTH);
    let mut spans = vec![Span::raw(LEFT_PADDING)];
    match badge.indicator {
        Indicator::InProgress => {
            spans.push(Span::styled(format!("{spinner_frame} "), accent_style(palette.accent)));
            spans.push(Span::styled(label, text_style(palette.text)));
        }
        Indicator::Done => {
            spans.push(Span::styled(DONE_MARKER, success_style(palette.success)));
            spans.push(Span::styled(label, text_muted_style(palette.text_muted)));
        }
    }
    spans
}

/// Build a single [Line] for a tool invocation (e.g. "  ⠹ Creating Button.tsx"
/// or "  ● Created Button.tsx"). `spinner_frame` comes from the caller's
/// [crate::Spinner]; ignored once the call is done.
pub fn badge_line(
    invocation: &ToolInvocation,
    palette: &EmblemPalette,
    spinner_frame: &str,
) -> Line<'static> {
    let badge = emblem_core::render(invocation);
    Line::from(badge_spans(&badge, palette, spinner_frame))
}
