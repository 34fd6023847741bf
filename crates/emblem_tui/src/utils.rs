//! Spacing constants and label truncation for the badge shell.

/// Left indent for badge lines (two spaces).
pub const LEFT_PADDING: &str = "  ";

/// Truncate `s` to at most `max_width` characters, appending `suffix` when
/// truncated. Character count, not display width; fine for badge labels.
pub fn truncate_with_suffix(s: &str, max_width: usize, suffix: &str) -> String {
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let suffix_len = suffix.chars().count();
    if max_width <= suffix_len {
        return suffix.chars().take(max_width).collect();
    }
    let take = max_width - suffix_len;
    format!("{}{}", s.chars().take(take).collect::<String>(), suffix)
}

/// Truncate to `max_width` with "…" suffix when needed.
#[inline]
pub fn truncate_ellipsis(s: &str, max_width: usize) -> String {
    truncate_with_suffix(s, max_width, "…")
}
