//! Path helpers for badge labels: basename extraction and move detection.
//!
//! Paths are treated as plain `/`-separated strings, not filesystem paths;
//! the host sends them verbatim from tool arguments.

/// Fallback filename when a path is absent, empty, or has no leaf segment.
pub const UNNAMED_FILE: &str = "unnamed file";

/// Last path segment, or [UNNAMED_FILE] for "", "/", and trailing-slash paths.
pub fn basename(path: &str) -> &str {
    if path.is_empty() || path == "/" {
        return UNNAMED_FILE;
    }
    match path.rsplit('/').next() {
        Some("") | None => UNNAMED_FILE,
        Some(segment) => segment,
    }
}

/// Containing directory: everything before the last `/`. A path with no
/// `/` has directory "".
fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => &path[..i],
        None => "",
    }
}

/// True iff a rename changes the parent directory (a move), not just the
/// leaf name. False when either path is empty.
pub fn is_move(old_path: &str, new_path: &str) -> bool {
    if old_path.is_empty() || new_path.is_empty() {
        return false;
    }
    parent_dir(old_path) != parent_dir(new_path)
}
