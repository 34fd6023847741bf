//! Present-to-past tense conversion for badge labels.
//!
//! Every generated label starts with one of a fixed set of verbs, so the
//! lookup is prefix-based, not whole-word. The table is an ordered slice
//! tested in declaration order to keep behavior deterministic.

/// Present -> past verb pairs, in priority order.
pub const VERB_TABLE: &[(&str, &str)] = &[
    ("Creating", "Created"),
    ("Viewing", "Viewed"),
    ("Editing", "Edited"),
    ("Updating", "Updated"),
    ("Reverting", "Reverted"),
    ("Moving", "Moved"),
    ("Renaming", "Renamed"),
    ("Deleting", "Deleted"),
    ("Running", "Ran"),
];

/// Rewrite `message` to past tense when `completed`, otherwise return it
/// unchanged. The first table entry whose present key prefixes the message
/// wins; its leftmost occurrence is replaced. No prefix match leaves the
/// message as-is.
pub fn to_past_tense(message: &str, completed: bool) -> String {
    if !completed {
        return message.to_string();
    }
    for (present, past) in VERB_TABLE {
        if message.starts_with(present) {
            return message.replacen(present, past, 1);
        }
    }
    message.to_string()
}
