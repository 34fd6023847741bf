//! Present-tense phrase generation per tool family.
//!
//! Two tool families get friendly wording: the string-replace editor and
//! the file manager. Dispatch is by exact tool name, then by parsed
//! command variant with explicit fallback arms. Any other tool name is
//! returned verbatim so the badge never shows an empty label.

use serde_json::Value;

use crate::paths::{UNNAMED_FILE, basename, is_move};

/// Tool name for the string-replace editor family.
pub const STR_REPLACE_EDITOR: &str = "str_replace_editor";
/// Tool name for the file manager family.
pub const FILE_MANAGER: &str = "file_manager";

/// Editor command (for the verb phrase). Unknown command strings stay raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Create,
    View,
    StrReplace,
    Insert,
    UndoEdit,
}

impl EditorCommand {
    /// Parse from the `command` argument (e.g. "str_replace" -> StrReplace).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "create" => Some(EditorCommand::Create),
            "view" => Some(EditorCommand::View),
            "str_replace" => Some(EditorCommand::StrReplace),
            "insert" => Some(EditorCommand::Insert),
            "undo_edit" => Some(EditorCommand::UndoEdit),
            _ => None,
        }
    }

    /// Present-tense verb for the badge label.
    pub fn verb(self) -> &'static str {
        match self {
            EditorCommand::Create => "Creating",
            EditorCommand::View => "Viewing",
            EditorCommand::StrReplace => "Editing",
            EditorCommand::Insert => "Updating",
            EditorCommand::UndoEdit => "Reverting",
        }
    }
}

/// File manager command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCommand {
    Rename,
    Delete,
}

impl FileCommand {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rename" => Some(FileCommand::Rename),
            "delete" => Some(FileCommand::Delete),
            _ => None,
        }
    }
}

/// String argument by key; non-string values count as missing.
fn str_arg<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str)
}

/// Build the present-tense phrase for a tool call. Total: every input
/// produces a non-empty label.
///
/// Unknown tool names are returned verbatim without inspecting args, while
/// unknown commands inside a recognized family become "Running {command}".
pub fn generate_message(tool_name: &str, args: &Value) -> String {
    match tool_name {
        STR_REPLACE_EDITOR => editor_message(args),
        FILE_MANAGER => file_manager_message(args),
        other => other.to_string(),
    }
}

fn editor_message(args: &Value) -> String {
    let Some(command) = str_arg(args, "command") else {
        return format!("Running {STR_REPLACE_EDITOR}");
    };
    let filename = str_arg(args, "path").map(basename).unwrap_or(UNNAMED_FILE);
    match EditorCommand::from_name(command) {
        Some(cmd) => format!("{} {filename}", cmd.verb()),
        None => format!("Running {command}"),
    }
}

fn file_manager_message(args: &Value) -> String {
    let Some(command) = str_arg(args, "command") else {
        return format!("Running {FILE_MANAGER}");
    };
    let path = str_arg(args, "path");
    let filename = path.map(basename).unwrap_or(UNNAMED_FILE);
    match FileCommand::from_name(command) {
        Some(FileCommand::Rename) => {
            let new_path = str_arg(args, "new_path");
            match (path, new_path) {
                (Some(old), Some(new)) if is_move(old, new) => format!("Moving {filename}"),
                (_, Some(new)) => format!("Renaming {filename} to {}", basename(new)),
                _ => format!("Renaming {filename}"),
            }
        }
        Some(FileCommand::Delete) => format!("Deleting {filename}"),
        None => format!("Running {command}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn editor_commands_parse() {
        assert_eq!(EditorCommand::from_name("create"), Some(EditorCommand::Create));
        assert_eq!(EditorCommand::from_name("view"), Some(EditorCommand::View));
        assert_eq!(EditorCommand::from_name("str_replace"), Some(EditorCommand::StrReplace));
        assert_eq!(EditorCommand::from_name("insert"), Some(EditorCommand::Insert));
        assert_eq!(EditorCommand::from_name("undo_edit"), Some(EditorCommand::UndoEdit));
        assert!(EditorCommand::from_name("bash").is_none());
    }

    #[test]
    fn editor_create() {
        let msg = generate_message(
            STR_REPLACE_EDITOR,
            &json!({"command": "create", "path": "/components/Button.tsx"}),
        );
        assert_eq!(msg, "Creating Button.tsx");
    }

    #[test]
    fn editor_all_verbs() {
        let cases = [
            ("view", "Viewing utils.ts"),
            ("str_replace", "Editing utils.ts"),
            ("insert", "Updating utils.ts"),
            ("undo_edit", "Reverting utils.ts"),
        ];
        for (command, expected) in cases {
            let msg = generate_message(
                STR_REPLACE_EDITOR,
                &json!({"command": command, "path": "/lib/utils.ts"}),
            );
            assert_eq!(msg, expected);
        }
    }

    #[test]
    fn editor_missing_command() {
        let msg = generate_message(STR_REPLACE_EDITOR, &json!({"path": "/App.jsx"}));
        assert_eq!(msg, "Running str_replace_editor");
        assert_eq!(generate_message(STR_REPLACE_EDITOR, &json!({})), "Running str_replace_editor");
    }

    #[test]
    fn editor_missing_path() {
        let msg = generate_message(STR_REPLACE_EDITOR, &json!({"command": "create"}));
        assert_eq!(msg, "Creating unnamed file");
    }

    #[test]
    fn editor_empty_path() {
        let msg = generate_message(STR_REPLACE_EDITOR, &json!({"command": "create", "path": ""}));
        assert_eq!(msg, "Creating unnamed file");
    }

    #[test]
    fn editor_unknown_command() {
        let msg = generate_message(
            STR_REPLACE_EDITOR,
            &json!({"command": "unknown_command", "path": "/App.jsx"}),
        );
        assert_eq!(msg, "Running unknown_command");
    }

    #[test]
    fn editor_wrong_typed_args_count_as_missing() {
        // command is a number, not a string
        let msg = generate_message(STR_REPLACE_EDITOR, &json!({"command": 7}));
        assert_eq!(msg, "Running str_replace_editor");
        // path is an array
        let msg = generate_message(
            STR_REPLACE_EDITOR,
            &json!({"command": "view", "path": ["/a.txt"]}),
        );
        assert_eq!(msg, "Viewing unnamed file");
    }

    #[test]
    fn file_manager_rename_same_directory() {
        let msg = generate_message(
            FILE_MANAGER,
            &json!({
                "command": "rename",
                "path": "/components/Button.tsx",
                "new_path": "/components/PrimaryButton.tsx",
            }),
        );
        assert_eq!(msg, "Renaming Button.tsx to PrimaryButton.tsx");
    }

    #[test]
    fn file_manager_rename_across_directories_is_move() {
        let msg = generate_message(
            FILE_MANAGER,
            &json!({
                "command": "rename",
                "path": "/components/Button.tsx",
                "new_path": "/ui/Button.tsx",
            }),
        );
        assert_eq!(msg, "Moving Button.tsx");
    }

    #[test]
    fn file_manager_rename_without_new_path() {
        let msg = generate_message(FILE_MANAGER, &json!({"command": "rename", "path": "/file.js"}));
        assert_eq!(msg, "Renaming file.js");
    }

    #[test]
    fn file_manager_delete() {
        let msg = generate_message(
            FILE_MANAGER,
            &json!({"command": "delete", "path": "/components/OldComponent.tsx"}),
        );
        assert_eq!(msg, "Deleting OldComponent.tsx");
    }

    #[test]
    fn file_manager_missing_command() {
        assert_eq!(generate_message(FILE_MANAGER, &json!({})), "Running file_manager");
    }

    #[test]
    fn file_manager_unknown_command() {
        let msg = generate_message(FILE_MANAGER, &json!({"command": "chmod", "path": "/a.sh"}));
        assert_eq!(msg, "Running chmod");
    }

    #[test]
    fn unknown_tool_returns_raw_name() {
        // Args are never inspected for unrecognized tools.
        let msg = generate_message("unknown_tool", &json!({"command": "test"}));
        assert_eq!(msg, "unknown_tool");
        let msg = generate_message("custom_tool", &json!({"command": "test", "path": "/file.js"}));
        assert_eq!(msg, "custom_tool");
    }
}
