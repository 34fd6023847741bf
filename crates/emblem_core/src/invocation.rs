//! Tool invocation input model.
//!
//! One [ToolInvocation] is the already-resolved (name, args, state, result)
//! tuple supplied by the host chat UI per tool-call event. Args stay
//! untyped JSON; only specific string keys are read downstream.

use serde::{Deserialize, Serialize};

/// One tool invocation to format. Immutable for the duration of a call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub tool_name: String,
    /// Raw tool arguments. Only `command`, `path`, and `new_path` are read;
    /// absent or wrong-typed values count as missing.
    pub args: serde_json::Value,
    pub state: InvocationState,
    /// Result payload once the call finished. Presence gates the done
    /// indicator, see [ToolInvocation::is_completed].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
}

impl ToolInvocation {
    pub fn new(
        tool_name: impl Into<String>,
        args: serde_json::Value,
        state: InvocationState,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            args,
            state,
            result: None,
        }
    }

    pub fn with_result(mut self, result: serde_json::Value) -> Self {
        self.result = Some(result);
        self
    }

    /// Completed state without a result payload still counts as in
    /// progress, so the done marker never shows before the result arrives.
    pub fn is_completed(&self) -> bool {
        self.state == InvocationState::Completed && self.result.is_some()
    }
}

/// Lifecycle state reported by the host for a tool call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationState {
    Pending,
    Active,
    Completed,
}
