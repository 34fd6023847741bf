//! emblem-core — pure message formatting for tool invocation badges.
//!
//! Maps a tool name, raw JSON args, and lifecycle state to a short label
//! ("Creating Button.tsx", "Moved file.js") plus an in-progress/done
//! indicator. Everything here is total and side-effect-free: malformed
//! input degrades to fallback wording, never an error. Rendering (colors,
//! spinner) lives in emblem-tui.
//!
//! Entry point: [render] on a [ToolInvocation].

pub mod badge;
pub mod invocation;
pub mod message;
pub mod paths;
pub mod tense;

pub use badge::{Badge, Indicator, render};
pub use invocation::{InvocationState, ToolInvocation};
pub use message::generate_message;
pub use paths::{basename, is_move};
pub use tense::to_past_tense;
