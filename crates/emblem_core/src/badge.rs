//! Badge output: label plus state-derived indicator.
//!
//! [render] composes the whole pipeline: present-tense phrase from
//! [crate::message], past-tense rewrite from [crate::tense], indicator
//! from the completion rule on [ToolInvocation].

use serde::{Deserialize, Serialize};

use crate::invocation::ToolInvocation;
use crate::message::generate_message;
use crate::tense::to_past_tense;

/// Visual indicator next to the label: spinner vs completion marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Indicator {
    InProgress,
    Done,
}

/// Formatted badge, safe to render directly as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    pub indicator: Indicator,
}

/// Format one invocation. Pure and deterministic: same input, same badge.
pub fn render(invocation: &ToolInvocation) -> Badge {
    let completed = invocation.is_completed();
    let message = generate_message(&invocation.tool_name, &invocation.args);
    Badge {
        label: to_past_tense(&message, completed),
        indicator: if completed {
            Indicator::Done
        } else {
            Indicator::InProgress
        },
    }
}
