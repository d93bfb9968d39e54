/// Error types
/// Failures of binding and of the greet round trip
/// Nothing here logs; the browser entry point decides how a failure is reported

use serde_json::Value;
use thiserror::Error;

use crate::models::BindingRole;

/// Rejection reported by the command host.
///
/// Tauri rejects with whatever the command returned as its `Err` value, usually a
/// plain string, so only the rendered message is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("command `{command}` rejected: {message}")]
pub struct InvokeError {
    pub command: String,
    pub message: String,
}

impl InvokeError {
    pub fn new(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Build from a rejected promise value
    ///
    /// A string rejection is kept as is; anything else is rendered as JSON.
    pub fn from_rejection(
        command: impl Into<String>,
        text: Option<String>,
        json: Option<Value>,
    ) -> Self {
        let message = match (text, json) {
            (Some(text), _) => text,
            (None, Some(json)) => json.to_string(),
            (None, None) => "rejected without a value".to_string(),
        };
        Self::new(command, message)
    }
}

/// Errors surfaced by [`crate::UiBinder`].
#[derive(Debug, Error)]
pub enum BinderError {
    /// An element the binder needs is not present in the document.
    #[error("missing {role} element `#{id}`")]
    MissingBindingTarget { role: BindingRole, id: String },

    /// The command host rejected the call.
    #[error(transparent)]
    Invoke(#[from] InvokeError),

    /// The command resolved with something other than a string.
    #[error("unexpected command response: {0}")]
    UnexpectedResponse(#[source] serde_json::Error),
}
