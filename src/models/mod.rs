/// Models module
/// Shared data types for the binder and its configuration
/// Config types are deserializable so they can be read from the page

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_ID: &str = "greet-input";
pub const DEFAULT_OUTPUT_ID: &str = "greet-msg";
pub const DEFAULT_TRIGGER_ID: &str = "greet-btn";
pub const DEFAULT_COMMAND: &str = "greet";

/// Which of the three bound elements a lookup was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingRole {
    Input,
    Output,
    Trigger,
}

impl fmt::Display for BindingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BindingRole::Input => "input",
            BindingRole::Output => "output",
            BindingRole::Trigger => "trigger",
        };
        f.write_str(name)
    }
}

/// How overlapping triggers are ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerPolicy {
    /// Every resolved call writes the output; the last one to resolve wins
    #[default]
    LastResolvedWins,
    /// A new trigger aborts the call still in flight
    CancelOnRetrigger,
}

/// Binder state across all outstanding calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinderState {
    Idle,
    AwaitingResponse,
}

/// Result of a single trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The response was written to the output element
    Displayed(String),
    /// A later trigger aborted this call before it resolved
    Superseded,
}

/// Binder configuration
///
/// Every field has a default matching the stock markup, so an empty JSON object
/// is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BinderConfig {
    pub input_id: String,
    pub output_id: String,
    pub trigger_id: String,
    pub command: String,
    pub policy: TriggerPolicy,
    /// Write `Error: <message>` into the output when a call fails
    pub show_errors: bool,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`
    pub log_level: String,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            input_id: DEFAULT_INPUT_ID.to_string(),
            output_id: DEFAULT_OUTPUT_ID.to_string(),
            trigger_id: DEFAULT_TRIGGER_ID.to_string(),
            command: DEFAULT_COMMAND.to_string(),
            policy: TriggerPolicy::default(),
            show_errors: false,
            log_level: "info".to_string(),
        }
    }
}

impl BinderConfig {
    /// Parse a configuration override; missing fields keep their defaults
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Configuration for startup from the optional page config block
    ///
    /// No block means defaults. A malformed block also means defaults, and the
    /// parse error is handed back so the caller can log it.
    pub fn resolve(raw: Option<&str>) -> (Self, Option<serde_json::Error>) {
        match raw.map(Self::from_json) {
            Some(Ok(config)) => (config, None),
            Some(Err(e)) => (Self::default(), Some(e)),
            None => (Self::default(), None),
        }
    }

    /// Log filter for `log_level`, falling back to `Info` on unknown names
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
