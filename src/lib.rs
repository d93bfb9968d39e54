/// greet-ui
/// Webview front end for the greet window, compiled to WebAssembly
///
/// Module structure:
/// - commands: typed wrappers over backend IPC commands (frontend → backend)
/// - services: the UI binder and the seams it is injected with
/// - models: shared data types and configuration
/// - web: browser adapter (DOM + `window.__TAURI__`), wasm32 only

pub mod commands;
pub mod error;
pub mod models;
pub mod services;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(test)]
mod test_support;

pub use error::{BinderError, InvokeError};
pub use models::{BinderConfig, BinderState, BindingRole, TriggerOutcome, TriggerPolicy};
pub use services::{CommandHost, Document, TextSink, TextSource, UiBinder};

#[cfg(target_arch = "wasm32")]
pub use web::run;
