/// Commands module
/// Typed wrappers over the backend commands this front end calls
/// Commands are the boundary between the webview (Rust/wasm) and the host process

pub mod greet;

pub use greet::greet;
