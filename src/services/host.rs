/// Command host
/// The process on the other side of the IPC bridge that runs named commands

use std::future::Future;

use serde_json::Value;

use crate::error::InvokeError;

/// Anything that can run a named command with JSON arguments.
///
/// In the webview this is `window.__TAURI__.core.invoke`. Futures are not
/// required to be `Send`: the binder runs on a single-threaded event loop.
pub trait CommandHost {
    fn invoke(
        &self,
        command: &str,
        args: Value,
    ) -> impl Future<Output = Result<Value, InvokeError>>;
}

impl<H: CommandHost + ?Sized> CommandHost for std::rc::Rc<H> {
    fn invoke(
        &self,
        command: &str,
        args: Value,
    ) -> impl Future<Output = Result<Value, InvokeError>> {
        (**self).invoke(command, args)
    }
}

impl<H: CommandHost + ?Sized> CommandHost for &H {
    fn invoke(
        &self,
        command: &str,
        args: Value,
    ) -> impl Future<Output = Result<Value, InvokeError>> {
        (**self).invoke(command, args)
    }
}
