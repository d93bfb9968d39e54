/// Tauri IPC bridge
/// `CommandHost` over `window.__TAURI__.core.invoke` (needs `app.withGlobalTauri`)

use std::future::Future;

use serde::Serialize;
use serde_json::Value;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use crate::error::InvokeError;
use crate::services::CommandHost;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], js_name = invoke, catch)]
    async fn tauri_invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

pub struct TauriHost;

impl CommandHost for TauriHost {
    fn invoke(
        &self,
        command: &str,
        args: Value,
    ) -> impl Future<Output = Result<Value, InvokeError>> {
        call(command.to_string(), args)
    }
}

async fn call(command: String, args: Value) -> Result<Value, InvokeError> {
    // json_compatible: maps become plain JS objects, which is what invoke expects
    let args = args
        .serialize(&Serializer::json_compatible())
        .map_err(|e| InvokeError::new(&command, e.to_string()))?;
    let response = tauri_invoke(&command, args)
        .await
        .map_err(|e| rejection(&command, &e))?;
    serde_wasm_bindgen::from_value(response).map_err(|e| InvokeError::new(&command, e.to_string()))
}

/// Tauri rejects with the command's error value, most often a string
fn rejection(command: &str, value: &JsValue) -> InvokeError {
    let text = value.as_string();
    let json = match text {
        Some(_) => None,
        None => serde_wasm_bindgen::from_value::<Value>(value.clone()).ok(),
    };
    InvokeError::from_rejection(command, text, json)
}
