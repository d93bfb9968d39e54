/// Greet command
/// Frontend side of `invoke("greet", { name })`

use serde_json::json;

use crate::error::BinderError;
use crate::services::CommandHost;

/// Call `command` with `{ name }` and decode the string it returns
///
/// The response is returned verbatim, without trimming or escaping.
pub async fn greet<H>(host: &H, command: &str, name: &str) -> Result<String, BinderError>
where
    H: CommandHost + ?Sized,
{
    let response = host.invoke(command, json!({ "name": name })).await?;
    serde_json::from_value(response).map_err(BinderError::UnexpectedResponse)
}
