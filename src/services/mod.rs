/// Services module
/// The UI binder and the two seams it is injected with:
/// the command host (IPC) and the document (DOM lookups)

pub mod binder;
pub mod host;
pub mod surface;

pub use binder::UiBinder;
pub use host::CommandHost;
pub use surface::{Document, TextSink, TextSource};
