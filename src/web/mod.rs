/// Browser adapter
/// Entry point of the wasm module: logging, config, and the DOMContentLoaded hookup

mod dom;
mod ipc;
mod logger;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::BinderConfig;
use crate::services::UiBinder;
use dom::WebDocument;
use ipc::TauriHost;

/// Id of the optional `<script type="application/json">` config block
const CONFIG_ELEMENT_ID: &str = "greet-ui-config";

/// Called by wasm-bindgen when the module is instantiated
#[wasm_bindgen(start)]
pub fn run() {
    console_error_panic_hook::set_once();

    let Some(document) = WebDocument::current() else {
        logger::init(log::LevelFilter::Info);
        log::error!("[Binder] No window document, nothing to bind");
        return;
    };

    let raw_config = document.text_of(CONFIG_ELEMENT_ID);
    let (config, config_error) = BinderConfig::resolve(raw_config.as_deref());
    logger::init(config.level_filter());
    if let Some(e) = config_error {
        log::warn!("[Binder] Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
    }

    // The module may finish loading after the document has been parsed
    if !document.is_parsed() {
        let on_ready = Closure::once_into_js(move || bind(document, config));
        if let Err(e) = WebDocument::add_listener("DOMContentLoaded", &on_ready) {
            log::error!("[Binder] Failed to listen for DOMContentLoaded: {:?}", e);
        }
    } else {
        bind(document, config);
    }
}

fn bind(document: WebDocument, config: BinderConfig) {
    let (binder, trigger) = match UiBinder::bind(&document, TauriHost, config) {
        Ok(bound) => bound,
        Err(e) => {
            log::error!("[Binder] {}", e);
            return;
        }
    };
    let binder = Rc::new(binder);

    let on_click = Closure::<dyn FnMut()>::new(move || {
        let binder = binder.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = binder.trigger().await {
                log::error!("[Binder] {}", e);
            }
        });
    });

    match trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        // Listener lives as long as the page
        Ok(()) => on_click.forget(),
        Err(e) => log::error!("[Binder] Failed to attach click handler: {:?}", e),
    }
}
