/// DOM bindings
/// `Document` seam over web-sys

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlInputElement};

use crate::services::surface::is_parsed;
use crate::services::{Document, TextSink, TextSource};

pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    pub fn is_parsed(&self) -> bool {
        is_parsed(&self.document.ready_state())
    }

    pub fn text_of(&self, id: &str) -> Option<String> {
        self.document.get_element_by_id(id)?.text_content()
    }

    pub fn add_listener(event: &str, callback: &JsValue) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        window.add_event_listener_with_callback(event, callback.unchecked_ref())
    }
}

pub struct InputElement(HtmlInputElement);

impl TextSource for InputElement {
    fn value(&self) -> String {
        self.0.value()
    }
}

pub struct OutputElement(Element);

impl TextSink for OutputElement {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

impl Document for WebDocument {
    type Input = InputElement;
    type Output = OutputElement;
    type Trigger = Element;

    fn input(&self, id: &str) -> Option<InputElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlInputElement>()
            .ok()
            .map(InputElement)
    }

    fn output(&self, id: &str) -> Option<OutputElement> {
        self.document.get_element_by_id(id).map(OutputElement)
    }

    fn trigger(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}
