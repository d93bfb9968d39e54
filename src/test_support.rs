/// Test support
/// Fakes for the document and command host seams
/// Only compiled for tests; nothing here is referenced by runtime code

use std::cell::RefCell;
use std::collections::HashSet;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;
use serde_json::Value;

use crate::error::InvokeError;
use crate::models::{DEFAULT_INPUT_ID, DEFAULT_OUTPUT_ID, DEFAULT_TRIGGER_ID};
use crate::services::{CommandHost, Document, TextSink, TextSource};

/// Shared text cell standing in for an element's value / textContent
#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<String>>);

impl TextSource for FakeElement {
    fn value(&self) -> String {
        self.0.borrow().clone()
    }
}

impl TextSink for FakeElement {
    fn set_text(&self, text: &str) {
        *self.0.borrow_mut() = text.to_string();
    }
}

/// Document holding the stock input, output and button, minus any removed ids
pub struct FakeDocument {
    present: HashSet<String>,
    input: FakeElement,
    output: FakeElement,
}

impl FakeDocument {
    pub fn standard() -> Self {
        Self {
            present: [DEFAULT_INPUT_ID, DEFAULT_OUTPUT_ID, DEFAULT_TRIGGER_ID]
                .into_iter()
                .map(String::from)
                .collect(),
            input: FakeElement::default(),
            output: FakeElement::default(),
        }
    }

    pub fn without(id: &str) -> Self {
        let mut doc = Self::standard();
        doc.present.remove(id);
        doc
    }

    pub fn type_input(&self, text: &str) {
        *self.input.0.borrow_mut() = text.to_string();
    }

    pub fn set_output(&self, text: &str) {
        self.output.set_text(text);
    }

    pub fn output_text(&self) -> String {
        self.output.0.borrow().clone()
    }
}

impl Document for FakeDocument {
    type Input = FakeElement;
    type Output = FakeElement;
    type Trigger = ();

    fn input(&self, id: &str) -> Option<FakeElement> {
        (id == DEFAULT_INPUT_ID && self.present.contains(id)).then(|| self.input.clone())
    }

    fn output(&self, id: &str) -> Option<FakeElement> {
        (id == DEFAULT_OUTPUT_ID && self.present.contains(id)).then(|| self.output.clone())
    }

    fn trigger(&self, id: &str) -> Option<()> {
        (id == DEFAULT_TRIGGER_ID && self.present.contains(id)).then_some(())
    }
}

enum Reply {
    Greet(Box<dyn Fn(&str) -> String>),
    Reject(String),
    Raw(Value),
}

/// Host that answers immediately and records every call
pub struct EchoHost {
    reply: Reply,
    calls: RefCell<Vec<(String, Value)>>,
}

impl EchoHost {
    pub fn new(greet: impl Fn(&str) -> String + 'static) -> Self {
        Self::with(Reply::Greet(Box::new(greet)))
    }

    pub fn rejecting(message: &str) -> Self {
        Self::with(Reply::Reject(message.to_string()))
    }

    pub fn raw(value: Value) -> Self {
        Self::with(Reply::Raw(value))
    }

    fn with(reply: Reply) -> Self {
        Self {
            reply,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }
}

impl CommandHost for EchoHost {
    fn invoke(
        &self,
        command: &str,
        args: Value,
    ) -> impl Future<Output = Result<Value, InvokeError>> {
        self.calls.borrow_mut().push((command.to_string(), args.clone()));
        let result = match &self.reply {
            Reply::Greet(greet) => {
                let name = args.get("name").and_then(Value::as_str).unwrap_or_default();
                Ok(Value::String(greet(name)))
            }
            Reply::Reject(message) => Err(InvokeError::new(command, message.clone())),
            Reply::Raw(value) => Ok(value.clone()),
        };
        futures::future::ready(result)
    }
}

/// Host whose calls stay pending until the test resolves them by index
#[derive(Default)]
pub struct ScriptedHost {
    names: RefCell<Vec<String>>,
    replies: RefCell<Vec<Option<oneshot::Sender<String>>>>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// `name` argument of every call, in issue order
    pub fn names(&self) -> Vec<String> {
        self.names.borrow().clone()
    }

    /// Release call `index` with `text`; a dropped (aborted) call ignores it
    pub fn resolve(&self, index: usize, text: &str) {
        if let Some(sender) = self.replies.borrow_mut()[index].take() {
            let _ = sender.send(text.to_string());
        }
    }
}

impl CommandHost for ScriptedHost {
    fn invoke(
        &self,
        command: &str,
        args: Value,
    ) -> impl Future<Output = Result<Value, InvokeError>> {
        let name = args
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let (sender, receiver) = oneshot::channel();
        self.names.borrow_mut().push(name);
        self.replies.borrow_mut().push(Some(sender));
        let command = command.to_string();

        async move {
            receiver
                .await
                .map(Value::String)
                .map_err(|_| InvokeError::new(command, "reply channel closed"))
        }
    }
}
