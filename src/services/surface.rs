/// Document surface
/// The three elements the binder touches, looked up by id

/// Element whose current text can be read (the text input)
pub trait TextSource {
    fn value(&self) -> String;
}

/// Element whose displayed text can be replaced (the message output)
pub trait TextSink {
    fn set_text(&self, text: &str);
}

/// Id-based element lookup.
///
/// Each lookup returns `None` when no element with that id exists, or when the
/// element is not of the expected kind.
pub trait Document {
    type Input: TextSource;
    type Output: TextSink;
    /// Handle to the clickable control; the caller attaches the click listener
    type Trigger;

    fn input(&self, id: &str) -> Option<Self::Input>;
    fn output(&self, id: &str) -> Option<Self::Output>;
    fn trigger(&self, id: &str) -> Option<Self::Trigger>;
}

/// Whether a document in `ready_state` has already fired DOMContentLoaded
///
/// A listener added after that point never runs, so binding has to happen
/// right away instead.
pub fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}
