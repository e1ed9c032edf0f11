//! State of the outgoing message input.

/// Text currently composed but not yet sent. The feed client clears it
/// optimistically when a send starts and restores it verbatim on failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposeState {
    text: String,
}

impl ComposeState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
