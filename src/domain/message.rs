use chrono::{DateTime, Utc};

use super::{identity::ANONYMOUS_LABEL, room::Room};

/// A stored chat message. Immutable once created; `id` and `created_at` are
/// assigned by the store at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub room: Room,
    pub author_id: String,
    pub author_name: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Author label for display, falling back when the stored name is absent
    /// or blank.
    pub fn author_label(&self) -> &str {
        self.author_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(ANONYMOUS_LABEL)
    }
}
