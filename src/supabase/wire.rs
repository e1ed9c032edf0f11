use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{message::ChatMessage, room::Room},
    usecases::contracts::MessageDraft,
};

/// Row shape of the hosted `messages` table.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRow {
    pub id: String,
    pub user_id: String,
    pub username: Option<String>,
    pub content: String,
    pub room: String,
    pub created_at: DateTime<Utc>,
}

impl MessageRow {
    /// Maps a row to the domain message. Rows carrying an unknown room key
    /// do not belong to any feed and are dropped.
    pub fn into_message(self) -> Option<ChatMessage> {
        let room = Room::from_key(&self.room)?;
        Some(ChatMessage {
            id: self.id,
            room,
            author_id: self.user_id,
            author_name: self.username,
            body: self.content,
            created_at: self.created_at,
        })
    }
}

/// Insert payload; `id` and `created_at` are assigned server side.
#[derive(Debug, Clone, Serialize)]
pub struct NewMessageRow {
    pub user_id: String,
    pub username: String,
    pub content: String,
    pub room: String,
}

impl From<MessageDraft> for NewMessageRow {
    fn from(draft: MessageDraft) -> Self {
        Self {
            user_id: draft.author_id,
            username: draft.author_name,
            content: draft.body,
            room: draft.room.key().to_owned(),
        }
    }
}
