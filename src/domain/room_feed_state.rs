use super::{message::ChatMessage, room::Room};

/// Lifecycle of one room view: closed, loading history, live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedPhase {
    #[default]
    Closed,
    Loading,
    Live,
}

/// Ordered, in-memory projection of the active room's messages.
///
/// The feed is exclusively owned by the feed client; messages are ascending
/// by `created_at` (history is sorted on load, live inserts append in
/// arrival order).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoomFeedState {
    room: Option<Room>,
    messages: Vec<ChatMessage>,
    phase: FeedPhase,
    pending_send: bool,
}

impl RoomFeedState {
    pub fn room(&self) -> Option<Room> {
        self.room
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    pub fn pending_send(&self) -> bool {
        self.pending_send
    }

    /// Discards the previous room's feed and enters the loading phase.
    pub fn set_loading(&mut self, room: Room) {
        self.room = Some(room);
        self.messages.clear();
        self.phase = FeedPhase::Loading;
    }

    /// Replaces the feed with a loaded history batch (already ordered).
    pub fn set_live(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
        self.phase = FeedPhase::Live;
    }

    /// Appends a live insert to the tail of the feed.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn set_pending_send(&mut self, pending: bool) {
        self.pending_send = pending;
    }

    pub fn clear(&mut self) {
        self.room = None;
        self.messages.clear();
        self.phase = FeedPhase::Closed;
        self.pending_send = false;
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn message(id: &str, body: &str) -> ChatMessage {
        ChatMessage {
            id: id.to_owned(),
            room: Room::Sydney,
            author_id: "u-1".to_owned(),
            author_name: Some("Camille".to_owned()),
            body: body.to_owned(),
            created_at: Utc.with_ymd_and_hms(2026, 2, 14, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn default_state_is_closed() {
        let state = RoomFeedState::default();

        assert_eq!(state.phase(), FeedPhase::Closed);
        assert_eq!(state.room(), None);
        assert!(state.messages().is_empty());
        assert!(!state.pending_send());
    }

    #[test]
    fn set_loading_discards_previous_feed() {
        let mut state = RoomFeedState::default();
        state.set_loading(Room::Sydney);
        state.set_live(vec![message("m-1", "bonjour")]);

        state.set_loading(Room::Melbourne);

        assert_eq!(state.room(), Some(Room::Melbourne));
        assert_eq!(state.phase(), FeedPhase::Loading);
        assert!(state.messages().is_empty());
    }

    #[test]
    fn set_live_replaces_messages() {
        let mut state = RoomFeedState::default();
        state.set_loading(Room::Sydney);

        state.set_live(vec![message("m-1", "a"), message("m-2", "b")]);

        assert_eq!(state.phase(), FeedPhase::Live);
        assert_eq!(state.messages().len(), 2);
    }

    #[test]
    fn append_adds_to_the_tail() {
        let mut state = RoomFeedState::default();
        state.set_loading(Room::Sydney);
        state.set_live(vec![message("m-1", "a")]);

        state.append(message("m-2", "b"));

        assert_eq!(state.messages().last().map(|m| m.id.as_str()), Some("m-2"));
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = RoomFeedState::default();
        state.set_loading(Room::Sydney);
        state.set_live(vec![message("m-1", "a")]);
        state.set_pending_send(true);

        state.clear();

        assert_eq!(state, RoomFeedState::default());
    }
}
