use crate::domain::{message::ChatMessage, room::Room};

/// Most recent rows requested when a room is opened. Live appends after the
/// open are not capped.
pub const HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub room: Room,
    pub limit: usize,
}

impl HistoryQuery {
    pub fn new(room: Room) -> Self {
        Self {
            room,
            limit: HISTORY_LIMIT,
        }
    }

    pub fn normalized_limit(&self) -> usize {
        match self.limit {
            0 => HISTORY_LIMIT,
            value if value > HISTORY_LIMIT => HISTORY_LIMIT,
            value => value,
        }
    }
}

/// Orders a history batch for display: ascending by `created_at` regardless
/// of the store's native return order, keeping at most the `limit` most
/// recent rows. The sort is stable so rows with equal timestamps keep their
/// arrival order.
pub fn order_history(mut rows: Vec<ChatMessage>, limit: usize) -> Vec<ChatMessage> {
    rows.sort_by_key(|row| row.created_at);
    if rows.len() > limit {
        rows.drain(..rows.len() - limit);
    }
    rows
}
