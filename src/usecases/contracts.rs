//! Trait seams toward the hosted message store and the auth collaborator.
//!
//! The store is injected rather than reached as a process-wide singleton so
//! the feed client can be exercised with substitute implementations.

use std::{fmt, sync::mpsc::Sender};

use chrono::{DateTime, Utc};

use crate::domain::{identity::Identity, message::ChatMessage, room::Room};

/// Token identifying one room session. Every store reply and live insert
/// carries the token of the request that produced it; the feed client
/// discards anything tagged with an older token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedEpoch(u64);

impl FeedEpoch {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Store-level failures. All of them are recoverable at the client boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Unauthorized,
    Unavailable,
    InvalidData,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unauthorized => f.write_str("accès refusé par le serveur"),
            StoreError::Unavailable => f.write_str("service indisponible"),
            StoreError::InvalidData => f.write_str("réponse du serveur invalide"),
        }
    }
}

/// A message to insert. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub room: Room,
    pub author_id: String,
    pub author_name: String,
    pub body: String,
}

/// Completions and push notifications delivered to the feed client's queue.
///
/// The queue has a single consumer; events are applied in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    HistoryLoaded {
        epoch: FeedEpoch,
        room: Room,
        result: Result<Vec<ChatMessage>, StoreError>,
    },
    LiveInsert {
        epoch: FeedEpoch,
        message: ChatMessage,
    },
    SendFinished {
        result: Result<(), StoreError>,
    },
}

/// Hosted message store: recent-history query, insert, live subscription.
pub trait MessageStore {
    /// Starts a history fetch for `room`. The result arrives later as
    /// `StoreEvent::HistoryLoaded` tagged with `epoch`; rows come back in
    /// store-native order and the caller sorts them.
    fn fetch_recent(&self, room: Room, limit: usize, epoch: FeedEpoch, events: &Sender<StoreEvent>);

    /// Starts an insert. Completion arrives as `StoreEvent::SendFinished`.
    fn insert(&self, draft: MessageDraft, events: &Sender<StoreEvent>);

    /// Establishes a live subscription filtered to `room`, delivering rows
    /// created after `since` (the newest store-assigned timestamp the feed
    /// has already shown; `None` when nothing is shown, in which case every
    /// row of the room is delivered). Rows arrive as `StoreEvent::LiveInsert`
    /// tagged with `epoch` until the handle is cancelled or dropped.
    fn subscribe(
        &self,
        room: Room,
        epoch: FeedEpoch,
        since: Option<DateTime<Utc>>,
        events: &Sender<StoreEvent>,
    ) -> Box<dyn LiveSubscription>;
}

impl<T> MessageStore for &T
where
    T: MessageStore + ?Sized,
{
    fn fetch_recent(
        &self,
        room: Room,
        limit: usize,
        epoch: FeedEpoch,
        events: &Sender<StoreEvent>,
    ) {
        (*self).fetch_recent(room, limit, epoch, events)
    }

    fn insert(&self, draft: MessageDraft, events: &Sender<StoreEvent>) {
        (*self).insert(draft, events)
    }

    fn subscribe(
        &self,
        room: Room,
        epoch: FeedEpoch,
        since: Option<DateTime<Utc>>,
        events: &Sender<StoreEvent>,
    ) -> Box<dyn LiveSubscription> {
        (*self).subscribe(room, epoch, since, events)
    }
}

/// Handle owning one live subscription. Dropping the handle releases it.
pub trait LiveSubscription: Send {
    fn cancel(&mut self);
}

/// Auth collaborator: who is signed in right now, if anyone.
pub trait IdentityProvider {
    fn current_identity(&self) -> Option<Identity>;
}

impl<T> IdentityProvider for &T
where
    T: IdentityProvider + ?Sized,
{
    fn current_identity(&self) -> Option<Identity> {
        (*self).current_identity()
    }
}
