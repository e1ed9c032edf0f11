//! Shared test doubles for the store and identity seams.

use std::{
    cell::RefCell,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
        Arc,
    },
};

use chrono::{DateTime, Utc};

use crate::{
    domain::{identity::Identity, room::Room},
    usecases::contracts::{
        FeedEpoch, IdentityProvider, LiveSubscription, MessageDraft, MessageStore, StoreEvent,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFetch {
    pub room: Room,
    pub limit: usize,
    pub epoch: FeedEpoch,
}

#[derive(Debug)]
pub struct RecordedSubscription {
    pub room: Room,
    pub epoch: FeedEpoch,
    pub since: Option<DateTime<Utc>>,
    pub cancelled: Arc<AtomicBool>,
}

/// Message store double recording every call. It never replies on its own;
/// tests drive completions through `handle_store_event` directly.
#[derive(Debug, Default)]
pub struct StubStore {
    pub fetches: RefCell<Vec<RecordedFetch>>,
    pub inserts: RefCell<Vec<MessageDraft>>,
    pub subscriptions: RefCell<Vec<RecordedSubscription>>,
}

impl StubStore {
    /// Epoch of the most recent history fetch, for replaying completions.
    pub fn last_fetch_epoch(&self) -> FeedEpoch {
        self.fetches
            .borrow()
            .last()
            .expect("a history fetch must have been issued")
            .epoch
    }
}

impl MessageStore for StubStore {
    fn fetch_recent(
        &self,
        room: Room,
        limit: usize,
        epoch: FeedEpoch,
        _events: &Sender<StoreEvent>,
    ) {
        self.fetches
            .borrow_mut()
            .push(RecordedFetch { room, limit, epoch });
    }

    fn insert(&self, draft: MessageDraft, _events: &Sender<StoreEvent>) {
        self.inserts.borrow_mut().push(draft);
    }

    fn subscribe(
        &self,
        room: Room,
        epoch: FeedEpoch,
        since: Option<DateTime<Utc>>,
        _events: &Sender<StoreEvent>,
    ) -> Box<dyn LiveSubscription> {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.subscriptions.borrow_mut().push(RecordedSubscription {
            room,
            epoch,
            since,
            cancelled: Arc::clone(&cancelled),
        });
        Box::new(StubSubscription { cancelled })
    }
}

struct StubSubscription {
    cancelled: Arc<AtomicBool>,
}

impl LiveSubscription for StubSubscription {
    fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

impl Drop for StubSubscription {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Default)]
pub struct StubIdentity(Option<Identity>);

impl StubIdentity {
    pub fn signed_in(identity: Identity) -> Self {
        Self(Some(identity))
    }

    pub fn signed_out() -> Self {
        Self(None)
    }
}

impl IdentityProvider for StubIdentity {
    fn current_identity(&self) -> Option<Identity> {
        self.0.clone()
    }
}
