//! The room feed client: ordered live view of one room plus a send path.
//!
//! All store completions and live inserts flow through one single-consumer
//! queue and are applied in arrival order by `handle_store_event`. Room
//! switches are latest-wins: the epoch advances on every switch, the
//! previous subscription is released on every exit path, and events tagged
//! with an older epoch are discarded.

use std::{collections::VecDeque, sync::mpsc::Sender};

use crate::domain::{
    compose_state::ComposeState,
    message::ChatMessage,
    notice::{Notice, NoticeKind},
    room::Room,
    room_feed_state::RoomFeedState,
};

use super::{
    contracts::{
        FeedEpoch, IdentityProvider, LiveSubscription, MessageStore, StoreError, StoreEvent,
    },
    load_history::{order_history, HistoryQuery, HISTORY_LIMIT},
    send_message::{prepare_send, SendRejection},
};

pub struct RoomFeedClient<S, I>
where
    S: MessageStore,
    I: IdentityProvider,
{
    store: S,
    identity: I,
    state: RoomFeedState,
    compose: ComposeState,
    epoch: FeedEpoch,
    live: Option<Box<dyn LiveSubscription>>,
    restore_on_failure: Option<String>,
    notices: VecDeque<Notice>,
    events_tx: Sender<StoreEvent>,
}

impl<S, I> RoomFeedClient<S, I>
where
    S: MessageStore,
    I: IdentityProvider,
{
    pub fn new(store: S, identity: I, events_tx: Sender<StoreEvent>) -> Self {
        Self {
            store,
            identity,
            state: RoomFeedState::default(),
            compose: ComposeState::default(),
            epoch: FeedEpoch::default(),
            live: None,
            restore_on_failure: None,
            notices: VecDeque::new(),
            events_tx,
        }
    }

    pub fn state(&self) -> &RoomFeedState {
        &self.state
    }

    pub fn compose(&self) -> &ComposeState {
        &self.compose
    }

    pub fn compose_mut(&mut self) -> &mut ComposeState {
        &mut self.compose
    }

    /// Drains pending notices for the presentation layer.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    /// Opens `room`: releases the previous subscription, discards the
    /// previous feed and issues a history fetch. The new subscription is
    /// established once the fetch completes, whether it succeeded or not.
    pub fn switch_room(&mut self, room: Room) {
        self.release_subscription();
        self.epoch = self.epoch.next();
        self.state.set_loading(room);

        let query = HistoryQuery::new(room);
        tracing::debug!(room = %room, epoch = self.epoch.value(), "opening room feed");
        self.store.fetch_recent(
            query.room,
            query.normalized_limit(),
            self.epoch,
            &self.events_tx,
        );
    }

    /// Closes the feed view, releasing the subscription. Events still in
    /// flight for the old session are discarded by the epoch check.
    pub fn close(&mut self) {
        self.release_subscription();
        self.epoch = self.epoch.next();
        self.state.clear();
    }

    /// Sends the composed text. Whitespace-only input is a silent no-op; a
    /// missing identity raises a notice without any store call. Otherwise
    /// the input is cleared optimistically and restored verbatim if the
    /// insert later fails. The sent message is never appended locally; it
    /// arrives through the live subscription.
    pub fn send(&mut self) {
        let Some(room) = self.state.room() else {
            return;
        };
        if self.state.pending_send() {
            return;
        }

        let entered = self.compose.text().to_owned();
        match prepare_send(self.identity.current_identity(), room, &entered) {
            Ok(prepared) => {
                self.state.set_pending_send(true);
                self.restore_on_failure = Some(prepared.entered_text);
                self.compose.clear();
                self.store.insert(prepared.draft, &self.events_tx);
            }
            Err(SendRejection::EmptyBody) => {}
            Err(SendRejection::AuthenticationRequired) => {
                self.notices.push_back(Notice::authentication_required());
            }
        }
    }

    /// Applies one store event. Events from an older room session are
    /// discarded so only the most recently requested room is ever visible.
    pub fn handle_store_event(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::HistoryLoaded {
                epoch,
                room,
                result,
            } => {
                if epoch != self.epoch {
                    tracing::debug!(
                        room = %room,
                        stale = epoch.value(),
                        current = self.epoch.value(),
                        "discarding stale history batch"
                    );
                    return;
                }
                self.apply_history(room, result);
            }
            StoreEvent::LiveInsert { epoch, message } => {
                if epoch != self.epoch {
                    tracing::debug!(
                        room = %message.room,
                        stale = epoch.value(),
                        "discarding live insert from a released subscription"
                    );
                    return;
                }
                self.state.append(message);
            }
            StoreEvent::SendFinished { result } => {
                self.state.set_pending_send(false);
                match result {
                    Ok(()) => {
                        self.restore_on_failure = None;
                    }
                    Err(error) => {
                        if let Some(text) = self.restore_on_failure.take() {
                            self.compose.set_text(text);
                        }
                        self.notices
                            .push_back(Notice::new(NoticeKind::SendFailed, error.to_string()));
                    }
                }
            }
        }
    }

    fn apply_history(&mut self, room: Room, result: Result<Vec<ChatMessage>, StoreError>) {
        match result {
            Ok(rows) => {
                self.state.set_live(order_history(rows, HISTORY_LIMIT));
            }
            Err(error) => {
                // The feed stays empty but goes live anyway so future
                // messages still appear.
                self.state.set_live(Vec::new());
                self.notices.push_back(Notice::new(
                    NoticeKind::HistoryFetchFailed,
                    error.to_string(),
                ));
            }
        }

        // The subscription picks up after the newest row already shown,
        // anchored on store-assigned timestamps so a skewed local clock
        // cannot hide rows inserted around subscription time. With nothing
        // shown it starts unanchored and delivers the room from the start.
        let since = self.state.messages().last().map(|m| m.created_at);
        self.live = Some(
            self.store
                .subscribe(room, self.epoch, since, &self.events_tx),
        );
    }

    fn release_subscription(&mut self) {
        if let Some(mut live) = self.live.take() {
            live.cancel();
        }
    }
}

impl<S, I> Drop for RoomFeedClient<S, I>
where
    S: MessageStore,
    I: IdentityProvider,
{
    fn drop(&mut self) {
        self.release_subscription();
    }
}
