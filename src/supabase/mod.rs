//! Hosted backend integration: data API, auth API and the live monitor.

mod auth;
mod live;
mod rest;
mod wire;

use std::{sync::mpsc::Sender, sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use reqwest::Client;
use tokio::runtime::Runtime;

use crate::{
    domain::{identity::Identity, room::Room},
    infra::{config::SupabaseConfig, error::AppError},
    usecases::contracts::{
        FeedEpoch, IdentityProvider, LiveSubscription, MessageDraft, MessageStore, StoreEvent,
    },
};

use live::LiveFeedMonitor;
use wire::{MessageRow, NewMessageRow};

const HISTORY_REPLY_DROPPED: &str = "SUPABASE_HISTORY_REPLY_DROPPED";
const SEND_REPLY_DROPPED: &str = "SUPABASE_SEND_REPLY_DROPPED";
const AUTH_PROBE_FAILED: &str = "SUPABASE_AUTH_PROBE_FAILED";

/// Message store and identity provider backed by the hosted platform.
///
/// Calls are non-blocking: each request runs on the adapter's runtime and
/// completes through the feed client's event queue. Cloning is cheap and
/// shares the runtime.
#[derive(Debug, Clone)]
pub struct SupabaseAdapter {
    // Tasks capture only `shared`; the runtime stays outside so its final
    // drop happens on the caller's thread.
    runtime: Arc<Runtime>,
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    http: Client,
    config: SupabaseConfig,
    poll_interval: Duration,
}

impl SupabaseAdapter {
    pub fn new(config: SupabaseConfig, poll_interval: Duration) -> Result<Self, AppError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(AppError::StoreRuntime)?;

        Ok(Self {
            runtime: Arc::new(runtime),
            shared: Arc::new(Shared {
                http: Client::new(),
                config,
                poll_interval,
            }),
        })
    }
}

impl MessageStore for SupabaseAdapter {
    fn fetch_recent(
        &self,
        room: Room,
        limit: usize,
        epoch: FeedEpoch,
        events: &Sender<StoreEvent>,
    ) {
        let shared = Arc::clone(&self.shared);
        let events = events.clone();
        self.runtime.spawn(async move {
            let result = rest::fetch_recent(&shared.http, &shared.config, room, limit)
                .await
                .map(|rows| {
                    rows.into_iter()
                        .filter_map(MessageRow::into_message)
                        .collect()
                });

            let reply = StoreEvent::HistoryLoaded {
                epoch,
                room,
                result,
            };
            if events.send(reply).is_err() {
                tracing::warn!(
                    code = HISTORY_REPLY_DROPPED,
                    room = %room,
                    "history reply dropped: event queue closed"
                );
            }
        });
    }

    fn insert(&self, draft: MessageDraft, events: &Sender<StoreEvent>) {
        let shared = Arc::clone(&self.shared);
        let events = events.clone();
        let row = NewMessageRow::from(draft);
        self.runtime.spawn(async move {
            let result = rest::insert_message(&shared.http, &shared.config, row).await;

            if events.send(StoreEvent::SendFinished { result }).is_err() {
                tracing::warn!(
                    code = SEND_REPLY_DROPPED,
                    "send reply dropped: event queue closed"
                );
            }
        });
    }

    fn subscribe(
        &self,
        room: Room,
        epoch: FeedEpoch,
        since: Option<DateTime<Utc>>,
        events: &Sender<StoreEvent>,
    ) -> Box<dyn LiveSubscription> {
        Box::new(LiveFeedMonitor::start(
            self.runtime.handle(),
            self.shared.http.clone(),
            self.shared.config.clone(),
            room,
            epoch,
            since,
            self.shared.poll_interval,
            events.clone(),
        ))
    }
}

impl IdentityProvider for SupabaseAdapter {
    fn current_identity(&self) -> Option<Identity> {
        // Without a user token there is nobody to attribute sends to.
        self.shared.config.access_token.as_ref()?;

        let shared = Arc::clone(&self.shared);
        match self
            .runtime
            .block_on(rest::fetch_user(&shared.http, &shared.config))
        {
            Ok(user) => Some(user.into_identity()),
            Err(error) => {
                tracing::warn!(
                    code = AUTH_PROBE_FAILED,
                    error = %error,
                    "could not resolve the signed-in user"
                );
                None
            }
        }
    }
}
