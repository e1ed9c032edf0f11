//! Live subscription monitor for one room.
//!
//! The monitor is a background task observing rows created after the
//! newest row the feed has already shown and forwarding them, oldest
//! first, into the feed client's event queue. Cancelling the handle (or
//! dropping it) signals the task to stop; the feed client additionally
//! discards events tagged with a released epoch, so a row already in
//! flight when the handle is dropped never reaches a newer room view.

use std::{sync::mpsc::Sender, time::Duration};

use chrono::{DateTime, Utc};
use reqwest::Client;
use tokio::{runtime::Handle, sync::watch, time};

use crate::{
    domain::room::Room,
    infra::config::SupabaseConfig,
    usecases::contracts::{FeedEpoch, LiveSubscription, StoreEvent},
};

use super::rest;

const LIVE_MONITOR_STARTED: &str = "SUPABASE_LIVE_MONITOR_STARTED";
const LIVE_MONITOR_STOPPED: &str = "SUPABASE_LIVE_MONITOR_STOPPED";
const LIVE_MONITOR_PUSH_FAILED: &str = "SUPABASE_LIVE_MONITOR_PUSH_FAILED";
const LIVE_MONITOR_POLL_FAILED: &str = "SUPABASE_LIVE_MONITOR_POLL_FAILED";

#[derive(Debug)]
pub struct LiveFeedMonitor {
    stop_tx: Option<watch::Sender<bool>>,
}

impl LiveFeedMonitor {
    pub(crate) fn start(
        runtime: &Handle,
        http: Client,
        config: SupabaseConfig,
        room: Room,
        epoch: FeedEpoch,
        since: Option<DateTime<Utc>>,
        poll_interval: Duration,
        events: Sender<StoreEvent>,
    ) -> Self {
        let (stop_tx, stop_rx) = watch::channel(false);
        runtime.spawn(run_monitor(
            http,
            config,
            room,
            epoch,
            since,
            poll_interval,
            events,
            stop_rx,
        ));

        tracing::info!(
            code = LIVE_MONITOR_STARTED,
            room = %room,
            epoch = epoch.value(),
            "live feed monitor started"
        );

        Self {
            stop_tx: Some(stop_tx),
        }
    }

    fn signal_stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(true);
        }
    }
}

impl LiveSubscription for LiveFeedMonitor {
    fn cancel(&mut self) {
        self.signal_stop();
    }
}

impl Drop for LiveFeedMonitor {
    fn drop(&mut self) {
        self.signal_stop();
    }
}

async fn run_monitor(
    http: Client,
    config: SupabaseConfig,
    room: Room,
    epoch: FeedEpoch,
    since: Option<DateTime<Utc>>,
    poll_interval: Duration,
    events: Sender<StoreEvent>,
    mut stop_rx: watch::Receiver<bool>,
) {
    // The watermark is store time, seeded from the newest row the feed has
    // already shown. A watermark derived from the local clock could run
    // ahead of the store and permanently skip rows created in between.
    let mut watermark = since;
    let mut ticker = time::interval(poll_interval);
    ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    tracing::info!(
                        code = LIVE_MONITOR_STOPPED,
                        room = %room,
                        epoch = epoch.value(),
                        "live feed monitor stopped"
                    );
                    return;
                }
            }
            _ = ticker.tick() => {
                match rest::fetch_after(&http, &config, room, watermark).await {
                    Ok(rows) => {
                        for row in rows {
                            let Some(message) = row.into_message() else {
                                continue;
                            };
                            if watermark.map_or(true, |mark| message.created_at > mark) {
                                watermark = Some(message.created_at);
                            }
                            if events.send(StoreEvent::LiveInsert { epoch, message }).is_err() {
                                tracing::warn!(
                                    code = LIVE_MONITOR_PUSH_FAILED,
                                    room = %room,
                                    "event queue closed; stopping live feed monitor"
                                );
                                return;
                            }
                        }
                    }
                    Err(error) => {
                        tracing::warn!(
                            code = LIVE_MONITOR_POLL_FAILED,
                            room = %room,
                            error = %error,
                            "live poll failed; keeping monitor alive"
                        );
                    }
                }
            }
        }
    }
}
