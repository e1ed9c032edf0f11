//! Interactive run loop: one queue of store events, one of input lines.

use std::{
    sync::mpsc::{Receiver, RecvTimeoutError},
    time::Duration,
};

use anyhow::Result;

use crate::{
    domain::{notice::NoticeKind, room::Room, room_feed_state::FeedPhase},
    usecases::{
        contracts::{IdentityProvider, MessageStore, StoreEvent},
        room_feed::RoomFeedClient,
    },
};

use super::{
    input_source::{self, InputCommand, InputEvent},
    render,
};

const INPUT_POLL: Duration = Duration::from_millis(50);

pub fn start<S, I>(
    client: &mut RoomFeedClient<S, I>,
    store_events: Receiver<StoreEvent>,
    initial_room: Room,
) -> Result<()>
where
    S: MessageStore,
    I: IdentityProvider,
{
    let input = input_source::spawn_stdin_reader()?;

    client.switch_room(initial_room);
    println!("{}", render::room_banner(initial_room));

    let mut printer = FeedPrinter::default();

    loop {
        while let Ok(event) = store_events.try_recv() {
            client.handle_store_event(event);
        }
        for line in printer.collect_lines(client) {
            println!("{line}");
        }

        match input.recv_timeout(INPUT_POLL) {
            Ok(InputEvent::Line(line)) => match input_source::parse_line(&line) {
                InputCommand::Send(text) => {
                    client.compose_mut().set_text(text);
                    client.send();
                }
                InputCommand::SwitchRoom(room) => {
                    client.switch_room(room);
                    printer.reset();
                    println!("{}", render::room_banner(room));
                }
                InputCommand::ListRooms => println!("{}", render::rooms_listing()),
                InputCommand::Quit => break,
                InputCommand::UnknownRoom(key) => {
                    println!("salon inconnu: {key} (voir /rooms)");
                }
                InputCommand::Malformed(usage) => println!("{usage}"),
            },
            Ok(InputEvent::Closed) => break,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    client.close();
    Ok(())
}

/// Tracks what has already been written so each message prints once.
#[derive(Debug, Default)]
struct FeedPrinter {
    printed: usize,
    empty_shown: bool,
}

impl FeedPrinter {
    fn reset(&mut self) {
        self.printed = 0;
        self.empty_shown = false;
    }

    fn collect_lines<S, I>(&mut self, client: &mut RoomFeedClient<S, I>) -> Vec<String>
    where
        S: MessageStore,
        I: IdentityProvider,
    {
        let mut lines = Vec::new();

        let state = client.state();
        if state.phase() == FeedPhase::Live {
            if state.messages().is_empty() && !self.empty_shown {
                if let Some(room) = state.room() {
                    lines.push(render::empty_room_line(room));
                    self.empty_shown = true;
                }
            }

            let messages = state.messages();
            let start = self.printed.min(messages.len());
            for message in &messages[start..] {
                lines.push(render::message_line(message));
            }
            self.printed = messages.len();
        }

        for notice in client.take_notices() {
            lines.push(render::notice_line(&notice));
            if notice.kind == NoticeKind::SendFailed && !client.compose().is_empty() {
                lines.push(render::restored_input_hint(client.compose().text()));
            }
        }

        lines
    }
}
