use std::sync::mpsc::channel;

use anyhow::{anyhow, Result};

use crate::{
    cli::{Cli, Command},
    domain::room::Room,
    infra::{self, config::ChatConfig},
    supabase::SupabaseAdapter,
    ui,
    usecases::{bootstrap, room_feed::RoomFeedClient},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run { room } => {
            let context = bootstrap::bootstrap(cli.config.as_deref())?;
            let _log_guard = infra::logging::init(&context.config.logging)?;

            let initial_room = resolve_initial_room(room.as_deref(), &context.config.chat)?;
            let adapter = SupabaseAdapter::new(
                context.config.supabase.clone(),
                context.config.chat.live_poll_interval(),
            )?;

            tracing::info!(room = %initial_room, "starting room feed shell");

            let (events_tx, events_rx) = channel();
            let mut client = RoomFeedClient::new(adapter.clone(), adapter, events_tx);
            ui::shell::start(&mut client, events_rx, initial_room)?;
        }
        Command::Rooms => {
            println!("{}", ui::render::rooms_listing());
        }
    }

    Ok(())
}

fn resolve_initial_room(cli_room: Option<&str>, config: &ChatConfig) -> Result<Room> {
    let key = cli_room.unwrap_or(&config.default_room);
    Room::from_key(key).ok_or_else(|| {
        let valid = Room::ALL
            .iter()
            .map(|room| room.key())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow!("unknown room '{key}' (valid rooms: {valid})")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_room_wins_over_configured_default() {
        let config = ChatConfig::default();

        let room = resolve_initial_room(Some("perth"), &config).expect("room must resolve");

        assert_eq!(room, Room::Perth);
    }

    #[test]
    fn falls_back_to_the_configured_default_room() {
        let config = ChatConfig {
            default_room: "darwin".to_owned(),
            ..ChatConfig::default()
        };

        let room = resolve_initial_room(None, &config).expect("room must resolve");

        assert_eq!(room, Room::Darwin);
    }

    #[test]
    fn unknown_room_lists_the_valid_keys() {
        let config = ChatConfig::default();

        let error = resolve_initial_room(Some("auckland"), &config).expect_err("must fail");

        let text = error.to_string();
        assert!(text.contains("auckland"));
        assert!(text.contains("general"));
    }
}
