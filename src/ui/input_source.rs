//! Stdin line source and slash-command parsing.

use std::{
    io::{self, BufRead},
    sync::mpsc::{channel, Receiver},
    thread,
};

use crate::domain::room::Room;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Closed,
}

/// Reads stdin on a dedicated thread and hands lines over as events.
pub fn spawn_stdin_reader() -> io::Result<Receiver<InputEvent>> {
    let (tx, rx) = channel();

    thread::Builder::new()
        .name("stdin-reader".to_owned())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(InputEvent::Line(line)).is_err() {
                            return;
                        }
                    }
                    Err(_) => break,
                }
            }
            let _ = tx.send(InputEvent::Closed);
        })?;

    Ok(rx)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Plain text to send, kept verbatim.
    Send(String),
    SwitchRoom(Room),
    ListRooms,
    Quit,
    UnknownRoom(String),
    Malformed(&'static str),
}

pub fn parse_line(line: &str) -> InputCommand {
    if !line.starts_with('/') {
        return InputCommand::Send(line.to_owned());
    }

    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("/quit") | Some("/q") => InputCommand::Quit,
        Some("/rooms") => InputCommand::ListRooms,
        Some("/room") => match parts.next() {
            Some(key) => match Room::from_key(key) {
                Some(room) => InputCommand::SwitchRoom(room),
                None => InputCommand::UnknownRoom(key.to_owned()),
            },
            None => InputCommand::Malformed("usage: /room <clé> (voir /rooms)"),
        },
        _ => InputCommand::Malformed("commandes: /room <clé>, /rooms, /quit"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_sent_verbatim() {
        assert_eq!(
            parse_line("  bonjour à tous  "),
            InputCommand::Send("  bonjour à tous  ".to_owned())
        );
    }

    #[test]
    fn room_command_resolves_the_key() {
        assert_eq!(
            parse_line("/room melbourne"),
            InputCommand::SwitchRoom(Room::Melbourne)
        );
    }

    #[test]
    fn unknown_room_key_is_reported() {
        assert_eq!(
            parse_line("/room auckland"),
            InputCommand::UnknownRoom("auckland".to_owned())
        );
    }

    #[test]
    fn room_command_without_key_is_malformed() {
        assert!(matches!(parse_line("/room"), InputCommand::Malformed(_)));
    }

    #[test]
    fn quit_has_a_short_alias() {
        assert_eq!(parse_line("/quit"), InputCommand::Quit);
        assert_eq!(parse_line("/q"), InputCommand::Quit);
    }

    #[test]
    fn rooms_lists_the_fixed_set() {
        assert_eq!(parse_line("/rooms"), InputCommand::ListRooms);
    }

    #[test]
    fn unknown_command_is_malformed() {
        assert!(matches!(parse_line("/help"), InputCommand::Malformed(_)));
    }
}
