//! Plain-text formatting of feed data. The feed client hands over plain
//! messages and notices; everything here is presentation only.

use chrono::Local;

use crate::domain::{message::ChatMessage, notice::Notice, room::Room};

pub fn message_line(message: &ChatMessage) -> String {
    let time = message.created_at.with_timezone(&Local).format("%H:%M");
    format!("[{time}] {}: {}", message.author_label(), message.body)
}

pub fn notice_line(notice: &Notice) -> String {
    format!("! {}: {}", notice.title(), notice.detail)
}

pub fn restored_input_hint(text: &str) -> String {
    format!("  (message non envoyé, saisie restaurée: {text})")
}

pub fn room_banner(room: Room) -> String {
    format!("— #{} · {} —", room.key(), room.label())
}

pub fn empty_room_line(room: Room) -> String {
    format!("Aucun message dans « {} ». Sois le premier 👋", room.label())
}

pub fn rooms_listing() -> String {
    Room::ALL
        .iter()
        .map(|room| format!("{:<10} {}", room.key(), room.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn message_line_shows_author_and_body() {
        let message = ChatMessage {
            id: "m-1".to_owned(),
            room: Room::Sydney,
            author_id: "u-1".to_owned(),
            author_name: Some("Camille".to_owned()),
            body: "salut".to_owned(),
            created_at: Utc.with_ymd_and_hms(2026, 2, 14, 10, 0, 0).unwrap(),
        };

        let line = message_line(&message);

        assert!(line.starts_with('['));
        assert!(line.ends_with("Camille: salut"));
    }

    #[test]
    fn notice_line_carries_title_and_detail() {
        let notice = Notice::authentication_required();

        assert_eq!(
            notice_line(&notice),
            "! Connexion requise: Connecte-toi pour envoyer un message."
        );
    }

    #[test]
    fn banner_and_empty_line_use_the_room_label() {
        assert_eq!(room_banner(Room::General), "— #general · Général —");
        assert_eq!(
            empty_room_line(Room::General),
            "Aucun message dans « Général ». Sois le premier 👋"
        );
    }

    #[test]
    fn rooms_listing_has_one_line_per_room() {
        let listing = rooms_listing();

        assert_eq!(listing.lines().count(), Room::ALL.len());
        assert!(listing.contains("goldcoast"));
        assert!(listing.contains("Gold Coast"));
    }
}
