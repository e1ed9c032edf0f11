//! Domain layer: core entities and feed state.

pub mod compose_state;
pub mod identity;
pub mod message;
pub mod notice;
pub mod room;
pub mod room_feed_state;
