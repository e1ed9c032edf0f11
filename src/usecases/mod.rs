//! Use case layer: feed orchestration and application workflows.

pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod load_history;
pub mod room_feed;
pub mod send_message;
