//! Infrastructure layer: config, logging and error types.

pub mod config;
pub mod contracts;
pub mod error;
pub mod logging;
