//! Presentation layer: stdin input, text rendering and the run loop.

pub mod input_source;
pub mod render;
pub mod shell;
