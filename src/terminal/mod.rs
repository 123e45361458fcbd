//! Terminal front-end: cards on stdout, commands and confirmations on stdin.

pub mod browse;
mod prompt;
mod render;

pub use prompt::{LineSource, Prompt};
pub use render::{print_card, TerminalRenderer};
