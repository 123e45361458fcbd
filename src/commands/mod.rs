//! One-shot subcommands for scripting against the posts API.

pub mod create;
pub mod delete;
pub mod ls;
