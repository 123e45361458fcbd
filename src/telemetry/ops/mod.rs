pub mod feed;
pub mod create;
pub mod delete;
pub mod list;
