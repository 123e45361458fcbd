//! The paginated, searchable post feed.
//!
//! [`FeedController`] holds the pagination state and reacts to the feed's
//! triggers: first load, the scroll sentinel, search, create and delete.
//! Drawing happens through [`FeedRenderer`], so the controller can be driven
//! by the terminal front-end or by a recording renderer in tests.

pub mod card;
mod controller;
pub mod notice;
pub mod render;
pub mod state;
#[cfg(test)]
pub mod testing;

pub use card::PostCard;
pub use controller::{FeedController, DELETE_PROMPT};
pub use notice::Notice;
pub use render::{Confirm, FeedRenderer};
pub use state::FeedState;
