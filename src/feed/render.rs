use std::rc::Rc;

use async_trait::async_trait;

use super::card::PostCard;
use super::notice::Notice;

/// Surface the feed draws on: the card container, the loading indicator,
/// the creation form and the inline messages.
pub trait FeedRenderer {
    fn clear(&self);
    fn append_posts(&self, cards: &[PostCard]);
    fn set_loading(&self, loading: bool);
    fn set_form_visible(&self, visible: bool);
    fn show_notice(&self, notice: &Notice);
}

/// Yes/no question put to the user before a destructive action.
#[async_trait(?Send)]
pub trait Confirm {
    async fn confirm(&self, message: &str) -> bool;
}

#[async_trait(?Send)]
impl<C: Confirm + ?Sized> Confirm for Rc<C> {
    async fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message).await
    }
}
