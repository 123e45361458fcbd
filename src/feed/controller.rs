use std::cell::{Cell, RefCell};
use std::time::Duration;

use tracing::Instrument;

use crate::api::{ApiError, NewPost, Post, PostsApi};
use crate::telemetry::{self};
use crate::telemetry::ops::create::Phase as CreatePhase;
use crate::telemetry::ops::delete::Phase as DeletePhase;
use crate::telemetry::ops::feed::Phase as FeedPhase;

use super::card::PostCard;
use super::notice::{Notice, Notices};
use super::render::{Confirm, FeedRenderer};
use super::state::FeedState;

pub const LOAD_FAILED: &str = "Failed to load posts. Please try again later.";
pub const CREATE_FAILED: &str = "Failed to create post. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete post. Please try again.";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this post?";

/// Drives the paginated feed: owns the [`FeedState`], talks to the posts API
/// and draws through a [`FeedRenderer`].
///
/// All methods take `&self` and are meant to run on one thread; several of
/// them may be in progress at once (a scroll trigger while a search is
/// loading), which is what the `is_loading` guard is for. No `RefCell`
/// borrow is held across an `.await`.
pub struct FeedController<A, R, C> {
    api: A,
    renderer: R,
    confirm: C,
    state: RefCell<FeedState>,
    notices: RefCell<Notices>,
    form_open: Cell<bool>,
}

/// Marks a fetch in flight; clearing happens on drop so every exit path,
/// including a dropped future, releases the guard.
struct Loading<'a, R: FeedRenderer> {
    state: &'a RefCell<FeedState>,
    renderer: &'a R,
}

impl<'a, R: FeedRenderer> Loading<'a, R> {
    fn start(state: &'a RefCell<FeedState>, renderer: &'a R) -> Self {
        state.borrow_mut().is_loading = true;
        renderer.set_loading(true);
        Loading { state, renderer }
    }
}

impl<R: FeedRenderer> Drop for Loading<'_, R> {
    fn drop(&mut self) {
        self.state.borrow_mut().is_loading = false;
        self.renderer.set_loading(false);
    }
}

impl<A, R, C> FeedController<A, R, C>
where
    A: PostsApi,
    R: FeedRenderer,
    C: Confirm,
{
    pub fn new(api: A, renderer: R, confirm: C, notice_ttl: Duration) -> Self {
        Self {
            api,
            renderer,
            confirm,
            state: RefCell::new(FeedState::default()),
            notices: RefCell::new(Notices::new(notice_ttl)),
            form_open: Cell::new(false),
        }
    }

    pub fn state(&self) -> FeedState {
        self.state.borrow().clone()
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open.get()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow_mut().active()
    }

    /// Load the next page for `query`, or start over from page 1 when `reset`.
    ///
    /// Does nothing while another load is in flight or once the last page
    /// was seen. A response that was requested before a later reset is
    /// dropped, and page 1 of the current feed is fetched in its place.
    pub async fn load_posts(&self, reset: bool, query: &str) {
        let log = telemetry::feed();
        let root = log.root_span_kv([("reset", reset.to_string()), ("query", query.to_string())]);
        async {
            if reset {
                let _s = log.span(&FeedPhase::Reset).entered();
                self.state.borrow_mut().reset(query);
                self.renderer.clear();
            }

            let mut requested = Some(query);
            loop {
                let (page, search, generation) = {
                    let mut st = self.state.borrow_mut();
                    if !st.can_load() {
                        log.debug(format!("skip load: is_loading={} has_more={}", st.is_loading, st.has_more_posts));
                        return;
                    }
                    if let Some(q) = requested.take() {
                        st.search_query = q.to_string();
                    }
                    (st.current_page, st.search_query.clone(), st.generation)
                };

                let outcome = {
                    let _loading = Loading::start(&self.state, &self.renderer);
                    self.api
                        .list_posts(page, &search)
                        .instrument(log.span(&FeedPhase::Fetch))
                        .await
                };

                let stale = self.state.borrow().generation != generation;
                if stale {
                    let _s = log.span(&FeedPhase::Discard).entered();
                    log.info_kv("↩️ discard stale page", [("page", page.to_string()), ("search", search)]);
                    continue;
                }

                match outcome {
                    Ok(listing) => {
                        let _s = log.span(&FeedPhase::Render).entered();
                        let cards: Vec<PostCard> = listing.posts.iter().map(PostCard::from).collect();
                        self.renderer.append_posts(&cards);
                        self.state.borrow_mut().advance(listing.has_more);
                        log.page_loaded(page, cards.len(), listing.has_more);
                    }
                    Err(err) => {
                        self.report("error fetching posts", &err, LOAD_FAILED);
                    }
                }
                return;
            }
        }
        .instrument(root)
        .await
    }

    /// The sentinel came into view: next page of the current query.
    pub async fn trigger_on_scroll_proximity(&self) {
        let query = self.state.borrow().search_query.clone();
        self.load_posts(false, &query).await;
    }

    pub async fn submit_search(&self, query: &str) {
        self.load_posts(true, query.trim()).await;
    }

    pub fn open_form(&self) {
        self.form_open.set(true);
        self.renderer.set_form_visible(true);
    }

    pub fn close_form(&self) {
        self.form_open.set(false);
        self.renderer.set_form_visible(false);
    }

    /// Create a post. On success the form closes and the unfiltered feed
    /// reloads from page 1; on failure the form stays open.
    pub async fn submit_create(&self, title: &str, content: &str) -> Option<Post> {
        let log = telemetry::create();
        let root = log.root_span_kv([("title", title.to_string())]);
        async {
            let new_post = NewPost { title: title.to_string(), content: content.to_string() };
            let created = self
                .api
                .create_post(&new_post)
                .instrument(log.span(&CreatePhase::Submit))
                .await;
            match created {
                Ok(post) => {
                    log.info(format!("➕ Post created id={}", post.id));
                    self.close_form();
                    self.load_posts(true, "").instrument(log.span(&CreatePhase::Reload)).await;
                    Some(post)
                }
                Err(err) => {
                    self.report("error creating post", &err, CREATE_FAILED);
                    None
                }
            }
        }
        .instrument(root)
        .await
    }

    /// Ask first, then delete and reload from page 1. Returns whether the
    /// post was deleted.
    pub async fn request_delete(&self, post_id: i64) -> bool {
        let log = telemetry::delete();
        let root = log.root_span_kv([("post_id", post_id.to_string())]);
        async {
            let confirmed = self
                .confirm
                .confirm(DELETE_PROMPT)
                .instrument(log.span(&DeletePhase::Confirm))
                .await;
            if !confirmed {
                log.debug("delete not confirmed");
                return false;
            }

            let deleted = self
                .api
                .delete_post(post_id)
                .instrument(log.span(&DeletePhase::Delete))
                .await;
            match deleted {
                Ok(()) => {
                    log.info(format!("🗑️ Post deleted id={post_id}"));
                    self.load_posts(true, "").instrument(log.span(&DeletePhase::Reload)).await;
                    true
                }
                Err(err) => {
                    self.report("error deleting post", &err, DELETE_FAILED);
                    false
                }
            }
        }
        .instrument(root)
        .await
    }

    fn report(&self, what: &str, err: &ApiError, message: &str) {
        telemetry::feed().error_kv(
            what,
            [("error", err.to_string()), ("status", format!("{:?}", err.status()))],
        );
        let notice = self.notices.borrow_mut().push(message);
        self.renderer.show_notice(&notice);
    }
}

#[cfg(test)]
impl<A, R, C> FeedController<A, R, C> {
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    pub(crate) fn renderer(&self) -> &R {
        &self.renderer
    }

    pub(crate) fn confirmer(&self) -> &C {
        &self.confirm
    }
}
