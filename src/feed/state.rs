use serde::Serialize;

/// Pagination state of the feed. Owned and mutated only by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedState {
    /// Next page to request; starts at 1.
    pub current_page: u32,
    pub is_loading: bool,
    pub has_more_posts: bool,
    pub search_query: String,
    /// Bumped on every reset so responses issued before it can be told apart.
    pub generation: u64,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            current_page: 1,
            is_loading: false,
            has_more_posts: true,
            search_query: String::new(),
            generation: 0,
        }
    }
}

impl FeedState {
    /// Back to page 1 for `query`. `is_loading` is left alone: an in-flight
    /// request still owns it.
    pub fn reset(&mut self, query: &str) {
        self.current_page = 1;
        self.has_more_posts = true;
        self.search_query = query.to_string();
        self.generation += 1;
    }

    pub fn can_load(&self) -> bool {
        !self.is_loading && self.has_more_posts
    }

    /// Record a successfully rendered page.
    pub fn advance(&mut self, has_more: bool) {
        self.has_more_posts = has_more;
        self.current_page += 1;
    }
}
