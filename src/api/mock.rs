use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::{ApiError, NewPost, Post, PostPage, PostsApi};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List { page: u32, search: String },
    Create(NewPost),
    Delete(i64),
}

/// Scripted [`PostsApi`]: queued responses, recorded calls, and optional
/// gates that hold a list or create request in flight until released.
#[derive(Default)]
pub struct MockPostsApi {
    pages: Mutex<VecDeque<Result<PostPage, ApiError>>>,
    creates: Mutex<VecDeque<Result<Post, ApiError>>>,
    deletes: Mutex<VecDeque<Result<(), ApiError>>>,
    gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    create_gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl MockPostsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_page(&self, page: Result<PostPage, ApiError>) {
        self.pages.lock().unwrap().push_back(page);
    }

    pub fn push_create(&self, post: Result<Post, ApiError>) {
        self.creates.lock().unwrap().push_back(post);
    }

    pub fn push_delete(&self, outcome: Result<(), ApiError>) {
        self.deletes.lock().unwrap().push_back(outcome);
    }

    /// The next `list_posts` call blocks until the returned sender fires.
    pub fn hold_next_list(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    /// Same as [`hold_next_list`](Self::hold_next_list), for `create_post`.
    pub fn hold_next_create(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.create_gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl PostsApi for MockPostsApi {
    async fn list_posts(&self, page: u32, search: &str) -> Result<PostPage, ApiError> {
        self.calls.lock().unwrap().push(ApiCall::List { page, search: search.to_string() });
        let gate = self.gates.lock().unwrap().pop_front();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        self.pages.lock().unwrap().pop_front().unwrap_or_else(|| Ok(PostPage::default()))
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, ApiError> {
        self.calls.lock().unwrap().push(ApiCall::Create(post.clone()));
        let gate = self.create_gates.lock().unwrap().pop_front();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        self.creates.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(Post { id: 0, title: post.title.clone(), content: post.content.clone(), excerpt: None, image: None })
        })
    }

    async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(ApiCall::Delete(id));
        self.deletes.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}
