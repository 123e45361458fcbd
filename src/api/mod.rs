//! Client side of the blog's REST API.
//!
//! [`PostsApi`] is the seam the feed controller talks through; [`HttpPostsApi`]
//! is the reqwest-backed implementation used by the CLI.

use std::rc::Rc;

use async_trait::async_trait;

mod client;
mod error;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use client::HttpPostsApi;
pub use error::ApiError;
pub use types::{NewPost, Post, PostPage};

/// list/create/delete on `/posts`.
///
/// Futures are not required to be `Send`: the feed runs on a single-threaded
/// event loop.
#[async_trait(?Send)]
pub trait PostsApi {
    /// `GET /posts?page={page}&search={search}`; `search` is omitted when empty.
    async fn list_posts(&self, page: u32, search: &str) -> Result<PostPage, ApiError>;

    /// `POST /posts`
    async fn create_post(&self, post: &NewPost) -> Result<Post, ApiError>;

    /// `DELETE /posts/{id}`
    async fn delete_post(&self, id: i64) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl<T: PostsApi + ?Sized> PostsApi for Rc<T> {
    async fn list_posts(&self, page: u32, search: &str) -> Result<PostPage, ApiError> {
        (**self).list_posts(page, search).await
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, ApiError> {
        (**self).create_post(post).await
    }

    async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        (**self).delete_post(id).await
    }
}
