use serde::Serialize;

use crate::api::Post;

const EXCERPT_CHARS: usize = 150;
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200";

/// What a rendered post card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCard {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub image: String,
}

impl From<&Post> for PostCard {
    fn from(post: &Post) -> Self {
        let lead = match post.excerpt.as_deref() {
            Some(excerpt) if !excerpt.is_empty() => excerpt.to_string(),
            _ => post.content.chars().take(EXCERPT_CHARS).collect(),
        };
        let image = match post.image.as_deref() {
            Some(image) if !image.is_empty() => image.to_string(),
            _ => PLACEHOLDER_IMAGE.to_string(),
        };
        PostCard { id: post.id, title: post.title.clone(), excerpt: format!("{lead}..."), image }
    }
}
