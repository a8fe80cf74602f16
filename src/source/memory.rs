use async_trait::async_trait;

use crate::models::{Post, PostFilter, SortOrder};
use crate::source::{PostSource, SourceError};

/// Fixed in-memory post source for tests and offline runs.
pub struct InMemoryPostSource {
    posts: Vec<Post>,
}

impl InMemoryPostSource {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    #[allow(dead_code)]
    pub fn empty() -> Self {
        Self { posts: Vec::new() }
    }
}

#[async_trait]
impl PostSource for InMemoryPostSource {
    async fn fetch_posts(&self, filter: &PostFilter) -> Result<Vec<Post>, SourceError> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| filter.author.map_or(true, |author| p.author == author))
            .cloned()
            .collect();

        posts.sort_by_key(|p| p.published_at);
        if filter.order == SortOrder::Desc {
            posts.reverse();
        }
        posts.truncate(filter.page_size);

        Ok(posts)
    }
}
