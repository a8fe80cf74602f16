mod error;
mod http;
mod memory;

pub use error::SourceError;
pub use http::HttpPostSource;
pub use memory::InMemoryPostSource;

use async_trait::async_trait;

use crate::models::{Post, PostFilter};

/// Record-fetch collaborator: anything that can deliver posts for a filter.
///
/// Implementations must return posts in the ordering the filter requested
/// (descending by publication time by default) with UTC timestamps.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_posts(&self, filter: &PostFilter) -> Result<Vec<Post>, SourceError>;
}
