use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A published content item as delivered by the platform.
///
/// The only attribute the statistics care about is `published_at`; the rest
/// is identification. Posts are never mutated or stored here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub author: u64,
    /// Publication time, timezone-normalized to UTC by the source.
    pub published_at: DateTime<Utc>,
}

impl Post {
    // Helper to create a dummy post for testing
    pub fn dummy(id: u64, published_at_secs: i64) -> Self {
        Self {
            id,
            author: 1,
            published_at: Utc
                .timestamp_opt(published_at_secs, 0)
                .single()
                .unwrap_or_default(),
        }
    }
}

/// Requested ordering of fetched posts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Filter configuration passed to the post source.
#[derive(Clone, Debug)]
pub struct PostFilter {
    /// Entity type to fetch
    pub entity_type: String,
    /// Publication status to match
    pub status: String,
    /// Ordering by publication time
    pub order: SortOrder,
    /// Restrict to a single author when set
    pub author: Option<u64>,
    /// Maximum number of records to request per fetch
    pub page_size: usize,
}

impl Default for PostFilter {
    fn default() -> Self {
        Self {
            entity_type: "post".to_string(),
            status: "published".to_string(),
            order: SortOrder::Desc,
            author: None,
            page_size: 100,
        }
    }
}

impl PostFilter {
    /// Restrict the filter to a single author
    pub fn with_author(mut self, author: u64) -> Self {
        self.author = Some(author);
        self
    }

    /// Set the requested ordering
    #[allow(dead_code)]
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fetch_contract() {
        let filter = PostFilter::default();
        assert_eq!(filter.entity_type, "post");
        assert_eq!(filter.status, "published");
        assert_eq!(filter.order, SortOrder::Desc);
        assert_eq!(filter.author, None);
    }

    #[test]
    fn with_author_narrows_the_filter() {
        let filter = PostFilter::default().with_author(42);
        assert_eq!(filter.author, Some(42));
        assert_eq!(filter.status, "published");
    }
}
