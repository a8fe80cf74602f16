use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::{debug, info};

use crate::models::{Post, PostFilter};
use crate::source::{PostSource, SourceError};
use crate::utils::retry::with_retry;

const POSTS_ENDPOINT: &str = "wp-json/wp/v2/posts";

/// Post payload as the platform's REST API returns it.
///
/// `date_gmt` arrives without a timezone suffix but is already UTC.
#[derive(Debug, Deserialize)]
struct ApiPost {
    id: u64,
    author: u64,
    date_gmt: NaiveDateTime,
}

/// HTTP post source backed by the publishing platform's REST API.
pub struct HttpPostSource {
    client: reqwest::Client,
    base_url: String,
    /// Retry delay for failed requests (ms)
    retry_delay: u64,
    /// Maximum number of retries for failed requests
    max_retries: u32,
}

impl HttpPostSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            retry_delay: 1000,
            max_retries: 5,
        }
    }

    /// Set the retry delay (ms) and maximum retries for failed requests
    pub fn with_retry_settings(mut self, retry_delay: u64, max_retries: u32) -> Self {
        self.retry_delay = retry_delay;
        self.max_retries = max_retries;
        self
    }

    /// Map a filter onto the endpoint's query parameters
    fn build_query(filter: &PostFilter) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("type", filter.entity_type.clone()),
            ("status", filter.status.clone()),
            ("order", filter.order.as_str().to_string()),
            ("per_page", filter.page_size.to_string()),
        ];

        if let Some(author) = filter.author {
            query.push(("author", author.to_string()));
        }

        query
    }

    async fn fetch_once(&self, filter: &PostFilter) -> Result<Vec<Post>, SourceError> {
        let url = format!("{}/{}", self.base_url, POSTS_ENDPOINT);
        let query = Self::build_query(filter);

        debug!("Fetching posts from {} with query {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| SourceError::Http(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let api_posts: Vec<ApiPost> = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(format!("Invalid post payload: {}", e)))?;

        let posts = api_posts
            .into_iter()
            .map(|p| Post {
                id: p.id,
                author: p.author,
                published_at: p.date_gmt.and_utc(),
            })
            .collect::<Vec<Post>>();

        debug!("Fetched {} posts", posts.len());
        Ok(posts)
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    async fn fetch_posts(&self, filter: &PostFilter) -> Result<Vec<Post>, SourceError> {
        info!(
            "Fetching posts (type={}, status={}, order={}, author={:?})",
            filter.entity_type,
            filter.status,
            filter.order.as_str(),
            filter.author
        );

        with_retry(
            || self.fetch_once(filter),
            self.retry_delay,
            self.max_retries,
            "fetch_posts",
        )
        .await
    }
}
