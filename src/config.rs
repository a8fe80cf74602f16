use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub author_id: Option<u64>,
    pub post_type: String,
    pub post_status: String,
    pub page_size: usize,
    pub retry_delay: u64,
    pub max_retries: u32,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        let _ = dotenv::dotenv();

        let api_base_url = env::var("API_BASE_URL")
            .context("API_BASE_URL must be set")?;

        let author_id = match env::var("AUTHOR_ID") {
            Ok(value) => Some(value.parse().context("AUTHOR_ID must be a valid number")?),
            Err(_) => None,
        };

        let post_type = env::var("POST_TYPE")
            .unwrap_or_else(|_| "post".to_string());

        let post_status = env::var("POST_STATUS")
            .unwrap_or_else(|_| "published".to_string());

        let page_size = env::var("PAGE_SIZE")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .context("PAGE_SIZE must be a valid number")?;

        let retry_delay = env::var("RETRY_DELAY")
            .unwrap_or_else(|_| "1000".to_string()) // Default 1 second in ms
            .parse()
            .context("RETRY_DELAY must be a valid number")?;

        let max_retries = env::var("MAX_RETRIES")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .context("MAX_RETRIES must be a valid number")?;

        Ok(Config {
            api_base_url,
            author_id,
            post_type,
            post_status,
            page_size,
            retry_delay,
            max_retries,
        })
    }
}
