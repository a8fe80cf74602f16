use tracing::info;

pub fn log_config(config: &crate::config::Config) {
    // Log basic configuration
    info!(
        "Config settings: api_base_url={}, post_type={}, post_status={}, page_size={}",
        config.api_base_url, config.post_type, config.post_status, config.page_size
    );

    // Log the author if set
    if let Some(author_id) = config.author_id {
        info!("Showing the personal average for author {}", author_id);
    }
}
