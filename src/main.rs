use anyhow::Result;
use tracing::info;

mod config;
mod models;
mod source;
mod stats;
mod utils;
mod widget;

use config::Config;
use models::PostFilter;
use source::HttpPostSource;
use widget::{ConsoleRender, PostingAverageWidget};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    utils::logger::init_logger();
    info!("Starting posting-average dashboard");

    // Load configuration
    let config = Config::load()?;
    utils::config_logger::log_config(&config);

    // Wire the collaborators explicitly: HTTP source in, console sink out
    let source = HttpPostSource::new(&config.api_base_url)
        .with_retry_settings(config.retry_delay, config.max_retries);

    let base_filter = PostFilter {
        entity_type: config.post_type.clone(),
        status: config.post_status.clone(),
        page_size: config.page_size,
        ..PostFilter::default()
    };

    let widget = PostingAverageWidget::new(source, base_filter);

    ConsoleRender::banner();
    let mut sink = ConsoleRender;
    widget.render(config.author_id, &mut sink).await?;

    info!("Dashboard rendered");
    Ok(())
}
