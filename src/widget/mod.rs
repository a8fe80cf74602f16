mod console;

pub use console::ConsoleRender;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::models::PostFilter;
use crate::source::PostSource;
use crate::stats::{average_interval, format_seconds};

/// Body shown when a panel has no posts to average.
pub const NO_DATA: &str = "no data yet";

const SITE_WIDE_HEADING: &str = "Site Wide Posting Average";
const AUTHOR_HEADING: &str = "Your Posting Average";

/// Display collaborator: receives pre-formatted strings under headings.
pub trait RenderSink {
    fn render_section(&mut self, heading: &str, body: &str);
}

/// Dashboard panel showing the site-wide and per-author posting averages.
///
/// Composition is explicit: the entry point constructs the widget with a
/// source and hands it a sink, nothing is wired up as a load-time side
/// effect.
pub struct PostingAverageWidget<S: PostSource> {
    source: S,
    base_filter: PostFilter,
}

impl<S: PostSource> PostingAverageWidget<S> {
    pub fn new(source: S, base_filter: PostFilter) -> Self {
        Self {
            source,
            base_filter,
        }
    }

    /// Average posting interval across all authors, formatted for display.
    pub async fn site_wide_average(&self) -> Result<String> {
        self.average_for(self.base_filter.clone()).await
    }

    /// Average posting interval for a single author, formatted for display.
    pub async fn author_average(&self, author: u64) -> Result<String> {
        self.average_for(self.base_filter.clone().with_author(author))
            .await
    }

    async fn average_for(&self, filter: PostFilter) -> Result<String> {
        let posts = self
            .source
            .fetch_posts(&filter)
            .await
            .context("Failed to fetch posts")?;

        // An empty fetch would divide by zero in the averager; show the
        // placeholder instead.
        if posts.is_empty() {
            debug!("No posts matched {:?}", filter);
            return Ok(NO_DATA.to_string());
        }

        let timestamps: Vec<DateTime<Utc>> = posts.iter().map(|p| p.published_at).collect();
        let average = average_interval(&timestamps).context("Failed to average intervals")?;

        debug!(
            "Averaged {} posts to {:.3}s (author={:?})",
            posts.len(),
            average,
            filter.author
        );

        Ok(format_seconds(average))
    }

    /// Compute both panels and hand them to the sink under their headings.
    pub async fn render(&self, author: Option<u64>, sink: &mut dyn RenderSink) -> Result<()> {
        let site_wide = self.site_wide_average().await?;
        sink.render_section(SITE_WIDE_HEADING, &site_wide);

        match author {
            Some(author) => {
                let personal = self.author_average(author).await?;
                sink.render_section(AUTHOR_HEADING, &personal);
            }
            None => info!("No author configured, skipping the personal panel"),
        }

        Ok(())
    }
}
