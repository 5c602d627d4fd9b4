use std::time::Duration;

use anyhow::Context;
use hoard_config::HoardConfig;
use hoard_scrape::ScrapeClient;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: HoardConfig,
    pub client: ScrapeClient,
}

impl AppContext {
    pub fn init(config: HoardConfig) -> anyhow::Result<Self> {
        let client = ScrapeClient::new(
            &config.scrape.user_agent,
            Duration::from_secs(config.scrape.timeout_secs),
        )
        .context("failed to build HTTP client")?;

        Ok(Self { config, client })
    }
}
