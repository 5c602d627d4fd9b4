use anyhow::Context;
use hoard_config::HoardConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<HoardConfig> {
    let mut config = HoardConfig::load_with_dotenv().context("failed to load hoard configuration")?;
    apply_overrides(&mut config, flags);

    tracing::debug!(
        root = %config.catalog.root,
        files = ?config.catalog.files,
        delay_secs = config.scrape.delay_secs,
        "configuration loaded"
    );
    Ok(config)
}

/// Command-line flags win over every configuration layer.
fn apply_overrides(config: &mut HoardConfig, flags: &GlobalFlags) {
    if let Some(root) = &flags.root {
        config.catalog.root.clone_from(root);
    }
}
