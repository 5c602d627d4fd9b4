use anyhow::Context;
use hoard_config::HoardConfig;
use hoard_core::CatalogFile;

/// Load the book lists named on the command line, or the configured ones.
pub fn load_catalogs(files: &[String], config: &HoardConfig) -> anyhow::Result<Vec<CatalogFile>> {
    let paths = if files.is_empty() {
        config.catalog.resolved_files()
    } else {
        files.iter().map(|f| config.catalog.resolve(f)).collect()
    };

    paths
        .into_iter()
        .map(|path| {
            tracing::info!(path = %path.display(), "loading book list");
            CatalogFile::load(&path)
                .with_context(|| format!("failed to load book list {}", path.display()))
        })
        .collect()
}
