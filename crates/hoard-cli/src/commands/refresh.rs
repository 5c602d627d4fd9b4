use std::time::Duration;

use anyhow::Context;
use hoard_core::{CatalogFile, plan_targets};
use hoard_scrape::{RatingFetcher, ScrapeFailure, scrape_targets};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RefreshArgs;
use crate::commands::shared::load_catalogs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct FileSummary {
    path: String,
    books: usize,
    updated: usize,
    written: bool,
}

#[derive(Debug, Serialize)]
struct RefreshResponse {
    targets: usize,
    scraped: usize,
    failed: usize,
    degraded: bool,
    dry_run: bool,
    files: Vec<FileSummary>,
    failures: Vec<ScrapeFailure>,
}

struct RefreshOptions {
    delay: Duration,
    failure_warn_ratio: f64,
    dry_run: bool,
}

pub async fn handle(args: &RefreshArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut catalogs = load_catalogs(&args.files, &ctx.config)?;
    let options = RefreshOptions {
        delay: Duration::from_secs(args.delay.unwrap_or(ctx.config.scrape.delay_secs)),
        failure_warn_ratio: ctx.config.scrape.failure_warn_ratio,
        dry_run: args.dry_run,
    };

    let response = refresh_catalogs(&ctx.client, &mut catalogs, &options).await?;
    output(&response, flags.format)
}

/// Scrape every distinct link across `catalogs` once, then apply and save.
async fn refresh_catalogs<F: RatingFetcher>(
    fetcher: &F,
    catalogs: &mut [CatalogFile],
    options: &RefreshOptions,
) -> anyhow::Result<RefreshResponse> {
    let targets = plan_targets(catalogs.iter().flat_map(|c| c.books.iter()));
    if targets.is_empty() {
        tracing::info!("no scrapeable entries found across the book lists");
    }

    let progress = Progress::bar(
        u64::try_from(targets.len()).unwrap_or(u64::MAX),
        "scraping ratings",
    );
    let report = scrape_targets(fetcher, &targets, options.delay, |_, target| {
        progress.set_message(&target.url);
        progress.inc(1);
    })
    .await;
    progress.finish_clear();

    let degraded = report.is_degraded(options.failure_warn_ratio);
    if degraded {
        tracing::warn!(
            failed = report.failures.len(),
            attempted = report.attempted,
            "many scrapes failed; page markup may have changed or requests were blocked"
        );
    }

    let mut files = Vec::with_capacity(catalogs.len());
    for catalog in catalogs.iter_mut() {
        let updated = catalog.apply(&report.ratings);
        let written = updated > 0 && !options.dry_run;
        if written {
            catalog
                .save()
                .with_context(|| format!("failed to write {}", catalog.path.display()))?;
            tracing::info!(path = %catalog.path.display(), updated, "wrote updates");
        } else {
            tracing::info!(path = %catalog.path.display(), updated, "no changes written");
        }

        files.push(FileSummary {
            path: catalog.path.display().to_string(),
            books: catalog.books.len(),
            updated,
            written,
        });
    }

    Ok(RefreshResponse {
        targets: targets.len(),
        scraped: report.ratings.len(),
        failed: report.failures.len(),
        degraded,
        dry_run: options.dry_run,
        files,
        failures: report.failures,
    })
}
