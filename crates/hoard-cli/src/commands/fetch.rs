use anyhow::Context;
use hoard_core::{RatingSource, ScrapeTarget, canonical_link};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FetchArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FetchResponse {
    url: String,
    source: RatingSource,
    rating: String,
    r_count: String,
}

pub async fn handle(args: &FetchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let target = build_target(&args.url, args.source.as_deref())?;
    let rating = ctx
        .client
        .scrape(&target)
        .await
        .with_context(|| format!("failed to scrape {}", target.url))?;

    output(
        &FetchResponse {
            url: target.url,
            source: target.source,
            rating: rating.formatted_score(),
            r_count: rating.formatted_count(),
        },
        flags.format,
    )
}

fn build_target(url: &str, source: Option<&str>) -> anyhow::Result<ScrapeTarget> {
    let source = match source {
        Some(name) => name.parse::<RatingSource>()?,
        None => RatingSource::from_url(url).with_context(|| {
            format!("cannot infer rating source from '{url}'; pass --source goodreads|royalroad")
        })?,
    };

    Ok(ScrapeTarget {
        url: canonical_link(url),
        source,
    })
}
