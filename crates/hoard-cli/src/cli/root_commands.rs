use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Scrape current ratings and write them into the book lists.
    Refresh(RefreshArgs),
    /// List the pages a refresh would scrape.
    Targets(TargetsArgs),
    /// Scrape a single book page and print its rating.
    Fetch(FetchArgs),
}

/// Arguments for `hoard refresh`.
#[derive(Clone, Debug, Args)]
pub struct RefreshArgs {
    /// Book list to refresh (repeatable; defaults to catalog.files).
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<String>,
    /// Scrape and report, but leave the files untouched.
    #[arg(long)]
    pub dry_run: bool,
    /// Seconds between page requests (overrides scrape.delay_secs).
    #[arg(long, value_name = "SECS")]
    pub delay: Option<u64>,
}

/// Arguments for `hoard targets`.
#[derive(Clone, Debug, Args)]
pub struct TargetsArgs {
    /// Book list to read (repeatable; defaults to catalog.files).
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<String>,
}

/// Arguments for `hoard fetch`.
#[derive(Clone, Debug, Args)]
pub struct FetchArgs {
    /// Goodreads or Royal Road page URL.
    pub url: String,
    /// Site parser to use: goodreads or royalroad (inferred from the host when omitted).
    #[arg(long)]
    pub source: Option<String>,
}
