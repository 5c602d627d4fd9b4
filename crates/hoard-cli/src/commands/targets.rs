use hoard_core::plan_targets;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TargetsArgs;
use crate::commands::shared::load_catalogs;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(args: &TargetsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let catalogs = load_catalogs(&args.files, &ctx.config)?;
    let targets = plan_targets(catalogs.iter().flat_map(|c| c.books.iter()));
    output(&targets, flags.format)
}
