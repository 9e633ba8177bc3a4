use anyhow::{Ok, Result};

use super::super::args::StatsCommand;
use super::{
    CatalogStatsRow, StatsSummary,
    helper::finish,
    {CommandResult, CommandSummary},
};
use crate::{catalog::CatalogStats, core::CheckContext, issues::Issue};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let rows = ctx
        .catalogs()
        .iter()
        .map(|catalog| CatalogStatsRow {
            file_path: catalog.file_path.clone(),
            language: catalog.language.clone(),
            stats: CatalogStats::from_catalog(catalog),
        })
        .collect();

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary { rows }),
        issues,
        ctx.files.len(),
        true,
    ))
}
