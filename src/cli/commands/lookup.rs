use anyhow::{Ok, Result};
use colored::Colorize;

use super::super::args::LookupCommand;
use super::{
    CatalogLookup, LookupSummary,
    helper::finish,
    {CommandResult, CommandSummary},
};
use crate::{catalog::placeholders::substitute, core::CheckContext, issues::Issue};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let args: Vec<&str> = cmd.args.iter().map(String::as_str).collect();

    let mut results = Vec::new();
    let mut skipped = Vec::new();

    for catalog in ctx.catalogs() {
        let Some(mut lookup) = ctx.lookup(
            catalog,
            &cmd.context,
            &cmd.source,
            cmd.comment.as_deref(),
            cmd.count,
        ) else {
            if ctx.verbose {
                eprintln!(
                    "{} no plural rule for {} (set pluralForms in the config)",
                    "warning:".bold().yellow(),
                    catalog.file_path
                );
            }
            skipped.push(catalog.file_path.clone());
            continue;
        };
        lookup.text = substitute(&lookup.text, &args);

        results.push(CatalogLookup {
            file_path: catalog.file_path.clone(),
            language: catalog.language.clone(),
            lookup,
        });
    }

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Lookup(LookupSummary {
            results,
            skipped,
        }),
        issues,
        ctx.files.len(),
        true,
    ))
}
