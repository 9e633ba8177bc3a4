use std::{fs, path::Path};

use anyhow::{Context as _, Ok, Result};

use super::super::args::NormalizeCommand;
use super::{
    NormalizeSummary,
    helper::finish,
    {CommandResult, CommandSummary},
};
use crate::{
    catalog::{catalog_to_string, write_catalog_file},
    core::CheckContext,
    issues::Issue,
};

/// Compare each catalog with its canonical serialization; rewrite the ones
/// that differ when `--apply` is given. A dry run never fails.
pub fn normalize(cmd: NormalizeCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let mut changed = Vec::new();
    let mut unchanged_count = 0;

    for catalog in ctx.catalogs() {
        let path = Path::new(&catalog.file_path);
        let current = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", catalog.file_path))?;

        if current == catalog_to_string(catalog) {
            unchanged_count += 1;
            continue;
        }

        if cmd.apply {
            write_catalog_file(catalog, path)?;
        }
        changed.push(catalog.file_path.clone());
    }

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Normalize(NormalizeSummary {
            changed,
            unchanged_count,
            is_apply: cmd.apply,
        }),
        issues,
        ctx.files.len(),
        cmd.apply,
    ))
}
