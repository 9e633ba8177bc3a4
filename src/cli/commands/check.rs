use anyhow::{Ok, Result};

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{core::CheckContext, issues::Rule, rules::run_rules};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let rules: Vec<Rule> = cmd.checks.iter().map(|c| c.rule()).collect();
    let issues = run_rules(&ctx, &rules);

    Ok(finish(CommandSummary::Check, issues, ctx.files.len(), true))
}
