use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, check::check, init::init, lookup::lookup, normalize::normalize,
        stats::stats,
    },
};

/// Dispatch to the command handler.
///
/// # Returns
/// - `Ok(CommandResult)` with error/warning counts and exit behavior
/// - `Err` if the command fails (e.g., invalid config)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Stats(cmd)) => stats(cmd),
        Some(Command::Normalize(cmd)) => normalize(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
