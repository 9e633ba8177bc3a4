use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tscat::cli::{Arguments, Command, ExitStatus};

fn report_error(err: &anyhow::Error) -> ExitCode {
    eprintln!("{} {:#}", "error:".bold().red(), err);
    ExitStatus::Error.into()
}

fn main() -> ExitCode {
    let args = Arguments::parse();

    // The MCP server owns stdio, so it runs outside the report pipeline.
    if matches!(args.command, Some(Command::Serve)) {
        return match tscat::mcp::run_server() {
            Ok(()) => ExitStatus::Success.into(),
            Err(err) => report_error(&err),
        };
    }

    tscat::cli::run_cli(args).unwrap_or_else(|err| report_error(&err))
}
