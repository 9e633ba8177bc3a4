//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run integrity rules over catalogs
//! - `lookup`: Resolve a message the way an application would
//! - `stats`: Completion statistics per catalog
//! - `normalize`: Rewrite catalogs in canonical layout
//! - `init`: Initialize a `.tscatrc.json` configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::issues::Rule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Normalize(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all catalog commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root: where .tscatrc.json is searched and includes are resolved
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Catalog file to use instead of scanning the configured includes
    /// (can be repeated)
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalogs: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    EmptySource,
    EmptyTranslation,
    PlaceholderMismatch,
    NumerusForms,
    DuplicateKey,
    Unfinished,
    SuspiciousText,
    AcceleratorMismatch,
    PunctuationMismatch,
    LanguageMismatch,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::EmptySource,
            CheckRule::EmptyTranslation,
            CheckRule::PlaceholderMismatch,
            CheckRule::NumerusForms,
            CheckRule::DuplicateKey,
            CheckRule::Unfinished,
            CheckRule::SuspiciousText,
            CheckRule::AcceleratorMismatch,
            CheckRule::PunctuationMismatch,
            CheckRule::LanguageMismatch,
        ]
    }

    /// Issue rule id produced by this check.
    pub fn rule(self) -> Rule {
        match self {
            CheckRule::EmptySource => Rule::EmptySource,
            CheckRule::EmptyTranslation => Rule::EmptyTranslation,
            CheckRule::PlaceholderMismatch => Rule::PlaceholderMismatch,
            CheckRule::NumerusForms => Rule::NumerusForms,
            CheckRule::DuplicateKey => Rule::DuplicateKey,
            CheckRule::Unfinished => Rule::Unfinished,
            CheckRule::SuspiciousText => Rule::SuspiciousText,
            CheckRule::AcceleratorMismatch => Rule::AcceleratorMismatch,
            CheckRule::PunctuationMismatch => Rule::PunctuationMismatch,
            CheckRule::LanguageMismatch => Rule::LanguageMismatch,
        }
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Source text (the lookup key)
    pub source: String,

    /// Context name, e.g. QMessageBox
    #[arg(long)]
    pub context: String,

    /// Disambiguation comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Count for numerus messages; replaces %n
    #[arg(short = 'n', long = "count")]
    pub count: Option<u64>,

    /// Value for %1, %2, ... in order (can be repeated)
    #[arg(long = "arg", value_name = "VALUE")]
    pub args: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct NormalizeCommand {
    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for integrity issues (placeholders, plural forms, duplicates, ...)
    Check(CheckCommand),
    /// Look up a translation with source fallback
    Lookup(LookupCommand),
    /// Show completion statistics per catalog
    Stats(StatsCommand),
    /// Rewrite catalogs in canonical lupdate layout
    Normalize(NormalizeCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
