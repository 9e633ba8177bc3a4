use crate::{
    catalog::{CatalogStats, Lookup},
    issues::Issue,
};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Lookup(LookupSummary),
    Stats(StatsSummary),
    Normalize(NormalizeSummary),
    Init(InitSummary),
}

/// Lookup result in one catalog.
#[derive(Debug)]
pub struct CatalogLookup {
    pub file_path: String,
    pub language: Option<String>,
    pub lookup: Lookup,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub results: Vec<CatalogLookup>,
    /// Catalogs skipped because their language has no plural rule.
    pub skipped: Vec<String>,
}

#[derive(Debug)]
pub struct CatalogStatsRow {
    pub file_path: String,
    pub language: Option<String>,
    pub stats: CatalogStats,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub rows: Vec<CatalogStatsRow>,
}

#[derive(Debug)]
pub struct NormalizeSummary {
    /// Catalogs whose layout differs from the canonical one.
    pub changed: Vec<String>,
    pub unchanged_count: usize,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running a tscat command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// Issues found by the command, sorted.
    pub issues: Vec<Issue>,
    /// Number of catalogs that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalogs that were read.
    pub catalogs_checked: usize,
}
