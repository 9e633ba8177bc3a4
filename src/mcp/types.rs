use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{CatalogStats, LookupOutcome},
    config::Config,
    issues::{Issue, Report, ReportLocation},
};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCatalogsParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Only return issues of this rule (e.g. "placeholder-mismatch")
    pub rule: Option<String>,
    /// Number of items to skip (default 0)
    pub offset: Option<u32>,
    /// Maximum number of items to return (default 20, max 100)
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Qt context name, e.g. "QMessageBox"
    pub context: String,
    /// Source text exactly as written in the catalog
    pub source: String,
    /// Disambiguation comment
    pub comment: Option<String>,
    /// Count for numerus entries; also substituted for %n
    pub count: Option<u64>,
    /// Values substituted for %1..%99
    #[serde(default)]
    pub args: Vec<String>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_contexts: Vec<String>,
    pub suspicious_patterns: Vec<String>,
    pub plural_forms: std::collections::BTreeMap<String, usize>,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            includes: c.includes,
            ignores: c.ignores,
            ignore_contexts: c.ignore_contexts,
            suspicious_patterns: c.suspicious_patterns,
            plural_forms: c.plural_forms,
        }
    }
}

// ============================================================
// Catalog Types (list_catalogs)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogsResult {
    pub catalogs: Vec<CatalogInfo>,
    pub parse_errors: Vec<ParseErrorItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub file_path: String,
    pub language: Option<String>,
    pub source_language: Option<String>,
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    /// Obsolete and vanished entries
    pub retired: usize,
    pub numerus: usize,
    /// Finished share of active entries, in percent
    pub completion: f64,
}

impl CatalogInfo {
    pub fn new(
        file_path: String,
        language: Option<String>,
        source_language: Option<String>,
        stats: &CatalogStats,
    ) -> Self {
        Self {
            file_path,
            language,
            source_language,
            contexts: stats.contexts,
            messages: stats.messages,
            finished: stats.finished,
            unfinished: stats.unfinished,
            retired: stats.retired,
            numerus: stats.numerus,
            completion: (stats.completion() * 10.0).round() / 10.0,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorItem {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Scan Overview Types (scan_overview)
// ============================================================

/// Result of scan_overview operation - statistics only
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub catalog_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    /// Rules with at least one issue, in rule order
    pub rules: Vec<RuleStats>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleStats {
    pub rule: String,
    pub error_count: usize,
    pub warning_count: usize,
}

// ============================================================
// Issue Scan Types (scan_issues)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuesScanResult {
    pub total_count: usize,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Context name, with the disambiguation comment when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        let (line, context) = match issue.location() {
            ReportLocation::Message(ctx) => (Some(ctx.line()), Some(ctx.qualified_context())),
            ReportLocation::File { .. } => (None, None),
        };
        Self {
            rule: issue.rule().to_string(),
            severity: issue.severity().to_string(),
            file_path: issue.file_path().to_string(),
            line,
            context,
            message: issue.message(),
            details: issue.details(),
        }
    }
}

// ============================================================
// Lookup Types (lookup)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub results: Vec<LookupItem>,
    /// Catalogs skipped because their language has no plural rule
    pub skipped: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupItem {
    pub file_path: String,
    pub language: Option<String>,
    pub text: String,
    pub translated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

impl LookupItem {
    pub fn new(
        file_path: String,
        language: Option<String>,
        text: String,
        outcome: &LookupOutcome,
    ) -> Self {
        let fallback_reason = match outcome {
            LookupOutcome::Translated => None,
            LookupOutcome::Fallback(reason) => Some(reason.to_string()),
        };
        Self {
            file_path,
            language,
            text,
            translated: fallback_reason.is_none(),
            fallback_reason,
        }
    }
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
