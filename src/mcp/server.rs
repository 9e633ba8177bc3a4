use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    catalog::{CatalogStats, placeholders::substitute},
    config::load_config,
    core::CheckContext,
    issues::{Rule, Severity},
    rules::run_rules,
};

use super::types::{
    CatalogInfo, CatalogsResult, ConfigDto, ConfigValues, GetConfigParams, IssueItem,
    IssuesScanResult, ListCatalogsParams, LookupItem, LookupParams, LookupResult, Pagination,
    ParseErrorItem, RuleStats, ScanIssuesParams, ScanOverviewParams, ScanOverviewResult,
};

#[derive(Clone)]
pub struct TsCatMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TsCatMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn load_context(project_root_path: &str) -> Result<CheckContext, McpError> {
    CheckContext::load(Path::new(project_root_path), &[], false)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_router]
impl TsCatMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current tscat configuration
    #[tool(description = "Get the current tscat configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// List catalogs with their language and completion
    #[tool(
        description = "List the .ts catalogs of the project with language, message counts and completion. Catalogs that fail to parse are listed under parseErrors."
    )]
    pub async fn list_catalogs(
        &self,
        params: Parameters<ListCatalogsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let catalogs = ctx
            .catalogs()
            .iter()
            .map(|catalog| {
                CatalogInfo::new(
                    catalog.file_path.clone(),
                    catalog.language.clone(),
                    catalog.source_language.clone(),
                    &CatalogStats::from_catalog(catalog),
                )
            })
            .collect();

        let parse_errors = ctx
            .parse_errors()
            .iter()
            .map(|e| ParseErrorItem {
                file_path: e.file_path.clone(),
                error: e.error.clone(),
            })
            .collect();

        json_result(&CatalogsResult {
            catalogs,
            parse_errors,
        })
    }

    /// Get overview statistics of all catalog issues
    #[tool(
        description = "Get issue counts per rule without detailed items. Use this first to understand the overall state before diving into details."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;
        let issues = run_rules(&ctx, &[]);

        let mut rules: Vec<RuleStats> = Vec::new();
        for rule in Rule::ALL {
            let (errors, warnings) = issues
                .iter()
                .filter(|i| i.rule() == rule)
                .fold((0, 0), |(e, w), i| match i.severity() {
                    Severity::Error => (e + 1, w),
                    Severity::Warning => (e, w + 1),
                });
            if errors + warnings > 0 {
                rules.push(RuleStats {
                    rule: rule.to_string(),
                    error_count: errors,
                    warning_count: warnings,
                });
            }
        }

        json_result(&ScanOverviewResult {
            catalog_count: ctx.files.len(),
            error_count: rules.iter().map(|r| r.error_count).sum(),
            warning_count: rules.iter().map(|r| r.warning_count).sum(),
            rules,
        })
    }

    /// Scan for catalog issues, optionally restricted to one rule
    #[tool(
        description = "List catalog issues with file, line, context and message. Optionally filter by rule id (e.g. \"unfinished\", \"placeholder-mismatch\"). Returns paginated list."
    )]
    pub async fn scan_issues(
        &self,
        params: Parameters<ScanIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params.limit.map(|v| v as usize).unwrap_or(20).min(100);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let rule = params
            .rule
            .as_deref()
            .map(str::parse::<Rule>)
            .transpose()
            .map_err(|e| McpError::invalid_params(e, None))?;

        let ctx = load_context(&params.project_root_path)?;

        let selection: Vec<Rule> = rule.into_iter().collect();
        let mut issues = run_rules(&ctx, &selection);
        // Parse errors are always part of a run.
        if let Some(rule) = rule {
            issues.retain(|i| i.rule() == rule);
        }
        issues.sort();

        let total_count = issues.len();

        let items: Vec<IssueItem> = issues
            .iter()
            .skip(offset)
            .take(limit)
            .map(IssueItem::from)
            .collect();

        let has_more = offset + items.len() < total_count;

        json_result(&IssuesScanResult {
            total_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Look up a translation in every catalog
    #[tool(
        description = "Look up the translation of a source text in every catalog, with the same fallback to source as the Qt runtime. Pass count for numerus entries and args for %1..%99."
    )]
    pub async fn lookup(&self, params: Parameters<LookupParams>) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_context(&params.project_root_path)?;
        let args: Vec<&str> = params.args.iter().map(String::as_str).collect();

        let mut results = Vec::new();
        let mut skipped = Vec::new();

        for catalog in ctx.catalogs() {
            let Some(lookup) = ctx.lookup(
                catalog,
                &params.context,
                &params.source,
                params.comment.as_deref(),
                params.count,
            ) else {
                skipped.push(catalog.file_path.clone());
                continue;
            };

            results.push(LookupItem::new(
                catalog.file_path.clone(),
                catalog.language.clone(),
                substitute(&lookup.text, &args),
                &lookup.outcome,
            ));
        }

        json_result(&LookupResult { results, skipped })
    }
}

#[tool_handler]
impl ServerHandler for TsCatMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tscat MCP inspects Qt Linguist .ts translation catalogs.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. list_catalogs - List catalogs with language and completion\n\
                 3. scan_overview - Get issue counts per rule\n\
                 4. scan_issues - Get detailed issues, optionally for one rule (paginated)\n\
                 5. lookup - Resolve a source text the way the Qt runtime would\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the overall state\n\
                 2. Fix errors first (placeholder-mismatch, numerus-forms, duplicate-key, parse-error)\n\
                 3. Then review warnings such as unfinished and suspicious-text\n\
                 4. Use lookup to confirm what users will see for a given entry"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TsCatMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
