//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format. Separate from core logic so
//! tscat can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, InitSummary, LookupSummary, NormalizeSummary, StatsSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format: one block per issue, then a summary.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(catalogs: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} - no issues found",
            catalogs,
            if catalogs == 1 { "catalog" } else { "catalogs" }
        )
        .green()
    );
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} catalog(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    let stdout = &mut io::stdout().lock();
    print_command_output(result, stdout);
    print_parse_warning(result.parse_error_count, verbose);
}

fn print_command_output<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check => {
            if result.issues.is_empty() {
                print_success_to(result.catalogs_checked, writer);
            } else {
                report_to(&result.issues, writer);
            }
        }
        CommandSummary::Lookup(summary) => {
            report_to(&result.issues, writer);
            print_lookup_to(summary, writer);
        }
        CommandSummary::Stats(summary) => {
            report_to(&result.issues, writer);
            print_stats_to(summary, writer);
        }
        CommandSummary::Normalize(summary) => {
            report_to(&result.issues, writer);
            print_normalize_to(summary, writer);
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

// ============================================================
// Issues
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    match issue.location() {
        ReportLocation::Message(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                ctx.col()
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Command Output
// ============================================================

fn print_lookup_to<W: Write>(summary: &LookupSummary, writer: &mut W) {
    if summary.results.is_empty() && summary.skipped.is_empty() {
        let _ = writeln!(writer, "{} no catalogs found", "warning:".bold().yellow());
        return;
    }

    for result in &summary.results {
        let label = match &result.language {
            Some(language) => format!("{} ({})", result.file_path, language),
            None => result.file_path.clone(),
        };
        let _ = writeln!(writer, "{}: {}", label.bold(), result.lookup.text);
        if let Some(reason) = result.lookup.fallback_reason() {
            let _ = writeln!(
                writer,
                "  {} {} fallback to source ({})",
                "=".blue(),
                "note:".bold(),
                reason
            );
        }
    }

    for path in &summary.skipped {
        let _ = writeln!(
            writer,
            "{}: {}",
            path.bold(),
            "skipped (no plural rule for its language)".dimmed()
        );
    }
}

const STATS_HEADERS: [&str; 9] = [
    "Catalog",
    "Language",
    "Contexts",
    "Messages",
    "Finished",
    "Unfinished",
    "Obsolete",
    "Numerus",
    "Done",
];

fn print_stats_to<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.rows.is_empty() {
        let _ = writeln!(writer, "{} no catalogs found", "warning:".bold().yellow());
        return;
    }

    let rows: Vec<[String; 9]> = summary
        .rows
        .iter()
        .map(|row| {
            let s = &row.stats;
            [
                row.file_path.clone(),
                row.language.clone().unwrap_or_else(|| "-".to_string()),
                s.contexts.to_string(),
                s.messages.to_string(),
                s.finished.to_string(),
                s.unfinished.to_string(),
                s.retired.to_string(),
                s.numerus.to_string(),
                format!("{:.1}%", s.completion()),
            ]
        })
        .collect();

    let mut widths = STATS_HEADERS.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let header = STATS_HEADERS.map(str::to_string);
    let _ = writeln!(writer, "{}", format_row(&header, &widths).bold());
    for row in &rows {
        let _ = writeln!(writer, "{}", format_row(row, &widths));
    }
}

/// First two columns left-aligned, numbers right-aligned.
fn format_row(cells: &[String; 9], widths: &[usize; 9]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            let padding = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(cell.as_str())));
            if i < 2 {
                format!("{}{}", cell, padding)
            } else {
                format!("{}{}", padding, cell)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn print_normalize_to<W: Write>(summary: &NormalizeSummary, writer: &mut W) {
    for path in &summary.changed {
        let verb = if summary.is_apply {
            "rewritten"
        } else {
            "would rewrite"
        };
        let _ = writeln!(writer, "{}: {}", path.bold(), verb);
    }

    if summary.changed.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} {} already canonical",
                summary.unchanged_count,
                if summary.unchanged_count == 1 {
                    "catalog"
                } else {
                    "catalogs"
                }
            )
            .green()
        );
    } else if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Normalized {} catalog(s)", summary.changed.len()).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} catalog(s) not in canonical layout (run with {} to rewrite)",
            summary.changed.len(),
            "--apply".cyan()
        );
    }
}

fn print_init(summary: &InitSummary) {
    if let Some(error) = &summary.error {
        eprintln!("{} {}", "Error:".bold().red(), error);
    } else if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
