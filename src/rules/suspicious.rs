//! Garbled marker sequences in translations.
//!
//! Machine-assisted translation sometimes leaves tokens such as `{2d?}`
//! behind. Matches are only reported; the text is never rewritten.

use regex::Regex;

use crate::{
    catalog::Catalog,
    core::{CheckContext, MessageContext},
    issues::SuspiciousTextIssue,
    rules::helpers::check_catalogs,
};

pub fn check_suspicious_text_issues(ctx: &CheckContext) -> Vec<SuspiciousTextIssue> {
    check_catalogs(
        ctx,
        |catalog| check_suspicious_text(catalog, ctx.suspicious_patterns()),
        |issue| &issue.context,
    )
}

/// Translations (finished or unfinished) matching any of `patterns`.
pub fn check_suspicious_text(catalog: &Catalog, patterns: &[Regex]) -> Vec<SuspiciousTextIssue> {
    let mut issues = Vec::new();

    for (context_name, message) in catalog.messages() {
        if message.status().is_retired() {
            continue;
        }
        let matches: Vec<String> = message
            .translation
            .value
            .texts()
            .into_iter()
            .flat_map(|text| {
                patterns
                    .iter()
                    .flat_map(move |re| re.find_iter(text).map(|m| m.as_str().to_string()))
            })
            .collect();
        if !matches.is_empty() {
            issues.push(SuspiciousTextIssue {
                context: MessageContext::of(catalog, context_name, message),
                matches,
            });
        }
    }

    issues
}
