//! `<source>` elements without text.

use crate::{
    catalog::Catalog,
    core::{CheckContext, MessageContext},
    issues::EmptySourceIssue,
    rules::helpers::check_catalogs,
};

pub fn check_empty_source_issues(ctx: &CheckContext) -> Vec<EmptySourceIssue> {
    check_catalogs(ctx, check_empty_source, |issue| &issue.context)
}

/// Messages whose source is empty or whitespace only. Such entries can
/// never be looked up.
pub fn check_empty_source(catalog: &Catalog) -> Vec<EmptySourceIssue> {
    catalog
        .messages()
        .filter(|(_, message)| message.source.trim().is_empty())
        .map(|(context_name, message)| EmptySourceIssue {
            context: MessageContext::of(catalog, context_name, message),
        })
        .collect()
}
