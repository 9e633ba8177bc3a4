//! Entries still marked `type="unfinished"`.

use crate::{
    catalog::{Catalog, TranslationStatus},
    core::{CheckContext, MessageContext},
    issues::UnfinishedIssue,
    rules::helpers::check_catalogs,
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    check_catalogs(ctx, check_unfinished, |issue| &issue.context)
}

pub fn check_unfinished(catalog: &Catalog) -> Vec<UnfinishedIssue> {
    catalog
        .messages()
        .filter(|(_, message)| message.status() == TranslationStatus::Unfinished)
        .map(|(context_name, message)| UnfinishedIssue {
            context: MessageContext::of(catalog, context_name, message),
            has_draft: !message.translation.value.is_empty(),
        })
        .collect()
}
