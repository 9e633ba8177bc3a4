//! Repeated message keys.

use std::collections::HashMap;

use crate::{
    catalog::{Catalog, MessageKey},
    core::{CheckContext, MessageContext},
    issues::DuplicateKeyIssue,
    rules::helpers::check_catalogs,
};

pub fn check_duplicate_key_issues(ctx: &CheckContext) -> Vec<DuplicateKeyIssue> {
    check_catalogs(ctx, check_duplicate_keys, |issue| &issue.context)
}

/// Every repeated (context, source, comment) triple after the first.
/// Lookups only ever see the first definition.
pub fn check_duplicate_keys(catalog: &Catalog) -> Vec<DuplicateKeyIssue> {
    let mut first_seen: HashMap<MessageKey, usize> = HashMap::new();
    let mut issues = Vec::new();

    for (context_name, message) in catalog.messages() {
        let key = MessageKey::new(context_name, &message.source, message.comment.as_deref());
        match first_seen.get(&key) {
            Some(&first_line) => issues.push(DuplicateKeyIssue {
                context: MessageContext::of(catalog, context_name, message),
                first_line,
            }),
            None => {
                first_seen.insert(key, message.line);
            }
        }
    }

    issues
}
