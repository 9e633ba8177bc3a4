//! Keyboard mnemonics (`&File`) kept on both sides.

use crate::{
    catalog::{Catalog, TranslationStatus, TranslationValue},
    core::{CheckContext, MessageContext},
    issues::AcceleratorMismatchIssue,
    rules::helpers::check_catalogs,
};

pub fn check_accelerator_issues(ctx: &CheckContext) -> Vec<AcceleratorMismatchIssue> {
    check_catalogs(ctx, check_accelerators, |issue| &issue.context)
}

/// Finished singular translations whose mnemonic presence differs from the source.
pub fn check_accelerators(catalog: &Catalog) -> Vec<AcceleratorMismatchIssue> {
    let mut issues = Vec::new();

    for (context_name, message) in catalog.messages() {
        if message.status() != TranslationStatus::Finished {
            continue;
        }
        let TranslationValue::Single(text) = &message.translation.value else {
            continue;
        };
        if text.is_empty() {
            continue;
        }
        let in_source = has_mnemonic(&message.source);
        if in_source != has_mnemonic(text) {
            issues.push(AcceleratorMismatchIssue {
                context: MessageContext::of(catalog, context_name, message),
                missing_in_translation: in_source,
            });
        }
    }

    issues
}

/// True if `text` marks a shortcut letter. `&&` is a literal ampersand and
/// a trailing or space-followed `&` marks nothing.
pub fn has_mnemonic(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '&' {
            continue;
        }
        match chars.peek() {
            Some('&') => {
                chars.next();
            }
            Some(next) if !next.is_whitespace() => return true,
            _ => {}
        }
    }
    false
}
