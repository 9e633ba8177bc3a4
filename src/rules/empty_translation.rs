//! Finished translations without text.

use crate::{
    catalog::{Catalog, TranslationStatus, TranslationValue},
    core::{CheckContext, MessageContext},
    issues::EmptyTranslationIssue,
    rules::helpers::check_catalogs,
};

pub fn check_empty_translation_issues(ctx: &CheckContext) -> Vec<EmptyTranslationIssue> {
    check_catalogs(ctx, check_empty_translation, |issue| &issue.context)
}

/// Finished, non-numerus entries with an empty translation. Numerus entries
/// are covered form by form in `numerus`.
pub fn check_empty_translation(catalog: &Catalog) -> Vec<EmptyTranslationIssue> {
    catalog
        .messages()
        .filter(|(_, message)| {
            message.status() == TranslationStatus::Finished
                && matches!(&message.translation.value, TranslationValue::Single(text) if text.is_empty())
        })
        .map(|(context_name, message)| EmptyTranslationIssue {
            context: MessageContext::of(catalog, context_name, message),
        })
        .collect()
}
