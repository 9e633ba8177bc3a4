//! Placeholder consistency between source and finished translations.
//!
//! Qt substitutes `%1`..`%99` positionally, so a translation may reorder
//! them but must keep the same set. In numerus forms `%n` may be dropped
//! (e.g. a singular form spelling out "one").

use std::collections::BTreeSet;

use crate::{
    catalog::{
        Catalog, Message, TranslationStatus, TranslationValue,
        placeholders::{numbered_placeholder_set, placeholder_set},
    },
    core::{CheckContext, MessageContext},
    issues::PlaceholderMismatchIssue,
    rules::helpers::check_catalogs,
};

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderMismatchIssue> {
    check_catalogs(ctx, check_placeholders, |issue| &issue.context)
}

pub fn check_placeholders(catalog: &Catalog) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for (context_name, message) in catalog.messages() {
        if message.status() != TranslationStatus::Finished {
            continue;
        }
        match &message.translation.value {
            TranslationValue::Single(text) => {
                if text.is_empty() {
                    continue;
                }
                let expected = placeholder_set(&message.source);
                let found = placeholder_set(text);
                if let Some(issue) = compare(catalog, context_name, message, &expected, &found, None)
                {
                    issues.push(issue);
                }
            }
            TranslationValue::Plural(forms) => {
                let source_has_count = placeholder_set(&message.source).contains("%n");
                let expected = numbered_placeholder_set(&message.source);
                for (index, form) in forms.iter().enumerate() {
                    if form.is_empty() {
                        continue;
                    }
                    // %n may be dropped from a form, but not introduced.
                    let mut found = placeholder_set(form);
                    if source_has_count {
                        found.remove("%n");
                    }
                    if let Some(issue) =
                        compare(catalog, context_name, message, &expected, &found, Some(index))
                    {
                        issues.push(issue);
                    }
                }
            }
        }
    }

    issues
}

fn compare(
    catalog: &Catalog,
    context_name: &str,
    message: &Message,
    expected: &BTreeSet<String>,
    found: &BTreeSet<String>,
    form: Option<usize>,
) -> Option<PlaceholderMismatchIssue> {
    if expected == found {
        return None;
    }
    Some(PlaceholderMismatchIssue {
        context: MessageContext::of(catalog, context_name, message),
        missing: expected.difference(found).cloned().collect(),
        unexpected: found.difference(expected).cloned().collect(),
        form,
    })
}
