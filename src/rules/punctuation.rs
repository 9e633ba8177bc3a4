//! Sentence-final punctuation kept between source and translation.

use crate::{
    catalog::{Catalog, TranslationStatus, TranslationValue},
    core::{CheckContext, MessageContext},
    issues::PunctuationMismatchIssue,
    rules::helpers::check_catalogs,
};

pub fn check_punctuation_issues(ctx: &CheckContext) -> Vec<PunctuationMismatchIssue> {
    check_catalogs(ctx, check_punctuation, |issue| &issue.context)
}

pub fn check_punctuation(catalog: &Catalog) -> Vec<PunctuationMismatchIssue> {
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
        let expected = ending_punctuation(&message.source);
        let found = ending_punctuation(text);
        if expected != found {
            issues.push(PunctuationMismatchIssue {
                context: MessageContext::of(catalog, context_name, message),
                expected: describe(expected).to_string(),
                found: describe(found).to_string(),
            });
        }
    }

    issues
}

/// Normalized final punctuation of `text`, if any. `...` and `…` are the
/// same ellipsis; full-width forms map to their ASCII counterparts.
pub fn ending_punctuation(text: &str) -> Option<&'static str> {
    let text = text.trim_end();
    if text.ends_with("...") || text.ends_with('…') {
        return Some("…");
    }
    match text.chars().last()? {
        ':' | '：' => Some(":"),
        '.' | '。' => Some("."),
        '?' | '？' => Some("?"),
        '!' | '！' => Some("!"),
        ';' | '；' => Some(";"),
        _ => None,
    }
}

fn describe(punctuation: Option<&str>) -> &str {
    punctuation.unwrap_or("none")
}
