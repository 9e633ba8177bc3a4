//! Integrity rules for `.ts` catalogs.
//!
//! Each rule is a pure function over a single `&Catalog` returning its own
//! issue type. The `*_issues` wrappers run the rule over every catalog of a
//! `CheckContext` and drop messages in ignored contexts.
//!
//! ## Module Structure
//!
//! - `helpers`: parallel per-catalog driver
//! - `empty_source`: `<source>` without text
//! - `empty_translation`: finished entries without text
//! - `placeholder`: `%1` / `%n` sets differing between source and translation
//! - `numerus`: plural form count and empty forms
//! - `duplicate`: repeated (context, source, comment) keys
//! - `unfinished`: entries still marked unfinished
//! - `suspicious`: garbled marker sequences in translations
//! - `accelerator`: `&` mnemonics present on one side only
//! - `punctuation`: differing sentence-final punctuation
//! - `language`: `language` attribute vs. file name

pub mod accelerator;
pub mod duplicate;
pub mod empty_source;
pub mod empty_translation;
pub mod helpers;
pub mod language;
pub mod numerus;
pub mod placeholder;
pub mod punctuation;
pub mod suspicious;
pub mod unfinished;

use std::collections::BTreeSet;

use crate::{
    core::CheckContext,
    issues::{Issue, Rule},
};

/// Rules `run_rules` executes by default. `parse-error` is not selectable;
/// parse errors are always reported.
pub const CHECK_RULES: [Rule; 10] = [
    Rule::EmptySource,
    Rule::EmptyTranslation,
    Rule::PlaceholderMismatch,
    Rule::NumerusForms,
    Rule::DuplicateKey,
    Rule::Unfinished,
    Rule::SuspiciousText,
    Rule::AcceleratorMismatch,
    Rule::PunctuationMismatch,
    Rule::LanguageMismatch,
];

/// Run the selected rules (all when `rules` is empty) and add parse errors.
pub fn run_rules(ctx: &CheckContext, rules: &[Rule]) -> Vec<Issue> {
    let selected: BTreeSet<Rule> = if rules.is_empty() {
        CHECK_RULES.into_iter().collect()
    } else {
        rules.iter().copied().collect()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for rule in selected {
        match rule {
            Rule::EmptySource => {
                let issues = empty_source::check_empty_source_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::EmptySource));
            }
            Rule::EmptyTranslation => {
                let issues = empty_translation::check_empty_translation_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::EmptyTranslation));
            }
            Rule::PlaceholderMismatch => {
                let issues = placeholder::check_placeholder_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::PlaceholderMismatch));
            }
            Rule::NumerusForms => {
                let issues = numerus::check_numerus_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::NumerusForms));
            }
            Rule::DuplicateKey => {
                let issues = duplicate::check_duplicate_key_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::DuplicateKey));
            }
            Rule::Unfinished => {
                let issues = unfinished::check_unfinished_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            Rule::SuspiciousText => {
                let issues = suspicious::check_suspicious_text_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::SuspiciousText));
            }
            Rule::AcceleratorMismatch => {
                let issues = accelerator::check_accelerator_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::AcceleratorMismatch));
            }
            Rule::PunctuationMismatch => {
                let issues = punctuation::check_punctuation_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::PunctuationMismatch));
            }
            Rule::LanguageMismatch => {
                let issues = language::check_language_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::LanguageMismatch));
            }
            Rule::ParseError => {}
        }
    }

    all_issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));

    all_issues
}
