//! Numerus (plural) form checks.

use crate::{
    catalog::{Catalog, PluralRule, TranslationStatus, TranslationValue},
    core::{CheckContext, MessageContext},
    issues::{NumerusFormsIssue, NumerusProblem},
    rules::helpers::check_catalogs,
};

pub fn check_numerus_issues(ctx: &CheckContext) -> Vec<NumerusFormsIssue> {
    check_catalogs(
        ctx,
        |catalog| check_numerus(catalog, ctx.plural_rule(catalog)),
        |issue| &issue.context,
    )
}

/// Check numerus messages against `rule`.
///
/// A wrong form count is reported when the language's rule is known. Every
/// empty form is reported; the issue is an error for finished entries and a
/// warning for unfinished ones. Unfinished entries without any form are
/// left to the `unfinished` rule.
pub fn check_numerus(catalog: &Catalog, rule: Option<PluralRule>) -> Vec<NumerusFormsIssue> {
    let mut issues = Vec::new();

    for (context_name, message) in catalog.messages() {
        if !message.numerus {
            continue;
        }
        let status = message.status();
        if status.is_retired() {
            continue;
        }
        let forms: Vec<&str> = match &message.translation.value {
            TranslationValue::Plural(forms) => forms.iter().map(String::as_str).collect(),
            TranslationValue::Single(text) if text.is_empty() => Vec::new(),
            TranslationValue::Single(text) => vec![text.as_str()],
        };
        let finished = status == TranslationStatus::Finished;
        if forms.is_empty() && !finished {
            continue;
        }

        let context = MessageContext::of(catalog, context_name, message);

        if let Some(rule) = rule
            && forms.len() != rule.forms()
        {
            issues.push(NumerusFormsIssue {
                context: context.clone(),
                problem: NumerusProblem::WrongCount {
                    expected: rule.forms(),
                    actual: forms.len(),
                },
            });
        }

        for (index, form) in forms.iter().enumerate() {
            if form.is_empty() {
                issues.push(NumerusFormsIssue {
                    context: context.clone(),
                    problem: NumerusProblem::EmptyForm { index, finished },
                });
            }
        }
    }

    issues
}
