//! Translation lookup with fallback to the source text.
//!
//! A key resolves to a finished entry's text; anything else (missing entry,
//! unfinished or retired entry, empty text, empty plural form) yields the
//! source string together with the reason.

use super::{
    model::{Catalog, Message, MessageKey, TranslationStatus, TranslationValue},
    placeholders::substitute_count,
    plural::PluralRule,
};

/// Why a lookup returned the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    NotFound,
    Unfinished,
    /// Entry is obsolete or vanished.
    Retired,
    EmptyTranslation,
    /// The selected plural form is empty.
    EmptyForm { index: usize },
    /// The plural rule selected a form the entry does not carry.
    FormOutOfRange { index: usize, forms: usize },
    /// Singular lookup hit a numerus entry, or the reverse.
    NumerusMismatch,
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::NotFound => write!(f, "no entry"),
            FallbackReason::Unfinished => write!(f, "translation unfinished"),
            FallbackReason::Retired => write!(f, "entry is obsolete"),
            FallbackReason::EmptyTranslation => write!(f, "translation is empty"),
            FallbackReason::EmptyForm { index } => write!(f, "plural form {} is empty", index),
            FallbackReason::FormOutOfRange { index, forms } => {
                write!(f, "plural form {} missing ({} present)", index, forms)
            }
            FallbackReason::NumerusMismatch => write!(f, "numerus flag does not match"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Translated,
    Fallback(FallbackReason),
}

/// Result of a lookup: the text to display and how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub text: String,
    pub outcome: LookupOutcome,
}

impl Lookup {
    fn translated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outcome: LookupOutcome::Translated,
        }
    }

    fn fallback(source: &str, reason: FallbackReason) -> Self {
        Self {
            text: source.to_string(),
            outcome: LookupOutcome::Fallback(reason),
        }
    }

    pub fn is_translated(&self) -> bool {
        matches!(self.outcome, LookupOutcome::Translated)
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self.outcome {
            LookupOutcome::Translated => None,
            LookupOutcome::Fallback(reason) => Some(reason),
        }
    }
}

impl Catalog {
    /// Find the entry for a key. When a comment is given and nothing matches,
    /// the comment-less entry is tried, as QTranslator does.
    pub fn resolve(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&Message> {
        self.find(&MessageKey::new(context, source, comment)).or_else(|| {
            comment
                .filter(|c| !c.is_empty())
                .and_then(|_| self.find(&MessageKey::new(context, source, None)))
        })
    }

    /// Look up a singular message.
    pub fn translate(&self, context: &str, source: &str, comment: Option<&str>) -> Lookup {
        let Some(message) = self.resolve(context, source, comment) else {
            return Lookup::fallback(source, FallbackReason::NotFound);
        };
        if let Some(reason) = status_fallback(message.status()) {
            return Lookup::fallback(source, reason);
        }
        match &message.translation.value {
            TranslationValue::Single(text) if text.is_empty() => {
                Lookup::fallback(source, FallbackReason::EmptyTranslation)
            }
            TranslationValue::Single(text) => Lookup::translated(text.as_str()),
            TranslationValue::Plural(_) => Lookup::fallback(source, FallbackReason::NumerusMismatch),
        }
    }

    /// Look up a numerus message for count `n`. `%n` is replaced with the
    /// count in the returned text, whichever text that is.
    pub fn translate_plural(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        n: u64,
        rule: PluralRule,
    ) -> Lookup {
        let mut lookup = self.translate_plural_raw(context, source, comment, n, rule);
        lookup.text = substitute_count(&lookup.text, n);
        lookup
    }

    fn translate_plural_raw(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        n: u64,
        rule: PluralRule,
    ) -> Lookup {
        let Some(message) = self.resolve(context, source, comment) else {
            return Lookup::fallback(source, FallbackReason::NotFound);
        };
        if let Some(reason) = status_fallback(message.status()) {
            return Lookup::fallback(source, reason);
        }
        let TranslationValue::Plural(forms) = &message.translation.value else {
            return Lookup::fallback(source, FallbackReason::NumerusMismatch);
        };

        let index = rule.select(n);
        match forms.get(index) {
            None => Lookup::fallback(
                source,
                FallbackReason::FormOutOfRange {
                    index,
                    forms: forms.len(),
                },
            ),
            Some(form) if form.is_empty() => {
                Lookup::fallback(source, FallbackReason::EmptyForm { index })
            }
            Some(form) => Lookup::translated(form.as_str()),
        }
    }
}

fn status_fallback(status: TranslationStatus) -> Option<FallbackReason> {
    match status {
        TranslationStatus::Finished => None,
        TranslationStatus::Unfinished => Some(FallbackReason::Unfinished),
        TranslationStatus::Obsolete | TranslationStatus::Vanished => Some(FallbackReason::Retired),
    }
}
