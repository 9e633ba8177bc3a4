//! Issue types for catalog checks.
//!
//! Each issue is self-contained with everything the reporters (CLI, MCP)
//! need to display it.

use enum_dispatch::enum_dispatch;

use crate::core::MessageContext;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    EmptySource,
    EmptyTranslation,
    PlaceholderMismatch,
    NumerusForms,
    DuplicateKey,
    Unfinished,
    SuspiciousText,
    AcceleratorMismatch,
    PunctuationMismatch,
    LanguageMismatch,
    ParseError,
}

impl Rule {
    pub const ALL: [Rule; 11] = [
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
        Rule::ParseError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::EmptySource => "empty-source",
            Rule::EmptyTranslation => "empty-translation",
            Rule::PlaceholderMismatch => "placeholder-mismatch",
            Rule::NumerusForms => "numerus-forms",
            Rule::DuplicateKey => "duplicate-key",
            Rule::Unfinished => "unfinished",
            Rule::SuspiciousText => "suspicious-text",
            Rule::AcceleratorMismatch => "accelerator-mismatch",
            Rule::PunctuationMismatch => "punctuation-mismatch",
            Rule::LanguageMismatch => "language-mismatch",
            Rule::ParseError => "parse-error",
        }
    }
}

impl std::str::FromStr for Rule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| format!("unknown rule: {}", s))
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================
// Issue Types - Messages (MessageContext)
// ============================================================

/// `<source>` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptySourceIssue {
    pub context: MessageContext,
}

/// Finished, non-numerus translation with no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub context: MessageContext,
}

/// Placeholders of a finished translation differ from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: MessageContext,
    /// In the source but not in the translation.
    pub missing: Vec<String>,
    /// In the translation but not in the source.
    pub unexpected: Vec<String>,
    /// Numerus form index, for plural translations.
    pub form: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumerusProblem {
    /// Form count differs from what the catalog language requires.
    WrongCount { expected: usize, actual: usize },
    /// A form has no text.
    EmptyForm { index: usize, finished: bool },
}

/// Numerus translation that does not fit the language's plural rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumerusFormsIssue {
    pub context: MessageContext,
    pub problem: NumerusProblem,
}

/// Same (context, source, comment) key defined more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyIssue {
    pub context: MessageContext,
    /// Line of the first definition.
    pub first_line: usize,
}

/// Translation marked `type="unfinished"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: MessageContext,
    /// True when a draft text is present.
    pub has_draft: bool,
}

/// Translation contains marker sequences of garbled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspiciousTextIssue {
    pub context: MessageContext,
    pub matches: Vec<String>,
}

/// Keyboard mnemonic (`&x`) present on only one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceleratorMismatchIssue {
    pub context: MessageContext,
    /// True when the source has the mnemonic and the translation lacks it.
    pub missing_in_translation: bool,
}

/// Source and translation end with different punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationMismatchIssue {
    pub context: MessageContext,
    pub expected: String,
    pub found: String,
}

// ============================================================
// Issue Types - Files
// ============================================================

/// File name locale and `language` attribute disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMismatchIssue {
    pub file_path: String,
    /// `language` attribute, if present.
    pub declared: Option<String>,
    /// Language derived from the file name.
    pub expected: Option<String>,
}

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found during checks.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    EmptySource(EmptySourceIssue),
    EmptyTranslation(EmptyTranslationIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    NumerusForms(NumerusFormsIssue),
    DuplicateKey(DuplicateKeyIssue),
    Unfinished(UnfinishedIssue),
    SuspiciousText(SuspiciousTextIssue),
    AcceleratorMismatch(AcceleratorMismatchIssue),
    PunctuationMismatch(PunctuationMismatchIssue),
    LanguageMismatch(LanguageMismatchIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    /// File the issue belongs to.
    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalog.
    Message(&'a MessageContext),
    /// File-level only (no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported.
///
/// Implemented by all issue types to provide a consistent interface for the
/// report functions. Uses `enum_dispatch` for static dispatch on `Issue`.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source text, error, ...).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for EmptySourceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::EmptySource
    }

    fn details(&self) -> Option<String> {
        Some(format!("in {}", self.context.qualified_context()))
    }
}

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::EmptyTranslation
    }

    fn hint(&self) -> Option<&str> {
        Some("translate the entry or mark it type=\"unfinished\"")
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {}: finished translation is empty",
            self.context.qualified_context()
        ))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::PlaceholderMismatch
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected {}", self.unexpected.join(", ")));
        }
        let form = self
            .form
            .map(|i| format!(" (form {})", i))
            .unwrap_or_default();
        Some(format!(
            "in {}{}: {}",
            self.context.qualified_context(),
            form,
            parts.join("; ")
        ))
    }
}

impl Report for NumerusFormsIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        match self.problem {
            NumerusProblem::WrongCount { .. } => Severity::Error,
            NumerusProblem::EmptyForm { finished: true, .. } => Severity::Error,
            NumerusProblem::EmptyForm { finished: false, .. } => Severity::Warning,
        }
    }

    fn report_rule(&self) -> Rule {
        Rule::NumerusForms
    }

    fn details(&self) -> Option<String> {
        let what = match &self.problem {
            NumerusProblem::WrongCount { expected, actual } => {
                format!("expected {} numerus forms, found {}", expected, actual)
            }
            NumerusProblem::EmptyForm { index, .. } => format!("numerus form {} is empty", index),
        };
        Some(format!("in {}: {}", self.context.qualified_context(), what))
    }
}

impl Report for DuplicateKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::DuplicateKey
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {}: first defined at line {}",
            self.context.qualified_context(),
            self.first_line
        ))
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::Unfinished
    }

    fn details(&self) -> Option<String> {
        let state = if self.has_draft {
            "draft awaiting review"
        } else {
            "not translated"
        };
        Some(format!("in {}: {}", self.context.qualified_context(), state))
    }
}

impl Report for SuspiciousTextIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::SuspiciousText
    }

    fn hint(&self) -> Option<&str> {
        Some("ask a translator to review this entry")
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {}: translation contains {}",
            self.context.qualified_context(),
            self.matches.join(" ")
        ))
    }
}

impl Report for AcceleratorMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::AcceleratorMismatch
    }

    fn details(&self) -> Option<String> {
        let what = if self.missing_in_translation {
            "translation has no & mnemonic"
        } else {
            "translation adds a & mnemonic"
        };
        Some(format!("in {}: {}", self.context.qualified_context(), what))
    }
}

impl Report for PunctuationMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::PunctuationMismatch
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {}: source ends with {}, translation with {}",
            self.context.qualified_context(),
            self.expected,
            self.found
        ))
    }
}

impl Report for LanguageMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        match (&self.declared, &self.expected) {
            (None, _) => "missing language attribute".to_string(),
            (Some(declared), Some(expected)) => {
                format!("language \"{}\" does not match file name ({})", declared, expected)
            }
            (Some(declared), None) => format!("language \"{}\"", declared),
        }
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::LanguageMismatch
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.line(),
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
