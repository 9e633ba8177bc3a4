//! In-memory model of a Qt Linguist `.ts` catalog.
//!
//! A [`Catalog`] is built once (by the reader or by hand) and is read-only
//! afterwards. The lookup index is computed at construction, so the context
//! list is only reachable through shared references.

use std::collections::HashMap;

/// Completion state carried by the `type` attribute of `<translation>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TranslationStatus {
    /// No `type` attribute: the translator approved the text.
    #[default]
    Finished,
    /// `type="unfinished"`
    Unfinished,
    /// `type="obsolete"`: the source string no longer exists in the code.
    Obsolete,
    /// `type="vanished"`: like obsolete, written by newer lupdate versions.
    Vanished,
}

impl TranslationStatus {
    /// Parse the value of the `type` attribute.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(Self::Unfinished),
            "obsolete" => Some(Self::Obsolete),
            "vanished" => Some(Self::Vanished),
            "finished" | "" => Some(Self::Finished),
            _ => None,
        }
    }

    /// Value written to the `type` attribute, `None` for finished entries.
    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Obsolete => Some("obsolete"),
            Self::Vanished => Some("vanished"),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Obsolete and vanished entries are dropped by lrelease.
    pub fn is_retired(&self) -> bool {
        matches!(self, Self::Obsolete | Self::Vanished)
    }
}

impl std::fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finished => write!(f, "finished"),
            Self::Unfinished => write!(f, "unfinished"),
            Self::Obsolete => write!(f, "obsolete"),
            Self::Vanished => write!(f, "vanished"),
        }
    }
}

/// Translated text: a single string, or ordered plural forms for numerus messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationValue {
    Single(String),
    Plural(Vec<String>),
}

impl Default for TranslationValue {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

impl TranslationValue {
    /// True when there is no text at all (every plural form empty, or no forms).
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(text) => text.is_empty(),
            Self::Plural(forms) => forms.iter().all(|f| f.is_empty()),
        }
    }

    /// All text variants, one for singular values.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Self::Single(text) => vec![text.as_str()],
            Self::Plural(forms) => forms.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translation {
    pub status: TranslationStatus,
    pub value: TranslationValue,
}

impl Translation {
    pub fn finished(text: impl Into<String>) -> Self {
        Self {
            status: TranslationStatus::Finished,
            value: TranslationValue::Single(text.into()),
        }
    }

    pub fn unfinished(text: impl Into<String>) -> Self {
        Self {
            status: TranslationStatus::Unfinished,
            value: TranslationValue::Single(text.into()),
        }
    }

    pub fn plural(status: TranslationStatus, forms: Vec<String>) -> Self {
        Self {
            status,
            value: TranslationValue::Plural(forms),
        }
    }
}

/// A `<location filename=".." line=".."/>` reference. Both attributes are kept
/// verbatim since lupdate writes relative line offsets such as `+12`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceRef {
    pub filename: Option<String>,
    pub line: Option<String>,
}

/// One `<message>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub source: String,
    /// Disambiguation comment, part of the lookup key.
    pub comment: Option<String>,
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    pub old_source: Option<String>,
    pub old_comment: Option<String>,
    pub id: Option<String>,
    pub numerus: bool,
    pub locations: Vec<SourceRef>,
    pub translation: Translation,
    /// 1-based line of the `<source>` element (0 when built in memory).
    pub line: usize,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: Translation) -> Self {
        let numerus = matches!(translation.value, TranslationValue::Plural(_));
        Self {
            source: source.into(),
            numerus,
            translation,
            ..Default::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = normalize_comment(Some(comment.into()));
        self
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn status(&self) -> TranslationStatus {
        self.translation.status
    }
}

/// One `<context>` block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Context {
    pub name: String,
    pub comment: Option<String>,
    pub messages: Vec<Message>,
    pub line: usize,
}

impl Context {
    pub fn new(name: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            name: name.into(),
            messages,
            ..Default::default()
        }
    }
}

/// Lookup key of a message: context name, source text and disambiguation comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageKey {
    pub context: String,
    pub source: String,
    pub comment: Option<String>,
}

impl MessageKey {
    pub fn new(context: &str, source: &str, comment: Option<&str>) -> Self {
        Self {
            context: context.to_string(),
            source: source.to_string(),
            comment: normalize_comment(comment.map(str::to_string)),
        }
    }
}

impl std::fmt::Display for MessageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.comment {
            Some(comment) => write!(f, "{}::{} ({})", self.context, self.source, comment),
            None => write!(f, "{}::{}", self.context, self.source),
        }
    }
}

/// An empty `<comment>` is the same key as no comment.
pub fn normalize_comment(comment: Option<String>) -> Option<String> {
    comment.filter(|c| !c.is_empty())
}

/// A parsed `.ts` document.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Path the catalog was read from, used in reports.
    pub file_path: String,
    pub version: Option<String>,
    pub language: Option<String>,
    pub source_language: Option<String>,
    contexts: Vec<Context>,
    index: HashMap<MessageKey, (usize, usize)>,
}

impl Catalog {
    pub fn new(
        file_path: impl Into<String>,
        version: Option<String>,
        language: Option<String>,
        contexts: Vec<Context>,
    ) -> Self {
        let index = build_index(&contexts);
        Self {
            file_path: file_path.into(),
            version,
            language,
            source_language: None,
            contexts,
            index,
        }
    }

    pub fn with_source_language(mut self, source_language: Option<String>) -> Self {
        self.source_language = source_language;
        self
    }

    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Every message paired with the name of its context, in document order.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.contexts
            .iter()
            .flat_map(|ctx| ctx.messages.iter().map(move |m| (ctx.name.as_str(), m)))
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Exact-key message lookup. Duplicated keys resolve to the first occurrence.
    pub fn find(&self, key: &MessageKey) -> Option<&Message> {
        self.index
            .get(key)
            .map(|&(ctx, msg)| &self.contexts[ctx].messages[msg])
    }

    /// Language part of the `language` attribute (`bg_BG` gives `bg`).
    pub fn language_code(&self) -> Option<&str> {
        self.language.as_deref().map(|l| split_locale(l).0)
    }
}

/// Split a locale such as `pt_BR` or `pt-BR` into language and territory.
pub fn split_locale(locale: &str) -> (&str, Option<&str>) {
    match locale.find(['_', '-']) {
        Some(pos) => (&locale[..pos], Some(&locale[pos + 1..])),
        None => (locale, None),
    }
}

fn build_index(contexts: &[Context]) -> HashMap<MessageKey, (usize, usize)> {
    let mut index = HashMap::new();
    for (ci, ctx) in contexts.iter().enumerate() {
        for (mi, msg) in ctx.messages.iter().enumerate() {
            let key = MessageKey::new(&ctx.name, &msg.source, msg.comment.as_deref());
            index.entry(key).or_insert((ci, mi));
        }
    }
    index
}
