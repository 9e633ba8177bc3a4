use crate::catalog::{Catalog, Message};

/// Position of a message inside a catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// A message an issue refers to: where it is and which key it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// Name of the Qt context (`<context><name>`).
    pub context_name: String,
    pub source: String,
    pub comment: Option<String>,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        context_name: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            location,
            context_name: context_name.into(),
            source: source.into(),
            comment: None,
        }
    }

    /// Build from a catalog entry.
    pub fn of(catalog: &Catalog, context_name: &str, message: &Message) -> Self {
        Self {
            location: MessageLocation::new(&catalog.file_path, message.line, 1),
            context_name: context_name.to_string(),
            source: message.source.clone(),
            comment: message.comment.clone(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }

    /// `QMessageBox` or `QCoreApplication (QSystemSemaphore)`.
    pub fn qualified_context(&self) -> String {
        match &self.comment {
            Some(comment) => format!("{} ({})", self.context_name, comment),
            None => self.context_name.clone(),
        }
    }
}
