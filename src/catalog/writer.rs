//! Canonical `.ts` serializer.
//!
//! Produces the layout lupdate writes: contexts at column 0, four spaces per
//! nesting level, and a fixed child order inside `<message>`.

use std::{fmt::Write as _, fs, path::Path};

use anyhow::{Context as _, Result};
use quick_xml::escape::escape;

use super::model::{Catalog, Message, TranslationValue};

const INDENT: &str = "    ";

/// Serialize a catalog to a string.
pub fn catalog_to_string(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    let version = catalog.version.as_deref().unwrap_or("2.1");
    let _ = write!(out, "<TS version=\"{}\"", protect(version));
    if let Some(language) = &catalog.language {
        let _ = write!(out, " language=\"{}\"", protect(language));
    }
    if let Some(source_language) = &catalog.source_language {
        let _ = write!(out, " sourcelanguage=\"{}\"", protect(source_language));
    }
    out.push_str(">\n");

    for context in catalog.contexts() {
        out.push_str("<context>\n");
        element(&mut out, 1, "name", &context.name);
        if let Some(comment) = &context.comment {
            element(&mut out, 1, "comment", comment);
        }
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

/// Serialize a catalog and write it to `path`.
pub fn write_catalog_file(catalog: &Catalog, path: &Path) -> Result<()> {
    fs::write(path, catalog_to_string(catalog))
        .with_context(|| format!("Failed to write catalog: {}", path.display()))
}

fn write_message(out: &mut String, message: &Message) {
    let _ = write!(out, "{}<message", INDENT);
    if let Some(id) = &message.id {
        let _ = write!(out, " id=\"{}\"", protect(id));
    }
    if message.numerus {
        out.push_str(" numerus=\"yes\"");
    }
    out.push_str(">\n");

    for location in &message.locations {
        let _ = write!(out, "{}{}<location", INDENT, INDENT);
        if let Some(filename) = &location.filename {
            let _ = write!(out, " filename=\"{}\"", protect(filename));
        }
        if let Some(line) = &location.line {
            let _ = write!(out, " line=\"{}\"", protect(line));
        }
        out.push_str("/>\n");
    }

    element(out, 2, "source", &message.source);
    let optional = [
        ("oldsource", &message.old_source),
        ("comment", &message.comment),
        ("oldcomment", &message.old_comment),
        ("extracomment", &message.extra_comment),
        ("translatorcomment", &message.translator_comment),
    ];
    for (tag, value) in optional {
        if let Some(value) = value {
            element(out, 2, tag, value);
        }
    }

    let _ = write!(out, "{}{}<translation", INDENT, INDENT);
    if let Some(status) = message.translation.status.as_attr() {
        let _ = write!(out, " type=\"{}\"", status);
    }
    out.push('>');
    match &message.translation.value {
        TranslationValue::Single(text) => out.push_str(&protect(text)),
        TranslationValue::Plural(forms) if forms.is_empty() => {}
        TranslationValue::Plural(forms) => {
            out.push('\n');
            for form in forms {
                element(out, 3, "numerusform", form);
            }
            let _ = write!(out, "{}{}", INDENT, INDENT);
        }
    }
    out.push_str("</translation>\n");

    let _ = writeln!(out, "{}</message>", INDENT);
}

fn element(out: &mut String, depth: usize, tag: &str, text: &str) {
    let _ = writeln!(
        out,
        "{}<{}>{}</{}>",
        INDENT.repeat(depth),
        tag,
        protect(text),
        tag
    );
}

/// Escape markup characters. Control characters XML 1.0 cannot carry become
/// `<byte>` elements and non-ASCII whitespace becomes a character reference,
/// as lupdate writes them.
fn protect(text: &str) -> String {
    let escaped = escape(text);
    if !escaped.chars().any(needs_reference) {
        return escaped.into_owned();
    }
    let mut out = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        if (c as u32) < 0x20 && needs_reference(c) {
            let _ = write!(out, "<byte value=\"x{:x}\"/>", c as u32);
        } else if needs_reference(c) {
            let _ = write!(out, "&#x{:x};", c as u32);
        } else {
            out.push(c);
        }
    }
    out
}

fn needs_reference(c: char) -> bool {
    match c as u32 {
        0x09 | 0x0a => false,
        0x00..0x20 => true,
        0x80.. => c.is_whitespace(),
        _ => false,
    }
}
