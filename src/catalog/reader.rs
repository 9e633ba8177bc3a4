//! `.ts` XML reader.
//!
//! Event-driven parser built on `quick-xml`. Each message remembers the line
//! of its `<source>` element so that issues can point into the file.

use std::{fs, path::Path};

use anyhow::{Context as _, Result, anyhow, bail};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use super::model::{
    Catalog, Context, Message, SourceRef, Translation, TranslationStatus, TranslationValue,
    normalize_comment,
};

/// Read and parse a catalog from disk.
pub fn parse_catalog_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
    parse_catalog_str(&content, &path.to_string_lossy())
}

/// Parse catalog content. `file_path` is only used for locations and messages.
pub fn parse_catalog_str(content: &str, file_path: &str) -> Result<Catalog> {
    TsParser::new(content, file_path).parse()
}

/// Byte offsets where each line starts, for O(log n) line lookups.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line containing the byte at `offset`.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

struct TsParser<'a> {
    reader: Reader<&'a [u8]>,
    line_index: Vec<usize>,
    file_path: &'a str,
}

impl<'a> TsParser<'a> {
    fn new(content: &'a str, file_path: &'a str) -> Self {
        Self {
            reader: Reader::from_str(content),
            line_index: build_line_index(content),
            file_path,
        }
    }

    /// Line of the last consumed byte.
    fn line(&self) -> usize {
        let pos = self.reader.buffer_position() as usize;
        offset_to_line(&self.line_index, pos.saturating_sub(1))
    }

    fn next(&mut self) -> Result<Event<'a>> {
        self.reader.read_event().map_err(|err| {
            let pos = self.reader.error_position() as usize;
            anyhow!(
                "{}:{}: malformed XML: {}",
                self.file_path,
                offset_to_line(&self.line_index, pos),
                err
            )
        })
    }

    fn unexpected_eof(&self, inside: &str) -> anyhow::Error {
        anyhow!(
            "{}:{}: unexpected end of file inside <{}>",
            self.file_path,
            self.line(),
            inside
        )
    }

    fn parse(mut self) -> Result<Catalog> {
        loop {
            match self.next()? {
                Event::Start(e) if e.name().as_ref() == b"TS" => {
                    let header = self.read_header(&e)?;
                    let contexts = self.parse_ts_body()?;
                    return Ok(header.into_catalog(self.file_path, contexts));
                }
                Event::Empty(e) if e.name().as_ref() == b"TS" => {
                    let header = self.read_header(&e)?;
                    return Ok(header.into_catalog(self.file_path, Vec::new()));
                }
                Event::Start(e) | Event::Empty(e) => {
                    bail!(
                        "{}:{}: expected <TS> root element, found <{}>",
                        self.file_path,
                        self.line(),
                        String::from_utf8_lossy(e.name().as_ref())
                    );
                }
                Event::Eof => bail!("{}: missing <TS> root element", self.file_path),
                _ => {}
            }
        }
    }

    fn read_header(&self, e: &BytesStart<'_>) -> Result<Header> {
        let mut header = Header::default();
        for attr in e.attributes() {
            let attr = attr.with_context(|| format!("{}: bad <TS> attribute", self.file_path))?;
            let value = attr.unescape_value()?.into_owned();
            match attr.key.as_ref() {
                b"version" => header.version = Some(value),
                b"language" => header.language = Some(value),
                b"sourcelanguage" => header.source_language = Some(value),
                _ => {}
            }
        }
        Ok(header)
    }

    fn parse_ts_body(&mut self) -> Result<Vec<Context>> {
        let mut contexts = Vec::new();
        loop {
            match self.next()? {
                Event::Start(e) if e.name().as_ref() == b"context" => {
                    contexts.push(self.parse_context()?);
                }
                Event::Start(_) => self.skip_element("TS")?,
                Event::End(_) => return Ok(contexts),
                Event::Eof => return Err(self.unexpected_eof("TS")),
                _ => {}
            }
        }
    }

    fn parse_context(&mut self) -> Result<Context> {
        let line = self.line();
        let mut name = None;
        let mut comment = None;
        let mut messages = Vec::new();

        loop {
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"name" => name = Some(self.read_text("name")?),
                    b"comment" => comment = normalize_comment(Some(self.read_text("comment")?)),
                    b"message" => messages.push(self.parse_message(&e)?),
                    _ => self.skip_element("context")?,
                },
                Event::Empty(e) if e.name().as_ref() == b"name" => name = Some(String::new()),
                Event::End(_) => break,
                Event::Eof => return Err(self.unexpected_eof("context")),
                _ => {}
            }
        }

        let name = name.ok_or_else(|| {
            anyhow!(
                "{}:{}: <context> without <name>",
                self.file_path,
                line
            )
        })?;

        Ok(Context {
            name,
            comment,
            messages,
            line,
        })
    }

    fn parse_message(&mut self, start: &BytesStart<'_>) -> Result<Message> {
        let mut message = Message {
            line: self.line(),
            translation: Translation::unfinished(""),
            ..Default::default()
        };
        for attr in start.attributes() {
            let attr =
                attr.with_context(|| format!("{}: bad <message> attribute", self.file_path))?;
            let value = attr.unescape_value()?.into_owned();
            match attr.key.as_ref() {
                b"numerus" => message.numerus = value == "yes",
                b"id" => message.id = Some(value),
                _ => {}
            }
        }

        loop {
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"source" => {
                        message.line = self.line();
                        message.source = self.read_text("source")?;
                    }
                    b"comment" => {
                        message.comment = normalize_comment(Some(self.read_text("comment")?))
                    }
                    b"oldsource" => message.old_source = Some(self.read_text("oldsource")?),
                    b"oldcomment" => message.old_comment = Some(self.read_text("oldcomment")?),
                    b"extracomment" => {
                        message.extra_comment = Some(self.read_text("extracomment")?)
                    }
                    b"translatorcomment" => {
                        message.translator_comment = Some(self.read_text("translatorcomment")?)
                    }
                    b"translation" => {
                        message.translation = self.parse_translation(&e, message.numerus)?
                    }
                    b"location" => {
                        message.locations.push(self.read_location(&e)?);
                        self.skip_element("location")?;
                    }
                    _ => self.skip_element("message")?,
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"source" => message.line = self.line(),
                    b"location" => message.locations.push(self.read_location(&e)?),
                    b"translation" => {
                        let status = self.read_status(&e)?;
                        message.translation = Translation {
                            status,
                            value: if message.numerus {
                                TranslationValue::Plural(Vec::new())
                            } else {
                                TranslationValue::Single(String::new())
                            },
                        };
                    }
                    _ => {}
                },
                Event::End(_) => return Ok(message),
                Event::Eof => return Err(self.unexpected_eof("message")),
                _ => {}
            }
        }
    }

    fn read_location(&self, e: &BytesStart<'_>) -> Result<SourceRef> {
        let mut location = SourceRef::default();
        for attr in e.attributes() {
            let attr =
                attr.with_context(|| format!("{}: bad <location> attribute", self.file_path))?;
            let value = attr.unescape_value()?.into_owned();
            match attr.key.as_ref() {
                b"filename" => location.filename = Some(value),
                b"line" => location.line = Some(value),
                _ => {}
            }
        }
        Ok(location)
    }

    fn read_status(&self, e: &BytesStart<'_>) -> Result<TranslationStatus> {
        for attr in e.attributes() {
            let attr =
                attr.with_context(|| format!("{}: bad <translation> attribute", self.file_path))?;
            if attr.key.as_ref() == b"type" {
                let value = attr.unescape_value()?;
                return TranslationStatus::from_attr(&value).ok_or_else(|| {
                    anyhow!(
                        "{}:{}: unknown translation type \"{}\"",
                        self.file_path,
                        self.line(),
                        value
                    )
                });
            }
        }
        Ok(TranslationStatus::Finished)
    }

    fn parse_translation(&mut self, start: &BytesStart<'_>, numerus: bool) -> Result<Translation> {
        let status = self.read_status(start)?;
        let mut text = String::new();
        let mut forms = Vec::new();
        let mut variants = Vec::new();

        loop {
            match self.next()? {
                Event::Text(t) => text.push_str(&t.unescape()?),
                Event::CData(c) => text.push_str(std::str::from_utf8(&c)?),
                Event::Start(e) => match e.name().as_ref() {
                    b"numerusform" => forms.push(self.read_text("numerusform")?),
                    b"lengthvariant" => variants.push(self.read_text("lengthvariant")?),
                    _ => self.skip_element("translation")?,
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"numerusform" => forms.push(String::new()),
                    b"byte" => text.push_str(&self.read_byte(&e)?),
                    _ => {}
                },
                Event::End(_) => break,
                Event::Eof => return Err(self.unexpected_eof("translation")),
                _ => {}
            }
        }

        let value = if numerus || !forms.is_empty() {
            if forms.is_empty() && !text.trim().is_empty() {
                forms.push(text);
            }
            TranslationValue::Plural(forms)
        } else if let Some(first) = variants.into_iter().next() {
            TranslationValue::Single(first)
        } else {
            TranslationValue::Single(text)
        };

        Ok(Translation { status, value })
    }

    /// Collect the text content of the current element up to its end tag.
    /// Nested `<lengthvariant>` keeps only the first variant.
    fn read_text(&mut self, tag: &str) -> Result<String> {
        let mut text = String::new();
        let mut variant: Option<String> = None;
        loop {
            match self.next()? {
                Event::Text(t) => text.push_str(&t.unescape()?),
                Event::CData(c) => text.push_str(std::str::from_utf8(&c)?),
                Event::Empty(e) if e.name().as_ref() == b"byte" => {
                    text.push_str(&self.read_byte(&e)?)
                }
                Event::Start(e) if e.name().as_ref() == b"lengthvariant" => {
                    let inner = self.read_text("lengthvariant")?;
                    variant.get_or_insert(inner);
                }
                Event::Start(_) => self.skip_element(tag)?,
                Event::End(_) => return Ok(variant.unwrap_or(text)),
                Event::Eof => return Err(self.unexpected_eof(tag)),
                _ => {}
            }
        }
    }

    /// Decode `<byte value="x9"/>` (hex with `x`/`0x` prefix, or decimal).
    fn read_byte(&self, e: &BytesStart<'_>) -> Result<String> {
        for attr in e.attributes() {
            let attr = attr?;
            if attr.key.as_ref() != b"value" {
                continue;
            }
            let raw = attr.unescape_value()?;
            let (radix, digits) = if let Some(hex) = raw.strip_prefix("0x") {
                (16, hex)
            } else if let Some(hex) = raw.strip_prefix('x') {
                (16, hex)
            } else {
                (10, raw.as_ref())
            };
            let code = u32::from_str_radix(digits, radix).with_context(|| {
                format!("{}:{}: bad <byte> value \"{}\"", self.file_path, self.line(), raw)
            })?;
            return Ok(char::from_u32(code)
                .filter(|_| code != 0)
                .map(String::from)
                .unwrap_or_default());
        }
        Ok(String::new())
    }

    /// Skip the element whose start tag was just read.
    fn skip_element(&mut self, inside: &str) -> Result<()> {
        let mut depth = 1usize;
        while depth > 0 {
            match self.next()? {
                Event::Start(_) => depth += 1,
                Event::End(_) => depth -= 1,
                Event::Eof => return Err(self.unexpected_eof(inside)),
                _ => {}
            }
        }
        Ok(())
    }
}

#[derive(Default)]
struct Header {
    version: Option<String>,
    language: Option<String>,
    source_language: Option<String>,
}

impl Header {
    fn into_catalog(self, file_path: &str, contexts: Vec<Context>) -> Catalog {
        Catalog::new(file_path, self.version, self.language, contexts)
            .with_source_language(self.source_language)
    }
}
