use std::fs;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::name::QName;
use quick_xml::Reader;
use thiserror::Error;

use crate::node::Element;

/// Errors that can occur while parsing XML into an [`Element`] tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input XML could not be decoded or tokenized.
    #[error("failed to parse XML: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Input bytes were not valid UTF-8 for tag/attribute/text extraction.
    #[error("invalid UTF-8 while parsing XML: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// Failed to decode text entity or bytes.
    #[error("failed to decode XML text: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    /// Failed to read input file.
    #[error("failed to read XML file: {0}")]
    Io(#[from] std::io::Error),
    /// Structural issue in XML document.
    #[error("malformed XML: {0}")]
    Malformed(String),
}

/// Parse XML bytes into an [`Element`] tree.
pub fn parse(xml: &[u8]) -> Result<Element, ParseError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                stack.push(open_element(&e, &reader)?);
            }
            Event::Empty(e) => {
                let node = open_element(&e, &reader)?;
                attach(node, &mut stack, &mut root)?;
            }
            Event::Text(e) => {
                append_text(&mut stack, e.unescape()?.as_ref());
            }
            Event::CData(e) => {
                append_text(&mut stack, std::str::from_utf8(e.as_ref())?);
            }
            Event::End(_) => {
                let node = stack.pop().ok_or_else(|| {
                    ParseError::Malformed("encountered closing tag without open tag".to_string())
                })?;
                attach(node, &mut stack, &mut root)?;
            }
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) | Event::Comment(_) => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(ParseError::Malformed(
            "unclosed element(s) at end of document".to_string(),
        ));
    }

    root.ok_or_else(|| ParseError::Malformed("no root element found".to_string()))
}

/// Parse an XML file into an [`Element`] tree.
pub fn parse_file(path: &Path) -> Result<Element, ParseError> {
    let bytes = fs::read(path)?;
    parse(&bytes)
}

/// Hang a completed element off the enclosing element, or install it as root.
fn attach(
    node: Element,
    stack: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), ParseError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    if root.is_some() {
        return Err(ParseError::Malformed(
            "multiple top-level elements found".to_string(),
        ));
    }
    *root = Some(node);
    Ok(())
}

fn append_text(stack: &mut [Element], text: &str) {
    if text.trim().is_empty() {
        return;
    }
    if let Some(current) = stack.last_mut() {
        match &mut current.text {
            Some(existing) => existing.push_str(text),
            None => current.text = Some(text.to_string()),
        }
    }
}

fn open_element(
    e: &quick_xml::events::BytesStart<'_>,
    reader: &Reader<&[u8]>,
) -> Result<Element, ParseError> {
    let mut node = Element::new(qname_to_string(e.name())?);

    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = qname_to_string(attr.key)?;
        let value = attr
            .decode_and_unescape_value(reader.decoder())?
            .into_owned();
        node.attrs.insert(key, value);
    }

    Ok(node)
}

fn qname_to_string(name: QName<'_>) -> Result<String, ParseError> {
    Ok(std::str::from_utf8(name.as_ref())?.to_string())
}

#[cfg(test)]
mod tests {
    use super::{parse, ParseError};

    #[test]
    fn parses_nested_elements_attributes_and_text() {
        let root = parse(br#"<config version="7.0.0"><entry name="a"><v>1</v></entry></config>"#)
            .expect("parse");
        assert_eq!(root.tag, "config");
        assert_eq!(root.get_attr("version"), Some("7.0.0"));

        let entry = root.get_child("entry").expect("entry");
        assert_eq!(entry.get_attr("name"), Some("a"));
        assert_eq!(entry.get_text(&["v"]), Some("1"));
    }

    #[test]
    fn skips_declaration_and_comments() {
        let root = parse(b"<?xml version=\"1.0\"?><!-- note --><root><a/></root>").expect("parse");
        assert!(root.get_child("a").is_some());
    }

    #[test]
    fn rejects_multiple_roots() {
        let err = parse(b"<a/><b/>").expect_err("should fail");
        assert!(matches!(err, ParseError::Malformed(_)));
    }

    #[test]
    fn rejects_unclosed_element() {
        let err = parse(b"<a><b></b>").expect_err("should fail");
        assert!(matches!(err, ParseError::Malformed(_)));
    }
}
