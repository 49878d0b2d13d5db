use std::fs;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;

use crate::node::Element;

/// Errors that can occur while writing XML from an [`Element`] tree.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to serialize XML bytes.
    #[error("failed to write XML: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Failed to write output file.
    #[error("failed to write XML file: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize an [`Element`] tree into an XML document.
///
/// Output starts with an XML declaration and is indented with two spaces.
pub fn write(node: &Element) -> Result<Vec<u8>, WriteError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
    write_node(&mut writer, node)?;
    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

/// Serialize an [`Element`] tree and write it to `path`.
pub fn write_file(node: &Element, path: &Path) -> Result<(), WriteError> {
    let bytes = write(node)?;
    fs::write(path, bytes)?;
    Ok(())
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Element) -> Result<(), quick_xml::Error> {
    let mut start = BytesStart::new(node.tag.as_str());

    for (key, value) in &node.attrs {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if node.children.is_empty() && node.text.is_none() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;

    if let Some(text) = &node.text {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }

    for child in &node.children {
        write_node(writer, child)?;
    }

    writer.write_event(Event::End(BytesEnd::new(node.tag.as_str())))?;
    Ok(())
}
