//! Canonical rendering of an [`XmlElement`] tree.
//!
//! Request bodies are written without an XML declaration and without
//! indentation:
//!
//! - Attributes in insertion order, values fully escaped
//! - Text escaped for `&`, `<` and `>` only, so ETag quotes stay literal
//! - Elements with neither text nor children are self-closing

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::XmlError;
use crate::tree::XmlElement;

/// Render `root` as a complete document.
///
/// Identical trees always render to identical bytes.
pub fn to_bytes(root: &XmlElement) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(256);
    let mut writer = Writer::new(&mut buf);
    write_element(&mut writer, root)?;
    Ok(buf)
}

/// Write one element and its subtree.
fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> io::Result<()> {
    let mut start = BytesStart::new(element.tag.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.is_empty() {
        return writer.write_event(Event::Empty(start));
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = element.text.as_deref() {
        if !text.is_empty() {
            writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
        }
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.tag.as_str())))
}
