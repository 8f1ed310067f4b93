//! Parsing raw XML bytes into an [`XmlElement`] tree.
//!
//! Namespaces are resolved while reading: an element or attribute bound to
//! namespace `uri` is named `{uri}local`, unqualified names are kept as is,
//! and `xmlns` declarations are not recorded as attributes. An element's
//! text is the character data before its first child.

use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;

use crate::error::XmlError;
use crate::tree::XmlElement;

/// An element still waiting for its end tag.
struct OpenElement {
    element: XmlElement,
    seen_child: bool,
}

/// Parse `xml` into a tree.
///
/// # Errors
///
/// Returns an error for which [`XmlError::is_parse_error`] holds if the input
/// is not a single well-formed XML document.
pub fn parse_tree(xml: &[u8]) -> Result<XmlElement, XmlError> {
    let mut reader = NsReader::from_reader(xml);
    let mut stack: Vec<OpenElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let (resolved, event) = reader.read_resolved_event()?;
        let namespace = owned_namespace(resolved);

        match event {
            Event::Start(e) => {
                ensure_single_root(&stack, root.as_ref())?;
                let element = open_element(&reader, namespace?, &e)?;
                stack.push(OpenElement {
                    element,
                    seen_child: false,
                });
            }
            Event::Empty(e) => {
                ensure_single_root(&stack, root.as_ref())?;
                let element = open_element(&reader, namespace?, &e)?;
                close_element(&mut stack, &mut root, element);
            }
            Event::End(e) => {
                let open = stack.pop().ok_or_else(|| {
                    XmlError::Malformed(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    ))
                })?;
                close_element(&mut stack, &mut root, open.element);
            }
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::Malformed(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::Malformed(err.to_string()))?;
                append_text(&mut stack, &unescaped)?;
            }
            Event::CData(e) => {
                let text =
                    std::str::from_utf8(&e).map_err(|err| XmlError::Malformed(err.to_string()))?;
                append_text(&mut stack, text)?;
            }
            Event::GeneralRef(e) => {
                let name =
                    std::str::from_utf8(&e).map_err(|err| XmlError::Malformed(err.to_string()))?;
                let reference = format!("&{name};");
                let resolved = quick_xml::escape::unescape(&reference)
                    .map_err(|err| XmlError::Malformed(err.to_string()))?;
                append_text(&mut stack, &resolved)?;
            }
            Event::Eof => break,
            // Skip declaration, comments, processing instructions, doctype.
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Malformed(format!(
            "unclosed element <{}>",
            open.element.tag
        )));
    }
    let root = root.ok_or_else(|| XmlError::Malformed("no root element".to_owned()))?;
    tracing::trace!(root = %root.tag, "parsed XML tree");
    Ok(root)
}

/// Turn a borrowed resolution result into an owned namespace URI.
fn owned_namespace(resolved: ResolveResult<'_>) -> Result<Option<String>, XmlError> {
    match resolved {
        ResolveResult::Bound(ns) => std::str::from_utf8(ns.as_ref())
            .map(|s| Some(s.to_owned()))
            .map_err(|err| XmlError::Malformed(err.to_string())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(XmlError::Malformed(format!(
            "unbound namespace prefix: {}",
            String::from_utf8_lossy(&prefix)
        ))),
    }
}

fn qualified_name(namespace: Option<&str>, local: &[u8]) -> Result<String, XmlError> {
    let local = std::str::from_utf8(local).map_err(|err| XmlError::Malformed(err.to_string()))?;
    Ok(match namespace {
        Some(ns) => format!("{{{ns}}}{local}"),
        None => local.to_owned(),
    })
}

fn open_element(
    reader: &NsReader<&[u8]>,
    namespace: Option<String>,
    start: &BytesStart<'_>,
) -> Result<XmlElement, XmlError> {
    let mut element = XmlElement::new(qualified_name(
        namespace.as_deref(),
        start.local_name().as_ref(),
    )?);

    for attr in start.attributes() {
        let attr = attr?;
        let key = attr.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            continue;
        }
        let (resolved, local) = reader.resolver().resolve_attribute(attr.key);
        let name = qualified_name(owned_namespace(resolved)?.as_deref(), local.as_ref())?;
        let raw = std::str::from_utf8(&attr.value)
            .map_err(|err| XmlError::Malformed(err.to_string()))?;
        let value = quick_xml::escape::unescape(raw)
            .map_err(|err| XmlError::Malformed(err.to_string()))?;
        element.set_attribute(name, value.into_owned());
    }

    Ok(element)
}

fn ensure_single_root(stack: &[OpenElement], root: Option<&XmlElement>) -> Result<(), XmlError> {
    if stack.is_empty() && root.is_some() {
        return Err(XmlError::Malformed(
            "content after the root element".to_owned(),
        ));
    }
    Ok(())
}

fn close_element(stack: &mut [OpenElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => {
            parent.seen_child = true;
            parent.element.children.push(element);
        }
        None => *root = Some(element),
    }
}

fn append_text(stack: &mut [OpenElement], text: &str) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(open) if !open.seen_child => {
            open.element
                .text
                .get_or_insert_with(String::new)
                .push_str(text);
            Ok(())
        }
        Some(_) => Ok(()),
        None if text.trim().is_empty() => Ok(()),
        None => Err(XmlError::Malformed(
            "text outside the root element".to_owned(),
        )),
    }
}
