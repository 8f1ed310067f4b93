//! Folding an XML tree into a loosely typed nested mapping.
//!
//! Each element becomes one of:
//!
//! - `Null` when it has no attributes, children or text
//! - `Text` with its trimmed text when it has no attributes or children
//! - `Map` with `@name` entries for attributes, one entry per distinct child
//!   tag (a single value, or a `List` when the tag repeats) and a `#text`
//!   entry for non-empty text next to attributes or children
//!
//! Tags listed in [`XmlConfig::always_list_tags`] are always collected into a
//! `List`. The configured namespace prefix is stripped from every tag.

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::XmlConfig;
use crate::error::XmlError;
use crate::parse::parse_tree;
use crate::tree::XmlElement;

/// Reserved key holding element text next to attributes or children.
pub const TEXT_KEY: &str = "#text";

/// Prefix of keys holding attribute values.
pub const ATTRIBUTE_PREFIX: char = '@';

/// A decoded XML value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum XmlValue {
    /// Element without attributes, children or text.
    Null,
    /// Trimmed text of a leaf element.
    Text(String),
    /// Attributes, children and mixed text by key, in first-seen order.
    Map(IndexMap<String, XmlValue>),
    /// Values of a repeated element in document order.
    List(Vec<XmlValue>),
}

/// One value, or several values of a repeated element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany<T> {
    /// A single occurrence.
    One(T),
    /// Zero or more occurrences.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Number of contained values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(v) => v.len(),
        }
    }

    /// Whether there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first value, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        match self {
            Self::One(v) => Some(v),
            Self::Many(v) => v.first(),
        }
    }

    /// Iterate over the values in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::One(v) => std::slice::from_ref(v).iter(),
            Self::Many(v) => v.iter(),
        }
    }

    /// All values as a vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(v) => vec![v],
            Self::Many(v) => v,
        }
    }
}

impl XmlValue {
    /// Look up a child entry of a `Map`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&XmlValue> {
        self.as_map().and_then(|m| m.get(key))
    }

    /// The entries of a `Map`.
    #[must_use]
    pub fn as_map(&self) -> Option<&IndexMap<String, XmlValue>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// The items of a `List`.
    #[must_use]
    pub fn as_list(&self) -> Option<&[XmlValue]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Text of a leaf, or the `#text` entry of a mixed element.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Map(m) => m.get(TEXT_KEY).and_then(XmlValue::as_text),
            _ => None,
        }
    }

    /// Whether this is `Null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Text of the child entry `key`.
    #[must_use]
    pub fn text_of(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(XmlValue::as_text)
    }

    /// Value of the attribute `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.get(&format!("{ATTRIBUTE_PREFIX}{name}"))
            .and_then(XmlValue::as_text)
    }

    /// The child entry `key` as one or many values, hiding whether the
    /// mapper collapsed it.
    #[must_use]
    pub fn get_one_or_many(&self, key: &str) -> Option<OneOrMany<&XmlValue>> {
        self.get(key).map(|v| match v {
            Self::List(items) => OneOrMany::Many(items.iter().collect()),
            other => OneOrMany::One(other),
        })
    }

    /// All values of the child entry `key`; empty when absent.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&XmlValue> {
        self.get_one_or_many(key)
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
    }
}

/// Parse `xml` and fold it into a mapping of the root tag to its value.
///
/// # Errors
///
/// Returns a parse error if `xml` is not well-formed.
pub fn parse_to_mapping(xml: &[u8], config: &XmlConfig) -> Result<XmlValue, XmlError> {
    let root = parse_tree(xml)?;
    let mapping = element_to_mapping(&root, config);
    tracing::debug!(root = %root.tag, bytes = xml.len(), "decoded XML document");
    Ok(mapping)
}

/// Fold an already parsed tree into a one-entry mapping `{tag: value}`.
#[must_use]
pub fn element_to_mapping(element: &XmlElement, config: &XmlConfig) -> XmlValue {
    let prefix = config.qualified_prefix();
    let (tag, value) = fold(element, config, &prefix);
    let mut map = IndexMap::with_capacity(1);
    map.insert(tag, value);
    XmlValue::Map(map)
}

fn strip_namespace(tag: &str, prefix: &str) -> String {
    tag.strip_prefix(prefix).unwrap_or(tag).to_owned()
}

/// Declarations on built trees carry no data and are never mapped.
fn is_namespace_declaration(name: &str) -> bool {
    name == "xmlns" || name.starts_with("xmlns:")
}

fn fold(element: &XmlElement, config: &XmlConfig, prefix: &str) -> (String, XmlValue) {
    let tag = strip_namespace(&element.tag, prefix);
    let attributes: Vec<_> = element
        .attributes
        .iter()
        .filter(|(name, _)| !is_namespace_declaration(name))
        .collect();
    let has_structure = !element.children.is_empty() || !attributes.is_empty();
    let text = element.text.as_deref().map(str::trim);

    if !has_structure {
        let value = text.map_or(XmlValue::Null, |t| XmlValue::Text(t.to_owned()));
        return (tag, value);
    }

    let mut groups: IndexMap<String, Vec<XmlValue>> = IndexMap::new();
    for child in &element.children {
        let (child_tag, child_value) = fold(child, config, prefix);
        groups.entry(child_tag).or_default().push(child_value);
    }

    let mut map: IndexMap<String, XmlValue> = IndexMap::with_capacity(groups.len());
    for (child_tag, mut values) in groups {
        let value = if values.len() == 1 && !config.is_always_list(&child_tag) {
            values.remove(0)
        } else {
            XmlValue::List(values)
        };
        map.insert(child_tag, value);
    }

    for (name, value) in attributes {
        let name = strip_namespace(name, prefix);
        map.insert(
            format!("{ATTRIBUTE_PREFIX}{name}"),
            XmlValue::Text(value.clone()),
        );
    }

    if let Some(text) = text.filter(|t| !t.is_empty()) {
        map.insert(TEXT_KEY.to_owned(), XmlValue::Text(text.to_owned()));
    }

    tracing::trace!(tag = %tag, entries = map.len(), "folded element");
    (tag, XmlValue::Map(map))
}
