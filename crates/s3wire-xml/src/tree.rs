//! In-memory XML element tree.
//!
//! Marshallers build an [`XmlElement`] and hand it to
//! [`to_bytes`](crate::serialize::to_bytes); the parser produces the same
//! structure for the mapper. Tag names are not validated.

use indexmap::IndexMap;

use crate::config::XmlConfig;

/// One XML element with its attributes, leading text and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Tag name, `{uri}local` when parsed from a namespaced element.
    pub tag: String,
    /// Attributes in insertion order.
    pub attributes: IndexMap<String, String>,
    /// Text preceding the first child, if any.
    pub text: Option<String>,
    /// Child elements in document order.
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an element with no attributes, text or children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Create an element holding `text`.
    #[must_use]
    pub fn with_text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Create a document root, declaring the configured namespace when
    /// `with_namespace` is set.
    #[must_use]
    pub fn root(tag: impl Into<String>, with_namespace: bool, config: &XmlConfig) -> Self {
        let mut root = Self::new(tag);
        if with_namespace {
            root.set_attribute("xmlns", config.namespace.as_str());
        }
        root
    }

    /// Set an attribute, keeping its original position if it already exists.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Append a child element and return it for further construction.
    pub fn add_child(&mut self, tag: impl Into<String>, text: Option<&str>) -> &mut XmlElement {
        let child = Self {
            tag: tag.into(),
            text: text.map(str::to_owned),
            ..Self::default()
        };
        self.push_child(child)
    }

    /// Append an already built child element and return it.
    pub fn push_child(&mut self, child: XmlElement) -> &mut XmlElement {
        let idx = self.children.len();
        self.children.push(child);
        &mut self.children[idx]
    }

    /// First child with the given tag.
    #[must_use]
    pub fn child(&self, tag: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// All children with the given tag, in document order.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Text of the first child with the given tag.
    #[must_use]
    pub fn child_text(&self, tag: &str) -> Option<&str> {
        self.child(tag).and_then(|c| c.text.as_deref())
    }

    /// Whether the element has neither text nor children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.children.is_empty()
    }
}
