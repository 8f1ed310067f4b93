//! Error type for S3 XML encoding and decoding.

use std::io;

/// Errors that can occur while building, parsing or interpreting S3 XML.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// Writing to the output buffer failed.
    #[error("XML write failed: {0}")]
    Io(#[from] io::Error),

    /// The tokenizer rejected the input.
    #[error("XML syntax error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// An attribute could not be read.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// The document is not well-formed.
    #[error("malformed XML: {0}")]
    Malformed(String),

    /// A typed decoder found no required child.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// The document root is not one the decoder accepts.
    #[error("unexpected root element: {0}")]
    UnexpectedElement(String),

    /// Text content could not be interpreted as the expected value.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A marshaller was handed a domain object it cannot encode.
    #[error("contract violation: {0}")]
    ContractViolation(String),
}

impl XmlError {
    /// Whether the input failed to parse as XML at all.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::QuickXml(_) | Self::Attribute(_) | Self::Malformed(_)
        )
    }
}
