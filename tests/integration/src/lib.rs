//! Integration tests for the s3wire XML layer.
//!
//! These exercise marshallers, the mapper and the typed decoders together:
//! golden request bodies, encode→decode→encode stability and recorded
//! server responses. Run them with:
//! ```text
//! cargo test -p s3wire-integration
//! ```

use std::sync::Once;

use s3wire_xml::{XmlConfig, XmlValue, parse_to_mapping};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Default configuration with tracing set up for the test.
#[must_use]
pub fn test_config() -> XmlConfig {
    init_tracing();
    XmlConfig::default()
}

/// Decode `xml` and render the mapping as JSON for comparison with `json!`.
pub fn decode_json(xml: &[u8]) -> anyhow::Result<serde_json::Value> {
    tracing::debug!(bytes = xml.len(), "decoding recorded response");
    let mapping: XmlValue = parse_to_mapping(xml, &test_config())?;
    Ok(serde_json::to_value(mapping)?)
}

/// Render marshalled bytes as a string.
pub fn utf8(xml: Vec<u8>) -> anyhow::Result<String> {
    Ok(String::from_utf8(xml)?)
}

mod test_concurrency;
mod test_responses;
