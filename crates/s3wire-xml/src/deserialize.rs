//! Typed decoding of S3 XML documents.
//!
//! Decoders read the mapping produced by [`parse_to_mapping`] through
//! [`XmlValue::get_all`], so a repeated element decodes the same way whether
//! it occurred once or many times.

use s3wire_model::{
    CompleteMultipartUploadResult, CompletedMultipartUpload, DeleteError, DeleteRequest,
    DeleteResult, DeletedObject, FilterRule, FilterRuleName, LocationConstraint,
    NotificationConfiguration, NotificationTarget, ServerSideEncryption,
    ServerSideEncryptionConfiguration, ServerSideEncryptionRule, UploadedPart,
};

use crate::config::{TargetElements, XmlConfig};
use crate::error::XmlError;
use crate::mapping::{XmlValue, parse_to_mapping};

/// Trait for types decoded from the mapping of one S3 document.
pub trait FromXmlValue: Sized {
    /// Root element names this type can be decoded from.
    const ROOT_ELEMENTS: &'static [&'static str];

    /// Decode from the value of the root element.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if a required element is missing or a value cannot
    /// be interpreted.
    fn from_xml_value(value: &XmlValue, config: &XmlConfig) -> Result<Self, XmlError>;
}

/// Parse `xml` and decode it as `T`.
///
/// # Errors
///
/// Returns a parse error for malformed input,
/// [`XmlError::UnexpectedElement`] when the root is not one of
/// `T::ROOT_ELEMENTS`, or the decoder's own error.
pub fn from_xml<T: FromXmlValue>(xml: &[u8], config: &XmlConfig) -> Result<T, XmlError> {
    let mapping = parse_to_mapping(xml, config)?;
    let (root, value) = mapping
        .as_map()
        .and_then(|m| m.first())
        .ok_or_else(|| XmlError::MissingElement("root element".to_owned()))?;
    if !T::ROOT_ELEMENTS.contains(&root.as_str()) {
        return Err(XmlError::UnexpectedElement(root.clone()));
    }
    T::from_xml_value(value, config)
}

// ---------------------------------------------------------------------------
// Helper functions for reading common patterns
// ---------------------------------------------------------------------------

/// Text of a required child; a present but empty child reads as `""`.
fn required_text<'a>(value: &'a XmlValue, key: &str) -> Result<&'a str, XmlError> {
    value
        .get(key)
        .map(|child| child.as_text().unwrap_or_default())
        .ok_or_else(|| XmlError::MissingElement(key.to_owned()))
}

fn optional_text(value: &XmlValue, key: &str) -> Option<String> {
    value.text_of(key).map(str::to_owned)
}

/// Parse a boolean from XML text ("true"/"false").
fn parse_bool(s: &str) -> Result<bool, XmlError> {
    match s {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(XmlError::InvalidValue(format!("invalid boolean: {s}"))),
    }
}

fn optional_bool(value: &XmlValue, key: &str) -> Result<Option<bool>, XmlError> {
    value.text_of(key).map(parse_bool).transpose()
}

/// Remove one pair of surrounding double quotes from an ETag.
fn unquote(etag: &str) -> &str {
    etag.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(etag)
}

// ---------------------------------------------------------------------------
// FromXmlValue implementations
// ---------------------------------------------------------------------------

impl FromXmlValue for ServerSideEncryptionConfiguration {
    const ROOT_ELEMENTS: &'static [&'static str] = &["ServerSideEncryptionConfiguration"];

    fn from_xml_value(value: &XmlValue, _config: &XmlConfig) -> Result<Self, XmlError> {
        let rules = value
            .get_all("Rule")
            .into_iter()
            .map(|rule| {
                let apply = rule.get("ApplyServerSideEncryptionByDefault");
                ServerSideEncryptionRule {
                    sse_algorithm: apply
                        .and_then(|a| a.text_of("SSEAlgorithm"))
                        .map(ServerSideEncryption::from),
                    kms_master_key_id: apply.and_then(|a| optional_text(a, "KMSMasterKeyID")),
                }
            })
            .collect();
        Ok(Self { rules })
    }
}

impl FromXmlValue for LocationConstraint {
    const ROOT_ELEMENTS: &'static [&'static str] =
        &["LocationConstraint", "CreateBucketConfiguration"];

    fn from_xml_value(value: &XmlValue, _config: &XmlConfig) -> Result<Self, XmlError> {
        let constraint = match value {
            XmlValue::Map(_) => value
                .get("LocationConstraint")
                .ok_or_else(|| XmlError::MissingElement("LocationConstraint".to_owned()))?,
            other => other,
        };
        // An empty constraint is how S3 reports us-east-1.
        Ok(Self::new(constraint.as_text().unwrap_or_default()))
    }
}

impl FromXmlValue for CompletedMultipartUpload {
    const ROOT_ELEMENTS: &'static [&'static str] = &["CompleteMultipartUpload"];

    fn from_xml_value(value: &XmlValue, _config: &XmlConfig) -> Result<Self, XmlError> {
        let parts = value
            .get_all("Part")
            .into_iter()
            .map(|part| -> Result<UploadedPart, XmlError> {
                let number = required_text(part, "PartNumber")?;
                let part_number = number.parse::<u32>().map_err(|e| {
                    XmlError::InvalidValue(format!("invalid part number '{number}': {e}"))
                })?;
                let etag = required_text(part, "ETag")?;
                Ok(UploadedPart::new(part_number, unquote(etag)))
            })
            .collect::<Result<Vec<_>, XmlError>>()?;
        Ok(Self { parts })
    }
}

fn decode_targets(
    value: &XmlValue,
    elements: &TargetElements,
) -> Result<Vec<NotificationTarget>, XmlError> {
    value
        .get_all(&elements.configuration)
        .into_iter()
        .map(|entry| -> Result<NotificationTarget, XmlError> {
            let filter_rules = entry
                .get("Filter")
                .and_then(|f| f.get("S3Key"))
                .map(|key| key.get_all("FilterRule"))
                .unwrap_or_default()
                .into_iter()
                .map(|rule| -> Result<FilterRule, XmlError> {
                    Ok(FilterRule {
                        name: FilterRuleName::from(required_text(rule, "Name")?),
                        value: required_text(rule, "Value")?.to_owned(),
                    })
                })
                .collect::<Result<Vec<_>, XmlError>>()?;

            Ok(NotificationTarget {
                id: optional_text(entry, "Id"),
                arn: required_text(entry, &elements.arn)?.to_owned(),
                events: entry
                    .get_all("Event")
                    .into_iter()
                    .map(|event| event.as_text().unwrap_or_default().to_owned())
                    .collect(),
                filter_rules,
            })
        })
        .collect()
}

impl FromXmlValue for NotificationConfiguration {
    const ROOT_ELEMENTS: &'static [&'static str] = &["NotificationConfiguration"];

    fn from_xml_value(value: &XmlValue, config: &XmlConfig) -> Result<Self, XmlError> {
        let targets = &config.notification_targets;
        Ok(Self {
            topic_configurations: decode_targets(value, &targets.topic)?,
            queue_configurations: decode_targets(value, &targets.queue)?,
            cloud_function_configurations: decode_targets(value, &targets.cloud_function)?,
        })
    }
}

impl FromXmlValue for DeleteRequest {
    const ROOT_ELEMENTS: &'static [&'static str] = &["Delete"];

    fn from_xml_value(value: &XmlValue, _config: &XmlConfig) -> Result<Self, XmlError> {
        let keys = value
            .get_all("Object")
            .into_iter()
            .map(|object| required_text(object, "Key").map(str::to_owned))
            .collect::<Result<Vec<_>, XmlError>>()?;
        Ok(Self {
            quiet: optional_bool(value, "Quiet")?.unwrap_or(false),
            keys,
        })
    }
}

impl FromXmlValue for CompleteMultipartUploadResult {
    const ROOT_ELEMENTS: &'static [&'static str] = &["CompleteMultipartUploadResult"];

    fn from_xml_value(value: &XmlValue, _config: &XmlConfig) -> Result<Self, XmlError> {
        Ok(Self {
            location: optional_text(value, "Location"),
            bucket: optional_text(value, "Bucket"),
            key: optional_text(value, "Key"),
            etag: optional_text(value, "ETag"),
        })
    }
}

impl FromXmlValue for DeleteResult {
    const ROOT_ELEMENTS: &'static [&'static str] = &["DeleteResult"];

    fn from_xml_value(value: &XmlValue, _config: &XmlConfig) -> Result<Self, XmlError> {
        let deleted = value
            .get_all("Deleted")
            .into_iter()
            .map(|d| -> Result<DeletedObject, XmlError> {
                Ok(DeletedObject {
                    key: required_text(d, "Key")?.to_owned(),
                    version_id: optional_text(d, "VersionId"),
                    delete_marker: optional_bool(d, "DeleteMarker")?,
                })
            })
            .collect::<Result<Vec<_>, XmlError>>()?;

        let errors = value
            .get_all("Error")
            .into_iter()
            .map(|e| -> Result<DeleteError, XmlError> {
                Ok(DeleteError {
                    key: required_text(e, "Key")?.to_owned(),
                    version_id: optional_text(e, "VersionId"),
                    code: required_text(e, "Code")?.to_owned(),
                    message: optional_text(e, "Message"),
                })
            })
            .collect::<Result<Vec<_>, XmlError>>()?;

        if !errors.is_empty() {
            tracing::debug!(failed = errors.len(), "multi-object delete reported errors");
        }
        Ok(Self { deleted, errors })
    }
}
