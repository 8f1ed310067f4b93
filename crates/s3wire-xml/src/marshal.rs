//! Marshallers turning request domain objects into S3 XML bodies.
//!
//! Every function builds an [`XmlElement`] tree and renders it with
//! [`to_bytes`]. Output carries no XML declaration; namespaced documents
//! declare [`XmlConfig::namespace`] on the root only.

use s3wire_model::{
    CsvInput, CsvOutput, InputFormat, NotificationConfiguration, NotificationTarget,
    OutputSerialization, SelectRequest, ServerSideEncryption, ServerSideEncryptionRule,
    UploadedPart,
};

use crate::config::{TargetElements, XmlConfig};
use crate::error::XmlError;
use crate::serialize::to_bytes;
use crate::tree::XmlElement;

fn bool_text(v: bool) -> &'static str {
    if v { "true" } else { "false" }
}

/// Marshal a PutBucketEncryption body.
///
/// S3 accepts a single rule, so only the first rule is emitted. An empty
/// rule list produces an empty configuration element.
pub fn marshal_bucket_encryption(
    rules: &[ServerSideEncryptionRule],
    config: &XmlConfig,
) -> Result<Vec<u8>, XmlError> {
    let mut root = XmlElement::root("ServerSideEncryptionConfiguration", false, config);

    if let Some(rule) = rules.first() {
        if rules.len() > 1 {
            tracing::warn!(
                dropped = rules.len() - 1,
                "only the first server-side encryption rule is sent"
            );
        }
        let apply = root
            .add_child("Rule", None)
            .add_child("ApplyServerSideEncryptionByDefault", None);
        let algorithm = rule
            .sse_algorithm
            .as_ref()
            .unwrap_or(&ServerSideEncryption::Aes256);
        apply.add_child("SSEAlgorithm", Some(algorithm.as_str()));
        if let Some(key_id) = rule.kms_master_key_id.as_deref().filter(|k| !k.is_empty()) {
            apply.add_child("KMSMasterKeyID", Some(key_id));
        }
    }

    finish(&root, 0)
}

/// Marshal a CreateBucket body for `region`.
///
/// The region text is emitted verbatim, including the empty string.
pub fn marshal_bucket_constraint(region: &str, config: &XmlConfig) -> Result<Vec<u8>, XmlError> {
    let mut root = XmlElement::root("CreateBucketConfiguration", true, config);
    root.add_child("LocationConstraint", Some(region));
    finish(&root, 1)
}

/// Marshal a SelectObjectContent body.
pub fn marshal_select(request: &SelectRequest, config: &XmlConfig) -> Result<Vec<u8>, XmlError> {
    let mut root = XmlElement::root("SelectObjectContentRequest", false, config);
    root.add_child("Expression", Some(&request.expression));
    root.add_child("ExpressionType", Some("SQL"));

    let input = root.add_child("InputSerialization", None);
    input.add_child(
        "CompressionType",
        Some(request.input.compression_type.as_str()),
    );
    match &request.input.format {
        InputFormat::Csv(csv) => write_csv_input(input.add_child("CSV", None), csv),
        InputFormat::Json(json) => {
            input
                .add_child("JSON", None)
                .add_child("Type", Some(json.json_type.as_str()));
        }
        InputFormat::Parquet => {
            input.add_child("Parquet", None);
        }
    }

    let output = root.add_child("OutputSerialization", None);
    match &request.output {
        OutputSerialization::Csv(csv) => write_csv_output(output.add_child("CSV", None), csv),
        OutputSerialization::Json(json) => {
            output
                .add_child("JSON", None)
                .add_child("RecordDelimiter", Some(&json.record_delimiter));
        }
    }

    root.add_child("RequestProgress", None)
        .add_child("Enabled", Some(bool_text(request.request_progress)));

    finish(&root, 1)
}

fn write_csv_input(csv: &mut XmlElement, input: &CsvInput) {
    csv.add_child("FileHeaderInfo", Some(input.file_header_info.as_str()));
    csv.add_child("RecordDelimiter", Some(&input.record_delimiter));
    csv.add_child("FieldDelimiter", Some(&input.field_delimiter));
    csv.add_child("QuoteCharacter", Some(&input.quote_character));
    csv.add_child("QuoteEscapeCharacter", Some(&input.quote_escape_character));
    csv.add_child("Comments", Some(&input.comments));
    csv.add_child(
        "AllowQuotedRecordDelimiter",
        Some(bool_text(input.allow_quoted_record_delimiter)),
    );
}

fn write_csv_output(csv: &mut XmlElement, output: &CsvOutput) {
    csv.add_child("QuoteFields", Some(output.quote_fields.as_str()));
    csv.add_child("RecordDelimiter", Some(&output.record_delimiter));
    csv.add_child("FieldDelimiter", Some(&output.field_delimiter));
    csv.add_child("QuoteCharacter", Some(&output.quote_character));
    csv.add_child("QuoteEscapeCharacter", Some(&output.quote_escape_character));
}

/// Marshal a CompleteMultipartUpload body.
///
/// Parts are emitted in the given order, which must already be ascending by
/// part number. ETags are wrapped in double quotes.
pub fn marshal_complete_multipart_upload(
    parts: &[UploadedPart],
    config: &XmlConfig,
) -> Result<Vec<u8>, XmlError> {
    let mut root = XmlElement::root("CompleteMultipartUpload", true, config);
    for uploaded in parts {
        let part = root.add_child("Part", None);
        part.add_child("PartNumber", Some(&uploaded.part_number.to_string()));
        part.add_child("ETag", Some(&format!("\"{}\"", uploaded.etag)));
    }
    finish(&root, parts.len())
}

/// Marshal a PutBucketNotificationConfiguration body.
///
/// # Errors
///
/// Returns [`XmlError::ContractViolation`] if a target has an empty ARN or no
/// events.
pub fn marshal_bucket_notifications(
    notifications: &NotificationConfiguration,
    config: &XmlConfig,
) -> Result<Vec<u8>, XmlError> {
    if notifications.is_empty() {
        tracing::debug!("no notification targets, bucket notifications will be cleared");
    }
    let targets = &config.notification_targets;
    let mut root = XmlElement::root("NotificationConfiguration", true, config);
    add_notification_targets(
        &mut root,
        &targets.topic,
        &notifications.topic_configurations,
    )?;
    add_notification_targets(
        &mut root,
        &targets.queue,
        &notifications.queue_configurations,
    )?;
    add_notification_targets(
        &mut root,
        &targets.cloud_function,
        &notifications.cloud_function_configurations,
    )?;
    let entries = root.children.len();
    finish(&root, entries)
}

fn add_notification_targets(
    root: &mut XmlElement,
    elements: &TargetElements,
    targets: &[NotificationTarget],
) -> Result<(), XmlError> {
    for target in targets {
        if target.arn.is_empty() {
            return Err(XmlError::ContractViolation(format!(
                "{} has no {} ARN",
                elements.configuration, elements.arn
            )));
        }
        if target.events.is_empty() {
            return Err(XmlError::ContractViolation(format!(
                "{} for {} has no events",
                elements.configuration, target.arn
            )));
        }

        let node = root.add_child(elements.configuration.as_str(), None);
        if let Some(id) = target.id.as_deref() {
            node.add_child("Id", Some(id));
        }
        node.add_child(elements.arn.as_str(), Some(&target.arn));
        for event in &target.events {
            node.add_child("Event", Some(event));
        }

        if !target.filter_rules.is_empty() {
            let key = node.add_child("Filter", None).add_child("S3Key", None);
            for rule in &target.filter_rules {
                let rule_node = key.add_child("FilterRule", None);
                rule_node.add_child("Name", Some(rule.name.as_str()));
                rule_node.add_child("Value", Some(&rule.value));
            }
        }
    }
    Ok(())
}

/// Marshal a Multi-Object Delete body in quiet mode, so the server reports
/// only failures.
pub fn marshal_delete_objects<S: AsRef<str>>(
    object_names: &[S],
    config: &XmlConfig,
) -> Result<Vec<u8>, XmlError> {
    let mut root = XmlElement::root("Delete", false, config);
    root.add_child("Quiet", Some("true"));
    for name in object_names {
        root.add_child("Object", None)
            .add_child("Key", Some(name.as_ref()));
    }
    finish(&root, object_names.len())
}

fn finish(root: &XmlElement, entries: usize) -> Result<Vec<u8>, XmlError> {
    let xml = to_bytes(root)?;
    tracing::debug!(root = %root.tag, entries, bytes = xml.len(), "marshalled XML document");
    Ok(xml)
}
