//! Request-side domain objects handed to the XML marshallers.

use serde::{Deserialize, Serialize};

use crate::types::{
    CompressionType, FileHeaderInfo, FilterRuleName, JsonType, QuoteFields, ServerSideEncryption,
};

/// One rule of a bucket default-encryption configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSideEncryptionRule {
    /// Algorithm; `AES256` is sent when unset.
    pub sse_algorithm: Option<ServerSideEncryption>,
    /// KMS key id, only meaningful for `aws:kms` algorithms.
    pub kms_master_key_id: Option<String>,
}

impl ServerSideEncryptionRule {
    /// An SSE-S3 (`AES256`) rule.
    #[must_use]
    pub fn aes256() -> Self {
        Self {
            sse_algorithm: Some(ServerSideEncryption::Aes256),
            kms_master_key_id: None,
        }
    }

    /// An SSE-KMS rule, optionally pinned to a key.
    #[must_use]
    pub fn kms(key_id: Option<String>) -> Self {
        Self {
            sse_algorithm: Some(ServerSideEncryption::AwsKms),
            kms_master_key_id: key_id,
        }
    }
}

/// Bucket default-encryption configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSideEncryptionConfiguration {
    pub rules: Vec<ServerSideEncryptionRule>,
}

/// The region a bucket is created in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationConstraint {
    pub region: String,
}

impl LocationConstraint {
    /// Create a location constraint for `region`.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
        }
    }
}

/// A part that has been uploaded as part of a multipart upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedPart {
    pub part_number: u32,
    /// ETag as returned by UploadPart, without surrounding quotes.
    pub etag: String,
}

impl UploadedPart {
    /// Create a new uploaded part.
    #[must_use]
    pub fn new(part_number: u32, etag: impl Into<String>) -> Self {
        Self {
            part_number,
            etag: etag.into(),
        }
    }
}

/// Parts listed in a CompleteMultipartUpload request, in caller order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedMultipartUpload {
    pub parts: Vec<UploadedPart>,
}

/// A key name filter rule of a notification target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRule {
    pub name: FilterRuleName,
    pub value: String,
}

impl FilterRule {
    /// Match keys starting with `value`.
    #[must_use]
    pub fn prefix(value: impl Into<String>) -> Self {
        Self {
            name: FilterRuleName::Prefix,
            value: value.into(),
        }
    }

    /// Match keys ending with `value`.
    #[must_use]
    pub fn suffix(value: impl Into<String>) -> Self {
        Self {
            name: FilterRuleName::Suffix,
            value: value.into(),
        }
    }
}

/// One topic, queue or cloud-function notification target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationTarget {
    pub id: Option<String>,
    pub arn: String,
    /// Event types such as `s3:ObjectCreated:*`, emitted in order.
    pub events: Vec<String>,
    pub filter_rules: Vec<FilterRule>,
}

/// Bucket event-notification configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfiguration {
    pub topic_configurations: Vec<NotificationTarget>,
    pub queue_configurations: Vec<NotificationTarget>,
    pub cloud_function_configurations: Vec<NotificationTarget>,
}

impl NotificationConfiguration {
    /// Whether no target of any kind is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topic_configurations.is_empty()
            && self.queue_configurations.is_empty()
            && self.cloud_function_configurations.is_empty()
    }
}

/// A Multi-Object Delete request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub quiet: bool,
    pub keys: Vec<String>,
}

/// CSV input settings of an S3 Select request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvInput {
    pub file_header_info: FileHeaderInfo,
    pub record_delimiter: String,
    pub field_delimiter: String,
    pub quote_character: String,
    pub quote_escape_character: String,
    pub comments: String,
    pub allow_quoted_record_delimiter: bool,
}

impl Default for CsvInput {
    fn default() -> Self {
        Self {
            file_header_info: FileHeaderInfo::None,
            record_delimiter: "\n".to_owned(),
            field_delimiter: ",".to_owned(),
            quote_character: "\"".to_owned(),
            quote_escape_character: "\"".to_owned(),
            comments: "#".to_owned(),
            allow_quoted_record_delimiter: false,
        }
    }
}

/// JSON input settings of an S3 Select request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonInput {
    pub json_type: JsonType,
}

/// The format of the object being queried. Exactly one applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    Csv(CsvInput),
    Json(JsonInput),
    Parquet,
}

impl Default for InputFormat {
    fn default() -> Self {
        Self::Csv(CsvInput::default())
    }
}

/// Input serialization of an S3 Select request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSerialization {
    pub compression_type: CompressionType,
    pub format: InputFormat,
}

/// CSV output settings of an S3 Select request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvOutput {
    pub quote_fields: QuoteFields,
    pub record_delimiter: String,
    pub field_delimiter: String,
    pub quote_character: String,
    pub quote_escape_character: String,
}

impl Default for CsvOutput {
    fn default() -> Self {
        Self {
            quote_fields: QuoteFields::AsNeeded,
            record_delimiter: "\n".to_owned(),
            field_delimiter: ",".to_owned(),
            quote_character: "\"".to_owned(),
            quote_escape_character: "\"".to_owned(),
        }
    }
}

/// JSON output settings of an S3 Select request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonOutput {
    pub record_delimiter: String,
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self {
            record_delimiter: "\n".to_owned(),
        }
    }
}

/// Output serialization of an S3 Select request. Exactly one applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputSerialization {
    Csv(CsvOutput),
    Json(JsonOutput),
}

impl Default for OutputSerialization {
    fn default() -> Self {
        Self::Csv(CsvOutput::default())
    }
}

/// A SelectObjectContent request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectRequest {
    /// SQL expression, e.g. `select * from S3Object`.
    pub expression: String,
    pub input: InputSerialization,
    pub output: OutputSerialization,
    pub request_progress: bool,
}

impl SelectRequest {
    /// Create a request with default CSV input and output.
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            ..Self::default()
        }
    }
}
