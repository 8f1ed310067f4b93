//! Domain objects for the S3 XML request and response documents.
//!
//! Types here are plain data: they are built by the caller, read by the
//! marshallers in `s3wire-xml`, and produced again by its typed decoders.
#![allow(missing_docs)]

pub mod input;
pub mod output;
pub mod types;

pub use input::{
    CompletedMultipartUpload, CsvInput, CsvOutput, DeleteRequest, FilterRule, InputFormat,
    InputSerialization, JsonInput, JsonOutput, LocationConstraint, NotificationConfiguration,
    NotificationTarget, OutputSerialization, SelectRequest, ServerSideEncryptionConfiguration,
    ServerSideEncryptionRule, UploadedPart,
};
pub use output::{CompleteMultipartUploadResult, DeleteError, DeleteResult, DeletedObject};
pub use types::{
    CompressionType, FileHeaderInfo, FilterRuleName, JsonType, QuoteFields, ServerSideEncryption,
};
