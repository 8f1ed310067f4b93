//! XML encoding and decoding for S3 request and response bodies.
//!
//! The crate has two symmetric halves:
//!
//! - Marshallers ([`marshal_bucket_encryption`], [`marshal_bucket_constraint`],
//!   [`marshal_select`], [`marshal_complete_multipart_upload`],
//!   [`marshal_bucket_notifications`], [`marshal_delete_objects`]) build an
//!   [`XmlElement`] tree from a domain object and render it with [`to_bytes`]
//! - [`parse_to_mapping`] parses a response body and folds it into a nested
//!   [`XmlValue`], stripping the S3 namespace; [`from_xml`] goes one step
//!   further into typed documents
//!
//! # S3 XML conventions
//!
//! - Namespace: `http://s3.amazonaws.com/doc/2006-03-01/`, declared on the root only
//! - Booleans: lowercase `true`/`false`
//! - No XML declaration on request bodies

pub mod config;
pub mod deserialize;
pub mod error;
pub mod mapping;
pub mod marshal;
pub mod parse;
pub mod serialize;
pub mod tree;

pub use config::{NotificationTargets, S3_NAMESPACE, TargetElements, XmlConfig};
pub use deserialize::{FromXmlValue, from_xml};
pub use error::XmlError;
pub use mapping::{OneOrMany, XmlValue, element_to_mapping, parse_to_mapping};
pub use marshal::{
    marshal_bucket_constraint, marshal_bucket_encryption, marshal_bucket_notifications,
    marshal_complete_multipart_upload, marshal_delete_objects, marshal_select,
};
pub use parse::parse_tree;
pub use serialize::to_bytes;
pub use tree::XmlElement;
