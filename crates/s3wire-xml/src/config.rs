//! Configuration for encoding and decoding S3 XML documents.
//!
//! Nothing here is read from the environment: callers build an [`XmlConfig`]
//! (usually [`XmlConfig::default`]) and pass it into every call.

use serde::{Deserialize, Serialize};

/// The S3 XML namespace.
pub const S3_NAMESPACE: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

/// Element names used for one kind of notification target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetElements {
    /// Wrapper element, e.g. `TopicConfiguration`.
    pub configuration: String,
    /// Element carrying the target ARN, e.g. `Topic`.
    pub arn: String,
}

impl TargetElements {
    fn new(configuration: &str, arn: &str) -> Self {
        Self {
            configuration: configuration.to_owned(),
            arn: arn.to_owned(),
        }
    }
}

/// Element names for the three notification target groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationTargets {
    /// SNS topic targets.
    pub topic: TargetElements,
    /// SQS queue targets.
    pub queue: TargetElements,
    /// Lambda function targets.
    pub cloud_function: TargetElements,
}

impl Default for NotificationTargets {
    fn default() -> Self {
        Self {
            topic: TargetElements::new("TopicConfiguration", "Topic"),
            queue: TargetElements::new("QueueConfiguration", "Queue"),
            cloud_function: TargetElements::new("CloudFunctionConfiguration", "CloudFunction"),
        }
    }
}

/// Settings shared by the marshallers and the mapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct XmlConfig {
    /// Namespace declared on namespaced roots and stripped on decode.
    pub namespace: String,
    /// Child tags the mapper always collects into a list, even when single.
    pub always_list_tags: Vec<String>,
    /// Element names for notification targets.
    pub notification_targets: NotificationTargets,
}

impl Default for XmlConfig {
    fn default() -> Self {
        Self {
            namespace: S3_NAMESPACE.to_owned(),
            always_list_tags: vec!["Rule".to_owned()],
            notification_targets: NotificationTargets::default(),
        }
    }
}

impl XmlConfig {
    /// Whether `tag` must always decode as a list.
    #[must_use]
    pub fn is_always_list(&self, tag: &str) -> bool {
        self.always_list_tags.iter().any(|t| t == tag)
    }

    /// The `{namespace}` prefix carried by resolved tag names.
    #[must_use]
    pub fn qualified_prefix(&self) -> String {
        format!("{{{}}}", self.namespace)
    }
}
