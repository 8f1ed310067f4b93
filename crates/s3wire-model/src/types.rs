//! Wire enums shared by several S3 documents.

use serde::{Deserialize, Serialize};

/// S3 ServerSideEncryption enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ServerSideEncryption {
    /// Default variant.
    #[default]
    #[serde(rename = "AES256")]
    Aes256,
    #[serde(rename = "aws:kms")]
    AwsKms,
    #[serde(rename = "aws:kms:dsse")]
    AwsKmsDsse,
}

impl ServerSideEncryption {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aes256 => "AES256",
            Self::AwsKms => "aws:kms",
            Self::AwsKmsDsse => "aws:kms:dsse",
        }
    }
}

impl std::fmt::Display for ServerSideEncryption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ServerSideEncryption {
    fn from(s: &str) -> Self {
        match s {
            "aws:kms" => Self::AwsKms,
            "aws:kms:dsse" => Self::AwsKmsDsse,
            _ => Self::default(),
        }
    }
}

/// S3 Select CompressionType enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompressionType {
    /// Default variant.
    #[default]
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "GZIP")]
    Gzip,
    #[serde(rename = "BZIP2")]
    Bzip2,
}

impl CompressionType {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Gzip => "GZIP",
            Self::Bzip2 => "BZIP2",
        }
    }
}

impl std::fmt::Display for CompressionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CompressionType {
    fn from(s: &str) -> Self {
        match s {
            "GZIP" => Self::Gzip,
            "BZIP2" => Self::Bzip2,
            _ => Self::default(),
        }
    }
}

/// S3 Select FileHeaderInfo enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FileHeaderInfo {
    #[serde(rename = "USE")]
    Use,
    #[serde(rename = "IGNORE")]
    Ignore,
    /// Default variant.
    #[default]
    #[serde(rename = "NONE")]
    None,
}

impl FileHeaderInfo {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Use => "USE",
            Self::Ignore => "IGNORE",
            Self::None => "NONE",
        }
    }
}

impl std::fmt::Display for FileHeaderInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FileHeaderInfo {
    fn from(s: &str) -> Self {
        match s {
            "USE" => Self::Use,
            "IGNORE" => Self::Ignore,
            _ => Self::default(),
        }
    }
}

/// S3 Select JSONType enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JsonType {
    /// Default variant.
    #[default]
    #[serde(rename = "DOCUMENT")]
    Document,
    #[serde(rename = "LINES")]
    Lines,
}

impl JsonType {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "DOCUMENT",
            Self::Lines => "LINES",
        }
    }
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for JsonType {
    fn from(s: &str) -> Self {
        match s {
            "LINES" => Self::Lines,
            _ => Self::default(),
        }
    }
}

/// S3 Select QuoteFields enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuoteFields {
    #[serde(rename = "ALWAYS")]
    Always,
    /// Default variant.
    #[default]
    #[serde(rename = "ASNEEDED")]
    AsNeeded,
}

impl QuoteFields {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "ALWAYS",
            Self::AsNeeded => "ASNEEDED",
        }
    }
}

impl std::fmt::Display for QuoteFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for QuoteFields {
    fn from(s: &str) -> Self {
        match s {
            "ALWAYS" => Self::Always,
            _ => Self::default(),
        }
    }
}

/// S3 FilterRuleName enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterRuleName {
    /// Default variant.
    #[default]
    #[serde(rename = "prefix")]
    Prefix,
    #[serde(rename = "suffix")]
    Suffix,
}

impl FilterRuleName {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Suffix => "suffix",
        }
    }
}

impl std::fmt::Display for FilterRuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FilterRuleName {
    fn from(s: &str) -> Self {
        match s {
            "suffix" => Self::Suffix,
            _ => Self::default(),
        }
    }
}
