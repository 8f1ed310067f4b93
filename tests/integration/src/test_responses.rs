//! Decoding of recorded S3 response bodies.

#[cfg(test)]
mod tests {
    use s3wire_model::{
        CompleteMultipartUploadResult, DeleteResult, FilterRuleName, NotificationConfiguration,
        ServerSideEncryption, ServerSideEncryptionConfiguration,
    };
    use s3wire_xml::{XmlError, XmlValue, from_xml, parse_to_mapping};
    use serde_json::json;

    use crate::{decode_json, test_config};

    const NOTIFICATION_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<NotificationConfiguration xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <TopicConfiguration>
    <Id>uploads</Id>
    <Topic>arn:aws:sns:us-east-1:123456789012:uploads</Topic>
    <Event>s3:ObjectCreated:Put</Event>
    <Event>s3:ObjectCreated:Post</Event>
    <Filter>
      <S3Key>
        <FilterRule><Name>prefix</Name><Value>incoming/</Value></FilterRule>
        <FilterRule><Name>suffix</Name><Value>.csv</Value></FilterRule>
      </S3Key>
    </Filter>
  </TopicConfiguration>
  <TopicConfiguration>
    <Id>removals</Id>
    <Topic>arn:aws:sns:us-east-1:123456789012:removals</Topic>
    <Event>s3:ObjectRemoved:*</Event>
  </TopicConfiguration>
</NotificationConfiguration>"#;

    #[test]
    fn test_should_decode_notification_response() -> anyhow::Result<()> {
        let decoded: NotificationConfiguration =
            from_xml(NOTIFICATION_RESPONSE.as_bytes(), &test_config())?;
        assert_eq!(decoded.topic_configurations.len(), 2);
        assert!(decoded.queue_configurations.is_empty());

        let uploads = &decoded.topic_configurations[0];
        assert_eq!(uploads.id.as_deref(), Some("uploads"));
        assert_eq!(
            uploads.events,
            vec!["s3:ObjectCreated:Put", "s3:ObjectCreated:Post"]
        );
        assert_eq!(uploads.filter_rules.len(), 2);
        assert_eq!(uploads.filter_rules[1].name, FilterRuleName::Suffix);
        assert_eq!(uploads.filter_rules[1].value, ".csv");

        let removals = &decoded.topic_configurations[1];
        assert_eq!(removals.events, vec!["s3:ObjectRemoved:*"]);
        assert!(removals.filter_rules.is_empty());
        Ok(())
    }

    #[test]
    fn test_should_map_notification_response_without_namespace() -> anyhow::Result<()> {
        let value = decode_json(NOTIFICATION_RESPONSE.as_bytes())?;
        let topics = &value["NotificationConfiguration"]["TopicConfiguration"];
        assert_eq!(topics.as_array().map(Vec::len), Some(2));
        assert_eq!(topics[1]["Event"], json!("s3:ObjectRemoved:*"));
        assert_eq!(
            topics[0]["Event"],
            json!(["s3:ObjectCreated:Put", "s3:ObjectCreated:Post"])
        );
        Ok(())
    }

    #[test]
    fn test_should_always_list_lifecycle_rules() -> anyhow::Result<()> {
        let xml = br#"<LifecycleConfiguration xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Rule>
    <ID>expire-logs</ID>
    <Filter><Prefix>logs/</Prefix></Filter>
    <Status>Enabled</Status>
    <Expiration><Days>30</Days></Expiration>
  </Rule>
</LifecycleConfiguration>"#;
        let value = decode_json(xml)?;
        assert_eq!(
            value,
            json!({
                "LifecycleConfiguration": {
                    "Rule": [{
                        "ID": "expire-logs",
                        "Filter": {"Prefix": "logs/"},
                        "Status": "Enabled",
                        "Expiration": {"Days": "30"}
                    }]
                }
            })
        );
        Ok(())
    }

    #[test]
    fn test_should_decode_encryption_response() -> anyhow::Result<()> {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<ServerSideEncryptionConfiguration xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Rule>
    <ApplyServerSideEncryptionByDefault>
      <SSEAlgorithm>aws:kms</SSEAlgorithm>
      <KMSMasterKeyID>arn:aws:kms:us-east-1:123456789012:key/abcd</KMSMasterKeyID>
    </ApplyServerSideEncryptionByDefault>
    <BucketKeyEnabled>true</BucketKeyEnabled>
  </Rule>
</ServerSideEncryptionConfiguration>"#;
        let decoded: ServerSideEncryptionConfiguration = from_xml(xml, &test_config())?;
        assert_eq!(decoded.rules.len(), 1);
        assert_eq!(
            decoded.rules[0].sse_algorithm,
            Some(ServerSideEncryption::AwsKms)
        );
        assert_eq!(
            decoded.rules[0].kms_master_key_id.as_deref(),
            Some("arn:aws:kms:us-east-1:123456789012:key/abcd")
        );
        Ok(())
    }

    #[test]
    fn test_should_decode_complete_multipart_upload_result() -> anyhow::Result<()> {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<CompleteMultipartUploadResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Location>http://example-bucket.s3.amazonaws.com/big.bin</Location>
  <Bucket>example-bucket</Bucket>
  <Key>big.bin</Key>
  <ETag>"3858f62230ac3c915f300c664312c11f-9"</ETag>
</CompleteMultipartUploadResult>"#;
        let decoded: CompleteMultipartUploadResult = from_xml(xml, &test_config())?;
        assert_eq!(decoded.bucket.as_deref(), Some("example-bucket"));
        assert_eq!(decoded.key.as_deref(), Some("big.bin"));
        assert_eq!(
            decoded.etag.as_deref(),
            Some("\"3858f62230ac3c915f300c664312c11f-9\"")
        );
        Ok(())
    }

    #[test]
    fn test_should_decode_delete_result_with_errors() -> anyhow::Result<()> {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<DeleteResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Deleted><Key>a.txt</Key></Deleted>
  <Deleted><Key>b.txt</Key><DeleteMarker>true</DeleteMarker><VersionId>v2</VersionId></Deleted>
  <Error><Key>c.txt</Key><Code>AccessDenied</Code><Message>Access Denied</Message></Error>
</DeleteResult>"#;
        let decoded: DeleteResult = from_xml(xml, &test_config())?;
        assert!(!decoded.is_success());
        assert_eq!(decoded.deleted.len(), 2);
        assert_eq!(decoded.deleted[1].delete_marker, Some(true));
        assert_eq!(decoded.deleted[1].version_id.as_deref(), Some("v2"));
        assert_eq!(decoded.errors[0].code, "AccessDenied");
        assert_eq!(decoded.errors[0].message.as_deref(), Some("Access Denied"));
        Ok(())
    }

    #[test]
    fn test_should_map_error_response_with_attribute() -> anyhow::Result<()> {
        let xml = br#"<Error><Code>NoSuchKey</Code><Message>The specified key does not exist.</Message><Key lang="en">missing.txt</Key></Error>"#;
        let mapping = parse_to_mapping(xml, &test_config())?;
        let error = mapping.get("Error").expect("error root");
        assert_eq!(error.text_of("Code"), Some("NoSuchKey"));
        let key = error.get("Key").expect("key element");
        assert_eq!(key.attribute("lang"), Some("en"));
        assert_eq!(key.as_text(), Some("missing.txt"));
        Ok(())
    }

    #[test]
    fn test_should_reject_unexpected_root() {
        let result: Result<DeleteResult, XmlError> =
            from_xml(NOTIFICATION_RESPONSE.as_bytes(), &test_config());
        assert!(matches!(
            result,
            Err(XmlError::UnexpectedElement(root)) if root == "NotificationConfiguration"
        ));
    }

    #[test]
    fn test_should_report_truncated_response_as_parse_error() {
        let truncated = &NOTIFICATION_RESPONSE.as_bytes()[..200];
        let err = parse_to_mapping(truncated, &test_config()).expect_err("truncated body");
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_should_map_empty_root_to_null() -> anyhow::Result<()> {
        let mapping = parse_to_mapping(
            br#"<NotificationConfiguration xmlns="http://s3.amazonaws.com/doc/2006-03-01/"/>"#,
            &test_config(),
        )?;
        assert!(
            mapping
                .get("NotificationConfiguration")
                .is_some_and(XmlValue::is_null)
        );
        Ok(())
    }
}
