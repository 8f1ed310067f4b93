//! Marshallers and the mapper called from many threads at once.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use s3wire_model::{SelectRequest, UploadedPart};
    use s3wire_xml::{
        marshal_bucket_constraint, marshal_complete_multipart_upload, marshal_select,
        parse_to_mapping,
    };

    use crate::test_config;

    const THREADS: usize = 8;

    #[test]
    fn test_should_produce_identical_bodies_across_threads() -> anyhow::Result<()> {
        let config = Arc::new(test_config());
        let parts: Arc<Vec<UploadedPart>> = Arc::new(
            (1..=50)
                .map(|n| UploadedPart::new(n, format!("etag-{n}")))
                .collect(),
        );
        let expected = marshal_complete_multipart_upload(&parts, &config)?;

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let config = Arc::clone(&config);
                let parts = Arc::clone(&parts);
                thread::spawn(move || marshal_complete_multipart_upload(&parts, &config))
            })
            .collect();

        for handle in handles {
            let body = handle.join().expect("thread should not panic")?;
            assert_eq!(body, expected);
        }
        Ok(())
    }

    #[test]
    fn test_should_map_concurrently_without_interference() -> anyhow::Result<()> {
        let config = Arc::new(test_config());
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let config = Arc::clone(&config);
                thread::spawn(move || -> anyhow::Result<()> {
                    let region = format!("region-{i}");
                    let body = marshal_bucket_constraint(&region, &config)?;
                    let mapping = parse_to_mapping(&body, &config)?;
                    let got = mapping
                        .get("CreateBucketConfiguration")
                        .and_then(|c| c.text_of("LocationConstraint"));
                    assert_eq!(got, Some(region.as_str()));

                    let select = marshal_select(&SelectRequest::new(format!("select {i}")), &config)?;
                    let mapping = parse_to_mapping(&select, &config)?;
                    let expr = mapping
                        .get("SelectObjectContentRequest")
                        .and_then(|s| s.text_of("Expression"))
                        .map(str::to_owned);
                    assert_eq!(expr, Some(format!("select {i}")));
                    Ok(())
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("thread should not panic")?;
        }
        Ok(())
    }
}
