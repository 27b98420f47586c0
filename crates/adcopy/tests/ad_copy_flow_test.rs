//! Integration test for the full ad-copy request/response flow.
//! Runs entirely in demo mode — no generation credential required.

#[cfg(test)]
mod tests {
    use promo_adcopy::types::*;
    use promo_adcopy::AdCopyGenerator;

    /// Construct a sample generation request for testing.
    fn sample_request(platform: &str) -> AdCopyRequest {
        AdCopyRequest {
            platform: platform.to_string(),
            newsletter_name: Some("The Daily Byte".to_string()),
            newsletter_description: Some("Tech news in five minutes".to_string()),
            target_audience: Some("Software engineers".to_string()),
            subscriber_count: Some(12500),
            unique_value: Some("No fluff, ever".to_string()),
            target_keyword: Some("tech newsletter".to_string()),
            count: 3,
        }
    }

    #[test]
    fn test_request_serialization() {
        let request = sample_request("twitter");
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: AdCopyRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.platform, "twitter");
        assert_eq!(deserialized.count, 3);
        assert_eq!(deserialized.subscriber_count, Some(12500));
    }

    #[tokio::test]
    async fn test_demo_flow_all_platforms() {
        let generator = AdCopyGenerator::new(None);

        for platform in ["twitter", "linkedin", "seo"] {
            let response = generator.generate(&sample_request(platform)).await.unwrap();
            assert!(response.is_demo);
            assert_eq!(response.variations.len(), 3);
            assert_eq!(response.platform.as_str(), platform);

            // Response must round-trip as JSON for the HTTP layer.
            let json = serde_json::to_string(&response).unwrap();
            let roundtripped: AdCopyResponse = serde_json::from_str(&json).unwrap();
            assert_eq!(roundtripped.platform, response.platform);
            assert_eq!(roundtripped.variations.len(), 3);
        }
    }

    #[tokio::test]
    async fn test_demo_variations_respect_limits() {
        use promo_adcopy::validator::check_variation;

        let generator = AdCopyGenerator::new(None);
        let response = generator.generate(&sample_request("twitter")).await.unwrap();

        for variation in &response.variations {
            for check in check_variation(variation) {
                assert!(
                    !check.is_over_max,
                    "demo copy field {} exceeds its hard limit",
                    check.field
                );
            }
        }
    }
}
