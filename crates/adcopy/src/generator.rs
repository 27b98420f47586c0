//! The generation dispatcher: validates requests, picks the demo or live
//! path, and normalizes the generation-service payload into typed
//! variations.

use std::sync::Arc;

use promo_core::error::{PromoError, PromoResult};
use serde_json::Value;
use tracing::{info, warn};

use crate::client::CompletionClient;
use crate::demo;
use crate::platform::{Platform, PlatformCatalog};
use crate::prompt::{self, AdCopyContext, PromptPair};
use crate::types::{
    AdCopyRequest, AdCopyResponse, AdCopyVariation, LinkedInAdCopy, PromotionKit,
    PromotionKitRequest, PromotionKitResponse, SeoContent, SeoOptimization, SeoOptimizeRequest,
    TwitterAdCopy,
};

/// Single entry point for copy generation.
///
/// Mode is fixed at construction: `None` client means demo mode (canned
/// copy, no outbound calls), `Some` means live mode with exactly one
/// completion call per invocation. The credential check happens once, at
/// wiring time, never inside request handling.
pub struct AdCopyGenerator {
    catalog: PlatformCatalog,
    client: Option<Arc<dyn CompletionClient>>,
}

impl AdCopyGenerator {
    pub fn new(client: Option<Arc<dyn CompletionClient>>) -> Self {
        Self {
            catalog: PlatformCatalog::new(),
            client,
        }
    }

    pub fn catalog(&self) -> &PlatformCatalog {
        &self.catalog
    }

    pub fn is_demo(&self) -> bool {
        self.client.is_none()
    }

    /// Generate ad-copy variations for one platform.
    pub async fn generate(&self, request: &AdCopyRequest) -> PromoResult<AdCopyResponse> {
        let description = request
            .newsletter_description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| {
                PromoError::Validation("newsletter description is required".to_string())
            })?;
        let platform: Platform = request.platform.parse()?;
        if request.count == 0 {
            return Err(PromoError::Validation(
                "count must be a positive integer".to_string(),
            ));
        }

        let spec = self.catalog.spec(platform);
        let count = request.count as usize;

        let variations = match &self.client {
            None => {
                let name = non_empty(&request.newsletter_name).unwrap_or("Your Newsletter");
                info!(%platform, "No generation credential configured, serving demo ad copy");
                demo::demo_variations(platform, name, count)
            }
            Some(client) => {
                let ctx = AdCopyContext {
                    newsletter_name: non_empty(&request.newsletter_name).unwrap_or("Newsletter"),
                    newsletter_description: description,
                    target_audience: request.target_audience.as_deref(),
                    subscriber_count: request.subscriber_count,
                    unique_value: request.unique_value.as_deref(),
                    target_keyword: request.target_keyword.as_deref(),
                    count: request.count,
                };
                let prompts = prompt::build_ad_copy_prompts(spec, &ctx);
                let content = client.complete(&prompts).await?;
                let parsed: Value = serde_json::from_str(&content).map_err(|e| {
                    PromoError::Generation(format!("malformed generation payload: {}", e))
                })?;
                let payload = unwrap_variations(parsed);
                decode_variations(platform, payload)?
            }
        };

        if variations.len() < count {
            warn!(
                %platform,
                requested = count,
                returned = variations.len(),
                "Generation source returned fewer variations than requested"
            );
        }

        Ok(AdCopyResponse {
            platform,
            platform_name: spec.display_name.clone(),
            variations,
            specs: spec.clone(),
            is_demo: self.client.is_none(),
        })
    }

    /// Generate a weekly organic promotion kit.
    pub async fn promotion_kit(
        &self,
        request: &PromotionKitRequest,
    ) -> PromoResult<PromotionKitResponse> {
        let name = required_field(&request.newsletter_name, "newsletter name")?;
        let description = required_field(&request.newsletter_description, "newsletter description")?;

        let kit = match &self.client {
            None => {
                info!("No generation credential configured, serving demo promotion kit");
                demo::demo_promotion_kit(name, request.niche.as_deref())
            }
            Some(client) => {
                let prompts = PromptPair {
                    system: prompt::kit_system_prompt(),
                    user: prompt::kit_user_prompt(name, description, request.niche.as_deref()),
                };
                let content = client.complete(&prompts).await?;
                serde_json::from_str::<PromotionKit>(&content).map_err(|e| {
                    PromoError::Generation(format!("malformed promotion kit payload: {}", e))
                })?
            }
        };

        Ok(PromotionKitResponse {
            kit,
            is_demo: self.client.is_none(),
        })
    }

    /// Produce SEO optimization advice for a landing page. Live-only: this
    /// path has no canned fallback.
    pub async fn optimize_seo(&self, request: &SeoOptimizeRequest) -> PromoResult<SeoOptimization> {
        let keyword = required_field(&request.target_keyword, "target keyword")?;

        let client = self.client.as_ref().ok_or_else(|| {
            PromoError::Generation("generation service not configured".to_string())
        })?;

        let prompts = PromptPair {
            system: prompt::seo_optimizer_system_prompt(),
            user: prompt::seo_optimizer_user_prompt(
                keyword,
                request.page_type.as_deref(),
                request.newsletter_niche.as_deref(),
                request.current_content.as_deref(),
            ),
        };
        let content = client.complete(&prompts).await?;
        serde_json::from_str(&content).map_err(|e| {
            PromoError::Generation(format!("malformed SEO optimization payload: {}", e))
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required_field<'a>(value: &'a Option<String>, label: &str) -> PromoResult<&'a str> {
    non_empty(value).ok_or_else(|| PromoError::Validation(format!("{} is required", label)))
}

/// Unwrap a top-level `variations` key when present; otherwise the whole
/// value is the payload. Some generation models omit the wrapper despite
/// the prompt instruction.
pub(crate) fn unwrap_variations(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("variations") {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Decode the payload into the variation shape for the active platform.
fn decode_variations(platform: Platform, payload: Value) -> PromoResult<Vec<AdCopyVariation>> {
    let decoded = match platform {
        Platform::Twitter => serde_json::from_value::<Vec<TwitterAdCopy>>(payload)
            .map(|list| list.into_iter().map(AdCopyVariation::Twitter).collect()),
        Platform::Linkedin => serde_json::from_value::<Vec<LinkedInAdCopy>>(payload)
            .map(|list| list.into_iter().map(AdCopyVariation::LinkedIn).collect()),
        Platform::Seo => serde_json::from_value::<Vec<SeoContent>>(payload)
            .map(|list| list.into_iter().map(AdCopyVariation::Seo).collect()),
    };
    decoded.map_err(|e| {
        PromoError::Generation(format!(
            "generation payload did not match the {} variation shape: {}",
            platform, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Test double returning fixed content and counting outbound calls.
    struct StubClient {
        content: String,
        calls: AtomicUsize,
    }

    impl StubClient {
        fn new(content: impl Into<String>) -> Self {
            Self {
                content: content.into(),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionClient for StubClient {
        async fn complete(&self, _prompts: &PromptPair) -> PromoResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.content.clone())
        }
    }

    fn request(platform: &str, name: &str, description: &str, count: u32) -> AdCopyRequest {
        AdCopyRequest {
            platform: platform.to_string(),
            newsletter_name: Some(name.to_string()),
            newsletter_description: Some(description.to_string()),
            target_audience: None,
            subscriber_count: None,
            unique_value: None,
            target_keyword: None,
            count,
        }
    }

    #[tokio::test]
    async fn test_missing_description_rejected_without_outbound_call() {
        let client = Arc::new(StubClient::new("{}"));
        let generator = AdCopyGenerator::new(Some(client.clone()));

        let mut req = request("twitter", "Foo", "bar", 3);
        req.newsletter_description = None;
        let err = generator.generate(&req).await.unwrap_err();
        assert!(matches!(err, PromoError::Validation(_)));

        req.newsletter_description = Some("   ".to_string());
        let err = generator.generate(&req).await.unwrap_err();
        assert!(matches!(err, PromoError::Validation(_)));

        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_platform_rejected() {
        let generator = AdCopyGenerator::new(None);
        let err = generator
            .generate(&request("facebook", "Foo", "bar", 3))
            .await
            .unwrap_err();
        assert!(matches!(err, PromoError::UnknownPlatform(_)));
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_zero_count_rejected() {
        let generator = AdCopyGenerator::new(None);
        let err = generator
            .generate(&request("twitter", "Foo", "bar", 0))
            .await
            .unwrap_err();
        assert!(matches!(err, PromoError::Validation(_)));
    }

    #[tokio::test]
    async fn test_demo_mode_twitter() {
        let generator = AdCopyGenerator::new(None);
        let response = generator
            .generate(&request("twitter", "Foo", "bar", 3))
            .await
            .unwrap();

        assert!(response.is_demo);
        assert_eq!(response.platform, Platform::Twitter);
        assert_eq!(response.platform_name, "Twitter/X");
        assert_eq!(response.variations.len(), 3);
        for variation in &response.variations {
            match variation {
                AdCopyVariation::Twitter(v) => assert!(v.tweet_copy.contains("Foo")),
                _ => panic!("expected twitter variations"),
            }
        }
    }

    #[tokio::test]
    async fn test_demo_mode_caps_count_at_canned_size() {
        let generator = AdCopyGenerator::new(None);
        let response = generator
            .generate(&request("twitter", "Foo", "bar", 10))
            .await
            .unwrap();
        assert_eq!(response.variations.len(), 3);
    }

    #[tokio::test]
    async fn test_live_mode_parses_wrapped_payload() {
        let content = json!({
            "variations": [
                {
                    "tweet_copy": "Read Foo today.",
                    "headline": "Read Foo",
                    "cta_text": "Subscribe",
                    "hashtags": ["foo"],
                    "reasoning": "direct ask"
                },
                {
                    "tweet_copy": "Foo in 5 minutes.",
                    "headline": "5 minutes",
                    "cta_text": "Sign Up",
                    "hashtags": [],
                    "reasoning": "time benefit"
                }
            ]
        })
        .to_string();
        let client = Arc::new(StubClient::new(content));
        let generator = AdCopyGenerator::new(Some(client.clone()));

        let response = generator
            .generate(&request("twitter", "Foo", "bar", 2))
            .await
            .unwrap();
        assert!(!response.is_demo);
        assert_eq!(response.variations.len(), 2);
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_live_mode_accepts_bare_array_payload() {
        let content = json!([
            {
                "page_title": "Foo - Free Weekly Newsletter",
                "meta_description": "Subscribe to Foo.",
                "h1_headline": "Subscribe to Foo",
                "reasoning": "keyword focus"
            }
        ])
        .to_string();
        let generator = AdCopyGenerator::new(Some(Arc::new(StubClient::new(content))));

        let response = generator
            .generate(&request("seo", "Foo", "bar", 1))
            .await
            .unwrap();
        assert_eq!(response.variations.len(), 1);
        assert!(matches!(response.variations[0], AdCopyVariation::Seo(_)));
    }

    // Regression: a payload without the `variations` wrapper is taken whole,
    // not rejected for the missing key.
    #[test]
    fn test_unwrap_falls_back_to_whole_object() {
        assert_eq!(
            unwrap_variations(json!({"foo": "bar"})),
            json!({"foo": "bar"})
        );
        assert_eq!(
            unwrap_variations(json!({"variations": [1, 2]})),
            json!([1, 2])
        );
        assert_eq!(unwrap_variations(json!([3])), json!([3]));
    }

    #[tokio::test]
    async fn test_live_mode_unshaped_payload_is_generation_error() {
        let generator =
            AdCopyGenerator::new(Some(Arc::new(StubClient::new(r#"{"foo": "bar"}"#))));
        let err = generator
            .generate(&request("twitter", "Foo", "bar", 3))
            .await
            .unwrap_err();
        assert!(matches!(err, PromoError::Generation(_)));
    }

    #[tokio::test]
    async fn test_live_mode_empty_body_is_generation_error() {
        let generator = AdCopyGenerator::new(Some(Arc::new(StubClient::new(""))));
        let err = generator
            .generate(&request("twitter", "Foo", "bar", 3))
            .await
            .unwrap_err();
        assert!(matches!(err, PromoError::Generation(_)));
    }

    #[tokio::test]
    async fn test_kit_demo_mode() {
        let generator = AdCopyGenerator::new(None);
        let response = generator
            .promotion_kit(&PromotionKitRequest {
                newsletter_name: Some("Foo Weekly".to_string()),
                newsletter_description: Some("weekly foo".to_string()),
                niche: Some("fintech".to_string()),
            })
            .await
            .unwrap();
        assert!(response.is_demo);
        assert_eq!(response.kit.twitter_posts.len(), 3);
        assert!(response.kit.cross_promo_pitch.subject.contains("Foo Weekly"));
    }

    #[tokio::test]
    async fn test_kit_requires_name_and_description() {
        let client = Arc::new(StubClient::new("{}"));
        let generator = AdCopyGenerator::new(Some(client.clone()));
        let err = generator
            .promotion_kit(&PromotionKitRequest {
                newsletter_name: Some("Foo".to_string()),
                newsletter_description: None,
                niche: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PromoError::Validation(_)));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_seo_optimizer_requires_keyword() {
        let generator = AdCopyGenerator::new(None);
        let err = generator
            .optimize_seo(&SeoOptimizeRequest {
                target_keyword: None,
                current_content: None,
                page_type: None,
                newsletter_niche: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PromoError::Validation(_)));
    }

    #[tokio::test]
    async fn test_seo_optimizer_has_no_demo_fallback() {
        let generator = AdCopyGenerator::new(None);
        let err = generator
            .optimize_seo(&SeoOptimizeRequest {
                target_keyword: Some("tech newsletter".to_string()),
                current_content: None,
                page_type: None,
                newsletter_niche: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PromoError::Generation(_)));
    }

    #[tokio::test]
    async fn test_seo_optimizer_live() {
        let content = json!({
            "optimized_title": "Tech Newsletter - Weekly Insights | Foo",
            "meta_description": "Join Foo for weekly tech insights.",
            "headings": ["Why subscribe", "What you get"],
            "content_suggestions": ["Lead with the time savings."],
            "keyword_density_target": 0.02,
            "seo_score": 82,
            "improvements": ["Add keyword to H1"]
        })
        .to_string();
        let generator = AdCopyGenerator::new(Some(Arc::new(StubClient::new(content))));
        let optimization = generator
            .optimize_seo(&SeoOptimizeRequest {
                target_keyword: Some("tech newsletter".to_string()),
                current_content: None,
                page_type: None,
                newsletter_niche: Some("tech".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(optimization.seo_score, Some(82));
        assert_eq!(optimization.headings.len(), 2);
    }
}
