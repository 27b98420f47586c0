//! Request and response types for ad-copy generation, promotion kits, and
//! SEO optimization.

use serde::{Deserialize, Serialize};

use crate::platform::{Platform, PlatformSpec};

fn default_count() -> u32 {
    3
}

/// Request body for ad-copy generation.
///
/// `platform` stays a raw string here so the closed-set check happens in the
/// dispatcher and surfaces as a validation error, not a deserialization
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdCopyRequest {
    pub platform: String,
    #[serde(default)]
    pub newsletter_name: Option<String>,
    #[serde(default)]
    pub newsletter_description: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub subscriber_count: Option<u64>,
    #[serde(default)]
    pub unique_value: Option<String>,
    /// Only meaningful for seo requests; defaults to "newsletter" when absent.
    #[serde(default)]
    pub target_keyword: Option<String>,
    #[serde(default = "default_count")]
    pub count: u32,
}

// ─── Variations ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterAdCopy {
    pub tweet_copy: String,
    pub headline: String,
    pub cta_text: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedInAdCopy {
    pub intro_text: String,
    pub headline: String,
    pub cta_text: String,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoContent {
    pub page_title: String,
    pub meta_description: String,
    pub h1_headline: String,
    pub reasoning: String,
}

/// One candidate unit of generated copy. The variant always matches the
/// requested platform; untagged serialization keeps the wire shape flat.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdCopyVariation {
    Twitter(TwitterAdCopy),
    LinkedIn(LinkedInAdCopy),
    Seo(SeoContent),
}

/// Full generation result, carrying the platform spec so callers can render
/// limits and best practices beside the copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdCopyResponse {
    pub platform: Platform,
    pub platform_name: String,
    pub variations: Vec<AdCopyVariation>,
    pub specs: PlatformSpec,
    pub is_demo: bool,
}

// ─── Promotion kit ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionKitRequest {
    #[serde(default)]
    pub newsletter_name: Option<String>,
    #[serde(default)]
    pub newsletter_description: Option<String>,
    #[serde(default)]
    pub niche: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialPost {
    pub content: String,
    pub post_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedInPost {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossPromoPitch {
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterAdTeaser {
    pub tweet: String,
    pub headline: String,
}

/// A weekly organic promotion bundle: social posts, a long-form LinkedIn
/// post, a cross-promotion outreach pitch, and an optional ad teaser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionKit {
    pub twitter_posts: Vec<SocialPost>,
    pub linkedin_post: LinkedInPost,
    pub cross_promo_pitch: CrossPromoPitch,
    #[serde(default)]
    pub twitter_ad: Option<TwitterAdTeaser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionKitResponse {
    pub kit: PromotionKit,
    pub is_demo: bool,
}

// ─── SEO optimizer ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoOptimizeRequest {
    #[serde(default)]
    pub target_keyword: Option<String>,
    #[serde(default)]
    pub current_content: Option<String>,
    #[serde(default)]
    pub page_type: Option<String>,
    #[serde(default)]
    pub newsletter_niche: Option<String>,
}

/// Structured optimization advice for a landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoOptimization {
    pub optimized_title: String,
    pub meta_description: String,
    #[serde(default)]
    pub headings: Vec<String>,
    #[serde(default)]
    pub content_suggestions: Vec<String>,
    #[serde(default)]
    pub keyword_density_target: Option<f64>,
    #[serde(default)]
    pub seo_score: Option<u32>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: AdCopyRequest =
            serde_json::from_str(r#"{"platform": "twitter"}"#).unwrap();
        assert_eq!(request.count, 3);
        assert!(request.newsletter_description.is_none());
        assert!(request.subscriber_count.is_none());
    }

    #[test]
    fn test_variation_untagged_wire_shape() {
        let variation = AdCopyVariation::Twitter(TwitterAdCopy {
            tweet_copy: "Read this.".to_string(),
            headline: "Read it".to_string(),
            cta_text: "Subscribe".to_string(),
            hashtags: vec!["newsletter".to_string()],
            reasoning: "direct".to_string(),
        });
        let json = serde_json::to_value(&variation).unwrap();
        // Flat object, no enum tag.
        assert!(json.get("tweet_copy").is_some());
        assert!(json.get("Twitter").is_none());
    }

    #[test]
    fn test_variation_decode_by_required_fields() {
        let seo: AdCopyVariation = serde_json::from_str(
            r#"{"page_title": "T", "meta_description": "M", "h1_headline": "H", "reasoning": "R"}"#,
        )
        .unwrap();
        assert!(matches!(seo, AdCopyVariation::Seo(_)));

        let linkedin: AdCopyVariation = serde_json::from_str(
            r#"{"intro_text": "I", "headline": "H", "cta_text": "Subscribe", "reasoning": "R"}"#,
        )
        .unwrap();
        assert!(matches!(linkedin, AdCopyVariation::LinkedIn(_)));
    }

    #[test]
    fn test_kit_optional_ad_teaser() {
        let kit: PromotionKit = serde_json::from_str(
            r#"{
                "twitter_posts": [{"content": "c", "post_type": "Personal story"}],
                "linkedin_post": {"content": "c"},
                "cross_promo_pitch": {"subject": "s", "body": "b"}
            }"#,
        )
        .unwrap();
        assert!(kit.twitter_ad.is_none());
        assert_eq!(kit.twitter_posts.len(), 1);
    }
}
