//! Advisory character-count checks and plain-text rendering for generated
//! variations.
//!
//! Checks never reject copy: over-limit fields are flagged for the caller
//! to edit by hand before pasting into the ad platform.

use crate::platform::{
    FieldLimit, LINKEDIN_HEADLINE, LINKEDIN_INTRO, SEO_H1_HEADLINE, SEO_META_DESCRIPTION,
    SEO_PAGE_TITLE, TWEET_COPY, TWEET_COPY_WITH_LINK, TWEET_HEADLINE,
};
use crate::types::AdCopyVariation;
use serde::Serialize;

/// One field measured against its platform budget.
#[derive(Debug, Clone, Serialize)]
pub struct FieldCheck {
    pub field: String,
    pub char_count: usize,
    pub max: u32,
    pub recommended: Option<u32>,
    pub is_over_max: bool,
    pub is_over_recommended: bool,
}

/// Measure one field value against a limit. Counts characters, not bytes,
/// since the platforms meter user-perceived length.
pub fn check_field(field: &str, value: &str, limit: FieldLimit) -> FieldCheck {
    let char_count = value.chars().count();
    FieldCheck {
        field: field.to_string(),
        char_count,
        max: limit.max,
        recommended: limit.recommended,
        is_over_max: char_count > limit.max as usize,
        is_over_recommended: limit
            .recommended
            .map(|rec| char_count > rec as usize)
            .unwrap_or(false),
    }
}

/// Check every limited field of a variation. Tweet copy is measured against
/// the with-link ceiling as its recommended bound, matching how the consumer
/// display renders it.
pub fn check_variation(variation: &AdCopyVariation) -> Vec<FieldCheck> {
    match variation {
        AdCopyVariation::Twitter(v) => vec![
            check_field(
                "tweet_copy",
                &v.tweet_copy,
                FieldLimit {
                    max: TWEET_COPY.max,
                    recommended: Some(TWEET_COPY_WITH_LINK),
                },
            ),
            check_field("headline", &v.headline, TWEET_HEADLINE),
        ],
        AdCopyVariation::LinkedIn(v) => vec![
            check_field("intro_text", &v.intro_text, LINKEDIN_INTRO),
            check_field("headline", &v.headline, LINKEDIN_HEADLINE),
        ],
        AdCopyVariation::Seo(v) => vec![
            check_field("page_title", &v.page_title, SEO_PAGE_TITLE),
            check_field("meta_description", &v.meta_description, SEO_META_DESCRIPTION),
            check_field("h1_headline", &v.h1_headline, SEO_H1_HEADLINE),
        ],
    }
}

/// Display text for a limit, e.g. "250 chars recommended (280 max)".
pub fn char_limit_text(limit: FieldLimit) -> String {
    match limit.recommended {
        Some(rec) if rec < limit.max => {
            format!("{} chars recommended ({} max)", rec, limit.max)
        }
        _ => format!("{} chars max", limit.max),
    }
}

/// Render variations as plain text for copy-to-clipboard use.
pub fn render_variations_text(variations: &[AdCopyVariation]) -> String {
    let mut text = String::new();
    for (i, variation) in variations.iter().enumerate() {
        text.push_str(&format!("=== VARIATION {} ===\n\n", i + 1));
        match variation {
            AdCopyVariation::Twitter(v) => {
                text.push_str(&format!("TWEET COPY:\n{}\n\n", v.tweet_copy));
                text.push_str(&format!("CARD HEADLINE:\n{}\n\n", v.headline));
                text.push_str(&format!("CTA: {}\n", v.cta_text));
                if !v.hashtags.is_empty() {
                    let tags: Vec<String> =
                        v.hashtags.iter().map(|h| format!("#{}", h)).collect();
                    text.push_str(&format!("HASHTAGS: {}\n", tags.join(" ")));
                }
                text.push('\n');
            }
            AdCopyVariation::LinkedIn(v) => {
                text.push_str(&format!("INTRO TEXT:\n{}\n\n", v.intro_text));
                text.push_str(&format!("HEADLINE:\n{}\n\n", v.headline));
                text.push_str(&format!("CTA: {}\n\n", v.cta_text));
            }
            AdCopyVariation::Seo(v) => {
                text.push_str(&format!("PAGE TITLE:\n{}\n\n", v.page_title));
                text.push_str(&format!("META DESCRIPTION:\n{}\n\n", v.meta_description));
                text.push_str(&format!("H1 HEADLINE:\n{}\n\n", v.h1_headline));
            }
        }
    }
    text.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SeoContent, TwitterAdCopy};

    #[test]
    fn test_over_recommended_but_under_max() {
        let limit = FieldLimit {
            max: 280,
            recommended: Some(257),
        };
        let copy = "x".repeat(260);
        let check = check_field("tweet_copy", &copy, limit);
        assert_eq!(check.char_count, 260);
        assert!(!check.is_over_max);
        assert!(check.is_over_recommended);
    }

    #[test]
    fn test_over_max() {
        let limit = FieldLimit {
            max: 280,
            recommended: Some(257),
        };
        let check = check_field("tweet_copy", &"x".repeat(281), limit);
        assert!(check.is_over_max);
        assert!(check.is_over_recommended);
    }

    #[test]
    fn test_exact_boundary_is_not_over() {
        let limit = FieldLimit {
            max: 280,
            recommended: Some(257),
        };
        let check = check_field("tweet_copy", &"x".repeat(257), limit);
        assert!(!check.is_over_max);
        assert!(!check.is_over_recommended);

        let check = check_field("tweet_copy", &"x".repeat(280), limit);
        assert!(!check.is_over_max);
        assert!(check.is_over_recommended);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let limit = FieldLimit {
            max: 5,
            recommended: None,
        };
        // Five multibyte characters, fifteen bytes.
        let check = check_field("headline", "あいうえお", limit);
        assert_eq!(check.char_count, 5);
        assert!(!check.is_over_max);
    }

    #[test]
    fn test_check_variation_twitter_fields() {
        let variation = AdCopyVariation::Twitter(TwitterAdCopy {
            tweet_copy: "x".repeat(260),
            headline: "short".to_string(),
            cta_text: "Subscribe".to_string(),
            hashtags: vec![],
            reasoning: "r".to_string(),
        });
        let checks = check_variation(&variation);
        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].field, "tweet_copy");
        assert_eq!(checks[0].max, 280);
        assert_eq!(checks[0].recommended, Some(257));
        assert!(checks[0].is_over_recommended);
        assert!(!checks[1].is_over_recommended);
    }

    #[test]
    fn test_char_limit_text() {
        assert_eq!(
            char_limit_text(FieldLimit::new(280, 250)),
            "250 chars recommended (280 max)"
        );
        assert_eq!(char_limit_text(FieldLimit::max_only(70)), "70 chars max");
        assert_eq!(char_limit_text(FieldLimit::new(75, 75)), "75 chars max");
    }

    #[test]
    fn test_render_variations_text() {
        let variations = vec![AdCopyVariation::Seo(SeoContent {
            page_title: "Foo - Free Weekly".to_string(),
            meta_description: "Subscribe to Foo.".to_string(),
            h1_headline: "Subscribe to Foo".to_string(),
            reasoning: "r".to_string(),
        })];
        let text = render_variations_text(&variations);
        assert!(text.starts_with("=== VARIATION 1 ==="));
        assert!(text.contains("PAGE TITLE:\nFoo - Free Weekly"));
        assert!(text.contains("META DESCRIPTION:"));
        assert!(!text.ends_with('\n'));
    }
}
