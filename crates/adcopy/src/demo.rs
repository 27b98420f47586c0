//! Canned demo copy served when no generation credential is configured.
//!
//! One table per platform, shared by the dispatcher and the tests so the
//! two can never drift apart. Each table deliberately holds three entries;
//! requests for more are capped, not padded.

use crate::platform::Platform;
use crate::types::{
    AdCopyVariation, CrossPromoPitch, LinkedInAdCopy, LinkedInPost, PromotionKit, SeoContent,
    SocialPost, TwitterAdCopy, TwitterAdTeaser,
};

/// Fixed demo variations for a platform, name-interpolated and capped at
/// the table size.
pub fn demo_variations(platform: Platform, newsletter_name: &str, count: usize) -> Vec<AdCopyVariation> {
    let variations = match platform {
        Platform::Twitter => twitter_demo(newsletter_name),
        Platform::Linkedin => linkedin_demo(newsletter_name),
        Platform::Seo => seo_demo(newsletter_name),
    };
    variations.into_iter().take(count).collect()
}

fn twitter_demo(name: &str) -> Vec<AdCopyVariation> {
    vec![
        AdCopyVariation::Twitter(TwitterAdCopy {
            tweet_copy: format!(
                "Stop doom-scrolling. Start learning. {} delivers the insights you need in 5 min/day.",
                name
            ),
            headline: "Get smarter in 5 minutes".to_string(),
            cta_text: "Subscribe".to_string(),
            hashtags: vec!["newsletter".to_string(), "productivity".to_string()],
            reasoning: "Uses pattern interrupt + clear time investment benefit".to_string(),
        }),
        AdCopyVariation::Twitter(TwitterAdCopy {
            tweet_copy: format!(
                "10,000+ professionals read {} every morning. Here's why they won't start their day without it:",
                name
            ),
            headline: "Join 10k+ subscribers".to_string(),
            cta_text: "Learn More".to_string(),
            hashtags: vec!["morningroutine".to_string()],
            reasoning: "Social proof + curiosity gap creates engagement".to_string(),
        }),
        AdCopyVariation::Twitter(TwitterAdCopy {
            tweet_copy: format!(
                "I used to waste hours researching. Now I get everything I need from {}. Free. Every week.",
                name
            ),
            headline: "Save hours every week".to_string(),
            cta_text: "Sign Up".to_string(),
            hashtags: vec!["timesaver".to_string(), "newsletter".to_string()],
            reasoning: "Personal testimonial style + clear value proposition".to_string(),
        }),
    ]
}

fn linkedin_demo(name: &str) -> Vec<AdCopyVariation> {
    vec![
        AdCopyVariation::LinkedIn(LinkedInAdCopy {
            intro_text: format!(
                "The most successful professionals don't have more time. They have better information. {} delivers it.",
                name
            ),
            headline: "Level up your expertise".to_string(),
            cta_text: "Subscribe".to_string(),
            reasoning: "Appeals to professional growth mindset".to_string(),
        }),
        AdCopyVariation::LinkedIn(LinkedInAdCopy {
            intro_text: format!(
                "Every week, I curate the most important insights so you don't have to. Join {}.",
                name
            ),
            headline: "Curated insights, weekly".to_string(),
            cta_text: "Learn More".to_string(),
            reasoning: "Emphasizes curation value and time savings".to_string(),
        }),
        AdCopyVariation::LinkedIn(LinkedInAdCopy {
            intro_text: format!(
                "Your competitors are reading {}. The question is: are you?",
                name
            ),
            headline: "Stay ahead of the curve".to_string(),
            cta_text: "Sign Up".to_string(),
            reasoning: "Creates competitive urgency without being pushy".to_string(),
        }),
    ]
}

fn seo_demo(name: &str) -> Vec<AdCopyVariation> {
    vec![
        AdCopyVariation::Seo(SeoContent {
            page_title: format!("{} - Free Weekly Newsletter", name),
            meta_description: format!(
                "Join thousands of professionals getting curated insights delivered free. Subscribe to {} today.",
                name
            ),
            h1_headline: format!("Subscribe to {}", name),
            reasoning: "Clean, keyword-focused with clear CTA".to_string(),
        }),
        AdCopyVariation::Seo(SeoContent {
            page_title: format!("{} | Expert Insights Weekly", name),
            meta_description: format!(
                "Get the best industry insights in 5 minutes. {} is the newsletter trusted by 10k+ readers.",
                name
            ),
            h1_headline: format!("Get Smarter with {}", name),
            reasoning: "Benefit-focused with social proof element".to_string(),
        }),
        AdCopyVariation::Seo(SeoContent {
            page_title: format!("Subscribe to {} - Free", name),
            meta_description: format!(
                "Stop missing out on key insights. {} curates the best content and delivers it to your inbox free.",
                name
            ),
            h1_headline: "Never Miss an Update".to_string(),
            reasoning: "FOMO approach with clear free value".to_string(),
        }),
    ]
}

/// Fixed demo promotion kit.
pub fn demo_promotion_kit(newsletter_name: &str, niche: Option<&str>) -> PromotionKit {
    let niche_text = niche.unwrap_or("your industry");

    PromotionKit {
        twitter_posts: vec![
            SocialPost {
                content: format!(
                    "I've been writing {} for a while now, and I'm still amazed by the responses I get.\n\nIf you want {} insights that actually help you, link in bio.",
                    newsletter_name, niche_text
                ),
                post_type: "Personal story".to_string(),
            },
            SocialPost {
                content: format!(
                    "Most {} newsletters are boring.\n\n{} isn't.\n\nWe keep it short, useful, and actually worth reading.\n\nSubscribe free: [link]",
                    niche_text, newsletter_name
                ),
                post_type: "Value proposition".to_string(),
            },
            SocialPost {
                content: format!(
                    "New issue of {} just dropped 🔥\n\nThis week:\n• Trend everyone's missing\n• 3 actionable tips\n• 1 tool that changed my workflow\n\nRead it here: [link]",
                    newsletter_name
                ),
                post_type: "Issue teaser".to_string(),
            },
        ],
        linkedin_post: LinkedInPost {
            content: format!(
                "I started {} because I was tired of sifting through noise to find signal in {}.\n\nEvery week, I spend hours researching so you don't have to.\n\nThe result? A 5-minute read that gives you:\n→ The most important {} updates\n→ Actionable insights you can use immediately\n→ Trends to watch (before everyone else catches on)\n\nIt's free. No spam. Unsubscribe anytime.\n\nJoin 1,000+ readers who start their week smarter.\n\n🔗 Link in comments",
                newsletter_name, niche_text, niche_text
            ),
        },
        cross_promo_pitch: CrossPromoPitch {
            subject: format!("Cross-promo? {} x Your Newsletter", newsletter_name),
            body: format!(
                "Hey!\n\nI run {}, a newsletter about {}. I've been reading your newsletter and love what you're doing.\n\nWould you be interested in a cross-promotion? Here's what I'm thinking:\n\n• We each mention the other's newsletter once\n• No cost, just mutual exposure\n• I can write a custom blurb about your newsletter\n\nMy newsletter has [X] subscribers who would genuinely be interested in your content.\n\nLet me know if you're interested!\n\nBest,\n[Your name]",
                newsletter_name, niche_text
            ),
        },
        twitter_ad: Some(TwitterAdTeaser {
            tweet: format!(
                "Stop wasting time on {} news that doesn't matter.\n\n{} cuts through the noise.\n\n5 minutes. Once a week. Actually useful.",
                niche_text, newsletter_name
            ),
            headline: format!("Get smarter about {}", niche_text),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ALL_PLATFORMS;

    #[test]
    fn test_each_platform_has_three_canned_entries() {
        for platform in ALL_PLATFORMS {
            assert_eq!(demo_variations(platform, "Foo", 10).len(), 3);
        }
    }

    #[test]
    fn test_count_caps_table() {
        assert_eq!(demo_variations(Platform::Twitter, "Foo", 1).len(), 1);
        assert_eq!(demo_variations(Platform::Twitter, "Foo", 2).len(), 2);
        assert_eq!(demo_variations(Platform::Twitter, "Foo", 3).len(), 3);
    }

    #[test]
    fn test_name_interpolation() {
        for variation in demo_variations(Platform::Twitter, "The Daily Byte", 3) {
            match variation {
                AdCopyVariation::Twitter(v) => assert!(v.tweet_copy.contains("The Daily Byte")),
                _ => panic!("twitter demo table produced a non-twitter variation"),
            }
        }
        for variation in demo_variations(Platform::Seo, "The Daily Byte", 3) {
            match variation {
                AdCopyVariation::Seo(v) => assert!(v.page_title.contains("The Daily Byte")),
                _ => panic!("seo demo table produced a non-seo variation"),
            }
        }
    }

    #[test]
    fn test_demo_kit_niche_fallback() {
        let kit = demo_promotion_kit("Foo Weekly", None);
        assert_eq!(kit.twitter_posts.len(), 3);
        assert!(kit.linkedin_post.content.contains("your industry"));
        assert!(kit.cross_promo_pitch.subject.contains("Foo Weekly"));
        assert!(kit.twitter_ad.is_some());

        let kit = demo_promotion_kit("Foo Weekly", Some("fintech"));
        assert!(kit.linkedin_post.content.contains("fintech"));
    }
}
