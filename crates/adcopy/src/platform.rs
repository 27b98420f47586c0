//! Platform ad specifications — the single source of truth for character
//! limits, CTA vocabulary, tone guidance, and generation prompt templates.
//!
//! Limits follow the official platform creative specifications (Twitter/X
//! campaign setup docs, LinkedIn ads help, Google SERP display lengths).
//! The prompt templates are formatted from the same limit constants the
//! specs are built from, so a limit change cannot drift apart from the
//! instruction text sent to the generation service.

use std::fmt;
use std::str::FromStr;

use promo_core::error::PromoError;
use serde::{Deserialize, Serialize};

/// The closed set of supported ad platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Linkedin,
    Seo,
}

pub const ALL_PLATFORMS: [Platform; 3] = [Platform::Twitter, Platform::Linkedin, Platform::Seo];

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Seo => "seo",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter/X",
            Platform::Linkedin => "LinkedIn",
            Platform::Seo => "SEO Landing Page",
        }
    }
}

impl FromStr for Platform {
    type Err = PromoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "twitter" => Ok(Platform::Twitter),
            "linkedin" => Ok(Platform::Linkedin),
            "seo" => Ok(Platform::Seo),
            other => Err(PromoError::UnknownPlatform(format!(
                "{} (must be twitter, linkedin, or seo)",
                other
            ))),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-field character budget. `recommended`, when present, never exceeds
/// `max`; the catalog test asserts this for every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLimit {
    pub max: u32,
    pub recommended: Option<u32>,
}

impl FieldLimit {
    pub const fn new(max: u32, recommended: u32) -> Self {
        Self {
            max,
            recommended: Some(recommended),
        }
    }

    pub const fn max_only(max: u32) -> Self {
        Self {
            max,
            recommended: None,
        }
    }
}

// ─── Limit constants ────────────────────────────────────────────────────────
// The spec tables, prompt templates, and the validator's advisory table are
// all derived from these values.

pub(crate) const TWEET_COPY: FieldLimit = FieldLimit::new(280, 250);
/// Ceiling for tweet copy when a link is attached.
pub(crate) const TWEET_COPY_WITH_LINK: u32 = 257;
pub(crate) const TWEET_HEADLINE: FieldLimit = FieldLimit::new(70, 50);
const WEBSITE_CARD_COPY: FieldLimit = FieldLimit::new(256, 240);

pub(crate) const LINKEDIN_INTRO: FieldLimit = FieldLimit::new(600, 150);
pub(crate) const LINKEDIN_HEADLINE: FieldLimit = FieldLimit::new(200, 70);
const LINKEDIN_DESCRIPTION: FieldLimit = FieldLimit::new(70, 70);
const LINKEDIN_TEXT_AD_HEADLINE: FieldLimit = FieldLimit::new(25, 25);
const LINKEDIN_TEXT_AD_DESCRIPTION: FieldLimit = FieldLimit::new(75, 75);

pub(crate) const SEO_PAGE_TITLE: FieldLimit = FieldLimit::new(60, 55);
pub(crate) const SEO_META_DESCRIPTION: FieldLimit = FieldLimit::new(160, 155);
pub(crate) const SEO_H1_HEADLINE: FieldLimit = FieldLimit::new(70, 60);

// ─── Spec structures ────────────────────────────────────────────────────────

/// One selectable call-to-action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtaOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub limit: FieldLimit,
}

/// An ad format offered by a platform, with its per-field budgets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdTypeSpec {
    pub key: String,
    pub name: String,
    pub description: String,
    pub fields: Vec<FieldSpec>,
}

/// Immutable per-platform specification. Built once at startup via
/// [`PlatformCatalog::new`] and attached verbatim to every generation
/// response so callers can render limits and tips beside the copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub platform: Platform,
    pub display_name: String,
    pub ad_types: Vec<AdTypeSpec>,
    pub cta_options: Vec<CtaOption>,
    pub tone: String,
    pub best_practices: Vec<String>,
    pub prompt_template: String,
}

/// The full platform specification table. Read-only for the process
/// lifetime. Lookups are total because [`Platform`] is a closed enum;
/// unknown platform strings are rejected earlier, at the parse boundary.
#[derive(Debug, Clone)]
pub struct PlatformCatalog {
    twitter: PlatformSpec,
    linkedin: PlatformSpec,
    seo: PlatformSpec,
}

impl PlatformCatalog {
    pub fn new() -> Self {
        Self {
            twitter: twitter_spec(),
            linkedin: linkedin_spec(),
            seo: seo_spec(),
        }
    }

    pub fn spec(&self, platform: Platform) -> &PlatformSpec {
        match platform {
            Platform::Twitter => &self.twitter,
            Platform::Linkedin => &self.linkedin,
            Platform::Seo => &self.seo,
        }
    }
}

impl Default for PlatformCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn cta(value: &str, label: &str) -> CtaOption {
    CtaOption {
        value: value.to_string(),
        label: label.to_string(),
    }
}

fn field(name: &str, limit: FieldLimit) -> FieldSpec {
    FieldSpec {
        name: name.to_string(),
        limit,
    }
}

// ─── Twitter/X ──────────────────────────────────────────────────────────────

fn twitter_spec() -> PlatformSpec {
    PlatformSpec {
        platform: Platform::Twitter,
        display_name: Platform::Twitter.display_name().to_string(),
        ad_types: vec![
            AdTypeSpec {
                key: "promoted_tweet".to_string(),
                name: "Promoted Tweet".to_string(),
                description: "Standard promoted tweet with optional media".to_string(),
                fields: vec![
                    field("tweet_copy", TWEET_COPY),
                    field("headline", TWEET_HEADLINE),
                ],
            },
            AdTypeSpec {
                key: "website_card".to_string(),
                name: "Website Card".to_string(),
                description: "Card with website preview and CTA button".to_string(),
                fields: vec![
                    field("tweet_copy", WEBSITE_CARD_COPY),
                    field("headline", TWEET_HEADLINE),
                ],
            },
        ],
        cta_options: vec![
            cta("subscribe", "Subscribe"),
            cta("learn_more", "Learn More"),
            cta("read_more", "Read More"),
            cta("sign_up", "Sign Up"),
            cta("shop_now", "Shop Now"),
        ],
        tone: "casual, direct, conversational".to_string(),
        best_practices: vec![
            "Use hashtags sparingly (1-2 max)".to_string(),
            "Ask questions to drive engagement".to_string(),
            "Use numbers and specific stats".to_string(),
            "Keep it punchy and scannable".to_string(),
            "Emojis can boost engagement when relevant".to_string(),
        ],
        prompt_template: twitter_prompt_template(),
    }
}

fn twitter_prompt_template() -> String {
    format!(
        "You are an expert Twitter/X advertising copywriter specializing in newsletter growth.\n\
         \n\
         TWITTER AD SPECIFICATIONS:\n\
         - Tweet copy: {} characters max ({} if including a link)\n\
         - Headline (for cards): {} characters max, {} recommended to avoid truncation\n\
         - Keep tweets punchy, scannable, and direct\n\
         \n\
         TWITTER VOICE & STYLE:\n\
         - Casual, conversational tone\n\
         - Use \"you\" and speak directly to the reader\n\
         - Numbers and specific stats perform well\n\
         - Questions drive engagement\n\
         - Emojis can boost engagement (use 1-2 max, if appropriate)\n\
         - Hashtags: 1-2 max, only if highly relevant\n\
         - Avoid corporate speak\n\
         \n\
         EFFECTIVE TWITTER AD PATTERNS:\n\
         - \"I spent X hours/years doing Y. Here's what I learned:\"\n\
         - \"X people already know this secret about Y\"\n\
         - Controversial take + value promise\n\
         - Specific number + benefit\n\
         \n\
         Generate ad copy that feels native to Twitter, not like an ad.",
        TWEET_COPY.max,
        TWEET_COPY_WITH_LINK,
        TWEET_HEADLINE.max,
        TWEET_HEADLINE.recommended.unwrap_or(TWEET_HEADLINE.max),
    )
}

// ─── LinkedIn ───────────────────────────────────────────────────────────────

fn linkedin_spec() -> PlatformSpec {
    PlatformSpec {
        platform: Platform::Linkedin,
        display_name: Platform::Linkedin.display_name().to_string(),
        ad_types: vec![
            AdTypeSpec {
                key: "single_image".to_string(),
                name: "Single Image Ad".to_string(),
                description: "Intro text is the main body copy above the image".to_string(),
                fields: vec![
                    field("intro_text", LINKEDIN_INTRO),
                    field("headline", LINKEDIN_HEADLINE),
                    field("description", LINKEDIN_DESCRIPTION),
                ],
            },
            AdTypeSpec {
                key: "text_ad".to_string(),
                name: "Text Ad".to_string(),
                description: "Small sidebar ads".to_string(),
                fields: vec![
                    field("headline", LINKEDIN_TEXT_AD_HEADLINE),
                    field("description", LINKEDIN_TEXT_AD_DESCRIPTION),
                ],
            },
            AdTypeSpec {
                key: "sponsored_content".to_string(),
                name: "Sponsored Content".to_string(),
                description: "Native feed content format".to_string(),
                fields: vec![
                    field("intro_text", LINKEDIN_INTRO),
                    field("headline", LINKEDIN_HEADLINE),
                ],
            },
        ],
        cta_options: vec![
            cta("subscribe", "Subscribe"),
            cta("learn_more", "Learn More"),
            cta("sign_up", "Sign Up"),
            cta("download", "Download"),
            cta("get_quote", "Get Quote"),
            cta("apply_now", "Apply Now"),
            cta("register", "Register"),
        ],
        tone: "professional, authoritative, thought-leadership".to_string(),
        best_practices: vec![
            "Lead with a strong insight or statistic".to_string(),
            "Speak to professional aspirations".to_string(),
            "Use industry-specific language".to_string(),
            "Mention credentials or social proof".to_string(),
            "Avoid casual language and emojis".to_string(),
        ],
        prompt_template: linkedin_prompt_template(),
    }
}

fn linkedin_prompt_template() -> String {
    format!(
        "You are an expert LinkedIn advertising copywriter specializing in professional newsletter growth.\n\
         \n\
         LINKEDIN AD SPECIFICATIONS:\n\
         - Introductory text (main copy): {} characters max, {} recommended to avoid truncation\n\
         - Headline: {} characters max, {} recommended for full visibility\n\
         - Professional tone is mandatory\n\
         \n\
         LINKEDIN VOICE & STYLE:\n\
         - Professional, authoritative, thought-leadership tone\n\
         - Lead with insights, data, or industry trends\n\
         - Speak to professional aspirations and career growth\n\
         - Use industry-specific terminology appropriately\n\
         - NO emojis, NO casual language\n\
         - Credentials and social proof are highly effective\n\
         - First-person professional voice works well\n\
         \n\
         EFFECTIVE LINKEDIN AD PATTERNS:\n\
         - \"After [X years/experience], I discovered...\"\n\
         - \"The top [X%] of [professionals] know this...\"\n\
         - Industry insight + exclusive access\n\
         - Problem in industry + your solution\n\
         \n\
         Generate ad copy that positions the newsletter as essential professional reading.",
        LINKEDIN_INTRO.max,
        LINKEDIN_INTRO.recommended.unwrap_or(LINKEDIN_INTRO.max),
        LINKEDIN_HEADLINE.max,
        LINKEDIN_HEADLINE.recommended.unwrap_or(LINKEDIN_HEADLINE.max),
    )
}

// ─── SEO landing page ───────────────────────────────────────────────────────

fn seo_spec() -> PlatformSpec {
    PlatformSpec {
        platform: Platform::Seo,
        display_name: Platform::Seo.display_name().to_string(),
        ad_types: vec![AdTypeSpec {
            key: "landing_page".to_string(),
            name: "Landing Page".to_string(),
            description: "SEO-optimized newsletter signup landing page".to_string(),
            fields: vec![
                field("page_title", SEO_PAGE_TITLE),
                field("meta_description", SEO_META_DESCRIPTION),
                field("h1_headline", SEO_H1_HEADLINE),
            ],
        }],
        cta_options: Vec::new(),
        tone: "clear, benefit-driven, search-intent focused".to_string(),
        best_practices: vec![
            "Include target keyword in title and H1".to_string(),
            "Write meta description as a compelling CTA".to_string(),
            "Use keyword naturally, avoid stuffing".to_string(),
            "Focus on user intent, not just keywords".to_string(),
            "Include clear value proposition".to_string(),
        ],
        prompt_template: seo_prompt_template(),
    }
}

fn seo_prompt_template() -> String {
    format!(
        "You are an expert SEO copywriter specializing in high-converting landing pages for newsletter signups.\n\
         \n\
         SEO PAGE SPECIFICATIONS:\n\
         - Page title: {} characters max ({} recommended) - appears in Google results\n\
         - Meta description: {} characters max ({} recommended) - appears below title in Google\n\
         - H1 headline: {} characters max - main visible heading on page\n\
         \n\
         SEO BEST PRACTICES:\n\
         - Include target keyword naturally in title and H1\n\
         - Write meta description as a compelling call-to-action\n\
         - Focus on search intent - what is the user trying to accomplish?\n\
         - Use power words that drive clicks: \"free\", \"exclusive\", \"proven\", \"essential\"\n\
         - Include numbers when relevant (e.g., \"Join 10,000+ subscribers\")\n\
         - Avoid keyword stuffing - write for humans first\n\
         \n\
         EFFECTIVE SEO PATTERNS:\n\
         - Title: \"[Keyword] - [Benefit] | [Brand]\"\n\
         - Meta: Compelling reason to click + what they'll get\n\
         - H1: Clear value proposition with keyword\n\
         \n\
         Generate SEO content optimized for both search engines AND conversions.",
        SEO_PAGE_TITLE.max,
        SEO_PAGE_TITLE.recommended.unwrap_or(SEO_PAGE_TITLE.max),
        SEO_META_DESCRIPTION.max,
        SEO_META_DESCRIPTION.recommended.unwrap_or(SEO_META_DESCRIPTION.max),
        SEO_H1_HEADLINE.max,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse() {
        assert_eq!("twitter".parse::<Platform>().unwrap(), Platform::Twitter);
        assert_eq!("linkedin".parse::<Platform>().unwrap(), Platform::Linkedin);
        assert_eq!("seo".parse::<Platform>().unwrap(), Platform::Seo);
        assert!("facebook".parse::<Platform>().is_err());
        assert!("Twitter".parse::<Platform>().is_err());
        assert!("".parse::<Platform>().is_err());
    }

    #[test]
    fn test_recommended_never_exceeds_max() {
        let catalog = PlatformCatalog::new();
        for platform in ALL_PLATFORMS {
            let spec = catalog.spec(platform);
            for ad_type in &spec.ad_types {
                for field in &ad_type.fields {
                    if let Some(rec) = field.limit.recommended {
                        assert!(
                            rec <= field.limit.max,
                            "{}/{}/{}: recommended {} > max {}",
                            platform,
                            ad_type.key,
                            field.name,
                            rec,
                            field.limit.max
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_prompt_templates_carry_limits() {
        let catalog = PlatformCatalog::new();

        let twitter = catalog.spec(Platform::Twitter);
        assert!(twitter.prompt_template.contains("280"));
        assert!(twitter.prompt_template.contains("257"));

        let linkedin = catalog.spec(Platform::Linkedin);
        assert!(linkedin.prompt_template.contains("600"));
        assert!(linkedin.prompt_template.contains("150"));

        let seo = catalog.spec(Platform::Seo);
        assert!(seo.prompt_template.contains("60"));
        assert!(seo.prompt_template.contains("160"));
    }

    #[test]
    fn test_spec_lookup_matches_platform() {
        let catalog = PlatformCatalog::new();
        for platform in ALL_PLATFORMS {
            let spec = catalog.spec(platform);
            assert_eq!(spec.platform, platform);
            assert_eq!(spec.display_name, platform.display_name());
            assert!(!spec.ad_types.is_empty());
            assert!(!spec.best_practices.is_empty());
        }
    }

    #[test]
    fn test_cta_vocabulary() {
        let catalog = PlatformCatalog::new();
        let twitter = catalog.spec(Platform::Twitter);
        assert!(twitter.cta_options.iter().any(|c| c.value == "subscribe"));
        let linkedin = catalog.spec(Platform::Linkedin);
        assert_eq!(linkedin.cta_options.len(), 7);
        // SEO pages have no CTA button vocabulary.
        assert!(catalog.spec(Platform::Seo).cta_options.is_empty());
    }
}
