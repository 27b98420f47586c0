//! Prompt construction for the generation service.
//!
//! Prompt building is deterministic: identical inputs produce byte-identical
//! output. Creative variation comes from the service's sampling temperature,
//! configured elsewhere.

use crate::platform::{
    Platform, PlatformSpec, LINKEDIN_HEADLINE, LINKEDIN_INTRO, SEO_H1_HEADLINE,
    SEO_META_DESCRIPTION, SEO_PAGE_TITLE, TWEET_COPY, TWEET_COPY_WITH_LINK, TWEET_HEADLINE,
};

/// System + user message pair for one completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Normalized newsletter context, with request-level fallbacks resolved.
#[derive(Debug, Clone)]
pub struct AdCopyContext<'a> {
    pub newsletter_name: &'a str,
    pub newsletter_description: &'a str,
    pub target_audience: Option<&'a str>,
    pub subscriber_count: Option<u64>,
    pub unique_value: Option<&'a str>,
    pub target_keyword: Option<&'a str>,
    pub count: u32,
}

/// Build the prompt pair for an ad-copy generation call.
pub fn build_ad_copy_prompts(spec: &PlatformSpec, ctx: &AdCopyContext<'_>) -> PromptPair {
    let user = match spec.platform {
        Platform::Twitter => twitter_user_prompt(ctx),
        Platform::Linkedin => linkedin_user_prompt(ctx),
        Platform::Seo => seo_user_prompt(ctx),
    };
    PromptPair {
        system: spec.prompt_template.clone(),
        user,
    }
}

fn base_context(ctx: &AdCopyContext<'_>) -> String {
    let mut out = format!(
        "Newsletter Name: {}\nNewsletter Description: {}\nTarget Audience: {}",
        ctx.newsletter_name,
        ctx.newsletter_description,
        ctx.target_audience.unwrap_or("General professionals"),
    );
    if let Some(count) = ctx.subscriber_count {
        out.push_str(&format!("\nCurrent Subscribers: {}", format_thousands(count)));
    }
    if let Some(value) = ctx.unique_value {
        out.push_str(&format!("\nUnique Value Proposition: {}", value));
    }
    out
}

fn twitter_user_prompt(ctx: &AdCopyContext<'_>) -> String {
    format!(
        "Generate {} Twitter/X ad copy variations for this newsletter:\n\
         \n\
         {}\n\
         \n\
         For EACH variation, provide a JSON object with:\n\
         - tweet_copy: The main tweet text (MUST be under {} characters to allow for a link)\n\
         - headline: Website card headline (MUST be under {} characters to avoid truncation)\n\
         - cta_text: One of: \"Subscribe\", \"Learn More\", \"Read More\", \"Sign Up\"\n\
         - hashtags: Array of 1-2 relevant hashtags (without the # symbol)\n\
         - reasoning: Brief explanation of why this approach might resonate\n\
         \n\
         Return as: {{ \"variations\": [...] }}",
        ctx.count,
        base_context(ctx),
        TWEET_COPY_WITH_LINK,
        TWEET_HEADLINE.recommended.unwrap_or(TWEET_HEADLINE.max),
    )
}

fn linkedin_user_prompt(ctx: &AdCopyContext<'_>) -> String {
    format!(
        "Generate {} LinkedIn ad copy variations for this newsletter:\n\
         \n\
         {}\n\
         \n\
         For EACH variation, provide a JSON object with:\n\
         - intro_text: Main body copy above image (MUST be under {} characters to avoid truncation on mobile)\n\
         - headline: Below-image headline (MUST be under {} characters to display fully)\n\
         - cta_text: One of: \"Subscribe\", \"Learn More\", \"Sign Up\", \"Download\", \"Register\"\n\
         - reasoning: Brief explanation of why this professional angle might work\n\
         \n\
         Return as: {{ \"variations\": [...] }}",
        ctx.count,
        base_context(ctx),
        LINKEDIN_INTRO.recommended.unwrap_or(LINKEDIN_INTRO.max),
        LINKEDIN_HEADLINE.recommended.unwrap_or(LINKEDIN_HEADLINE.max),
    )
}

fn seo_user_prompt(ctx: &AdCopyContext<'_>) -> String {
    format!(
        "Generate {} SEO-optimized content variations for a newsletter landing page:\n\
         \n\
         {}\n\
         Target Keyword: {}\n\
         \n\
         For EACH variation, provide a JSON object with:\n\
         - page_title: Browser/Google title (MUST be under {} characters, include keyword naturally)\n\
         - meta_description: Google snippet text (MUST be under {} characters, make it a compelling CTA)\n\
         - h1_headline: Main page heading (MUST be under {} characters, include keyword)\n\
         - reasoning: Brief explanation of the SEO and conversion strategy\n\
         \n\
         Return as: {{ \"variations\": [...] }}",
        ctx.count,
        base_context(ctx),
        ctx.target_keyword.unwrap_or("newsletter"),
        SEO_PAGE_TITLE.recommended.unwrap_or(SEO_PAGE_TITLE.max),
        SEO_META_DESCRIPTION.recommended.unwrap_or(SEO_META_DESCRIPTION.max),
        SEO_H1_HEADLINE.recommended.unwrap_or(SEO_H1_HEADLINE.max),
    )
}

// ─── Promotion kit ──────────────────────────────────────────────────────────

pub fn kit_system_prompt() -> String {
    "You are an expert newsletter growth strategist. You help newsletter creators promote \
     their newsletters through organic social media and outreach.\n\
     \n\
     Your content should be:\n\
     - Authentic and not salesy\n\
     - Optimized for each platform's best practices\n\
     - Focused on value, not hype\n\
     - Written in a conversational tone\n\
     \n\
     Always return valid JSON."
        .to_string()
}

pub fn kit_user_prompt(newsletter_name: &str, description: &str, niche: Option<&str>) -> String {
    format!(
        "Generate a weekly promotion kit for this newsletter:\n\
         \n\
         Newsletter Name: {}\n\
         Description: {}\n\
         Niche: {}\n\
         \n\
         Generate the following in JSON format:\n\
         {{\n\
           \"twitter_posts\": [\n\
             {{ \"content\": \"...\", \"post_type\": \"Personal story\" }},\n\
             {{ \"content\": \"...\", \"post_type\": \"Value proposition\" }},\n\
             {{ \"content\": \"...\", \"post_type\": \"Issue teaser\" }}\n\
           ],\n\
           \"linkedin_post\": {{\n\
             \"content\": \"...\" (longer form, professional tone, use line breaks and bullet points)\n\
           }},\n\
           \"cross_promo_pitch\": {{\n\
             \"subject\": \"...\",\n\
             \"body\": \"...\" (friendly DM/email to send to other newsletter creators)\n\
           }},\n\
           \"twitter_ad\": {{\n\
             \"tweet\": \"...\" (under 200 chars, compelling hook),\n\
             \"headline\": \"...\" (under {} chars for ad card)\n\
           }}\n\
         }}\n\
         \n\
         Requirements:\n\
         - Twitter posts should be under {} characters each\n\
         - Each Twitter post should have a different angle/type\n\
         - LinkedIn post should be 150-300 words, use emojis sparingly\n\
         - Cross-promo pitch should be friendly but professional\n\
         - Twitter ad should be punchy and direct",
        newsletter_name,
        description,
        niche.unwrap_or("General"),
        TWEET_HEADLINE.recommended.unwrap_or(TWEET_HEADLINE.max),
        TWEET_COPY.max,
    )
}

// ─── SEO optimizer ──────────────────────────────────────────────────────────

pub fn seo_optimizer_system_prompt() -> String {
    "You are an SEO expert specializing in newsletter landing page optimization. You help \
     create high-ranking content that converts visitors into subscribers.\n\
     \n\
     Your optimization follows these principles:\n\
     1. Natural keyword integration without stuffing\n\
     2. Clear, compelling headlines that include target keywords\n\
     3. Meta descriptions that drive clicks from search results\n\
     4. Content structure with proper heading hierarchy (H1, H2, H3)\n\
     5. User-focused content that answers search intent\n\
     \n\
     Provide actionable, specific recommendations."
        .to_string()
}

pub fn seo_optimizer_user_prompt(
    target_keyword: &str,
    page_type: Option<&str>,
    niche: Option<&str>,
    current_content: Option<&str>,
) -> String {
    let mut out = format!(
        "Optimize a {} for the following:\n\
         \n\
         Target Keyword: {}\n\
         Newsletter Niche: {}",
        page_type.unwrap_or("landing_page"),
        target_keyword,
        niche.unwrap_or("General"),
    );
    if let Some(content) = current_content {
        out.push_str(&format!("\nCurrent Content:\n{}", content));
    }
    out.push_str(
        "\n\nProvide:\n\
         1. optimized_title - SEO-optimized page title (50-60 characters)\n\
         2. meta_description - Compelling meta description (150-160 characters)\n\
         3. headings - Array of H2 subheadings to structure the page\n\
         4. content_suggestions - Array of content ideas/paragraphs\n\
         5. keyword_density_target - Recommended keyword density (decimal)\n\
         6. seo_score - Estimated SEO score out of 100\n\
         7. improvements - Array of specific improvements to make\n\
         \n\
         Return as JSON.",
    );
    out
}

/// Group digits in threes, e.g. 12500 -> "12,500".
fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformCatalog;

    fn sample_context() -> AdCopyContext<'static> {
        AdCopyContext {
            newsletter_name: "The Daily Byte",
            newsletter_description: "Tech news in five minutes",
            target_audience: Some("Software engineers"),
            subscriber_count: Some(12500),
            unique_value: Some("No fluff, ever"),
            target_keyword: None,
            count: 3,
        }
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let catalog = PlatformCatalog::new();
        let spec = catalog.spec(Platform::Twitter);
        let ctx = sample_context();
        let first = build_ad_copy_prompts(spec, &ctx);
        let second = build_ad_copy_prompts(spec, &ctx);
        assert_eq!(first.system, second.system);
        assert_eq!(first.user, second.user);
    }

    #[test]
    fn test_user_prompt_carries_context() {
        let catalog = PlatformCatalog::new();
        let prompts = build_ad_copy_prompts(catalog.spec(Platform::Twitter), &sample_context());
        assert!(prompts.user.contains("The Daily Byte"));
        assert!(prompts.user.contains("Tech news in five minutes"));
        assert!(prompts.user.contains("Software engineers"));
        assert!(prompts.user.contains("Current Subscribers: 12,500"));
        assert!(prompts.user.contains("No fluff, ever"));
        assert!(prompts.user.contains("Generate 3 Twitter/X ad copy variations"));
        assert!(prompts.user.contains(r#"{ "variations": [...] }"#));
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let catalog = PlatformCatalog::new();
        let ctx = AdCopyContext {
            newsletter_name: "Foo",
            newsletter_description: "bar",
            target_audience: None,
            subscriber_count: None,
            unique_value: None,
            target_keyword: None,
            count: 3,
        };
        let prompts = build_ad_copy_prompts(catalog.spec(Platform::Linkedin), &ctx);
        assert!(prompts.user.contains("Target Audience: General professionals"));
        assert!(!prompts.user.contains("Current Subscribers"));
        assert!(!prompts.user.contains("Unique Value Proposition"));
    }

    #[test]
    fn test_seo_keyword_fallback() {
        let catalog = PlatformCatalog::new();
        let ctx = AdCopyContext {
            newsletter_name: "Foo",
            newsletter_description: "bar",
            target_audience: None,
            subscriber_count: None,
            unique_value: None,
            target_keyword: None,
            count: 2,
        };
        let prompts = build_ad_copy_prompts(catalog.spec(Platform::Seo), &ctx);
        assert!(prompts.user.contains("Target Keyword: newsletter"));

        let ctx_with_keyword = AdCopyContext {
            target_keyword: Some("rust newsletter"),
            ..ctx
        };
        let prompts = build_ad_copy_prompts(catalog.spec(Platform::Seo), &ctx_with_keyword);
        assert!(prompts.user.contains("Target Keyword: rust newsletter"));
    }

    #[test]
    fn test_field_names_match_variation_shape() {
        let catalog = PlatformCatalog::new();
        let ctx = sample_context();

        let twitter = build_ad_copy_prompts(catalog.spec(Platform::Twitter), &ctx);
        assert!(twitter.user.contains("tweet_copy"));
        assert!(twitter.user.contains("hashtags"));

        let seo = build_ad_copy_prompts(catalog.spec(Platform::Seo), &ctx);
        assert!(seo.user.contains("page_title"));
        assert!(seo.user.contains("meta_description"));
        assert!(seo.user.contains("h1_headline"));
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(12500), "12,500");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
