//! Management domain types — newsletters, campaigns, landing pages, and the
//! cross-promotion directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Newsletter ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Newsletter {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub niche: Option<String>,
    pub esp_provider: Option<EspProvider>,
    pub esp_list_id: Option<String>,
    /// Shared secret for inbound ESP webhooks, generated at creation.
    pub esp_webhook_secret: Option<String>,
    pub current_subscriber_count: u64,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EspProvider {
    Beehiiv,
    Convertkit,
    Mailchimp,
    Custom,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNewsletterRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub niche: Option<String>,
    #[serde(default)]
    pub esp_provider: Option<EspProvider>,
    #[serde(default)]
    pub esp_list_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNewsletterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub niche: Option<String>,
    #[serde(default)]
    pub esp_provider: Option<EspProvider>,
    #[serde(default)]
    pub esp_list_id: Option<String>,
    #[serde(default)]
    pub current_subscriber_count: Option<u64>,
    #[serde(default)]
    pub is_primary: Option<bool>,
}

/// Creation response carrying the webhook wiring for the new newsletter.
#[derive(Debug, Clone, Serialize)]
pub struct NewsletterCreated {
    pub newsletter: Newsletter,
    pub webhook_url: String,
    pub webhook_secret: String,
}

// ─── Campaign ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignPlatform {
    Twitter,
    Linkedin,
    Seo,
    CrossPromo,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    PendingReview,
    Active,
    Paused,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CampaignStats {
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub ctr: f64,
    pub cost_per_conversion_cents: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub newsletter_id: Uuid,
    pub name: String,
    pub platform: CampaignPlatform,
    pub status: CampaignStatus,
    pub objective: Option<String>,
    pub daily_budget_cents: Option<i64>,
    pub total_budget_cents: Option<i64>,
    pub spent_cents: i64,
    #[serde(default)]
    pub targeting: serde_json::Value,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// Generated copy saved against this campaign, verbatim as returned by
    /// the ad-copy endpoint.
    #[serde(default)]
    pub ai_generated_copy: serde_json::Value,
    pub stats: CampaignStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCampaignRequest {
    pub newsletter_id: Uuid,
    pub name: String,
    pub platform: CampaignPlatform,
    #[serde(default)]
    pub objective: Option<String>,
    #[serde(default)]
    pub daily_budget_cents: Option<i64>,
    #[serde(default)]
    pub total_budget_cents: Option<i64>,
    #[serde(default)]
    pub targeting: serde_json::Value,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ai_generated_copy: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCampaignRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub objective: Option<String>,
    #[serde(default)]
    pub status: Option<CampaignStatus>,
    #[serde(default)]
    pub daily_budget_cents: Option<i64>,
    #[serde(default)]
    pub total_budget_cents: Option<i64>,
    #[serde(default)]
    pub targeting: Option<serde_json::Value>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ai_generated_copy: Option<serde_json::Value>,
}

/// Query-string filter for campaign listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CampaignFilter {
    #[serde(default)]
    pub newsletter_id: Option<Uuid>,
    #[serde(default)]
    pub platform: Option<CampaignPlatform>,
    #[serde(default)]
    pub status: Option<CampaignStatus>,
}

// ─── Landing page ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LandingPageStatus {
    Draft,
    Published,
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingPage {
    pub id: Uuid,
    pub newsletter_id: Uuid,
    /// URL slug, unique within a newsletter.
    pub slug: String,
    pub title: String,
    pub meta_description: Option<String>,
    pub status: LandingPageStatus,
    pub target_keyword: Option<String>,
    #[serde(default)]
    pub secondary_keywords: Vec<String>,
    pub seo_score: Option<u32>,
    #[serde(default)]
    pub content: serde_json::Value,
    pub ai_generated: bool,
    pub views: u64,
    pub unique_visitors: u64,
    pub conversions: u64,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLandingPageRequest {
    pub newsletter_id: Uuid,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub target_keyword: Option<String>,
    #[serde(default)]
    pub secondary_keywords: Vec<String>,
    #[serde(default)]
    pub content: serde_json::Value,
    #[serde(default)]
    pub ai_generated: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLandingPageRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub target_keyword: Option<String>,
    #[serde(default)]
    pub secondary_keywords: Option<Vec<String>>,
    #[serde(default)]
    pub content: Option<serde_json::Value>,
    #[serde(default)]
    pub seo_score: Option<u32>,
}

// ─── Cross-promotion directory ─────────────────────────────────────────────

/// A directory entry: a newsletter open to cross-promotion swaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossPromoListing {
    pub id: Uuid,
    pub newsletter_name: String,
    pub niche: String,
    pub subscriber_count: u64,
    pub description: Option<String>,
    pub contact_email: String,
    pub open_to_swaps: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateListingRequest {
    pub newsletter_name: String,
    pub niche: String,
    #[serde(default)]
    pub subscriber_count: u64,
    #[serde(default)]
    pub description: Option<String>,
    pub contact_email: String,
    #[serde(default = "default_open_to_swaps")]
    pub open_to_swaps: bool,
}

fn default_open_to_swaps() -> bool {
    true
}

// ─── Dashboard ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    pub total_newsletters: u64,
    pub total_subscribers: u64,
    pub total_campaigns: u64,
    pub active_campaigns: u64,
    pub total_spend_cents: i64,
    pub total_impressions: u64,
    pub total_clicks: u64,
    pub total_conversions: u64,
    pub avg_ctr: f64,
    pub avg_cpa_cents: Option<i64>,
    pub published_landing_pages: u64,
}

// ─── Auth ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

// ─── Audit log ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Pause,
    Resume,
    Publish,
    Archive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub user: String,
    pub action: AuditAction,
    pub resource_type: String,
    pub resource_id: String,
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}
