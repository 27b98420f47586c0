//! In-memory management store backed by DashMap.
//!
//! Production: replace with PostgreSQL (sqlx) or similar ACID store.
//! This provides the same API surface for development and testing.

use crate::models::*;
use chrono::Utc;
use dashmap::DashMap;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

/// Thread-safe in-memory store for newsletters, campaigns, landing pages,
/// the cross-promotion directory, and the audit log.
pub struct ManagementStore {
    newsletters: DashMap<Uuid, Newsletter>,
    campaigns: DashMap<Uuid, Campaign>,
    landing_pages: DashMap<Uuid, LandingPage>,
    listings: DashMap<Uuid, CrossPromoListing>,
    audit_log: DashMap<Uuid, AuditLogEntry>,
}

impl ManagementStore {
    pub fn new() -> Self {
        info!("Management store initialized (in-memory, development mode)");
        let store = Self {
            newsletters: DashMap::new(),
            campaigns: DashMap::new(),
            landing_pages: DashMap::new(),
            listings: DashMap::new(),
            audit_log: DashMap::new(),
        };
        store.seed_demo_data();
        store
    }

    // ─── Newsletters ───────────────────────────────────────────────────────

    pub fn list_newsletters(&self) -> Vec<Newsletter> {
        let mut newsletters: Vec<Newsletter> =
            self.newsletters.iter().map(|r| r.value().clone()).collect();
        newsletters.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        newsletters
    }

    pub fn get_newsletter(&self, id: Uuid) -> Option<Newsletter> {
        self.newsletters.get(&id).map(|r| r.value().clone())
    }

    pub fn create_newsletter(&self, req: CreateNewsletterRequest, user: &str) -> NewsletterCreated {
        let now = Utc::now();
        let webhook_secret = generate_secret();
        let newsletter = Newsletter {
            id: Uuid::new_v4(),
            name: req.name,
            description: req.description,
            website_url: req.website_url,
            niche: req.niche,
            esp_provider: req.esp_provider,
            esp_list_id: req.esp_list_id,
            esp_webhook_secret: Some(webhook_secret.clone()),
            current_subscriber_count: 0,
            is_primary: self.newsletters.is_empty(),
            created_at: now,
            updated_at: now,
        };
        let id = newsletter.id;
        self.newsletters.insert(id, newsletter.clone());
        self.log_audit(
            user,
            AuditAction::Create,
            "newsletter",
            &id.to_string(),
            serde_json::json!({"name": &newsletter.name}),
        );
        NewsletterCreated {
            webhook_url: format!("/api/v1/webhooks/esp/{}", id),
            webhook_secret,
            newsletter,
        }
    }

    pub fn update_newsletter(
        &self,
        id: Uuid,
        req: UpdateNewsletterRequest,
        user: &str,
    ) -> Option<Newsletter> {
        self.newsletters.get_mut(&id).map(|mut entry| {
            let n = entry.value_mut();
            if let Some(name) = req.name {
                n.name = name;
            }
            if let Some(description) = req.description {
                n.description = Some(description);
            }
            if let Some(url) = req.website_url {
                n.website_url = Some(url);
            }
            if let Some(niche) = req.niche {
                n.niche = Some(niche);
            }
            if let Some(provider) = req.esp_provider {
                n.esp_provider = Some(provider);
            }
            if let Some(list_id) = req.esp_list_id {
                n.esp_list_id = Some(list_id);
            }
            if let Some(count) = req.current_subscriber_count {
                n.current_subscriber_count = count;
            }
            if let Some(primary) = req.is_primary {
                n.is_primary = primary;
            }
            n.updated_at = Utc::now();
            self.log_audit(
                user,
                AuditAction::Update,
                "newsletter",
                &id.to_string(),
                serde_json::json!({}),
            );
            n.clone()
        })
    }

    pub fn delete_newsletter(&self, id: Uuid, user: &str) -> bool {
        let removed = self.newsletters.remove(&id).is_some();
        if removed {
            // Cascade: drop campaigns and landing pages owned by it
            let campaign_ids: Vec<Uuid> = self
                .campaigns
                .iter()
                .filter(|r| r.value().newsletter_id == id)
                .map(|r| *r.key())
                .collect();
            for cid in campaign_ids {
                self.campaigns.remove(&cid);
            }
            let page_ids: Vec<Uuid> = self
                .landing_pages
                .iter()
                .filter(|r| r.value().newsletter_id == id)
                .map(|r| *r.key())
                .collect();
            for pid in page_ids {
                self.landing_pages.remove(&pid);
            }
            self.log_audit(
                user,
                AuditAction::Delete,
                "newsletter",
                &id.to_string(),
                serde_json::json!({}),
            );
        }
        removed
    }

    // ─── Campaigns ─────────────────────────────────────────────────────────

    pub fn list_campaigns(&self, filter: &CampaignFilter) -> Vec<Campaign> {
        let mut campaigns: Vec<Campaign> = self
            .campaigns
            .iter()
            .map(|r| r.value().clone())
            .filter(|c| {
                filter
                    .newsletter_id
                    .map(|id| c.newsletter_id == id)
                    .unwrap_or(true)
                    && filter.platform.map(|p| c.platform == p).unwrap_or(true)
                    && filter.status.map(|s| c.status == s).unwrap_or(true)
            })
            .collect();
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        campaigns
    }

    pub fn get_campaign(&self, id: Uuid) -> Option<Campaign> {
        self.campaigns.get(&id).map(|r| r.value().clone())
    }

    /// Campaign creation requires an existing newsletter.
    pub fn create_campaign(
        &self,
        req: CreateCampaignRequest,
        user: &str,
    ) -> Result<Campaign, String> {
        if !self.newsletters.contains_key(&req.newsletter_id) {
            return Err("Newsletter not found".to_string());
        }
        let now = Utc::now();
        let campaign = Campaign {
            id: Uuid::new_v4(),
            newsletter_id: req.newsletter_id,
            name: req.name,
            platform: req.platform,
            status: CampaignStatus::Draft,
            objective: req.objective,
            daily_budget_cents: req.daily_budget_cents,
            total_budget_cents: req.total_budget_cents,
            spent_cents: 0,
            targeting: req.targeting,
            start_date: req.start_date,
            end_date: req.end_date,
            ai_generated_copy: req.ai_generated_copy,
            stats: CampaignStats::default(),
            created_at: now,
            updated_at: now,
        };
        let id = campaign.id;
        self.campaigns.insert(id, campaign.clone());
        self.log_audit(
            user,
            AuditAction::Create,
            "campaign",
            &id.to_string(),
            serde_json::json!({"name": &campaign.name}),
        );
        Ok(campaign)
    }

    pub fn update_campaign(
        &self,
        id: Uuid,
        req: UpdateCampaignRequest,
        user: &str,
    ) -> Option<Campaign> {
        self.campaigns.get_mut(&id).map(|mut entry| {
            let c = entry.value_mut();
            if let Some(name) = req.name {
                c.name = name;
            }
            if let Some(objective) = req.objective {
                c.objective = Some(objective);
            }
            if let Some(status) = req.status {
                c.status = status;
            }
            if let Some(daily) = req.daily_budget_cents {
                c.daily_budget_cents = Some(daily);
            }
            if let Some(total) = req.total_budget_cents {
                c.total_budget_cents = Some(total);
            }
            if let Some(targeting) = req.targeting {
                c.targeting = targeting;
            }
            if let Some(start) = req.start_date {
                c.start_date = Some(start);
            }
            if let Some(end) = req.end_date {
                c.end_date = Some(end);
            }
            if let Some(copy) = req.ai_generated_copy {
                c.ai_generated_copy = copy;
            }
            c.updated_at = Utc::now();
            self.log_audit(
                user,
                AuditAction::Update,
                "campaign",
                &id.to_string(),
                serde_json::json!({}),
            );
            c.clone()
        })
    }

    pub fn delete_campaign(&self, id: Uuid, user: &str) -> bool {
        let removed = self.campaigns.remove(&id).is_some();
        if removed {
            self.log_audit(
                user,
                AuditAction::Delete,
                "campaign",
                &id.to_string(),
                serde_json::json!({}),
            );
        }
        removed
    }

    pub fn pause_campaign(&self, id: Uuid, user: &str) -> Option<Campaign> {
        self.campaigns.get_mut(&id).map(|mut entry| {
            entry.value_mut().status = CampaignStatus::Paused;
            entry.value_mut().updated_at = Utc::now();
            self.log_audit(
                user,
                AuditAction::Pause,
                "campaign",
                &id.to_string(),
                serde_json::json!({}),
            );
            entry.value().clone()
        })
    }

    pub fn resume_campaign(&self, id: Uuid, user: &str) -> Option<Campaign> {
        self.campaigns.get_mut(&id).map(|mut entry| {
            entry.value_mut().status = CampaignStatus::Active;
            entry.value_mut().updated_at = Utc::now();
            self.log_audit(
                user,
                AuditAction::Resume,
                "campaign",
                &id.to_string(),
                serde_json::json!({}),
            );
            entry.value().clone()
        })
    }

    // ─── Landing pages ─────────────────────────────────────────────────────

    pub fn list_landing_pages(&self, newsletter_id: Option<Uuid>) -> Vec<LandingPage> {
        let mut pages: Vec<LandingPage> = self
            .landing_pages
            .iter()
            .map(|r| r.value().clone())
            .filter(|p| newsletter_id.map(|id| p.newsletter_id == id).unwrap_or(true))
            .collect();
        pages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        pages
    }

    pub fn get_landing_page(&self, id: Uuid) -> Option<LandingPage> {
        self.landing_pages.get(&id).map(|r| r.value().clone())
    }

    /// Slug must be unique within the newsletter.
    pub fn create_landing_page(
        &self,
        req: CreateLandingPageRequest,
        user: &str,
    ) -> Result<LandingPage, String> {
        if !self.newsletters.contains_key(&req.newsletter_id) {
            return Err("Newsletter not found".to_string());
        }
        let slug_taken = self.landing_pages.iter().any(|r| {
            r.value().newsletter_id == req.newsletter_id && r.value().slug == req.slug
        });
        if slug_taken {
            return Err(format!("Slug '{}' is already in use", req.slug));
        }

        let now = Utc::now();
        let page = LandingPage {
            id: Uuid::new_v4(),
            newsletter_id: req.newsletter_id,
            slug: req.slug,
            title: req.title,
            meta_description: req.meta_description,
            status: LandingPageStatus::Draft,
            target_keyword: req.target_keyword,
            secondary_keywords: req.secondary_keywords,
            seo_score: None,
            content: req.content,
            ai_generated: req.ai_generated,
            views: 0,
            unique_visitors: 0,
            conversions: 0,
            published_at: None,
            created_at: now,
            updated_at: now,
        };
        let id = page.id;
        self.landing_pages.insert(id, page.clone());
        self.log_audit(
            user,
            AuditAction::Create,
            "landing_page",
            &id.to_string(),
            serde_json::json!({"slug": &page.slug}),
        );
        Ok(page)
    }

    pub fn update_landing_page(
        &self,
        id: Uuid,
        req: UpdateLandingPageRequest,
        user: &str,
    ) -> Option<LandingPage> {
        self.landing_pages.get_mut(&id).map(|mut entry| {
            let p = entry.value_mut();
            if let Some(title) = req.title {
                p.title = title;
            }
            if let Some(meta) = req.meta_description {
                p.meta_description = Some(meta);
            }
            if let Some(keyword) = req.target_keyword {
                p.target_keyword = Some(keyword);
            }
            if let Some(keywords) = req.secondary_keywords {
                p.secondary_keywords = keywords;
            }
            if let Some(content) = req.content {
                p.content = content;
            }
            if let Some(score) = req.seo_score {
                p.seo_score = Some(score);
            }
            p.updated_at = Utc::now();
            self.log_audit(
                user,
                AuditAction::Update,
                "landing_page",
                &id.to_string(),
                serde_json::json!({}),
            );
            p.clone()
        })
    }

    pub fn delete_landing_page(&self, id: Uuid, user: &str) -> bool {
        let removed = self.landing_pages.remove(&id).is_some();
        if removed {
            self.log_audit(
                user,
                AuditAction::Delete,
                "landing_page",
                &id.to_string(),
                serde_json::json!({}),
            );
        }
        removed
    }

    pub fn publish_landing_page(&self, id: Uuid, user: &str) -> Option<LandingPage> {
        self.landing_pages.get_mut(&id).map(|mut entry| {
            let now = Utc::now();
            let p = entry.value_mut();
            p.status = LandingPageStatus::Published;
            p.published_at = Some(now);
            p.updated_at = now;
            self.log_audit(
                user,
                AuditAction::Publish,
                "landing_page",
                &id.to_string(),
                serde_json::json!({}),
            );
            p.clone()
        })
    }

    pub fn archive_landing_page(&self, id: Uuid, user: &str) -> Option<LandingPage> {
        self.landing_pages.get_mut(&id).map(|mut entry| {
            let p = entry.value_mut();
            p.status = LandingPageStatus::Archived;
            p.updated_at = Utc::now();
            self.log_audit(
                user,
                AuditAction::Archive,
                "landing_page",
                &id.to_string(),
                serde_json::json!({}),
            );
            p.clone()
        })
    }

    // ─── Cross-promotion directory ─────────────────────────────────────────

    pub fn list_listings(&self) -> Vec<CrossPromoListing> {
        let mut listings: Vec<CrossPromoListing> =
            self.listings.iter().map(|r| r.value().clone()).collect();
        listings.sort_by(|a, b| b.subscriber_count.cmp(&a.subscriber_count));
        listings
    }

    pub fn create_listing(&self, req: CreateListingRequest, user: &str) -> CrossPromoListing {
        let listing = CrossPromoListing {
            id: Uuid::new_v4(),
            newsletter_name: req.newsletter_name,
            niche: req.niche,
            subscriber_count: req.subscriber_count,
            description: req.description,
            contact_email: req.contact_email,
            open_to_swaps: req.open_to_swaps,
            created_at: Utc::now(),
        };
        let id = listing.id;
        self.listings.insert(id, listing.clone());
        self.log_audit(
            user,
            AuditAction::Create,
            "listing",
            &id.to_string(),
            serde_json::json!({"name": &listing.newsletter_name}),
        );
        listing
    }

    pub fn delete_listing(&self, id: Uuid, user: &str) -> bool {
        let removed = self.listings.remove(&id).is_some();
        if removed {
            self.log_audit(
                user,
                AuditAction::Delete,
                "listing",
                &id.to_string(),
                serde_json::json!({}),
            );
        }
        removed
    }

    // ─── Dashboard ─────────────────────────────────────────────────────────

    pub fn dashboard_overview(&self) -> DashboardOverview {
        let total_newsletters = self.newsletters.len() as u64;
        let total_subscribers: u64 = self
            .newsletters
            .iter()
            .map(|r| r.value().current_subscriber_count)
            .sum();
        let total_campaigns = self.campaigns.len() as u64;
        let active_campaigns = self
            .campaigns
            .iter()
            .filter(|r| r.value().status == CampaignStatus::Active)
            .count() as u64;
        let total_spend_cents: i64 = self.campaigns.iter().map(|r| r.value().spent_cents).sum();
        let total_impressions: u64 = self
            .campaigns
            .iter()
            .map(|r| r.value().stats.impressions)
            .sum();
        let total_clicks: u64 = self.campaigns.iter().map(|r| r.value().stats.clicks).sum();
        let total_conversions: u64 = self
            .campaigns
            .iter()
            .map(|r| r.value().stats.conversions)
            .sum();
        let avg_ctr = if total_impressions > 0 {
            total_clicks as f64 / total_impressions as f64
        } else {
            0.0
        };
        let avg_cpa_cents = if total_conversions > 0 {
            Some(total_spend_cents / total_conversions as i64)
        } else {
            None
        };
        let published_landing_pages = self
            .landing_pages
            .iter()
            .filter(|r| r.value().status == LandingPageStatus::Published)
            .count() as u64;

        DashboardOverview {
            total_newsletters,
            total_subscribers,
            total_campaigns,
            active_campaigns,
            total_spend_cents,
            total_impressions,
            total_clicks,
            total_conversions,
            avg_ctr,
            avg_cpa_cents,
            published_landing_pages,
        }
    }

    // ─── Audit log ─────────────────────────────────────────────────────────

    pub fn get_audit_log(&self) -> Vec<AuditLogEntry> {
        let mut entries: Vec<AuditLogEntry> =
            self.audit_log.iter().map(|r| r.value().clone()).collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }

    fn log_audit(
        &self,
        user: &str,
        action: AuditAction,
        resource_type: &str,
        resource_id: &str,
        details: serde_json::Value,
    ) {
        let entry = AuditLogEntry {
            id: Uuid::new_v4(),
            user: user.to_string(),
            action,
            resource_type: resource_type.to_string(),
            resource_id: resource_id.to_string(),
            details,
            timestamp: Utc::now(),
        };
        self.audit_log.insert(entry.id, entry);
    }

    // ─── Demo data ─────────────────────────────────────────────────────────

    fn seed_demo_data(&self) {
        use chrono::Duration;
        let now = Utc::now();

        let newsletters = vec![
            (
                "The Daily Byte",
                "Tech news in five minutes",
                "tech",
                12_500u64,
                true,
            ),
            (
                "Marketing Signals",
                "Weekly growth tactics for marketers",
                "marketing",
                4_800,
                false,
            ),
        ];

        let mut newsletter_ids = Vec::new();
        for (name, description, niche, subscribers, is_primary) in newsletters {
            let id = Uuid::new_v4();
            newsletter_ids.push(id);
            self.newsletters.insert(
                id,
                Newsletter {
                    id,
                    name: name.to_string(),
                    description: Some(description.to_string()),
                    website_url: Some(format!(
                        "https://{}.example.com",
                        name.to_lowercase().replace(' ', "-")
                    )),
                    niche: Some(niche.to_string()),
                    esp_provider: Some(EspProvider::Beehiiv),
                    esp_list_id: None,
                    esp_webhook_secret: Some(generate_secret()),
                    current_subscriber_count: subscribers,
                    is_primary,
                    created_at: now - Duration::days(90),
                    updated_at: now,
                },
            );
        }

        let campaigns = vec![
            (
                "Twitter Growth Q3",
                CampaignPlatform::Twitter,
                CampaignStatus::Active,
                Some(2_000i64),
                Some(60_000i64),
                24_500i64,
                145_000u64,
                4_350u64,
                312u64,
            ),
            (
                "LinkedIn Thought Leadership",
                CampaignPlatform::Linkedin,
                CampaignStatus::Active,
                Some(3_500),
                Some(90_000),
                41_200,
                88_000,
                2_640,
                198,
            ),
            (
                "Evergreen SEO Pages",
                CampaignPlatform::Seo,
                CampaignStatus::Active,
                None,
                None,
                0,
                36_000,
                2_900,
                410,
            ),
            (
                "Swap with Marketing Signals",
                CampaignPlatform::CrossPromo,
                CampaignStatus::Completed,
                None,
                None,
                0,
                9_500,
                820,
                260,
            ),
            (
                "Holiday Push",
                CampaignPlatform::Twitter,
                CampaignStatus::Draft,
                Some(5_000),
                Some(150_000),
                0,
                0,
                0,
                0,
            ),
        ];

        for (name, platform, status, daily, total, spent, imps, clicks, convs) in campaigns {
            let id = Uuid::new_v4();
            let ctr = if imps > 0 {
                clicks as f64 / imps as f64
            } else {
                0.0
            };
            self.campaigns.insert(
                id,
                Campaign {
                    id,
                    newsletter_id: newsletter_ids[0],
                    name: name.to_string(),
                    platform,
                    status,
                    objective: Some("subscriber_growth".to_string()),
                    daily_budget_cents: daily,
                    total_budget_cents: total,
                    spent_cents: spent,
                    targeting: serde_json::json!({"geo": ["US", "CA"], "interests": ["technology"]}),
                    start_date: Some(now - Duration::days(30)),
                    end_date: Some(now + Duration::days(30)),
                    ai_generated_copy: serde_json::json!({}),
                    stats: CampaignStats {
                        impressions: imps,
                        clicks,
                        conversions: convs,
                        ctr,
                        cost_per_conversion_cents: if convs > 0 {
                            Some(spent / convs as i64)
                        } else {
                            None
                        },
                    },
                    created_at: now - Duration::days(30),
                    updated_at: now,
                },
            );
        }

        let pages = vec![
            (
                "subscribe",
                "Subscribe to The Daily Byte",
                LandingPageStatus::Published,
                Some("tech newsletter"),
                18_400u64,
                412u64,
            ),
            (
                "ai-weekly",
                "AI Weekly Roundup - The Daily Byte",
                LandingPageStatus::Draft,
                Some("ai newsletter"),
                0,
                0,
            ),
        ];

        for (slug, title, status, keyword, views, conversions) in pages {
            let id = Uuid::new_v4();
            self.landing_pages.insert(
                id,
                LandingPage {
                    id,
                    newsletter_id: newsletter_ids[0],
                    slug: slug.to_string(),
                    title: title.to_string(),
                    meta_description: Some(format!("{}. Free, weekly, no spam.", title)),
                    status,
                    target_keyword: keyword.map(str::to_string),
                    secondary_keywords: vec!["newsletter".to_string()],
                    seo_score: Some(78),
                    content: serde_json::json!({"blocks": []}),
                    ai_generated: true,
                    views,
                    unique_visitors: views / 2,
                    conversions,
                    published_at: if status == LandingPageStatus::Published {
                        Some(now - Duration::days(45))
                    } else {
                        None
                    },
                    created_at: now - Duration::days(60),
                    updated_at: now,
                },
            );
        }

        let listings = vec![
            ("Frontend Focus", "web development", 22_000u64, "weekly frontend deep dives"),
            ("The Growth Memo", "marketing", 15_500, "growth tactics from operators"),
            ("Ledger Lines", "fintech", 9_800, "fintech news for builders"),
            ("Paper Trail", "research", 6_200, "ML paper summaries"),
        ];

        for (name, niche, subscribers, description) in listings {
            let id = Uuid::new_v4();
            self.listings.insert(
                id,
                CrossPromoListing {
                    id,
                    newsletter_name: name.to_string(),
                    niche: niche.to_string(),
                    subscriber_count: subscribers,
                    description: Some(description.to_string()),
                    contact_email: format!(
                        "hello@{}.example.com",
                        name.to_lowercase().replace(' ', "")
                    ),
                    open_to_swaps: true,
                    created_at: now - Duration::days(10),
                },
            );
        }
    }
}

impl Default for ManagementStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Random hex secret for webhook verification.
fn generate_secret() -> String {
    let mut rng = rand::thread_rng();
    (0..32)
        .map(|_| format!("{:02x}", rng.gen::<u8>()))
        .collect()
}
