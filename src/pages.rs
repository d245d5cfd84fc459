//! Page assemblers: one per route. Each issues its independent fetches
//! concurrently and returns a view-model for the matching renderer.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};

use crate::cache::ResponseCache;
use crate::cms::client::resolve_media_url;
use crate::cms::content;
use crate::cms::model::{
    CaseStudy, CommunityHub, GlobalConfig, HomeContent, PodcastCampaign, ServicesPage,
};
use crate::cms::CmsClient;
use crate::config::Settings;
use crate::ui::{ContactFields, ContactForm};
use crate::youtube::{BRAND_RECENT_VIDEOS, Broadcasts, ChannelGrowth, YouTubeClient};

pub const HOME_CASE_STUDIES: usize = 3;
pub const COMMUNITY_CHANNEL_ID: &str = "UC3z7HqxEeJQuE74XYj0g1Mw";
pub const PODCAST_CHANNEL_ID: &str = "UCPV-r3DqH8Eewz2-XoB40Kw";

pub const DEFAULT_CONTACT_EMAIL: &str = "contacto@genlatam.com";
pub const DEFAULT_CONTACT_PHONE: &str = "+1 (555) 000-0000";

/// The two upstream services every page draws from.
#[derive(Debug, Clone)]
pub struct Backends {
    pub cms: CmsClient,
    pub youtube: YouTubeClient,
}

impl Backends {
    /// Both clients share one connection pool and one response cache.
    pub fn new(http: reqwest::Client, settings: &Settings, cache: Arc<ResponseCache>) -> Self {
        Self {
            cms: CmsClient::new(http.clone(), settings, cache.clone()),
            youtube: YouTubeClient::new(http, settings, cache),
        }
    }
}

/// What the header and footer need on every page.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub config: Option<GlobalConfig>,
    pub media_base: String,
    pub year: i32,
}

impl Chrome {
    pub fn new(cms: &CmsClient, config: Option<GlobalConfig>) -> Self {
        Self {
            config,
            media_base: cms.media_base().to_owned(),
            year: Utc::now().year(),
        }
    }

    /// Chrome for pages rendered without any CMS data.
    pub fn bare() -> Self {
        Self {
            config: None,
            media_base: String::new(),
            year: Utc::now().year(),
        }
    }

    pub fn media(&self, url: Option<&str>) -> Option<String> {
        resolve_media_url(&self.media_base, url.filter(|url| !url.is_empty()))
    }

    pub fn contact_email(&self) -> &str {
        self.config
            .as_ref()
            .and_then(|config| config.contact_email.as_deref())
            .filter(|email| !email.trim().is_empty())
            .unwrap_or(DEFAULT_CONTACT_EMAIL)
    }

    pub fn contact_phone(&self) -> &str {
        self.config
            .as_ref()
            .and_then(|config| config.contact_phone.as_deref())
            .filter(|phone| !phone.trim().is_empty())
            .unwrap_or(DEFAULT_CONTACT_PHONE)
    }
}

#[derive(Debug, Clone)]
pub struct HomeView {
    pub chrome: Chrome,
    pub home: Option<HomeContent>,
    pub featured_cases: Vec<CaseStudy>,
}

#[derive(Debug, Clone)]
pub struct ServicesView {
    pub chrome: Chrome,
    pub page: ServicesPage,
}

#[derive(Debug, Clone)]
pub struct CasesView {
    pub chrome: Chrome,
    pub cases: Vec<CaseStudy>,
}

#[derive(Debug, Clone)]
pub struct CaseView {
    pub chrome: Chrome,
    pub case: CaseStudy,
    pub growth: Vec<ChannelGrowth>,
}

#[derive(Debug, Clone)]
pub struct CommunityView {
    pub chrome: Chrome,
    pub hub: Option<CommunityHub>,
    pub broadcasts: Broadcasts,
    pub today: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct PodcastView {
    pub chrome: Chrome,
    pub campaign: Option<PodcastCampaign>,
    pub broadcasts: Broadcasts,
}

#[derive(Debug, Clone)]
pub struct ContactView {
    pub chrome: Chrome,
    pub form: ContactForm,
}

pub async fn home(backends: &Backends) -> HomeView {
    let cms = &backends.cms;
    let (config, home, mut cases) = tokio::join!(
        content::global_config(cms),
        content::home(cms),
        content::case_studies(cms),
    );
    cases.truncate(HOME_CASE_STUDIES);
    HomeView {
        chrome: Chrome::new(cms, config),
        home,
        featured_cases: cases,
    }
}

pub async fn services(backends: &Backends) -> ServicesView {
    let cms = &backends.cms;
    let (config, page) = tokio::join!(content::global_config(cms), content::services_page(cms));
    ServicesView {
        chrome: Chrome::new(cms, config),
        page: page.unwrap_or_else(ServicesPage::fallback),
    }
}

pub async fn cases(backends: &Backends) -> CasesView {
    let cms = &backends.cms;
    let (config, cases) = tokio::join!(content::global_config(cms), content::case_studies(cms));
    CasesView {
        chrome: Chrome::new(cms, config),
        cases,
    }
}

/// `None` when no case study carries `slug`.
pub async fn case_detail(backends: &Backends, slug: &str) -> Option<CaseView> {
    let cms = &backends.cms;
    let (config, case) = tokio::join!(
        content::global_config(cms),
        content::case_study_by_slug(cms, slug),
    );
    let case = case?;
    let growth = backends
        .youtube
        .case_study_growth(&case.channel_growth)
        .await;
    Some(CaseView {
        chrome: Chrome::new(cms, config),
        case,
        growth,
    })
}

fn channel_or<'a>(configured: Option<&'a str>, default: &'a str) -> &'a str {
    configured
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .unwrap_or(default)
}

pub async fn community(backends: &Backends) -> CommunityView {
    let cms = &backends.cms;
    let (config, hub) = tokio::join!(content::global_config(cms), content::community_hub(cms));
    let channel_id = channel_or(
        hub.as_ref().and_then(|hub| hub.youtube_channel_id.as_deref()),
        COMMUNITY_CHANNEL_ID,
    );
    let broadcasts = backends
        .youtube
        .broadcasts(channel_id, BRAND_RECENT_VIDEOS)
        .await;
    CommunityView {
        chrome: Chrome::new(cms, config),
        hub,
        broadcasts,
        today: Utc::now().date_naive(),
    }
}

pub async fn podcast(backends: &Backends) -> PodcastView {
    let cms = &backends.cms;
    let (config, campaign) = tokio::join!(
        content::global_config(cms),
        content::podcast_campaign(cms),
    );
    let channel_id = channel_or(
        campaign
            .as_ref()
            .and_then(|campaign| campaign.youtube_channel_id.as_deref()),
        PODCAST_CHANNEL_ID,
    );
    let broadcasts = backends
        .youtube
        .broadcasts(channel_id, BRAND_RECENT_VIDEOS)
        .await;
    PodcastView {
        chrome: Chrome::new(cms, config),
        campaign,
        broadcasts,
    }
}

pub async fn contact(backends: &Backends) -> ContactView {
    let cms = &backends.cms;
    ContactView {
        chrome: Chrome::new(cms, content::global_config(cms).await),
        form: ContactForm::new(),
    }
}

/// Drives the contact form through one submission: the relay runs while the
/// form is `Loading`, and the outcome settles it. Submissions missing a
/// required field are never relayed.
pub async fn submit_contact(backends: &Backends, fields: ContactFields) -> ContactView {
    let cms = &backends.cms;
    let mut form = ContactForm::with_fields(fields);

    let relay = async {
        let Some(payload) = form.begin_submit() else {
            return false;
        };
        let missing = payload.missing_required();
        if !missing.is_empty() {
            tracing::debug!(?missing, "contact submission incomplete");
            return false;
        }
        match cms.submit_contact(&payload).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "contact relay failed");
                false
            }
        }
    };
    let (config, delivered) = tokio::join!(content::global_config(cms), relay);
    form.finish(delivered);

    ContactView {
        chrome: Chrome::new(cms, config),
        form,
    }
}
