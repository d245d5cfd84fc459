//! One accessor per CMS collection.
//!
//! Accessors never fail: any transport, status or shape error is logged and
//! turned into `None` (single entries) or an empty list (collections), so the
//! pages always have something to render.

use serde::de::DeserializeOwned;

use crate::cache::CachePolicy;
use crate::cms::client::CmsClient;
use crate::cms::model::{
    CaseStudy, CommunityHub, GlobalConfig, HomeContent, PodcastCampaign, ServicesPage,
};
use crate::cms::query::CmsQuery;

pub const TAG_GLOBAL_CONFIG: &str = "configuracion-global";
pub const TAG_HOME: &str = "home-b2b";
pub const TAG_COMMUNITY_HUB: &str = "hub-comunidad";
pub const TAG_PODCAST_CAMPAIGN: &str = "exit-campana";
pub const TAG_SERVICES_PAGE: &str = "pagina-servicios";
pub const TAG_CASE_STUDIES: &str = "casos-de-exito";

const SINGLE_TYPE_REVALIDATE_SECS: u64 = 30;
const CASE_STUDY_REVALIDATE_SECS: u64 = 60;

pub fn case_study_tag(slug: &str) -> String {
    format!("caso-{slug}")
}

async fn fetch_entry<T: DeserializeOwned>(
    cms: &CmsClient,
    collection: &'static str,
    query: CmsQuery,
    policy: CachePolicy,
) -> Option<T> {
    let path = format!("/{collection}");
    match cms.fetch_data::<T>(&path, &query, Some(&policy)).await {
        Ok(entry) => entry,
        Err(err) => {
            tracing::warn!(collection, error = %err, "cms fetch failed; rendering fallback");
            None
        }
    }
}

pub async fn global_config(cms: &CmsClient) -> Option<GlobalConfig> {
    fetch_entry(
        cms,
        "configuracion-global",
        CmsQuery::new().populate_all(),
        CachePolicy::new(SINGLE_TYPE_REVALIDATE_SECS, [TAG_GLOBAL_CONFIG]),
    )
    .await
}

pub async fn home(cms: &CmsClient) -> Option<HomeContent> {
    fetch_entry(
        cms,
        "home-b2b",
        CmsQuery::new().populate_all(),
        CachePolicy::new(SINGLE_TYPE_REVALIDATE_SECS, [TAG_HOME]),
    )
    .await
}

pub async fn community_hub(cms: &CmsClient) -> Option<CommunityHub> {
    fetch_entry(
        cms,
        "hub-comunidad",
        CmsQuery::new().populate([
            "perfilesPresentadores.fotoPerfil",
            "redesComunidad",
            "logo",
            "invitadoEspecial.fotoPerfil",
        ]),
        CachePolicy::new(SINGLE_TYPE_REVALIDATE_SECS, [TAG_COMMUNITY_HUB]),
    )
    .await
}

pub async fn podcast_campaign(cms: &CmsClient) -> Option<PodcastCampaign> {
    fetch_entry(
        cms,
        "exit-campana",
        CmsQuery::new().populate([
            "anfitrion.fotoPerfil",
            "redesSociales",
            "logo",
            "invitadoEspecial.fotoPerfil",
        ]),
        CachePolicy::new(SINGLE_TYPE_REVALIDATE_SECS, [TAG_PODCAST_CAMPAIGN]),
    )
    .await
}

pub async fn services_page(cms: &CmsClient) -> Option<ServicesPage> {
    fetch_entry(
        cms,
        "pagina-servicios",
        CmsQuery::new().populate(["servicios"]),
        CachePolicy::new(SINGLE_TYPE_REVALIDATE_SECS, [TAG_SERVICES_PAGE]),
    )
    .await
}

/// Every published case study, newest campaign first.
pub async fn case_studies(cms: &CmsClient) -> Vec<CaseStudy> {
    fetch_entry::<Vec<CaseStudy>>(
        cms,
        "caso-de-exitos",
        CmsQuery::new()
            .populate_all()
            .sort(["fechaCampana:desc"]),
        CachePolicy::new(CASE_STUDY_REVALIDATE_SECS, [TAG_CASE_STUDIES]),
    )
    .await
    .unwrap_or_default()
}

/// The case study whose slug equals `slug`, if any. Slugs are unique, so only
/// the first match is considered.
pub async fn case_study_by_slug(cms: &CmsClient, slug: &str) -> Option<CaseStudy> {
    let matches = fetch_entry::<Vec<CaseStudy>>(
        cms,
        "caso-de-exitos",
        CmsQuery::new().filter_eq("slug", slug).populate_all(),
        CachePolicy::new(
            CASE_STUDY_REVALIDATE_SECS,
            [TAG_CASE_STUDIES.to_owned(), case_study_tag(slug)],
        ),
    )
    .await?;
    matches.into_iter().next()
}
