//! Operator commands: print what the site would see, without serving it.

use std::io::Write as _;
use std::sync::Arc;

use anyhow::Context as _;
use serde::Serialize;

use crate::cache::ResponseCache;
use crate::cli::{FetchTarget, GrowthArgs, StatsArgs};
use crate::cms::content;
use crate::cms::model::GrowthRecord;
use crate::config::Settings;
use crate::pages::Backends;
use crate::youtube::{ChannelGrowth, growth_percentage};

fn backends(settings: &Settings) -> anyhow::Result<Backends> {
    let http = reqwest::Client::builder()
        .build()
        .context("build http client")?;
    Ok(Backends::new(http, settings, Arc::new(ResponseCache::new())))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("write stdout")?;
    Ok(())
}

/// Prints the typed view-model; `null` or `[]` when the CMS has nothing.
pub async fn fetch(target: FetchTarget, settings: &Settings) -> anyhow::Result<()> {
    let backends = backends(settings)?;
    let cms = &backends.cms;
    tracing::debug!(cms = cms.base_url(), ?target, "fetching");

    match target {
        FetchTarget::Global => print_json(&content::global_config(cms).await),
        FetchTarget::Home => print_json(&content::home(cms).await),
        FetchTarget::Services => print_json(&content::services_page(cms).await),
        FetchTarget::Community => print_json(&content::community_hub(cms).await),
        FetchTarget::Podcast => print_json(&content::podcast_campaign(cms).await),
        FetchTarget::Cases => print_json(&content::case_studies(cms).await),
        FetchTarget::Case(args) => print_json(&content::case_study_by_slug(cms, &args.slug).await),
    }
}

pub async fn stats(args: StatsArgs, settings: &Settings) -> anyhow::Result<()> {
    let backends = backends(settings)?;
    if !backends.youtube.is_enabled() {
        tracing::warn!("YOUTUBE_API_KEY is not set; live stats unavailable");
    }

    let record = GrowthRecord {
        youtube_channel_id: args.channel,
        baseline_subscribers: args.baseline,
        ..GrowthRecord::default()
    };
    let live = backends
        .youtube
        .channel_stats(&record.youtube_channel_id, args.videos)
        .await;
    print_json(&ChannelGrowth::from_live(record, live))
}

pub fn growth(args: GrowthArgs) -> anyhow::Result<()> {
    let badge = growth_percentage(Some(&args.baseline), args.live);
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", badge.as_deref().unwrap_or("none")).context("write stdout")?;
    Ok(())
}
