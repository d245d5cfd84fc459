//! Live channel statistics from the YouTube Data API.
//!
//! The feature is optional: without an API key every call short-circuits to
//! an empty result, and any failing lookup degrades only its own part of the
//! result. Nothing here returns an error to the caller.

mod api;
pub mod metrics;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::cache::{CachePolicy, ResponseCache};
use crate::cms::model::GrowthRecord;
use crate::config::Settings;

use self::api::{ChannelResource, ListResponse, PlaylistItem, SearchResult};
pub use self::metrics::{featured_video, growth_percentage};

/// Recent uploads shown on a case-study growth card.
pub const CASE_STUDY_RECENT_VIDEOS: usize = 3;
/// Recent uploads listed on the brand pages.
pub const BRAND_RECENT_VIDEOS: usize = 4;

const STATS_REVALIDATE_SECS: u64 = 3600;

#[derive(Debug, thiserror::Error)]
pub enum YouTubeError {
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} answered HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("unexpected {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelStats {
    pub title: String,
    pub subscriber_count: u64,
    pub view_count: u64,
    pub video_count: u64,
    pub recent_videos: Vec<VideoSummary>,
}

/// What a brand page needs: the video to embed and the recent uploads list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Broadcasts {
    pub featured: Option<String>,
    pub recent: Vec<VideoSummary>,
}

/// A case-study growth record joined with the channel's live numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelGrowth {
    pub record: GrowthRecord,
    pub live: Option<ChannelStats>,
    pub growth: Option<String>,
}

impl ChannelGrowth {
    pub fn from_live(record: GrowthRecord, live: Option<ChannelStats>) -> Self {
        let growth = live.as_ref().and_then(|stats| {
            growth_percentage(record.baseline_subscribers.as_deref(), stats.subscriber_count)
        });
        Self {
            record,
            live,
            growth,
        }
    }

    /// Card heading: editor-supplied name, else the live channel title.
    pub fn display_name(&self) -> Option<&str> {
        self.record
            .display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| self.live.as_ref().map(|stats| stats.title.as_str()))
            .filter(|name| !name.trim().is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct YouTubeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    cache: Arc<ResponseCache>,
}

impl YouTubeClient {
    pub fn new(http: reqwest::Client, settings: &Settings, cache: Arc<ResponseCache>) -> Self {
        Self {
            http,
            base_url: settings.youtube_api_url.clone(),
            api_key: settings.youtube_api_key.clone(),
            cache,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        api_key: &str,
        params: &[(&str, &str)],
        policy: Option<&CachePolicy>,
    ) -> Result<T, YouTubeError> {
        let mut url = Url::parse(&format!("{}/{endpoint}", self.base_url))?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().copied())
            .append_pair("key", api_key);

        let cached = match policy {
            Some(_) => self.cache.get(url.as_str()).await,
            None => None,
        };
        let value = match cached {
            Some(value) => value,
            None => {
                let response = self
                    .http
                    .get(url.clone())
                    .send()
                    .await
                    .map_err(|source| YouTubeError::Transport { endpoint, source })?;
                let status = response.status();
                if !status.is_success() {
                    return Err(YouTubeError::Status {
                        endpoint,
                        status: status.as_u16(),
                    });
                }
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|source| YouTubeError::Transport { endpoint, source })?;
                let value: serde_json::Value = serde_json::from_slice(&bytes)
                    .map_err(|source| YouTubeError::Decode { endpoint, source })?;
                if let Some(policy) = policy {
                    self.cache
                        .insert(url.as_str(), value.clone(), policy)
                        .await;
                }
                value
            }
        };

        serde_json::from_value(value).map_err(|source| YouTubeError::Decode { endpoint, source })
    }

    async fn channel(
        &self,
        api_key: &str,
        channel_id: &str,
        parts: &str,
    ) -> Result<Option<ChannelResource>, YouTubeError> {
        let response: ListResponse<ChannelResource> = self
            .get_json(
                "channels",
                api_key,
                &[("part", parts), ("id", channel_id)],
                Some(&stats_policy()),
            )
            .await?;
        Ok(response.items.into_iter().next())
    }

    async fn playlist_videos(
        &self,
        api_key: &str,
        playlist_id: &str,
        max_results: usize,
    ) -> Result<Vec<VideoSummary>, YouTubeError> {
        let max_results = max_results.to_string();
        let response: ListResponse<PlaylistItem> = self
            .get_json(
                "playlistItems",
                api_key,
                &[
                    ("part", "snippet"),
                    ("playlistId", playlist_id),
                    ("maxResults", &max_results),
                ],
                Some(&stats_policy()),
            )
            .await?;
        Ok(response
            .items
            .into_iter()
            .filter_map(video_summary)
            .collect())
    }

    async fn live_broadcast(
        &self,
        api_key: &str,
        channel_id: &str,
    ) -> Result<Option<String>, YouTubeError> {
        let response: ListResponse<SearchResult> = self
            .get_json(
                "search",
                api_key,
                &[
                    ("part", "snippet"),
                    ("channelId", channel_id),
                    ("eventType", "live"),
                    ("type", "video"),
                ],
                None,
            )
            .await?;
        Ok(response
            .items
            .into_iter()
            .find_map(|item| item.id?.video_id.filter(|id| !id.is_empty())))
    }

    /// Subscriber/view/video counts plus up to `max_videos` recent uploads.
    /// `None` when the feature is off, the lookup fails or the channel is
    /// unknown. A failing uploads lookup leaves `recent_videos` empty.
    pub async fn channel_stats(&self, channel_id: &str, max_videos: usize) -> Option<ChannelStats> {
        let api_key = self.api_key.as_deref()?;

        let channel = match self
            .channel(api_key, channel_id, "statistics,snippet,contentDetails")
            .await
        {
            Ok(Some(channel)) => channel,
            Ok(None) => {
                tracing::debug!(channel_id, "channel not found");
                return None;
            }
            Err(err) => {
                tracing::warn!(channel_id, error = %err, "channel stats lookup failed");
                return None;
            }
        };

        let recent_videos = match channel.uploads_playlist() {
            Some(playlist_id) => self
                .playlist_videos(api_key, playlist_id, max_videos)
                .await
                .unwrap_or_else(|err| {
                    tracing::warn!(channel_id, error = %err, "recent uploads lookup failed");
                    Vec::new()
                }),
            None => Vec::new(),
        };

        let statistics = channel.statistics.unwrap_or_default();
        Some(ChannelStats {
            title: channel.snippet.map(|s| s.title).unwrap_or_default(),
            subscriber_count: metrics::parse_count(statistics.subscriber_count.as_deref()),
            view_count: metrics::parse_count(statistics.view_count.as_deref()),
            video_count: metrics::parse_count(statistics.video_count.as_deref()),
            recent_videos,
        })
    }

    /// Featured video and recent uploads for a brand page. The live search
    /// runs alongside the channel → uploads chain; each side degrades on its
    /// own.
    pub async fn broadcasts(&self, channel_id: &str, max_videos: usize) -> Broadcasts {
        let Some(api_key) = self.api_key.as_deref() else {
            return Broadcasts::default();
        };

        let live = async {
            self.live_broadcast(api_key, channel_id)
                .await
                .unwrap_or_else(|err| {
                    tracing::warn!(channel_id, error = %err, "live broadcast search failed");
                    None
                })
        };
        let uploads = async {
            let channel = match self.channel(api_key, channel_id, "contentDetails").await {
                Ok(Some(channel)) => channel,
                Ok(None) => return Vec::new(),
                Err(err) => {
                    tracing::warn!(channel_id, error = %err, "channel lookup failed");
                    return Vec::new();
                }
            };
            let Some(playlist_id) = channel.uploads_playlist() else {
                return Vec::new();
            };
            self.playlist_videos(api_key, playlist_id, max_videos)
                .await
                .unwrap_or_else(|err| {
                    tracing::warn!(channel_id, error = %err, "recent uploads lookup failed");
                    Vec::new()
                })
        };

        let (live, recent) = tokio::join!(live, uploads);
        Broadcasts {
            featured: featured_video(live, &recent),
            recent,
        }
    }

    /// Live stats for every growth record, fetched concurrently, in record
    /// order.
    pub async fn case_study_growth(&self, records: &[GrowthRecord]) -> Vec<ChannelGrowth> {
        let lookups = records.iter().map(|record| async move {
            let live = self
                .channel_stats(&record.youtube_channel_id, CASE_STUDY_RECENT_VIDEOS)
                .await;
            ChannelGrowth::from_live(record.clone(), live)
        });
        futures_util::future::join_all(lookups).await
    }
}

fn stats_policy() -> CachePolicy {
    CachePolicy {
        revalidate: Duration::from_secs(STATS_REVALIDATE_SECS),
        tags: vec!["youtube".to_owned()],
    }
}

fn video_summary(item: PlaylistItem) -> Option<VideoSummary> {
    let snippet = item.snippet?;
    let id = snippet.resource_id?.video_id.filter(|id| !id.is_empty())?;
    Some(VideoSummary {
        id,
        thumbnail: metrics::best_thumbnail(&snippet.thumbnails),
        published_at: snippet
            .published_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc)),
        title: snippet.title,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(baseline: Option<&str>, name: Option<&str>) -> GrowthRecord {
        GrowthRecord {
            id: 1,
            display_name: name.map(str::to_owned),
            youtube_channel_id: "UC1".to_owned(),
            baseline_subscribers: baseline.map(str::to_owned),
        }
    }

    fn stats(subscribers: u64) -> ChannelStats {
        ChannelStats {
            title: "Canal en vivo".to_owned(),
            subscriber_count: subscribers,
            view_count: 10,
            video_count: 2,
            recent_videos: vec![],
        }
    }

    #[test]
    fn growth_is_attached_only_with_live_stats() {
        let growth = ChannelGrowth::from_live(record(Some("1000"), None), Some(stats(1500)));
        assert_eq!(growth.growth.as_deref(), Some("+50.0%"));

        let growth = ChannelGrowth::from_live(record(Some("1000"), None), None);
        assert_eq!(growth.growth, None);

        let growth = ChannelGrowth::from_live(record(Some("1000"), None), Some(stats(900)));
        assert_eq!(growth.growth, None);
    }

    #[test]
    fn display_name_prefers_editor_copy() {
        let growth = ChannelGrowth::from_live(record(None, Some("Canal A")), Some(stats(1)));
        assert_eq!(growth.display_name(), Some("Canal A"));

        let growth = ChannelGrowth::from_live(record(None, Some(" ")), Some(stats(1)));
        assert_eq!(growth.display_name(), Some("Canal en vivo"));

        let growth = ChannelGrowth::from_live(record(None, None), None);
        assert_eq!(growth.display_name(), None);
    }

    #[tokio::test]
    async fn without_api_key_nothing_is_fetched() {
        let settings = Settings {
            youtube_api_url: "http://127.0.0.1:1".to_owned(),
            ..Settings::default()
        };
        let client = YouTubeClient::new(
            reqwest::Client::new(),
            &settings,
            Arc::new(ResponseCache::new()),
        );
        assert!(!client.is_enabled());
        assert_eq!(client.channel_stats("UC1", 3).await, None);
        assert_eq!(client.broadcasts("UC1", 4).await, Broadcasts::default());

        let growth = client
            .case_study_growth(&[record(Some("1000"), None)])
            .await;
        assert_eq!(growth.len(), 1);
        assert!(growth[0].live.is_none());
        assert!(growth[0].growth.is_none());
    }
}
