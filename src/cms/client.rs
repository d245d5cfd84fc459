use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cache::{CachePolicy, ResponseCache};
use crate::cms::query::CmsQuery;
use crate::config::Settings;
use crate::ui::contact_form::ContactFields;

#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("unexpected response shape from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    base_url: String,
    media_url: String,
    token: Option<String>,
    cache: Arc<ResponseCache>,
}

impl CmsClient {
    pub fn new(http: reqwest::Client, settings: &Settings, cache: Arc<ResponseCache>) -> Self {
        Self {
            http,
            base_url: settings.cms_url.clone(),
            media_url: settings.media_url.clone(),
            token: settings.cms_token.clone(),
            cache,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn media_base(&self) -> &str {
        &self.media_url
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    /// `<base>/api<path>[?<query>]`
    pub fn api_url(&self, path: &str, query: &CmsQuery) -> String {
        let qs = query.to_query_string();
        if qs.is_empty() {
            format!("{}/api{path}", self.base_url)
        } else {
            format!("{}/api{path}?{qs}", self.base_url)
        }
    }

    /// Absolute URL for an uploaded asset. Absolute and protocol-relative
    /// URLs pass through untouched.
    pub fn media_url(&self, url: Option<&str>) -> Option<String> {
        resolve_media_url(&self.media_url, url)
    }

    pub async fn fetch_json(
        &self,
        path: &str,
        query: &CmsQuery,
        policy: Option<&CachePolicy>,
    ) -> Result<Value, CmsError> {
        let url = self.api_url(path, query);

        if policy.is_some()
            && let Some(hit) = self.cache.get(&url).await
        {
            tracing::debug!(%url, "cms cache hit");
            return Ok(hit);
        }

        let mut request = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|source| CmsError::Transport {
            url: url.clone(),
            source,
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| CmsError::Transport {
                url: url.clone(),
                source,
            })?;
        let value: Value = serde_json::from_slice(&bytes).map_err(|source| CmsError::Decode {
            url: url.clone(),
            source,
        })?;

        if let Some(policy) = policy {
            self.cache.insert(url.clone(), value.clone(), policy).await;
        }
        tracing::debug!(%url, "cms fetch ok");
        Ok(value)
    }

    /// Fetches `path` and unwraps the `{ "data": ... }` envelope. A missing or
    /// null `data` is `Ok(None)`.
    pub async fn fetch_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &CmsQuery,
        policy: Option<&CachePolicy>,
    ) -> Result<Option<T>, CmsError> {
        let value = self.fetch_json(path, query, policy).await?;
        let envelope: Envelope<T> =
            serde_json::from_value(value).map_err(|source| CmsError::Decode {
                url: self.api_url(path, query),
                source,
            })?;
        Ok(envelope.data)
    }

    /// Relays a contact submission. Any 2xx counts as delivered; the response
    /// body is ignored.
    pub async fn submit_contact(&self, fields: &ContactFields) -> Result<(), CmsError> {
        let url = format!("{}/api/contacto/enviar", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(fields)
            .send()
            .await
            .map_err(|source| CmsError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status {
                url,
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

pub fn resolve_media_url(base: &str, url: Option<&str>) -> Option<String> {
    let url = url?;
    if url.starts_with("http") || url.starts_with("//") {
        return Some(url.to_owned());
    }
    Some(format!("{}{url}", base.trim_end_matches('/')))
}
