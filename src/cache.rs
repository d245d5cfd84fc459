//! Advisory in-process cache for upstream JSON responses.
//!
//! Entries are keyed by the request URL and carry a freshness window plus a
//! set of invalidation tags. A miss (absent, expired or evicted) simply means
//! the caller fetches again; concurrent misses are not coalesced. Expired
//! entries are dropped when looked up and on every insert, so the map only
//! holds live keys.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    pub revalidate: Duration,
    pub tags: Vec<String>,
}

impl CachePolicy {
    pub fn new(revalidate_secs: u64, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            revalidate: Duration::from_secs(revalidate_secs),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    stored_at: Instant,
    ttl: Duration,
    tags: Vec<String>,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) < self.ttl
    }
}

#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh value for `key`. A stale entry is dropped on the way out.
    pub async fn get(&self, key: &str) -> Option<Value> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            let entry = entries.get(key)?;
            if entry.is_fresh(now) {
                return Some(entry.value.clone());
            }
        }
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|entry| !entry.is_fresh(now)) {
            entries.remove(key);
        }
        None
    }

    pub async fn insert(&self, key: impl Into<String>, value: Value, policy: &CachePolicy) {
        if policy.revalidate.is_zero() {
            return;
        }
        let entry = CacheEntry {
            value,
            stored_at: Instant::now(),
            ttl: policy.revalidate,
            tags: policy.tags.clone(),
        };
        let mut entries = self.entries.write().await;
        let now = entry.stored_at;
        entries.retain(|_, existing| existing.is_fresh(now));
        entries.insert(key.into(), entry);
    }

    /// Drops every entry carrying `tag` and returns how many were evicted.
    pub async fn invalidate_tag(&self, tag: &str) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.tags.iter().any(|t| t == tag));
        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|entry| entry.is_fresh(now))
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
