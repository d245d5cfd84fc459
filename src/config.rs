pub const DEFAULT_CMS_URL: &str = "http://127.0.0.1:1337";
pub const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub cms_url: String,
    pub cms_token: Option<String>,
    pub media_url: String,
    pub youtube_api_key: Option<String>,
    pub youtube_api_url: String,
    pub revalidate_secret: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable source. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let cms_url = get("GENLATAM_CMS_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_CMS_URL.to_string());
        let media_url = get("GENLATAM_MEDIA_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| cms_url.clone());
        let youtube_api_url = get("GENLATAM_YOUTUBE_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_YOUTUBE_API_URL.to_string());

        Self {
            cms_url,
            cms_token: get("GENLATAM_CMS_TOKEN"),
            media_url,
            youtube_api_key: get("YOUTUBE_API_KEY"),
            youtube_api_url,
            revalidate_secret: get("GENLATAM_REVALIDATE_SECRET"),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings_from(pairs: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = Settings::default();
        assert_eq!(settings.cms_url, DEFAULT_CMS_URL);
        assert_eq!(settings.media_url, DEFAULT_CMS_URL);
        assert_eq!(settings.youtube_api_url, DEFAULT_YOUTUBE_API_URL);
        assert!(settings.cms_token.is_none());
        assert!(settings.youtube_api_key.is_none());
        assert!(settings.revalidate_secret.is_none());
    }

    #[test]
    fn media_url_follows_cms_url_unless_overridden() {
        let settings = settings_from(&[("GENLATAM_CMS_URL", "https://cms.example.com/")]);
        assert_eq!(settings.cms_url, "https://cms.example.com");
        assert_eq!(settings.media_url, "https://cms.example.com");

        let settings = settings_from(&[
            ("GENLATAM_CMS_URL", "https://cms.example.com"),
            ("GENLATAM_MEDIA_URL", "https://media.example.com"),
        ]);
        assert_eq!(settings.media_url, "https://media.example.com");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let settings = settings_from(&[("GENLATAM_CMS_TOKEN", "  "), ("YOUTUBE_API_KEY", "")]);
        assert!(settings.cms_token.is_none());
        assert!(settings.youtube_api_key.is_none());
    }
}
