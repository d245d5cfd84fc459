//! Icon keys typed by editors are free text; unknown keys fall back to a
//! per-context default instead of failing.

use maud::{Markup, html};

const CARD_ICONS: &[(&str, &str)] = &[
    ("Presentation", "▭"),
    ("Globe", "◍"),
    ("BarChart3", "▥"),
    ("Activity", "∿"),
    ("Zap", "ϟ"),
    ("Shield", "⛉"),
    ("Smartphone", "▯"),
    ("Megaphone", "◁"),
    ("Star", "★"),
    ("Users", "⚇"),
    ("TrendingUp", "↗"),
    ("Target", "◎"),
];

const BADGE_ICONS: &[(&str, &str)] = &[
    ("Mic", "🎙"),
    ("Radio", "📻"),
    ("Star", "★"),
    ("PlayCircle", "▶"),
    ("Zap", "ϟ"),
    ("Headphones", "🎧"),
];

const SOCIAL_ICONS: &[(&str, &str)] = &[
    ("YouTube", "▶"),
    ("X", "𝕏"),
    ("Instagram", "◉"),
    ("LinkedIn", "in"),
    ("TikTok", "t"),
    ("Telegram", "✈"),
    ("WhatsApp", "✆"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSet {
    /// Capability cards on the home page.
    Capability,
    /// Service cards on the services page.
    Service,
    /// Podcast badge.
    Badge,
    /// Social platform links.
    Social,
}

impl IconSet {
    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Capability | Self::Service => CARD_ICONS,
            Self::Badge => BADGE_ICONS,
            Self::Social => SOCIAL_ICONS,
        }
    }

    fn fallback(self) -> &'static str {
        match self {
            Self::Capability => "Globe",
            Self::Service => "Presentation",
            Self::Badge => "Headphones",
            Self::Social => "MessageCircle",
        }
    }
}

/// The icon key actually rendered for `key` in `set`.
pub fn resolve(set: IconSet, key: Option<&str>) -> &'static str {
    key.and_then(|key| set.table().iter().find(|(name, _)| *name == key))
        .map(|(name, _)| *name)
        .unwrap_or_else(|| set.fallback())
}

fn glyph(set: IconSet, name: &str) -> &'static str {
    set.table()
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, glyph)| *glyph)
        .unwrap_or("✉")
}

pub fn icon(set: IconSet, key: Option<&str>) -> Markup {
    let name = resolve(set, key);
    html! {
        span.icon data-icon=(name) aria-hidden="true" { (glyph(set, name)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_use_context_fallback() {
        assert_eq!(resolve(IconSet::Capability, Some("Rocket")), "Globe");
        assert_eq!(resolve(IconSet::Service, Some("Rocket")), "Presentation");
        assert_eq!(resolve(IconSet::Badge, None), "Headphones");
        assert_eq!(resolve(IconSet::Social, Some("Mastodon")), "MessageCircle");
    }

    #[test]
    fn known_keys_resolve_to_themselves() {
        assert_eq!(resolve(IconSet::Service, Some("Target")), "Target");
        assert_eq!(resolve(IconSet::Badge, Some("Mic")), "Mic");
        assert_eq!(resolve(IconSet::Social, Some("YouTube")), "YouTube");
    }

    #[test]
    fn icon_markup_names_the_resolved_key() {
        let html = icon(IconSet::Social, Some("Bluesky")).into_string();
        assert!(html.contains(r#"data-icon="MessageCircle""#));
    }
}
