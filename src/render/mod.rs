//! Server-side HTML for every page.
//!
//! Renderers are pure functions from a page view-model to [`Markup`]; all
//! fetching happens beforehand in [`crate::pages`]. Text from the CMS is
//! escaped by maud, except the podcast description which editors author as
//! HTML.

pub mod cases;
pub mod community;
pub mod contact;
pub mod home;
pub mod icons;
pub mod podcast;
pub mod services;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, html as md_html};

use crate::cms::model::{Media, SocialLink};
use crate::format;
use crate::pages::Chrome;
use crate::ui::AnimatedCounter;

use self::icons::IconSet;

pub const STYLESHEET_PATH: &str = "/static/site.css";
pub const COUNTER_SCRIPT_PATH: &str = "/static/counter.js";

/// Which half of the site a page belongs to. Decides header/footer copy,
/// default links and which social links the footer lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Corporate,
    Community,
}

/// Per-page overrides for the header and footer branding.
#[derive(Debug, Clone, Copy)]
pub struct Brand<'a> {
    pub mode: Mode,
    pub title: Option<&'a str>,
    pub href: Option<&'a str>,
    pub logo: Option<&'a Media>,
}

impl<'a> Brand<'a> {
    pub fn corporate() -> Self {
        Self {
            mode: Mode::Corporate,
            title: None,
            href: None,
            logo: None,
        }
    }

    pub fn community(title: &'a str, href: &'a str, logo: Option<&'a Media>) -> Self {
        Self {
            mode: Mode::Community,
            title: Some(title),
            href: Some(href),
            logo,
        }
    }

    fn logo_url(&self, chrome: &Chrome) -> Option<String> {
        let logo = self
            .logo
            .or_else(|| chrome.config.as_ref().and_then(|config| config.logo.as_ref()))?;
        chrome.media(Some(&logo.url))
    }
}

pub fn base_document(title: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(STYLESHEET_PATH);
                script src=(COUNTER_SCRIPT_PATH) defer {}
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Header, main content and footer wrapped in a full document.
pub fn page(
    title: &str,
    chrome: &Chrome,
    brand: &Brand<'_>,
    body_class: Option<&str>,
    main: Markup,
) -> Markup {
    let content = html! {
        (site_header(chrome, brand))
        (main)
        (site_footer(chrome, brand))
    };
    base_document(title, body_class, content)
}

/// Site header. The mobile menu is a checkbox toggle, so opening and closing
/// it needs no script.
pub fn site_header(chrome: &Chrome, brand: &Brand<'_>) -> Markup {
    let corporate = brand.mode == Mode::Corporate;
    let title = brand
        .title
        .unwrap_or(if corporate { "GenLatam" } else { "Guarimba" });
    let href = brand.href.unwrap_or(if corporate { "/" } else { "/guarimba" });
    let banner = chrome
        .config
        .as_ref()
        .and_then(|config| config.active_banner());

    html! {
        header.site-header.corporate[corporate].community[!corporate] {
            div.container {
                div.logo {
                    a href=(href) {
                        @if let Some(src) = brand.logo_url(chrome) {
                            img.logo-image src=(src) alt=(title);
                        } @else {
                            (title)
                        }
                    }
                }
                nav.nav-desktop {
                    (nav_links())
                }
                input.nav-toggle type="checkbox" id="nav-toggle";
                label.nav-toggle-button for="nav-toggle" aria-label="Abrir menú" {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
                div.nav-mobile {
                    (nav_links())
                }
            }
            @if let Some(text) = banner {
                div.banner { p { (text) } }
            }
        }
    }
}

fn nav_links() -> Markup {
    html! {
        a.link href="/" { "Inicio" }
        a.link href="/servicios" { "Servicios" }
        a.link href="/casos" { "Casos de Éxito" }
        a.contact-button href="/contacto" { "Contacto" }
    }
}

pub fn site_footer(chrome: &Chrome, brand: &Brand<'_>) -> Markup {
    let community = brand.mode == Mode::Community;
    let config = chrome.config.as_ref();
    let socials: &[SocialLink] = match (config, community) {
        (Some(config), true) => &config.community_socials,
        (Some(config), false) => &config.corporate_socials,
        (None, _) => &[],
    };
    let brand_name = if community {
        "GUARIMBA DIGITAL"
    } else {
        "GenLatam."
    };
    let description = if community {
        "Señal activa. Construyendo ecosistemas digitales para la resistencia y la defensa de la libertad."
    } else {
        config
            .and_then(|config| config.footer_text.as_deref())
            .filter(|text| !text.trim().is_empty())
            .unwrap_or("Consultoría estratégica y posicionamiento corporativo de alto nivel.")
    };

    html! {
        footer.site-footer.corporate[!community].community[community] {
            div.container {
                div.footer-grid {
                    div.brand-section {
                        h3.brand-name {
                            @if let Some(src) = brand.logo_url(chrome) {
                                img.footer-logo src=(src) alt=(brand_name);
                            } @else {
                                (brand_name)
                            }
                        }
                        p.description { (description) }
                        @if !socials.is_empty() {
                            div.social-networks {
                                @for link in socials {
                                    a.social-link href=(link.url) target="_blank" rel="noopener noreferrer" aria-label=(link.platform) {
                                        (icons::icon(IconSet::Social, Some(&link.platform)))
                                    }
                                }
                            }
                        }
                    }
                    div.links-section {
                        h4.section-title { "Navegación" }
                        ul.link-list {
                            @if community {
                                li { a href="/guarimba" { "Guarimba" } }
                                li { a href="/exit" { "Entrevistas en EXIT" } }
                                li { a.back-link href="/" { "← Volver al inicio" } }
                            } @else {
                                li { a href="/" { "Inicio" } }
                                li { a href="/servicios" { "Oficina de Estrategia" } }
                                li { a href="/casos" { "Portafolio Profesional" } }
                                li { a href="/contacto" { "Contacto" } }
                            }
                        }
                    }
                }
                div.bottom-bar {
                    p.copyright {
                        "© " (chrome.year) " "
                        (if community { "Red de Resistencia" } else { "GenLatam" })
                        ". Todos los derechos reservados."
                    }
                    p.manifesto { span.hashtag { "#GeneracionIndependencia" } }
                }
            }
        }
    }
}

/// A count-up number. The server renders the counter's initial state; the
/// embedded script animates it to `data-target` once it scrolls into view.
pub fn counter(counter: &AnimatedCounter) -> Markup {
    html! {
        span.counter
            data-target=(counter.target())
            title=(format::count(counter.target())) {
            (format::count(counter.value()))
        }
    }
}

/// Markdown to HTML. Raw HTML inside the markdown is shown as text.
pub fn markdown(text: &str) -> Markup {
    let parser = Parser::new(text).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut body = String::new();
    md_html::push_html(&mut body, parser);
    PreEscaped(body)
}

/// Photo of a presenter, or their initial when there is none.
pub(crate) fn profile_picture(
    chrome: &Chrome,
    photo: Option<&Media>,
    name: &str,
    initial: Option<String>,
    placeholder: &str,
) -> Markup {
    html! {
        @if let Some(src) = chrome.media(photo.map(|media| media.url.as_str())) {
            div.profile-image { img src=(src) alt=(name); }
        } @else {
            div.profile-placeholder {
                span { (initial.as_deref().unwrap_or(placeholder)) }
            }
        }
    }
}

pub fn not_found(chrome: &Chrome) -> Markup {
    let main = html! {
        main.container.not-found {
            h1 { "404" }
            p { "La página que buscas no existe o fue movida." }
            a.btn-primary href="/" { "Volver al inicio" }
        }
    };
    page(
        "Página no encontrada | GenLatam",
        chrome,
        &Brand::corporate(),
        None,
        main,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::model::GlobalConfig;

    fn chrome(config: Option<GlobalConfig>) -> Chrome {
        Chrome {
            config,
            media_base: "http://cms.local".to_owned(),
            year: 2025,
        }
    }

    #[test]
    fn base_document_links_assets() {
        let html = base_document("T", None, html! { p { "x" } }).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(STYLESHEET_PATH));
        assert!(html.contains(COUNTER_SCRIPT_PATH));
    }

    #[test]
    fn header_shows_banner_only_when_active() {
        let config = GlobalConfig {
            banner_active: Some(true),
            banner_text: Some("Transmisión especial hoy".to_owned()),
            ..GlobalConfig::default()
        };
        let html = site_header(&chrome(Some(config.clone())), &Brand::corporate()).into_string();
        assert!(html.contains("Transmisión especial hoy"));

        let off = GlobalConfig {
            banner_active: Some(false),
            ..config
        };
        let html = site_header(&chrome(Some(off)), &Brand::corporate()).into_string();
        assert!(!html.contains("Transmisión especial hoy"));
    }

    #[test]
    fn header_prefers_page_logo() {
        let config = GlobalConfig {
            logo: Some(Media {
                url: "/uploads/global.png".to_owned(),
                ..Media::default()
            }),
            ..GlobalConfig::default()
        };
        let page_logo = Media {
            url: "/uploads/exit.png".to_owned(),
            ..Media::default()
        };
        let chrome = chrome(Some(config));
        let html = site_header(&chrome, &Brand::community("EXIT", "/exit", Some(&page_logo)))
            .into_string();
        assert!(html.contains("http://cms.local/uploads/exit.png"));
        assert!(html.contains(r#"href="/exit""#));

        let html = site_header(&chrome, &Brand::corporate()).into_string();
        assert!(html.contains("http://cms.local/uploads/global.png"));
    }

    #[test]
    fn footer_lists_socials_for_its_mode() {
        let config = GlobalConfig {
            corporate_socials: vec![SocialLink {
                id: 1,
                platform: "LinkedIn".to_owned(),
                url: "https://linkedin.com/genlatam".to_owned(),
            }],
            community_socials: vec![SocialLink {
                id: 2,
                platform: "Telegram".to_owned(),
                url: "https://t.me/guarimba".to_owned(),
            }],
            ..GlobalConfig::default()
        };
        let chrome = chrome(Some(config));

        let corporate = site_footer(&chrome, &Brand::corporate()).into_string();
        assert!(corporate.contains("linkedin.com/genlatam"));
        assert!(!corporate.contains("t.me/guarimba"));
        assert!(corporate.contains("© 2025 GenLatam."));

        let community =
            site_footer(&chrome, &Brand::community("Guarimba", "/guarimba", None)).into_string();
        assert!(community.contains("t.me/guarimba"));
        assert!(community.contains("Red de Resistencia"));
    }

    #[test]
    fn footer_text_falls_back() {
        let html = site_footer(&chrome(None), &Brand::corporate()).into_string();
        assert!(html.contains("Consultoría estratégica y posicionamiento corporativo de alto nivel."));
    }

    #[test]
    fn counter_renders_initial_state_and_target() {
        let html = counter(&AnimatedCounter::new(12_500)).into_string();
        assert!(html.contains(r#"data-target="12500""#));
        assert!(html.contains(">0<"));
    }

    #[test]
    fn markdown_escapes_raw_html() {
        let html = markdown("## Contexto\n\n**fuerte** <script>x</script>").into_string();
        assert!(html.contains("<h2>Contexto</h2>"));
        assert!(html.contains("<strong>fuerte</strong>"));
        assert!(!html.contains("<script>"));
    }
}
