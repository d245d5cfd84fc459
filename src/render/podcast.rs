//! The EXIT podcast campaign page.

use maud::{Markup, PreEscaped, html};

use crate::cms::model::PresenterProfile;
use crate::format;
use crate::pages::{Chrome, PodcastView};

use super::icons::{self, IconSet};
use super::{Brand, page, profile_picture};

const DEFAULT_DESCRIPTION: &str = "<p>Un espacio dedicado a las conversaciones incómodas, la verdad sin filtros y el análisis profundo. Acompáñanos en cada episodio.</p>";

pub fn render(view: &PodcastView) -> Markup {
    let campaign = view.campaign.as_ref();
    let chrome = &view.chrome;
    let title = campaign
        .map(|c| c.title.as_str())
        .filter(|title| !title.trim().is_empty())
        .unwrap_or("EXIT: Entrevistas a Fondo");
    let badge_text = campaign
        .and_then(|c| c.badge_text.as_deref())
        .filter(|text| !text.trim().is_empty())
        .unwrap_or("PODCAST ORIGINAL");
    let description = campaign
        .and_then(|c| c.description.as_deref())
        .filter(|html| !html.trim().is_empty())
        .unwrap_or(DEFAULT_DESCRIPTION);
    let socials = campaign.map(|c| c.socials.as_slice()).unwrap_or_default();
    let host = campaign.and_then(|c| c.host.as_ref());
    let guest = campaign.and_then(|c| c.special_guest.as_ref());

    let main = html! {
        main.container.podcast {
            section.podcast-hero {
                div.hero-text {
                    span.podcast-badge {
                        (icons::icon(IconSet::Badge, campaign.and_then(|c| c.badge_icon.as_deref())))
                        " " (badge_text)
                    }
                    h1 { (title) }
                    div.description { (PreEscaped(description)) }

                    @if !socials.is_empty() {
                        div.platforms {
                            h3 { "Nuestras Redes:" }
                            div.platform-list {
                                @for link in socials {
                                    a.platform-link href=(link.url) target="_blank" rel="noopener noreferrer" {
                                        (link.platform) " ↗"
                                    }
                                }
                            }
                        }
                    }

                    @if let Some(guest) = guest {
                        div.upcoming-guest {
                            div.upcoming-label { "★ PRÓXIMO INVITADO ESPECIAL" }
                            div.guest-content {
                                (profile_picture(chrome, guest.photo.as_ref(), &guest.name, guest.initial(), "INV"))
                                div.guest-info {
                                    span.guest-role { (guest.role.as_deref().unwrap_or("Invitado")) }
                                    h3 { (guest.name) }
                                    @if let Some(bio) = &guest.bio {
                                        p { (bio) }
                                    }
                                    (social_links(guest))
                                }
                            }
                        }
                    }
                }
                div.hosts {
                    @if let Some(host) = host {
                        (host_card(chrome, host))
                    }
                }
            }

            div.dashboard-grid {
                section.video-section {
                    div.video-header { h2 { "▶ ÚLTIMO EPISODIO / EN VIVO" } }
                    div.video-wrapper {
                        @if let Some(id) = &view.broadcasts.featured {
                            iframe
                                src={ "https://www.youtube.com/embed/" (id) "?autoplay=0" }
                                title="Episodio Podcast"
                                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                allowfullscreen {}
                        } @else {
                            div.placeholder-video { "Espere nueva transmisión de EXIT" }
                        }
                    }
                }
                aside.recent-list {
                    div.video-header { h2 { "Últimos Episodios" } }
                    div.video-list {
                        @if view.broadcasts.recent.is_empty() {
                            div.placeholder-video { "Buscando historial..." }
                        } @else {
                            @for video in &view.broadcasts.recent {
                                a.video-list-item href={ "https://www.youtube.com/watch?v=" (video.id) }
                                    target="_blank" rel="noopener noreferrer" {
                                    @if let Some(thumb) = &video.thumbnail {
                                        div.video-thumb { img src=(thumb) alt=(video.title); }
                                    }
                                    div.video-info {
                                        h4 { (video.title) }
                                        @if let Some(at) = &video.published_at {
                                            span.video-date { (format::short_date(at)) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    page(
        "EXIT | Entrevistas a Fondo",
        chrome,
        &Brand::community("EXIT", "/exit", campaign.and_then(|c| c.logo.as_ref())),
        Some("theme-dark podcast-theme"),
        main,
    )
}

fn social_links(profile: &PresenterProfile) -> Markup {
    html! {
        div.host-socials {
            @if let Some(link) = &profile.x_link {
                a href=(link) target="_blank" rel="noopener noreferrer" { "Twitter/X" }
            }
            @if let Some(link) = &profile.instagram_link {
                a href=(link) target="_blank" rel="noopener noreferrer" { "Instagram" }
            }
        }
    }
}

fn host_card(chrome: &Chrome, host: &PresenterProfile) -> Markup {
    let name = if host.name.trim().is_empty() {
        "Marfilipo"
    } else {
        host.name.as_str()
    };
    html! {
        div.host-card {
            (profile_picture(chrome, host.photo.as_ref(), name, host.initial(), "HOST"))
            div.host-info {
                span.host-role { (host.role.as_deref().unwrap_or("Presentador Principal")) }
                h3 { (name) }
                @if let Some(bio) = &host.bio {
                    p.host-bio { (bio) }
                }
                (social_links(host))
            }
        }
    }
}
