//! The Guarimba community hub, styled as a terminal.

use maud::{Markup, html};

use crate::cms::model::PresenterProfile;
use crate::format;
use crate::pages::{Chrome, CommunityView};

use super::{Brand, page, profile_picture};

pub fn render(view: &CommunityView) -> Markup {
    let hub = view.hub.as_ref();
    let chrome = &view.chrome;
    let title = hub
        .map(|hub| hub.title.as_str())
        .filter(|title| !title.trim().is_empty())
        .unwrap_or("LA RESISTENCIA AVANZA");
    let message = hub
        .map(|hub| hub.message.as_str())
        .filter(|message| !message.trim().is_empty())
        .unwrap_or("Uniendo voces por la libertad civil y la transparencia en cada rincón de Latinoamérica. Sistema de difusión descentralizado.");
    let support = hub.filter(|hub| hub.show_support_button).and_then(|hub| {
        let link = hub.support_button_link.as_deref().filter(|l| !l.is_empty())?;
        let text = hub
            .support_button_text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or("APOYAR OPERACIÓN");
        Some((link, text))
    });
    let socials = hub.map(|hub| hub.socials.as_slice()).unwrap_or_default();
    let presenters = hub.map(|hub| hub.presenters.as_slice()).unwrap_or_default();
    let guest = hub.and_then(|hub| hub.special_guest.as_ref());
    let banner = chrome.config.as_ref().and_then(|config| config.active_banner());

    let main = html! {
        main.container.terminal {
            div.status-bar {
                div.status-blinking { "📡 GENERACIÓN_INDEPENDENCIA" }
                div.status-data { "SEÑAL: SEGURA // SISTEMA: EN LÍNEA // INFO: ACTUALIZADA" }
                div.status-time { (view.today.format("%Y-%m-%d").to_string()) " - TERMINAL_GDB" }
            }

            section.hero-content {
                h1 { span.title-icon { ">_" } " " (title) }
                p.message { (message) }
                @if let Some((link, text)) = support {
                    a.support-button href=(link) target="_blank" rel="noopener noreferrer" { (text) }
                }
            }

            div.hosts-section {
                div.hosts {
                    @for presenter in presenters {
                        (presenter_card(chrome, presenter))
                    }
                }
                @if let Some(guest) = guest {
                    (guest_card(chrome, guest))
                }
            }

            div.dashboard-grid {
                div.left-col {
                    div.panel {
                        h3.panel-title { "Nodos Frecuencia Aliada" }
                        div.networks {
                            @if socials.is_empty() {
                                div.system-msg { "> INICIANDO NODOS... NINGUNA RED CONFIGURADA EN EL CMS_" }
                            } @else {
                                @for link in socials {
                                    a.network-node href=(link.url) target="_blank" rel="noopener noreferrer" {
                                        span.network-label { "[ " (link.platform.to_uppercase()) " ]" }
                                        span.network-link { "Conectar" }
                                    }
                                }
                            }
                        }
                    }
                    div.panel {
                        h3.panel-title { "Transmisiones Recientes" }
                        div.video-list {
                            @if view.broadcasts.recent.is_empty() {
                                div.system-msg { "> AWAITING SATELLITE UPLINK..." }
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
                div.right-col {
                    div.panel.monitor {
                        div.monitor-header {
                            span { "// VIDEO_PRIMARIO" }
                            span.monitor-rec { "● REC" }
                        }
                        div.media-section {
                            @if let Some(id) = &view.broadcasts.featured {
                                div.video-wrapper {
                                    iframe
                                        src={ "https://www.youtube.com/embed/" (id) "?autoplay=1&mute=1" }
                                        title="Main Broadcast"
                                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                        allowfullscreen {}
                                }
                            } @else {
                                div.placeholder-video {
                                    p { "> ESPERANDO TRANSMISIÓN SATELITAL..." }
                                    span.blinking-square {}
                                }
                            }
                        }
                        div.monitor-footer { "ENCRYPTION: AES-256 | STATUS: BROADCASTING" }
                    }
                }
            }

            @if let Some(text) = banner {
                div.alert-ticker {
                    div.ticker-content {
                        "ALERT SYSTEM: " (text) " // ALERT SYSTEM: " (text) " //"
                    }
                }
            }
        }
    };

    page(
        "Guarimba Digital",
        chrome,
        &Brand::community("Guarimba", "/guarimba", hub.and_then(|hub| hub.logo.as_ref())),
        Some("theme-dark"),
        main,
    )
}

fn social_links(profile: &PresenterProfile) -> Markup {
    html! {
        div.host-socials {
            @if let Some(link) = &profile.x_link {
                a href=(link) target="_blank" rel="noopener noreferrer" { "X / TWITTER" }
            }
            @if let Some(link) = &profile.instagram_link {
                a href=(link) target="_blank" rel="noopener noreferrer" { "INSTAGRAM" }
            }
        }
    }
}

fn presenter_card(chrome: &Chrome, presenter: &PresenterProfile) -> Markup {
    html! {
        div.host-card {
            (profile_picture(chrome, presenter.photo.as_ref(), &presenter.name, presenter.initial(), "HOST"))
            div.host-info {
                span.host-role { "_ " (presenter.role.as_deref().unwrap_or("Presentador")) }
                h3 { (presenter.name) }
                @if let Some(bio) = &presenter.bio {
                    p.host-bio { (bio) }
                }
                (social_links(presenter))
            }
        }
    }
}

fn guest_card(chrome: &Chrome, guest: &PresenterProfile) -> Markup {
    html! {
        div.guest-terminal {
            div.guest-terminal-header {
                span { "[ NEW_CONNECTION ]" }
                span { "> " (guest.role.as_deref().unwrap_or("INVITADO_ESPECIAL")) }
            }
            div.guest-terminal-content {
                (profile_picture(chrome, guest.photo.as_ref(), &guest.name, guest.initial(), "INV"))
                div.guest-info {
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
