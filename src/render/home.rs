use maud::{Markup, html};

use crate::cms::model::{CaseStudy, HomeContent};
use crate::pages::{Chrome, HomeView};

use super::cases::case_path;
use super::icons::{self, IconSet};
use super::{Brand, page};

pub fn render(view: &HomeView) -> Markup {
    let home = view.home.as_ref();
    let main = html! {
        main {
            @if let Some(home) = home {
                (hero(&view.chrome, home))
            }
            (media_section(home))
            (capabilities(home))
            @if !view.featured_cases.is_empty() {
                (featured_cases(&view.chrome, &view.featured_cases))
            }
            section.premium-cta {
                div.container {
                    h2 { "¿Listo para tomar el control de la narrativa?" }
                    p {
                        "Agenda una auditoría confidencial. Evaluaremos el peso actual de tu marca corporativa y diseñaremos la ruta exacta de escalabilidad comunicacional."
                    }
                    a.btn-glow href="/contacto" { "Iniciar Crecimiento →" }
                }
            }
            div.community-hint {
                p {
                    "¿Buscas nuestro lado activista social? Visita el "
                    strong { a href="/guarimba" { "Portal Guarimba Digital" } }
                    "."
                }
            }
        }
    };
    page(
        "GenLatam | Consultoría Estratégica",
        &view.chrome,
        &Brand::corporate(),
        None,
        main,
    )
}

fn hero(chrome: &Chrome, home: &HomeContent) -> Markup {
    let background = chrome.media(home.background.as_ref().map(|media| media.url.as_str()));
    let color = home
        .background_color
        .as_deref()
        .filter(|color| !color.trim().is_empty())
        .unwrap_or("var(--color-bg-primary)");

    html! {
        section.hero style={ "background-color: " (color) } {
            @if let Some(src) = background {
                div.hero-background {
                    img src=(src) alt=(home
                        .background
                        .as_ref()
                        .and_then(|media| media.alternative_text.as_deref())
                        .unwrap_or("Fondo GenLatam"));
                    div.hero-overlay {}
                }
            } @else {
                div.hero-glow {}
            }
            div.container {
                div.metrics-grid {
                    @for metric in &home.metrics {
                        div.metric-card {
                            div.metric-value { (metric.value) }
                            div.metric-label { (metric.label) }
                        }
                    }
                }
                div.hero-content {
                    div.badge { span.badge-dot {} "Agencia Consultora B2B" }
                    h1 { (home.hero_title) }
                    p.subtitle { (home.hero_subtitle) }
                    div.actions {
                        a.btn-primary href=(home.hero_cta_url) { (home.hero_cta_text) " ›" }
                        a.btn-secondary href="/casos" { "Ver Casos de Éxito" }
                    }
                }
            }
        }
    }
}

fn or_default<'a>(value: Option<&'a String>, default: &'a str) -> &'a str {
    value
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(default)
}

fn media_section(home: Option<&HomeContent>) -> Markup {
    let label = or_default(home.and_then(|h| h.media_section_label.as_ref()), "Network Oficial");
    let title = or_default(
        home.and_then(|h| h.media_section_title.as_ref()),
        "Ecosistema de Influencia Propio",
    );
    let body = or_default(
        home.and_then(|h| h.media_section_body.as_ref()),
        "No solo asesoramos; construimos y operamos algunas de las comunidades políticas más ruidosas de Latam.",
    );
    let community_url = or_default(home.and_then(|h| h.community_button_url.as_ref()), "/guarimba");
    let community_text = or_default(
        home.and_then(|h| h.community_button_text.as_ref()),
        "Ver Plataforma",
    );
    let podcast_url = or_default(home.and_then(|h| h.podcast_link_url.as_ref()), "#");
    let podcast_text = or_default(
        home.and_then(|h| h.podcast_link_text.as_ref()),
        "Caso de Estudio Próximamente",
    );

    html! {
        section.media-section {
            div.container {
                div.section-header {
                    span.section-badge { (label) }
                    h2 { (title) }
                    p { (body) }
                }
                div.channel-grid {
                    div.channel {
                        div.channel-mark.community { "G" }
                        h3 { "Guarimba Digital Bowery" }
                        p { "El hub de contrainformación y activismo venezolano con mayor engagement sostenido." }
                        a.channel-link href=(community_url) { (community_text) " →" }
                    }
                    div.channel {
                        div.channel-mark.podcast { "E" }
                        h3 { "Campaña EXIT" }
                        p { "Movimiento estratégico de alto impacto para la movilización y organización civil." }
                        a.channel-link href=(podcast_url) { (podcast_text) }
                    }
                }
            }
        }
    }
}

fn capabilities(home: Option<&HomeContent>) -> Markup {
    let cards = home.map(|home| home.capabilities.as_slice()).unwrap_or_default();
    html! {
        section.home-section.alt {
            div.container {
                div.section-header {
                    h2 { "Nuestras Capacidades" }
                    p { "Estructuras digitales de alto impacto para negocios que requieren liderazgo en su industria." }
                }
                div.card-grid {
                    @for card in cards {
                        div.service-card {
                            div.icon-wrapper { (icons::icon(IconSet::Capability, Some(&card.icon))) }
                            h3 { (card.title) }
                            p { (card.description) }
                        }
                    }
                }
                div.center-action {
                    a.btn-outline href="/servicios" { "Ver Oferta Completa →" }
                }
            }
        }
    }
}

fn featured_cases(chrome: &Chrome, cases: &[CaseStudy]) -> Markup {
    html! {
        section.home-section {
            div.container {
                div.section-header {
                    span.section-badge { "Resultados Verificables" }
                    h2 { "Portafolio B2B" }
                    p { "Campañas ejecutadas con precisión milimétrica donde el margen de error es cero." }
                }
                div.case-grid {
                    @for case in cases {
                        a.case-card href=(case_path(&case.slug)) {
                            div.case-image {
                                @if let Some(src) = chrome.media(case.cover.as_ref().map(|c| c.url.as_str())) {
                                    img src=(src) alt=(case.title);
                                } @else {
                                    div.placeholder-image { "GenLatam" }
                                }
                            }
                            div.case-content {
                                h4 { (case.title) }
                                p { (case.summary) }
                                span.read-more { "Analizar →" }
                            }
                        }
                    }
                }
                div.center-action {
                    a.btn-primary href="/casos" { "Ver Todo el Portafolio" }
                }
            }
        }
    }
}
