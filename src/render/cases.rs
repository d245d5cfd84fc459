//! Case-study list and detail pages.

use maud::{Markup, PreEscaped, html};

use crate::cms::model::{CaseBody, CaseStudy};
use crate::cms::query::encode_value;
use crate::format;
use crate::pages::{CaseView, CasesView, Chrome};
use crate::ui::AnimatedCounter;
use crate::youtube::ChannelGrowth;
use crate::youtube::metrics::parse_leading_int;

use super::{Brand, counter, markdown, page};

/// Metrics shown on a list card.
pub const CARD_METRICS: usize = 2;

const YOUTUBE_GLYPH: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" width="24" height="24"><path d="M21.582 6.186a2.506 2.506 0 0 0-1.762-1.766C18.265 4 12 4 12 4s-6.264 0-7.82.42a2.505 2.505 0 0 0-1.762 1.766C2 7.74 2 12 2 12s0 4.26.418 5.814a2.506 2.506 0 0 0 1.762 1.766C5.736 20 12 20 12 20s6.265 0 7.82-.42a2.506 2.506 0 0 0 1.762-1.766C22 16.26 22 12 22 12s0-4.26-.418-5.814zM9.993 15.195v-6.39l5.902 3.195-5.902 3.195z"/></svg>"#;

/// Detail page URL; the slug is percent-encoded as one path segment.
pub fn case_path(slug: &str) -> String {
    format!("/casos/{}", encode_value(slug))
}

pub fn render_list(view: &CasesView) -> Markup {
    let main = html! {
        main.container.cases-page {
            div.page-header {
                div.section-badge { "Portafolio" }
                h1 { "Casos de Éxito" }
                p.subtitle {
                    "Estrategias ganadoras, respaldadas por datos. Conoce las campañas donde nuestra metodología de movilización digital ha marcado la diferencia."
                }
            }
            @if view.cases.is_empty() {
                div.empty-state {
                    p { "Aún no hay casos de éxito publicados en la base de datos." }
                    p.help-text { "Ve al CMS → Casos de Éxito y crea tu primer registro." }
                }
            } @else {
                div.case-grid {
                    @for case in &view.cases {
                        (case_card(&view.chrome, case))
                    }
                }
            }
        }
    };
    page(
        "Casos de Éxito | GenLatam",
        &view.chrome,
        &Brand::corporate(),
        None,
        main,
    )
}

fn case_card(chrome: &Chrome, case: &CaseStudy) -> Markup {
    let cover = case.cover.as_ref();
    html! {
        a.case-card href=(case_path(&case.slug)) {
            div.case-image {
                @if let Some(src) = chrome.media(cover.map(|c| c.url.as_str())) {
                    img src=(src) alt=(cover
                        .and_then(|c| c.alternative_text.as_deref())
                        .unwrap_or(&case.title));
                } @else {
                    div.placeholder-image { "GenLatam Case" }
                }
                @if let Some(actor) = &case.lead_actor {
                    div.client-tag { (actor) }
                }
            }
            div.case-content {
                h2 { (case.title) }
                p { (case.summary) }
                @if !case.achieved_metrics.is_empty() {
                    div.mini-metrics {
                        @for metric in case.achieved_metrics.iter().take(CARD_METRICS) {
                            div.mini-metric {
                                strong { (metric.value) } " " span { (metric.label) }
                            }
                        }
                    }
                }
                div.read-more { "Leer Caso Completo →" }
            }
        }
    }
}

pub fn render_detail(view: &CaseView) -> Markup {
    let case = &view.case;
    let cover = case.cover.as_ref();
    let campaign_month = case.campaign_date.as_deref().and_then(format::month_year);

    let main = html! {
        main.container.case-detail {
            a.back-link href="/casos" { "← Volver a Casos" }
            article {
                header.article-header {
                    h1 { (case.title) }
                    div.meta {
                        @if let Some(actor) = &case.lead_actor {
                            div.meta-item { strong { "Actor Principal:" } " " (actor) }
                        }
                        @if let Some(month) = campaign_month {
                            div.meta-item { strong { "Campaña:" } " " (month) }
                        }
                    }
                    @if let Some(src) = view.chrome.media(cover.map(|c| c.url.as_str())) {
                        div.hero-image {
                            img src=(src) alt=(cover
                                .and_then(|c| c.alternative_text.as_deref())
                                .unwrap_or(&case.title));
                        }
                    }
                }

                @if !case.achieved_metrics.is_empty() {
                    div.metrics-banner {
                        h3 { "Resultados Clave" }
                        div.metrics-grid {
                            @for metric in &case.achieved_metrics {
                                div.metric-item {
                                    div.metric-value { (metric.value) }
                                    div.metric-label { (metric.label) }
                                }
                            }
                        }
                    }
                }

                @if !view.growth.is_empty() {
                    div.youtube-growth {
                        h3 { span.live-indicator {} "Crecimiento en YouTube (En Vivo)" }
                        div.youtube-cards {
                            @for growth in &view.growth {
                                (growth_card(growth))
                            }
                        }
                    }
                }

                div.content-section {
                    div.summary { strong { "Resumen Ejecutivo:" } " " (case.summary) }
                    @match &case.body {
                        Some(CaseBody::Markdown(text)) => div.rich-text { (markdown(text)) },
                        Some(CaseBody::Unsupported(_)) => div.rich-text {
                            p { "Este contenido está utilizando un formato antiguo o no soportado." }
                        },
                        None => {},
                    }
                }
            }
        }
    };
    page(
        &format!("{} | GenLatam", case.title),
        &view.chrome,
        &Brand::corporate(),
        None,
        main,
    )
}

/// One channel's card. Missing live stats show "Error API" in place of the
/// subscriber counter; the growth badge only appears for positive growth.
fn growth_card(growth: &ChannelGrowth) -> Markup {
    let record = &growth.record;
    let baseline = record
        .baseline_subscribers
        .as_deref()
        .map(|raw| parse_leading_int(raw).map(|n| n.max(0) as u64).unwrap_or(0));

    html! {
        div.youtube-card {
            div.card-header {
                div.yt-icon { (PreEscaped(YOUTUBE_GLYPH)) }
                h4 { (growth.display_name().unwrap_or("Canal de YouTube")) }
            }
            div.stats-grid {
                @if let Some(baseline) = baseline {
                    div.stat {
                        span.stat-label { "Inicio Campaña" }
                        span.stat-old { (format::count(baseline)) " sub" }
                    }
                }
                div.stat {
                    span.stat-label { "Suscriptores" }
                    span.stat-new {
                        @if let Some(live) = &growth.live {
                            (counter(&AnimatedCounter::new(live.subscriber_count)))
                        } @else {
                            "Error API"
                        }
                    }
                }
                @if let Some(badge) = &growth.growth {
                    div.growth-badge { (badge) }
                }
            }
            @if let Some(live) = &growth.live {
                div.footer-metrics {
                    div.total { "Vistas Totales: " strong { (counter(&AnimatedCounter::new(live.view_count))) } }
                    div.total { "Videos Subidos: " strong { (counter(&AnimatedCounter::new(live.video_count))) } }
                }
                @if !live.recent_videos.is_empty() {
                    div.recent-videos {
                        h5 { "Últimos Videos Publicados" }
                        div.video-list {
                            @for video in &live.recent_videos {
                                a.video-item href={ "https://www.youtube.com/watch?v=" (video.id) }
                                    target="_blank" rel="noopener noreferrer" {
                                    @if let Some(thumb) = &video.thumbnail {
                                        div.video-thumbnail {
                                            img src=(thumb) alt=(video.title);
                                            div.play-overlay { "▶" }
                                        }
                                    }
                                    div.video-title title=(video.title) { (video.title) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
