use maud::{Markup, html};

use crate::pages::ServicesView;

use super::icons::{self, IconSet};
use super::{Brand, page};

pub fn render(view: &ServicesView) -> Markup {
    let data = &view.page;
    let main = html! {
        main.container.services-page {
            header.page-header {
                span.section-badge { (data.hero_label) }
                h1 { (data.hero_title) }
                p.subtitle { (data.hero_subtitle) }
            }
            div.card-grid {
                @if data.services.is_empty() {
                    div.empty-state {
                        "No hay servicios configurados en el CMS actualmente. Configure el apartado \"Página de Servicios\"."
                    }
                } @else {
                    @for service in &data.services {
                        div.service-card {
                            div.icon-wrapper { (icons::icon(IconSet::Service, Some(&service.icon))) }
                            h3 { (service.title) }
                            p { (service.description) }
                            a.card-link href="/contacto" { "Solicitar auditoría →" }
                        }
                    }
                }
            }
            div.cta-section {
                h2 { (data.cta_title) }
                p { (data.cta_description) }
                a.btn-primary href=(data.cta_button_url) { (data.cta_button_text) " →" }
            }
        }
    };
    page(
        "Servicios | GenLatam",
        &view.chrome,
        &Brand::corporate(),
        None,
        main,
    )
}
