use maud::{Markup, html};

use crate::pages::ContactView;
use crate::ui::{ContactForm, FormStatus};

use super::{Brand, page};

pub const SUCCESS_MESSAGE: &str = "Mensaje enviado exitosamente. Nos comunicaremos contigo pronto.";

pub fn error_message(email: &str) -> String {
    format!(
        "Ocurrió un error al enviar tu mensaje. Por favor, intenta de nuevo o escríbenos directamente a {email}."
    )
}

/// `tel:` links keep only digits and `+`.
fn dial_string(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

pub fn render(view: &ContactView) -> Markup {
    let chrome = &view.chrome;
    let email = chrome.contact_email();
    let phone = chrome.contact_phone();
    let socials = chrome
        .config
        .as_ref()
        .map(|config| config.corporate_socials.as_slice())
        .unwrap_or_default();

    let main = html! {
        main.container.contact-page {
            div.contact-layout {
                div.info-col {
                    h1 { "Iniciar Conversación" }
                    p.subtitle {
                        "Nuestro equipo evalúa cada consulta con estricta confidencialidad. Ya sea para escalar una marca corporativa o gestionar una crisis de reputación, estamos listos para intervenir."
                    }
                    div.contact-methods {
                        a.method-card href={ "mailto:" (email) } {
                            span.method-label { "Email Directo" }
                            strong.method-value { (email) }
                        }
                        a.method-card href={ "tel:" (dial_string(phone)) } {
                            span.method-label { "Línea Ejecutiva" }
                            strong.method-value { (phone) }
                        }
                        div.method-card {
                            span.method-label { "Sede Global" }
                            strong.method-value { "Operaciones remotas LATAM / US" }
                        }
                    }
                    @if !socials.is_empty() {
                        div.social-section {
                            h3 { "Redes Corporativas" }
                            div.social-grid {
                                @for link in socials {
                                    a.social-link href=(link.url) target="_blank" rel="noopener noreferrer" {
                                        (link.platform) " ↗"
                                    }
                                }
                            }
                        }
                    }
                }
                div.form-col {
                    (contact_form(&view.form, email))
                }
            }
        }
    };
    page(
        "Contacto | GenLatam",
        chrome,
        &Brand::corporate(),
        None,
        main,
    )
}

/// The form in its current state. Inputs are disabled while a submission is
/// in flight.
pub fn contact_form(form: &ContactForm, email: &str) -> Markup {
    let status = form.status();
    let loading = status == FormStatus::Loading;
    let fields = &form.fields;

    html! {
        form.contact-form method="post" action="/contacto" data-status=(status_name(status)) {
            h2 { "Solicitud de Auditoría" }
            @match status {
                FormStatus::Success => div.success-message role="status" { (SUCCESS_MESSAGE) },
                FormStatus::Error => div.error-message role="alert" { (error_message(email)) },
                FormStatus::Idle | FormStatus::Loading => {},
            }
            div.form-group {
                label for="name" { "Nombre o Representante" }
                input #name type="text" name="nombre" required placeholder="Ingresa tu nombre..."
                    value=(fields.name) disabled[loading];
            }
            div.form-group {
                label for="company" { "Empresa / Entidad" }
                input #company type="text" name="empresa" placeholder="¿A qué empresa representas?"
                    value=(fields.company) disabled[loading];
            }
            div.form-group {
                label for="email" { "Correo Corporativo" }
                input #email type="email" name="email" required placeholder="nombre@tuempresa.com"
                    value=(fields.email) disabled[loading];
            }
            div.form-group {
                label for="message" { "Resumen del Caso" }
                textarea #message name="mensaje" rows="5" required
                    placeholder="Describe brevemente la situación o el objetivo a alcanzar..."
                    disabled[loading] { (fields.message) }
            }
            button.submit-button type="submit" disabled[loading] {
                @if loading { "Enviando..." } @else { "Enviar Mensaje Prioritario" }
            }
            p.form-disclaimer {
                "* Al enviar este formulario, aceptas que GenLatam procese estos datos para evaluar el caso. Las solicitudes serán procesadas a través del equipo en "
                strong { (email) }
            }
        }
    }
}

fn status_name(status: FormStatus) -> &'static str {
    match status {
        FormStatus::Idle => "idle",
        FormStatus::Loading => "loading",
        FormStatus::Success => "success",
        FormStatus::Error => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ContactFields;

    fn fields() -> ContactFields {
        ContactFields {
            name: "Ana".to_owned(),
            company: String::new(),
            email: "ana@acme.com".to_owned(),
            message: "Necesitamos ayuda".to_owned(),
        }
    }

    #[test]
    fn idle_form_has_no_message() {
        let html = contact_form(&ContactForm::new(), "contacto@genlatam.com").into_string();
        assert!(html.contains(r#"data-status="idle""#));
        assert!(!html.contains("success-message"));
        assert!(!html.contains("error-message"));
        assert!(html.contains("Enviar Mensaje Prioritario"));
    }

    #[test]
    fn loading_form_is_disabled() {
        let mut form = ContactForm::with_fields(fields());
        form.begin_submit();
        let html = contact_form(&form, "x@y.z").into_string();
        assert!(html.contains("Enviando..."));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn error_keeps_values_and_names_fallback_email() {
        let mut form = ContactForm::with_fields(fields());
        form.begin_submit();
        form.finish(false);
        let html = contact_form(&form, "b2b@genlatam.com").into_string();
        assert!(html.contains(&error_message("b2b@genlatam.com")));
        assert!(html.contains(r#"value="ana@acme.com""#));
        assert!(html.contains("Necesitamos ayuda"));
    }

    #[test]
    fn success_clears_values() {
        let mut form = ContactForm::with_fields(fields());
        form.begin_submit();
        form.finish(true);
        let html = contact_form(&form, "b2b@genlatam.com").into_string();
        assert!(html.contains(SUCCESS_MESSAGE));
        assert!(!html.contains("ana@acme.com"));
    }

    #[test]
    fn labels_point_at_their_inputs() {
        let html = contact_form(&ContactForm::new(), "x@y.z").into_string();
        for id in ["name", "company", "email", "message"] {
            assert!(html.contains(&format!(r#"for="{id}""#)), "{id}");
            assert!(html.contains(&format!(r#"id="{id}""#)), "{id}");
        }
    }

    #[test]
    fn phone_links_keep_digits_and_plus() {
        assert_eq!(dial_string("+1 (555) 000-0000"), "+15550000000");
    }
}
