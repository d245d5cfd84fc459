//! View-models for the CMS collections.
//!
//! Field names on the wire are the CMS's Spanish camelCase attributes. Every
//! struct defaults missing or `null` attributes so a half-filled entry still
//! renders; only a type mismatch makes a response undecodable.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Media {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alternative_text: Option<String>,
}

/// A link to one social platform. `platform` is free text; unknown names fall
/// back to a generic icon at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub id: i64,
    #[serde(rename = "plataforma", deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    #[serde(rename = "emailContactoB2B")]
    pub contact_email: Option<String>,
    #[serde(rename = "telefonoB2B")]
    pub contact_phone: Option<String>,
    #[serde(rename = "linkSoporteComunidad")]
    pub community_support_link: Option<String>,
    #[serde(rename = "canalYoutubePrincipal")]
    pub main_youtube_channel: Option<String>,
    #[serde(rename = "redesCorporativas", deserialize_with = "null_as_default")]
    pub corporate_socials: Vec<SocialLink>,
    #[serde(rename = "redesComunidad", deserialize_with = "null_as_default")]
    pub community_socials: Vec<SocialLink>,
    #[serde(rename = "bannerActivo")]
    pub banner_active: Option<bool>,
    #[serde(rename = "bannerTexto")]
    pub banner_text: Option<String>,
    #[serde(rename = "textoFooter")]
    pub footer_text: Option<String>,
    pub logo: Option<Media>,
}

impl GlobalConfig {
    /// Banner text, only when the banner is switched on and has copy.
    pub fn active_banner(&self) -> Option<&str> {
        match (self.banner_active, self.banner_text.as_deref()) {
            (Some(true), Some(text)) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    pub id: i64,
    #[serde(rename = "valor", deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(rename = "etiqueta", deserialize_with = "null_as_default")]
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceCard {
    pub id: i64,
    #[serde(rename = "titulo", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "descripcion", deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "icono", deserialize_with = "null_as_default")]
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeContent {
    #[serde(rename = "heroTitulo", deserialize_with = "null_as_default")]
    pub hero_title: String,
    #[serde(rename = "heroSubtitulo", deserialize_with = "null_as_default")]
    pub hero_subtitle: String,
    #[serde(rename = "heroCtaTexto", deserialize_with = "null_as_default")]
    pub hero_cta_text: String,
    #[serde(rename = "heroCtaUrl", deserialize_with = "null_as_default")]
    pub hero_cta_url: String,
    #[serde(rename = "metricasDestacadas", deserialize_with = "null_as_default")]
    pub metrics: Vec<Metric>,
    #[serde(rename = "capacidades", deserialize_with = "null_as_default")]
    pub capabilities: Vec<ServiceCard>,
    #[serde(rename = "etiquetaSeccionMedios")]
    pub media_section_label: Option<String>,
    #[serde(rename = "tituloSeccionMedios")]
    pub media_section_title: Option<String>,
    #[serde(rename = "parrafoSeccionMedios")]
    pub media_section_body: Option<String>,
    #[serde(rename = "textoBotonGuarimba")]
    pub community_button_text: Option<String>,
    #[serde(rename = "urlBotonGuarimba")]
    pub community_button_url: Option<String>,
    #[serde(rename = "textoLinkExit")]
    pub podcast_link_text: Option<String>,
    #[serde(rename = "urlLinkExit")]
    pub podcast_link_url: Option<String>,
    #[serde(rename = "fondoHome")]
    pub background: Option<Media>,
    #[serde(rename = "colorFondoHome")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesPage {
    #[serde(rename = "etiquetaHero", deserialize_with = "null_as_default")]
    pub hero_label: String,
    #[serde(rename = "tituloHero", deserialize_with = "null_as_default")]
    pub hero_title: String,
    #[serde(rename = "subtituloHero", deserialize_with = "null_as_default")]
    pub hero_subtitle: String,
    #[serde(rename = "servicios", deserialize_with = "null_as_default")]
    pub services: Vec<ServiceCard>,
    #[serde(rename = "tituloCta", deserialize_with = "null_as_default")]
    pub cta_title: String,
    #[serde(rename = "descripcionCta", deserialize_with = "null_as_default")]
    pub cta_description: String,
    #[serde(rename = "textoBotonCta", deserialize_with = "null_as_default")]
    pub cta_button_text: String,
    #[serde(rename = "urlBotonCta", deserialize_with = "null_as_default")]
    pub cta_button_url: String,
}

impl ServicesPage {
    /// Copy shown while the services page has not been set up in the CMS.
    pub fn fallback() -> Self {
        Self {
            hero_label: "Experiencia B2B".to_owned(),
            hero_title: "Consultoría Estratégica & Medios".to_owned(),
            hero_subtitle: "Soluciones especializadas para corporaciones, figuras públicas y marcas que buscan dominar su nicho de mercado con autoridad narrativa.".to_owned(),
            services: Vec::new(),
            cta_title: "¿Un caso especial de Alta Complejidad?".to_owned(),
            cta_description: "Evaluamos proyectos de gran escala, crisis mediática y estrategias de penetración de mercado a nivel Latam.".to_owned(),
            cta_button_text: "Hablar con un Socio".to_owned(),
            cta_button_url: "/contacto".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterProfile {
    pub id: i64,
    #[serde(rename = "nombre", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "rol")]
    pub role: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "fotoPerfil")]
    pub photo: Option<Media>,
    #[serde(rename = "enlaceX")]
    pub x_link: Option<String>,
    #[serde(rename = "enlaceInstagram")]
    pub instagram_link: Option<String>,
}

impl PresenterProfile {
    /// Upper-cased first letter of the name, used when there is no photo.
    pub fn initial(&self) -> Option<String> {
        self.name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityHub {
    #[serde(rename = "tituloPrincipal", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "mensajeComunidad", deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(rename = "youtubeChannelId")]
    pub youtube_channel_id: Option<String>,
    #[serde(rename = "redesComunidad", deserialize_with = "null_as_default")]
    pub socials: Vec<SocialLink>,
    #[serde(rename = "mostrarBotonApoyo", deserialize_with = "null_as_default")]
    pub show_support_button: bool,
    #[serde(rename = "textoBotonApoyo")]
    pub support_button_text: Option<String>,
    #[serde(rename = "linkBotonApoyo")]
    pub support_button_link: Option<String>,
    #[serde(rename = "perfilesPresentadores", deserialize_with = "null_as_default")]
    pub presenters: Vec<PresenterProfile>,
    #[serde(rename = "invitadoEspecial")]
    pub special_guest: Option<PresenterProfile>,
    pub logo: Option<Media>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodcastCampaign {
    #[serde(rename = "tituloPrincipal", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "badgeTexto")]
    pub badge_text: Option<String>,
    #[serde(rename = "badgeIcono")]
    pub badge_icon: Option<String>,
    /// Trusted HTML authored in the CMS.
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "youtubeChannelId")]
    pub youtube_channel_id: Option<String>,
    #[serde(rename = "anfitrion")]
    pub host: Option<PresenterProfile>,
    #[serde(rename = "invitadoEspecial")]
    pub special_guest: Option<PresenterProfile>,
    #[serde(rename = "redesSociales", deserialize_with = "null_as_default")]
    pub socials: Vec<SocialLink>,
    pub logo: Option<Media>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthRecord {
    pub id: i64,
    #[serde(rename = "nombreOpcional")]
    pub display_name: Option<String>,
    #[serde(rename = "youtubeChannelId", deserialize_with = "null_as_default")]
    pub youtube_channel_id: String,
    /// Subscriber count recorded when the campaign started. Editors type it
    /// as text, so it may arrive as a string or a number.
    #[serde(rename = "suscriptoresAntes", deserialize_with = "string_or_number")]
    pub baseline_subscribers: Option<String>,
}

/// Long-form case body: markdown text, or the CMS's structured block format
/// which this site does not render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaseBody {
    Markdown(String),
    Unsupported(serde_json::Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseStudy {
    pub id: i64,
    #[serde(rename = "documentId", deserialize_with = "null_as_default")]
    pub document_id: String,
    #[serde(rename = "titulo", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(rename = "resumen", deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(rename = "actorPrincipal")]
    pub lead_actor: Option<String>,
    #[serde(rename = "fechaCampana")]
    pub campaign_date: Option<String>,
    #[serde(rename = "contenidoCompleto", deserialize_with = "present_body")]
    pub body: Option<CaseBody>,
    #[serde(rename = "metricasLogradas", deserialize_with = "null_as_default")]
    pub achieved_metrics: Vec<Metric>,
    #[serde(rename = "crecimientoYoutube", deserialize_with = "null_as_default")]
    pub channel_growth: Vec<GrowthRecord>,
    #[serde(rename = "imagenPortada")]
    pub cover: Option<Media>,
    #[serde(rename = "destacadoEnHome")]
    pub featured_on_home: Option<bool>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn present_body<'de, D>(deserializer: D) -> Result<Option<CaseBody>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => None,
        Some(serde_json::Value::String(s)) => Some(CaseBody::Markdown(s)),
        Some(other) => Some(CaseBody::Unsupported(other)),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn case_study_decodes_cms_attributes() {
        let raw = json!({
            "id": 7,
            "documentId": "abc123",
            "titulo": "Campaña Norte",
            "slug": "campana-norte",
            "resumen": "Resumen",
            "actorPrincipal": null,
            "fechaCampana": "2024-03-15",
            "contenidoCompleto": "## Contexto\nTexto",
            "metricasLogradas": [{"id": 1, "valor": "+2M", "etiqueta": "Alcance"}],
            "crecimientoYoutube": [
                {"id": 3, "nombreOpcional": null, "youtubeChannelId": "UC1", "suscriptoresAntes": "1000"},
                {"id": 4, "youtubeChannelId": "UC2", "suscriptoresAntes": 2500}
            ],
            "imagenPortada": null
        });

        let case: CaseStudy = serde_json::from_value(raw).unwrap();
        assert_eq!(case.title, "Campaña Norte");
        assert_eq!(case.lead_actor, None);
        assert_eq!(
            case.body,
            Some(CaseBody::Markdown("## Contexto\nTexto".to_owned()))
        );
        assert_eq!(case.achieved_metrics[0].label, "Alcance");
        assert_eq!(
            case.channel_growth[0].baseline_subscribers.as_deref(),
            Some("1000")
        );
        assert_eq!(
            case.channel_growth[1].baseline_subscribers.as_deref(),
            Some("2500")
        );
        assert!(case.cover.is_none());
    }

    #[test]
    fn null_text_attributes_decode_as_empty() {
        let raw = json!([
            {"slug": "completo", "titulo": "Completo", "resumen": "ok"},
            {
                "slug": "a-medias",
                "titulo": "A medias",
                "resumen": null,
                "documentId": null,
                "metricasLogradas": [{"id": 1, "valor": null, "etiqueta": "Alcance"}],
                "crecimientoYoutube": [{"id": 2, "youtubeChannelId": null}]
            }
        ]);
        let cases: Vec<CaseStudy> = serde_json::from_value(raw).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[1].summary, "");
        assert_eq!(cases[1].achieved_metrics[0].value, "");
        assert_eq!(cases[1].channel_growth[0].youtube_channel_id, "");

        let home: HomeContent =
            serde_json::from_value(json!({"heroTitulo": "Hola", "heroCtaUrl": null})).unwrap();
        assert_eq!(home.hero_title, "Hola");
        assert_eq!(home.hero_cta_url, "");

        let hub: CommunityHub =
            serde_json::from_value(json!({"mostrarBotonApoyo": null, "tituloPrincipal": null}))
                .unwrap();
        assert!(!hub.show_support_button);
        assert_eq!(hub.title, "");
    }

    #[test]
    fn mismatched_types_are_still_errors() {
        let raw = json!({"heroTitulo": 5});
        assert!(serde_json::from_value::<HomeContent>(raw).is_err());
    }

    #[test]
    fn block_content_is_kept_as_unsupported() {
        let raw = json!({
            "slug": "x",
            "contenidoCompleto": [{"type": "paragraph", "children": []}]
        });
        let case: CaseStudy = serde_json::from_value(raw).unwrap();
        assert!(matches!(case.body, Some(CaseBody::Unsupported(_))));
    }

    #[test]
    fn null_collections_become_empty() {
        let raw = json!({"redesCorporativas": null, "bannerActivo": true, "bannerTexto": "Hoy"});
        let config: GlobalConfig = serde_json::from_value(raw).unwrap();
        assert!(config.corporate_socials.is_empty());
        assert_eq!(config.active_banner(), Some("Hoy"));
    }

    #[test]
    fn banner_requires_flag_and_text() {
        let mut config = GlobalConfig {
            banner_active: Some(false),
            banner_text: Some("Aviso".to_owned()),
            ..GlobalConfig::default()
        };
        assert_eq!(config.active_banner(), None);
        config.banner_active = Some(true);
        config.banner_text = Some("   ".to_owned());
        assert_eq!(config.active_banner(), None);
    }

    #[test]
    fn presenter_initial_is_uppercased() {
        let profile = PresenterProfile {
            name: "ñandú".to_owned(),
            ..PresenterProfile::default()
        };
        assert_eq!(profile.initial().as_deref(), Some("Ñ"));
        assert_eq!(PresenterProfile::default().initial(), None);
    }
}
