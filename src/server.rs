//! HTTP surface of the site.

use axum::Router;
use axum::extract::{Form, Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq as _;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::pages::{self, Backends, Chrome};
use crate::render;
use crate::ui::ContactFields;

pub const REVALIDATE_SECRET_HEADER: &str = "x-revalidate-secret";

const SITE_CSS: &str = include_str!("../static/site.css");
const COUNTER_JS: &str = include_str!("../static/counter.js");

#[derive(Debug, Clone)]
pub struct AppState {
    pub backends: Backends,
    /// `None` disables `/api/revalidate`.
    pub revalidate_secret: Option<String>,
}

impl AppState {
    pub fn new(backends: Backends, settings: &Settings) -> Self {
        Self {
            backends,
            revalidate_secret: settings.revalidate_secret.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("page not found")]
    NotFound,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                Html(render::not_found(&Chrome::bare()).into_string()),
            )
                .into_response(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/", get(home))
        .route("/servicios", get(services))
        .route("/casos", get(cases))
        .route("/casos/:slug", get(case_detail))
        .route("/guarimba", get(community))
        .route("/exit", get(podcast))
        .route("/contacto", get(contact).post(submit_contact))
        .route("/api/revalidate", post(revalidate))
        .route("/static/site.css", get(stylesheet))
        .route("/static/counter.js", get(counter_script))
        .fallback(|| async { PageError::NotFound })
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn home(State(state): State<AppState>) -> Html<String> {
    let view = pages::home(&state.backends).await;
    Html(render::home::render(&view).into_string())
}

async fn services(State(state): State<AppState>) -> Html<String> {
    let view = pages::services(&state.backends).await;
    Html(render::services::render(&view).into_string())
}

async fn cases(State(state): State<AppState>) -> Html<String> {
    let view = pages::cases(&state.backends).await;
    Html(render::cases::render_list(&view).into_string())
}

async fn case_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, PageError> {
    let view = pages::case_detail(&state.backends, &slug)
        .await
        .ok_or(PageError::NotFound)?;
    Ok(Html(render::cases::render_detail(&view).into_string()))
}

async fn community(State(state): State<AppState>) -> Html<String> {
    let view = pages::community(&state.backends).await;
    Html(render::community::render(&view).into_string())
}

async fn podcast(State(state): State<AppState>) -> Html<String> {
    let view = pages::podcast(&state.backends).await;
    Html(render::podcast::render(&view).into_string())
}

async fn contact(State(state): State<AppState>) -> Html<String> {
    let view = pages::contact(&state.backends).await;
    Html(render::contact::render(&view).into_string())
}

async fn submit_contact(
    State(state): State<AppState>,
    Form(fields): Form<ContactFields>,
) -> Html<String> {
    let view = pages::submit_contact(&state.backends, fields).await;
    tracing::info!(status = ?view.form.status(), "contact form submitted");
    Html(render::contact::render(&view).into_string())
}

#[derive(Debug, Deserialize)]
struct RevalidateRequest {
    tag: String,
}

#[derive(Debug, Serialize)]
struct RevalidateResponse {
    tag: String,
    evicted: usize,
}

/// Drops every cached response carrying `tag`, so the next request refetches
/// it. Meant to be called from a CMS publish webhook.
async fn revalidate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<RevalidateRequest>,
) -> Result<Json<RevalidateResponse>, StatusCode> {
    let Some(secret) = state.revalidate_secret.as_deref() else {
        return Err(StatusCode::NOT_FOUND);
    };
    let authorized = headers
        .get(REVALIDATE_SECRET_HEADER)
        .is_some_and(|provided| bool::from(provided.as_bytes().ct_eq(secret.as_bytes())));
    if !authorized {
        tracing::warn!("revalidate rejected: bad secret");
        return Err(StatusCode::UNAUTHORIZED);
    }

    let evicted = state.backends.cms.cache().invalidate_tag(&req.tag).await;
    tracing::info!(tag = %req.tag, evicted, "cache tag revalidated");
    Ok(Json(RevalidateResponse {
        tag: req.tag,
        evicted,
    }))
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}

async fn counter_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        COUNTER_JS,
    )
}
