use std::sync::Arc;

use axum::{Router, response::IntoResponse, routing::get};
use tower_http::trace::TraceLayer;

use crate::template::{NotFoundTemplate, Template};
use beamcast_contact::Coordinator;

mod contact;
mod docs;
mod faq;
mod health;
mod index;

pub use crate::assets::AssetsService;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact: Arc<Coordinator>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(axum::http::StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/docs", get(docs::page))
        .route("/faq", get(faq::page))
        .route("/contact", get(contact::page).post(contact::action))
        .fallback(fallback)
        .nest_service("/static", AssetsService::new())
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
