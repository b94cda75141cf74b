use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use beamcast::config::{Config, FormsConfig, ObservabilityConfig, ServerConfig};
use beamcast::routes::{self, AppState};
use beamcast_contact::{Coordinator, FormsClient};

/// Builds the full router with contact submissions pointed at
/// `forms_endpoint` (usually a wiremock server).
pub fn test_app(forms_endpoint: &str) -> Router {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        forms: FormsConfig {
            endpoint: forms_endpoint.to_string(),
            ..FormsConfig::default()
        },
        observability: ObservabilityConfig::default(),
    };

    let client = FormsClient::new(
        &config.forms.endpoint,
        &config.forms.form_name,
        Duration::from_secs(2),
    )
    .expect("forms client builds");

    let state = AppState {
        contact: Arc::new(Coordinator::new(client)),
        config,
    };

    routes::router(state)
}
