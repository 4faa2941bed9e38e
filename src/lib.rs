pub mod client;
pub mod config;
pub mod cors;
pub mod handlers;
pub mod models;

use axum::{middleware, routing::{get, post}, Router};
use reqwest::Client;

use client::SettingsClient;
use config::Config;

// share the settings client with all the handlers.
// The http client inside it is shared to avoid creating a new
// HTTP client for every request.
#[derive(Clone)]
pub struct AppState {
    pub settings_client: SettingsClient
}

impl AppState {

    pub fn new(config: Config) -> Self {

        let http_client = Client::new();

        AppState {
            settings_client: SettingsClient::new(
                http_client,
                config.upstream_base_url,
                config.token
            )
        }

    }

}

pub fn app(state: AppState) -> Router {

    // the CORS layer wraps the whole router so pre-flight requests and
    // fallback responses get the same treatment as routed ones.
    // Per-route fallbacks keep a wrong method on a known path at 404,
    // where axum would otherwise answer 405
    Router::new()
        .route("/status", get(handlers::get_status).fallback(handlers::not_found))
        .route("/update", post(handlers::post_update).fallback(handlers::not_found))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(cors::cors))
        .with_state(state)

}
