use tracing::warn;

const DEFAULT_UPSTREAM_BASE_URL: &str = "https://discord.com/api/v9";

/// Runtime configuration, read once from the environment at startup
/// and injected into the app state. Immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub upstream_base_url: String,
    pub port: u16
}

impl Config {

    pub fn from_env() -> Self {

        // a missing token never blocks startup; upstream calls will
        // simply come back unauthorized
        let token = std::env::var("STATUS_API_TOKEN")
            .unwrap_or_default();

        if token.is_empty() {
            warn!("STATUS_API_TOKEN is not set, upstream calls will fail");
        }

        let upstream_base_url = std::env::var("UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Config { token, upstream_base_url, port }

    }

}
