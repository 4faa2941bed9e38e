use reqwest::Client;
use thiserror::Error;
use crate::models::{SettingsPatch, UserSettings};

const SETTINGS_PATH: &str = "/users/@me/settings";

const UPSTREAM_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String }
}

// the settings client owns the credential and the upstream base URL,
// both fixed at startup. The http client is shared across all requests.
#[derive(Clone)]
pub struct SettingsClient {
    http: Client,
    base_url: String,
    token: String
}

impl SettingsClient {

    pub fn new(http: Client, base_url: String, token: String) -> Self {

        SettingsClient { http, base_url, token }

    }

    fn settings_url(&self) -> String {

        format!("{}{}", self.base_url, SETTINGS_PATH)

    }

    pub async fn fetch_settings(&self) -> Result<UserSettings, UpstreamError> {

        let response = self.http
            .get(self.settings_url())
            .timeout(UPSTREAM_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await?;

        let settings = Self::check_status(response)
            .await?
            .json()
            .await?;

        Ok(settings)

    }

    pub async fn update_custom_status(&self, text: &str) -> Result<(), UpstreamError> {

        let response = self.http
            .patch(self.settings_url())
            .timeout(UPSTREAM_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&SettingsPatch::new(text))
            .send()
            .await?;

        Self::check_status(response).await?;

        Ok(())

    }

    // keep the error body around for the log sink; it is never
    // forwarded to the inbound caller
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, UpstreamError> {

        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(UpstreamError::Rejected { status: status.as_u16(), body })
        }

    }

}
