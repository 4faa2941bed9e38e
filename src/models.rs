use serde::{Deserialize, Serialize};

// ---- inbound / outbound shapes ----

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub new_status: String
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: bool
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str
}

// ---- upstream settings API shapes ----

#[derive(Debug, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub custom_status: Option<CustomStatus>
}

#[derive(Debug, Deserialize)]
pub struct CustomStatus {
    #[serde(default)]
    pub text: Option<String>
}

impl UserSettings {
    /// The current custom status text, or empty string when the user
    /// has none set (missing or null `custom_status` / `text`).
    pub fn status_text(self) -> String {
        self.custom_status
            .and_then(|cs| cs.text)
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct SettingsPatch {
    custom_status: CustomStatusPatch
}

#[derive(Debug, Serialize)]
struct CustomStatusPatch {
    text: String,
    // always serialized as an explicit null: the new status never expires
    expires_at: Option<String>
}

impl SettingsPatch {
    pub fn new(text: &str) -> Self {
        SettingsPatch {
            custom_status: CustomStatusPatch {
                text: text.to_string(),
                expires_at: None
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use serde_json::json;

    #[test]
    fn test_patch_body_shape() {

        let patch = SettingsPatch::new("Away");
        let value = serde_json::to_value(&patch).expect("Failed to serialize patch");

        assert_eq!(value, json!({
            "custom_status": { "text": "Away", "expires_at": null }
        }));

    }

    #[test]
    fn test_status_text_defaults_to_empty() {

        let settings: UserSettings = serde_json::from_value(json!({}))
            .expect("Failed to parse settings");
        assert_eq!(settings.status_text(), "");

        let settings: UserSettings = serde_json::from_value(json!({
            "custom_status": null
        })).expect("Failed to parse settings");
        assert_eq!(settings.status_text(), "");

        let settings: UserSettings = serde_json::from_value(json!({
            "custom_status": { "text": null }
        })).expect("Failed to parse settings");
        assert_eq!(settings.status_text(), "");

    }

    #[test]
    fn test_status_text_present() {

        let settings: UserSettings = serde_json::from_value(json!({
            "custom_status": { "text": "Busy", "emoji_name": "smile" }
        })).expect("Failed to parse settings");

        assert_eq!(settings.status_text(), "Busy");

    }

}
