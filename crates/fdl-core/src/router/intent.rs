//! Classified meaning of a deep link.

use serde::{Deserialize, Serialize};

/// What an incoming deep link asks the application to do.
///
/// Optional parameters stay `None` when the URI omits them; deciding whether
/// that is acceptable is left to whoever applies the intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "kebab-case")]
pub enum Intent {
    /// `flipper://<any>/import?url=...` or an empty path.
    Import { url: Option<String> },
    /// `flipper://<any>/support-form?form=...`
    SupportForm { form_key: Option<String> },
    /// `flipper://<any>/login?token=...`
    Login { token: Option<String> },
    /// Legacy `flipper://<client>/<pluginId>/<payload>` link.
    PluginDeepLink {
        app_id: String,
        plugin_id: String,
        payload: Option<String>,
    },
    Unrecognized,
}

impl Intent {
    /// Short name used in logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::Import { .. } => "import",
            Intent::SupportForm { .. } => "support-form",
            Intent::Login { .. } => "login",
            Intent::PluginDeepLink { .. } => "plugin-deep-link",
            Intent::Unrecognized => "unrecognized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_intent_tag() {
        let intent = Intent::PluginDeepLink {
            app_id: "clientA".to_string(),
            plugin_id: "pluginB".to_string(),
            payload: None,
        };
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["intent"], "plugin-deep-link");
        assert_eq!(json["app_id"], "clientA");
        assert!(json["payload"].is_null());

        let json = serde_json::to_value(Intent::Unrecognized).unwrap();
        assert_eq!(json, serde_json::json!({ "intent": "unrecognized" }));
    }

    #[test]
    fn kind_names() {
        assert_eq!(Intent::Import { url: None }.kind(), "import");
        assert_eq!(Intent::Login { token: None }.kind(), "login");
        assert_eq!(Intent::Unrecognized.kind(), "unrecognized");
    }
}
