//! Deep-link classification.
//!
//! Turns a raw `flipper://` URI into an [`Intent`]. Classification is pure and
//! total: malformed input and foreign schemes become [`Intent::Unrecognized`]
//! rather than errors, and nothing here touches application state.

mod intent;
mod legacy;
mod normalize;

pub use intent::Intent;

use normalize::{normalize_path, query_param};
use url::Url;

/// Scheme the desktop client registers with the OS.
pub const DEFAULT_SCHEME: &str = "flipper";

const IMPORT_PATH: &str = "import";
const SUPPORT_FORM_PATH: &str = "support-form";
const LOGIN_PATH: &str = "login";

/// Classifier bound to one registered URI scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    scheme: String,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEME)
    }
}

impl Router {
    /// Scheme comparison is case-insensitive for parsed URIs, so it is stored lowercased.
    pub fn new(scheme: &str) -> Self {
        Self {
            scheme: scheme.to_ascii_lowercase(),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Classifies `uri`.
    ///
    /// Keyword paths (`import`, `support-form`, `login`, or an empty path) are
    /// checked first against the parsed URL path; only when none applies is the
    /// legacy `<client>/<pluginId>/<payload>` form tried.
    pub fn classify(&self, uri: &str) -> Intent {
        let parsed = match Url::parse(uri) {
            Ok(u) => u,
            Err(_) => return Intent::Unrecognized,
        };
        if parsed.scheme() != self.scheme {
            return Intent::Unrecognized;
        }

        match normalize_path(parsed.path()).as_str() {
            "" | IMPORT_PATH => {
                return Intent::Import {
                    url: query_param(&parsed, "url"),
                }
            }
            SUPPORT_FORM_PATH => {
                return Intent::SupportForm {
                    form_key: query_param(&parsed, "form"),
                }
            }
            LOGIN_PATH => {
                return Intent::Login {
                    token: query_param(&parsed, "token"),
                }
            }
            _ => {}
        }

        let mut segments = self.decompose_path(uri).into_iter();
        match (segments.next(), segments.next()) {
            (Some(app_id), Some(plugin_id)) => Intent::PluginDeepLink {
                app_id,
                plugin_id,
                payload: segments.next(),
            },
            _ => Intent::Unrecognized,
        }
    }

    /// Legacy decomposition for this router's scheme; see [`decompose_path`].
    pub fn decompose_path(&self, uri: &str) -> Vec<String> {
        legacy::decompose_path(&self.scheme, uri)
    }
}

/// Classifies `uri` against [`DEFAULT_SCHEME`].
pub fn classify(uri: &str) -> Intent {
    Router::default().classify(uri)
}

/// Decomposes a legacy `flipper://<client>/<pluginId>/<payload>` URI into its
/// percent-decoded, non-empty parts.
pub fn decompose_path(uri: &str) -> Vec<String> {
    legacy::decompose_path(DEFAULT_SCHEME, uri)
}
