//! Applies classified intents to the application through a [`Dispatcher`].
//!
//! Classification lives in [`crate::router`] and is pure; everything with a
//! side effect goes through the dispatcher trait so callers decide how state
//! is actually mutated.

mod action;
mod recording;

pub use action::{ActiveSheet, PluginSelection, StoreAction};
pub use recording::RecordingDispatcher;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::RouterConfig;
use crate::ports::{parse_server_ports, PORTS_ENV_VAR, PORTS_EXAMPLE};
use crate::router::{Intent, Router};
use crate::support_form::SupportGroupRegistry;

/// Application-side collaborator that owns state and performs imports.
pub trait Dispatcher {
    fn dispatch(&mut self, action: StoreAction);

    /// Sheet currently shown, if any.
    fn active_sheet(&self) -> Option<ActiveSheet>;

    /// Fetches `url` and feeds it to the import pipeline.
    fn import_from_url(&mut self, url: &str) -> Result<()>;

    /// Imports a file the OS asked the application to open.
    fn import_file(&mut self, path: &Path) -> Result<()>;
}

/// Message delivered by the host process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The registered protocol handler was invoked with this URI.
    ProtocolHandler(String),
    /// The OS asked the application to open this file.
    OpenFile(PathBuf),
}

/// Router plus the registries needed to act on its intents.
#[derive(Debug, Clone, Default)]
pub struct DeepLinkHandler {
    router: Router,
    support_groups: SupportGroupRegistry,
}

impl DeepLinkHandler {
    pub fn new(router: Router, support_groups: SupportGroupRegistry) -> Self {
        Self {
            router,
            support_groups,
        }
    }

    pub fn from_config(cfg: &RouterConfig) -> Self {
        Self::new(Router::new(&cfg.scheme), cfg.support_groups.clone())
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Handles one host event; failures are logged, never returned.
    pub fn handle_event<D: Dispatcher + ?Sized>(&self, event: HostEvent, dispatcher: &mut D) {
        match event {
            HostEvent::ProtocolHandler(uri) => {
                let intent = self.router.classify(&uri);
                tracing::debug!("deep link {} classified as {}", uri, intent.kind());
                apply_intent(intent, &self.support_groups, dispatcher);
            }
            HostEvent::OpenFile(path) => {
                if let Err(e) = dispatcher.import_file(&path) {
                    tracing::error!("failed to import file {}: {:#}", path.display(), e);
                }
            }
        }
    }
}

/// Performs the side effects `intent` asks for.
///
/// Missing parameters are validated here: an import without a URL or a
/// support form naming no known group dispatches nothing.
pub fn apply_intent<D: Dispatcher + ?Sized>(
    intent: Intent,
    support_groups: &SupportGroupRegistry,
    dispatcher: &mut D,
) {
    match intent {
        Intent::Import { url } => match url.filter(|u| !u.is_empty()) {
            Some(url) => import_from_url(&url, dispatcher),
            None => tracing::warn!("import deep link without url; ignoring"),
        },
        Intent::SupportForm { form_key } => match support_groups.find(form_key.as_deref()) {
            Some(group) => {
                tracing::info!("opening support form for group {}", group.name);
                dispatcher.dispatch(StoreAction::OpenSupportForm {
                    group: group.name.clone(),
                });
            }
            None => tracing::debug!("no support group matches form={:?}", form_key),
        },
        Intent::Login { token } => {
            tracing::info!("login deep link (token present: {})", token.is_some());
            dispatcher.dispatch(StoreAction::SetPastedToken(token));
            if !matches!(dispatcher.active_sheet(), Some(ActiveSheet::SignIn)) {
                dispatcher.dispatch(StoreAction::SetActiveSheet(ActiveSheet::SignIn));
            }
        }
        Intent::PluginDeepLink {
            app_id,
            plugin_id,
            payload,
        } => {
            tracing::info!("selecting plugin {} on {}", plugin_id, app_id);
            dispatcher.dispatch(StoreAction::SelectPlugin(PluginSelection {
                selected_app: app_id,
                selected_plugin: plugin_id,
                deep_link_payload: payload,
            }));
        }
        Intent::Unrecognized => tracing::debug!("ignoring unrecognized deep link"),
    }
}

fn import_from_url<D: Dispatcher + ?Sized>(url: &str, dispatcher: &mut D) {
    dispatcher.dispatch(StoreAction::SetDownloadingImportData(true));
    if let Err(e) = dispatcher.import_from_url(url) {
        tracing::error!("import from {} failed: {:#}", url, e);
    }
    dispatcher.dispatch(StoreAction::SetDownloadingImportData(false));
}

/// Applies a `FLIPPER_PORTS`-style override, if one is given.
///
/// Returns `true` when ports were dispatched. A malformed value is logged and
/// ignored.
pub fn apply_port_override<D: Dispatcher + ?Sized>(value: Option<&str>, dispatcher: &mut D) -> bool {
    let Some(value) = value else {
        return false;
    };
    match parse_server_ports(value) {
        Ok(ports) => {
            tracing::info!(
                "using server ports insecure={} secure={}",
                ports.insecure,
                ports.secure
            );
            dispatcher.dispatch(StoreAction::SetServerPorts(ports));
            true
        }
        Err(e) => {
            tracing::error!(
                "ignoring malformed {} env variable {:?} ({}); expected format: {:?}",
                PORTS_ENV_VAR,
                value,
                e,
                PORTS_EXAMPLE
            );
            false
        }
    }
}
