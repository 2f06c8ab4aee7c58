//! Store actions emitted when applying an intent.

use serde::{Deserialize, Serialize};

use crate::ports::ServerPorts;

/// Modal sheet currently shown by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveSheet {
    SignIn,
    Other(String),
}

/// Target of a legacy plugin deep link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSelection {
    pub selected_app: String,
    pub selected_plugin: String,
    pub deep_link_payload: Option<String>,
}

/// State change requested from the action dispatcher.
///
/// Serialized as `{"type": ..., "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum StoreAction {
    /// Toggles the "downloading import data" indicator.
    SetDownloadingImportData(bool),
    /// Runs the support-form deep-link handler of the named group.
    OpenSupportForm { group: String },
    SetPastedToken(Option<String>),
    SetActiveSheet(ActiveSheet),
    SelectPlugin(PluginSelection),
    SetServerPorts(ServerPorts),
}
