//! Dry-run commands that apply host events to a recording dispatcher.

use anyhow::Result;
use fdl_core::dispatch::{apply_port_override, ActiveSheet, RecordingDispatcher};
use fdl_core::ports::PORTS_ENV_VAR;
use fdl_core::{DeepLinkHandler, HostEvent};
use std::path::PathBuf;

/// `fdl dispatch <uri>`: print the actions a deep link would dispatch.
///
/// A `FLIPPER_PORTS` override is applied first, as on application startup.
pub fn run_dispatch(handler: &DeepLinkHandler, uri: &str, signed_in: bool) -> Result<()> {
    let mut dispatcher = if signed_in {
        RecordingDispatcher::with_active_sheet(ActiveSheet::SignIn)
    } else {
        RecordingDispatcher::new()
    };
    let ports_override = std::env::var(PORTS_ENV_VAR).ok();
    apply_port_override(ports_override.as_deref(), &mut dispatcher);
    handler.handle_event(HostEvent::ProtocolHandler(uri.to_string()), &mut dispatcher);
    print_recorded(&dispatcher)
}

/// `fdl open-file <path>`: show which file would be imported.
pub fn run_open_file(handler: &DeepLinkHandler, path: PathBuf) -> Result<()> {
    let mut dispatcher = RecordingDispatcher::new();
    handler.handle_event(HostEvent::OpenFile(path), &mut dispatcher);
    print_recorded(&dispatcher)
}

fn print_recorded(dispatcher: &RecordingDispatcher) -> Result<()> {
    for url in &dispatcher.imported_urls {
        println!("import url: {url}");
    }
    for path in &dispatcher.imported_files {
        println!("import file: {}", path.display());
    }
    for action in &dispatcher.actions {
        println!("{}", serde_json::to_string(action)?);
    }
    if dispatcher.actions.is_empty()
        && dispatcher.imported_urls.is_empty()
        && dispatcher.imported_files.is_empty()
    {
        println!("(no actions)");
    }
    Ok(())
}
