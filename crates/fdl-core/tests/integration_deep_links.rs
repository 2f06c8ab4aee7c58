//! Integration test: a sequence of host events through a configured handler.

use fdl_core::config::RouterConfig;
use fdl_core::dispatch::{ActiveSheet, PluginSelection, RecordingDispatcher};
use fdl_core::{DeepLinkHandler, HostEvent, StoreAction};
use std::path::PathBuf;

fn config() -> RouterConfig {
    toml::from_str(
        r#"
            [[support_groups]]
            name = "Litho"
            deeplink_suffix = "litho"
        "#,
    )
    .unwrap()
}

#[test]
fn event_stream_produces_expected_actions() {
    let handler = DeepLinkHandler::from_config(&config());
    let mut dispatcher = RecordingDispatcher::new();

    let events = [
        HostEvent::ProtocolHandler("flipper://x/login?token=abc".to_string()),
        HostEvent::ProtocolHandler("flipper://x/login?token=def".to_string()),
        HostEvent::ProtocolHandler("flipper://x/support-form?form=Litho".to_string()),
        HostEvent::ProtocolHandler("flipper://MyApp/Layout/%7B%22id%22%3A7%7D".to_string()),
        HostEvent::ProtocolHandler("https://example.com/ignored".to_string()),
        HostEvent::OpenFile(PathBuf::from("/tmp/trace.flipper")),
    ];
    for event in events {
        handler.handle_event(event, &mut dispatcher);
    }

    assert_eq!(
        dispatcher.actions,
        [
            StoreAction::SetPastedToken(Some("abc".to_string())),
            StoreAction::SetActiveSheet(ActiveSheet::SignIn),
            // Sheet already shown by the first login.
            StoreAction::SetPastedToken(Some("def".to_string())),
            StoreAction::OpenSupportForm {
                group: "Litho".to_string()
            },
            StoreAction::SelectPlugin(PluginSelection {
                selected_app: "MyApp".to_string(),
                selected_plugin: "Layout".to_string(),
                deep_link_payload: Some("{\"id\":7}".to_string()),
            }),
        ]
    );
    assert_eq!(dispatcher.imported_files, [PathBuf::from("/tmp/trace.flipper")]);
    assert!(dispatcher.imported_urls.is_empty());
}

#[test]
fn import_link_drives_import_pipeline() {
    let handler = DeepLinkHandler::from_config(&RouterConfig::default());
    let mut dispatcher = RecordingDispatcher::new();
    handler.handle_event(
        HostEvent::ProtocolHandler(
            "flipper://import?url=https%3A%2F%2Fexample.com%2Fa.flipper".to_string(),
        ),
        &mut dispatcher,
    );
    assert_eq!(dispatcher.imported_urls, ["https://example.com/a.flipper"]);
    assert_eq!(dispatcher.actions.len(), 2);
}
