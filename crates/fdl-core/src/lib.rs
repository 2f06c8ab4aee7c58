pub mod config;
pub mod dispatch;
pub mod logging;
pub mod ports;
pub mod router;
pub mod support_form;

pub use dispatch::{apply_intent, DeepLinkHandler, Dispatcher, HostEvent, StoreAction};
pub use router::{classify, decompose_path, Intent, Router};
