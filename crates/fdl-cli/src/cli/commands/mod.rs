//! CLI command handlers, one per file.

mod classify;
mod decompose;
mod dispatch;
mod ports;

pub use classify::run_classify;
pub use decompose::run_decompose;
pub use dispatch::{run_dispatch, run_open_file};
pub use ports::run_ports;
