//! In-memory dispatcher that records what it is asked to do.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use super::{ActiveSheet, Dispatcher, StoreAction};

/// Records dispatched actions and import requests without performing them.
///
/// `SetActiveSheet` actions update the recorded sheet so repeated deep links
/// observe the state they produced.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    pub actions: Vec<StoreAction>,
    pub active_sheet: Option<ActiveSheet>,
    pub imported_urls: Vec<String>,
    pub imported_files: Vec<PathBuf>,
    fail_imports: bool,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `sheet` already shown.
    pub fn with_active_sheet(sheet: ActiveSheet) -> Self {
        Self {
            active_sheet: Some(sheet),
            ..Self::default()
        }
    }

    /// Makes every import request fail after being recorded.
    pub fn failing_imports(mut self) -> Self {
        self.fail_imports = true;
        self
    }
}

impl Dispatcher for RecordingDispatcher {
    fn dispatch(&mut self, action: StoreAction) {
        if let StoreAction::SetActiveSheet(sheet) = &action {
            self.active_sheet = Some(sheet.clone());
        }
        self.actions.push(action);
    }

    fn active_sheet(&self) -> Option<ActiveSheet> {
        self.active_sheet.clone()
    }

    fn import_from_url(&mut self, url: &str) -> Result<()> {
        self.imported_urls.push(url.to_string());
        if self.fail_imports {
            bail!("import from {url} failed");
        }
        Ok(())
    }

    fn import_file(&mut self, path: &Path) -> Result<()> {
        self.imported_files.push(path.to_path_buf());
        if self.fail_imports {
            bail!("import of {} failed", path.display());
        }
        Ok(())
    }
}
