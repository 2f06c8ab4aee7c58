//! `fdl classify <uri>`: print the intent as JSON.

use anyhow::Result;
use fdl_core::Router;

pub fn run_classify(router: &Router, uri: &str) -> Result<()> {
    let intent = router.classify(uri);
    tracing::debug!("classify uri={} intent={}", uri, intent.kind());
    println!("{}", serde_json::to_string_pretty(&intent)?);
    Ok(())
}
