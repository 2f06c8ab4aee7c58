//! `fdl ports [value]`: validate a port override.

use anyhow::{Context, Result};
use fdl_core::config::RouterConfig;
use fdl_core::ports::{parse_server_ports, PORTS_ENV_VAR, PORTS_EXAMPLE};

/// An explicit `value` must be valid; a malformed env value only warns.
pub fn run_ports(cfg: &RouterConfig, value: Option<String>) -> Result<()> {
    let ports = match value {
        Some(v) => parse_server_ports(&v)
            .with_context(|| format!("invalid ports {v:?}, expected e.g. {PORTS_EXAMPLE}"))?,
        None => {
            let env_value = std::env::var(PORTS_ENV_VAR).ok();
            cfg.effective_ports(env_value.as_deref())
        }
    };
    println!("insecure={} secure={}", ports.insecure, ports.secure);
    Ok(())
}
