use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ports::{self, ServerPorts};
use crate::router::DEFAULT_SCHEME;
use crate::support_form::SupportGroupRegistry;

/// Global configuration loaded from `~/.config/fdl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// URI scheme registered with the OS (without `://`).
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Server ports; `FLIPPER_PORTS` takes precedence when set and valid.
    #[serde(default)]
    pub server_ports: Option<ServerPorts>,
    /// Groups reachable through `support-form?form=<suffix>` links.
    #[serde(default)]
    pub support_groups: SupportGroupRegistry,
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            server_ports: None,
            support_groups: SupportGroupRegistry::default(),
        }
    }
}

impl RouterConfig {
    /// Ports to use: a valid `env_override` wins, then the config file, then defaults.
    pub fn effective_ports(&self, env_override: Option<&str>) -> ServerPorts {
        if let Some(value) = env_override {
            match ports::parse_server_ports(value) {
                Ok(p) => return p,
                Err(e) => tracing::warn!("ignoring port override {:?}: {}", value, e),
            }
        }
        self.server_ports.unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RouterConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RouterConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path; the file must exist.
pub fn load_from(path: &Path) -> Result<RouterConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: RouterConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support_form::SupportGroup;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let cfg = RouterConfig::default();
        assert_eq!(cfg.scheme, "flipper");
        assert!(cfg.server_ports.is_none());
        assert!(cfg.support_groups.find(Some("flipper")).is_some());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = RouterConfig {
            server_ports: Some(ServerPorts {
                insecure: 9000,
                secure: 9001,
            }),
            ..RouterConfig::default()
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: RouterConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: RouterConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, RouterConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            scheme = "myapp"

            [server_ports]
            insecure = 1111
            secure = 2222

            [[support_groups]]
            name = "Litho"
            deeplink_suffix = "litho"

            [[support_groups]]
            name = "GraphQL"
            deeplink_suffix = "graphql"
        "#;
        let cfg: RouterConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.scheme, "myapp");
        assert_eq!(
            cfg.server_ports,
            Some(ServerPorts {
                insecure: 1111,
                secure: 2222
            })
        );
        assert_eq!(
            cfg.support_groups.groups(),
            [
                SupportGroup::new("Litho", "litho"),
                SupportGroup::new("GraphQL", "graphql"),
            ]
        );
        assert!(cfg.support_groups.find(Some("flipper")).is_none());
    }

    #[test]
    fn effective_ports_precedence() {
        let mut cfg = RouterConfig::default();
        assert_eq!(cfg.effective_ports(None), ServerPorts::default());

        cfg.server_ports = Some(ServerPorts {
            insecure: 1,
            secure: 2,
        });
        assert_eq!(cfg.effective_ports(None).insecure, 1);
        assert_eq!(cfg.effective_ports(Some("3,4")).secure, 4);
        // Malformed override falls back to the file value.
        assert_eq!(cfg.effective_ports(Some("bad")).insecure, 1);
    }

    #[test]
    fn load_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"scheme = \"other\"\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.scheme, "other");
    }

    #[test]
    fn load_from_invalid_file_names_path() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"scheme = [").unwrap();
        f.flush().unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }
}
