//! `FLIPPER_PORTS` server port override, e.g. `FLIPPER_PORTS=1111,2222`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the port override.
pub const PORTS_ENV_VAR: &str = "FLIPPER_PORTS";

/// Example shown to users when the override is malformed.
pub const PORTS_EXAMPLE: &str = "1111,2222";

/// Ports the desktop client listens on for device connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerPorts {
    pub insecure: u16,
    pub secure: u16,
}

impl Default for ServerPorts {
    fn default() -> Self {
        Self {
            insecure: 8089,
            secure: 8088,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PortsError {
    #[error("expected 2 comma-separated ports, got {0}")]
    WrongCount(usize),
    #[error("port {0:?} is not a decimal number")]
    NotNumeric(String),
    #[error("port {0:?} is outside 1..=65535")]
    OutOfRange(String),
}

/// Parses `"<insecure>,<secure>"`.
///
/// Each component must be plain ASCII digits (no sign, no whitespace) and a
/// non-zero `u16`.
pub fn parse_server_ports(value: &str) -> Result<ServerPorts, PortsError> {
    let components: Vec<&str> = value.split(',').collect();
    if components.len() != 2 {
        return Err(PortsError::WrongCount(components.len()));
    }
    let insecure = parse_port(components[0])?;
    let secure = parse_port(components[1])?;
    Ok(ServerPorts { insecure, secure })
}

fn parse_port(component: &str) -> Result<u16, PortsError> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PortsError::NotNumeric(component.to_string()));
    }
    match component.parse::<u16>() {
        Ok(0) | Err(_) => Err(PortsError::OutOfRange(component.to_string())),
        Ok(port) => Ok(port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_ports() {
        assert_eq!(
            parse_server_ports("1111,2222"),
            Ok(ServerPorts {
                insecure: 1111,
                secure: 2222
            })
        );
        assert_eq!(
            parse_server_ports("1,65535"),
            Ok(ServerPorts {
                insecure: 1,
                secure: 65535
            })
        );
    }

    #[test]
    fn wrong_component_count() {
        assert_eq!(parse_server_ports("1111"), Err(PortsError::WrongCount(1)));
        assert_eq!(
            parse_server_ports("1111,2222,3333"),
            Err(PortsError::WrongCount(3))
        );
    }

    #[test]
    fn non_numeric_components() {
        assert_eq!(
            parse_server_ports("abc,2222"),
            Err(PortsError::NotNumeric("abc".to_string()))
        );
        assert_eq!(
            parse_server_ports("1111, 2222"),
            Err(PortsError::NotNumeric(" 2222".to_string()))
        );
        assert_eq!(
            parse_server_ports("-1,2222"),
            Err(PortsError::NotNumeric("-1".to_string()))
        );
        assert_eq!(
            parse_server_ports(","),
            Err(PortsError::NotNumeric(String::new()))
        );
    }

    #[test]
    fn zero_and_overflow_rejected() {
        assert_eq!(
            parse_server_ports("0,2222"),
            Err(PortsError::OutOfRange("0".to_string()))
        );
        assert_eq!(
            parse_server_ports("1111,70000"),
            Err(PortsError::OutOfRange("70000".to_string()))
        );
    }

    #[test]
    fn default_ports() {
        let ports = ServerPorts::default();
        assert_eq!(ports.insecure, 8089);
        assert_eq!(ports.secure, 8088);
    }
}
