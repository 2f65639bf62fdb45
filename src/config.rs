// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switch configuration as supplied by the host runtime.
//!
//! The host hands each accessory a JSON object. The keys `name`, `server`
//! and `user` are required; `password` defaults to empty and everything
//! else is optional.
//!
//! ```
//! use ilo_switch::config::SwitchConfig;
//!
//! let config = SwitchConfig::from_json(r#"{
//!     "accessory": "IloSwitch",
//!     "name": "Lab Server",
//!     "server": "ilo.example.lan",
//!     "user": "admin",
//!     "password": "secret"
//! }"#).unwrap();
//!
//! assert_eq!(config.server, "ilo.example.lan");
//! assert_eq!(config.redfish_config().base_url(), "https://ilo.example.lan");
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::protocol::RedfishConfig;

/// Accessory configuration entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SwitchConfig {
    /// Display name of the switch.
    pub name: String,
    /// Hostname or address of the management controller.
    pub server: String,
    /// Management controller username.
    pub user: String,
    /// Management controller password.
    #[serde(default)]
    pub password: String,
    /// HTTPS port, 443 when absent.
    #[serde(default)]
    pub port: Option<u16>,
    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Verify the controller's TLS certificate. Off when absent.
    #[serde(default)]
    pub verify_certificates: bool,
    /// Window in seconds during which a repeated same-intent request is
    /// coalesced.
    #[serde(default)]
    pub settle_window_secs: Option<u64>,
    /// Manufacturer shown in the accessory information.
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// Model shown in the accessory information.
    #[serde(default)]
    pub model: Option<String>,
    /// Serial number shown in the accessory information.
    #[serde(default)]
    pub serial_number: Option<String>,
}

impl SwitchConfig {
    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` for malformed JSON or missing keys and
    /// `ConfigError::MissingField` for empty required values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise the
    /// same errors as [`from_json`](Self::from_json).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Checks that required values are present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` naming the first empty key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.trim().is_empty() {
            return Err(ConfigError::MissingField("server"));
        }
        if self.user.trim().is_empty() {
            return Err(ConfigError::MissingField("user"));
        }
        Ok(())
    }

    /// Returns the settle window, if configured.
    #[must_use]
    pub fn settle_window(&self) -> Option<Duration> {
        self.settle_window_secs.map(Duration::from_secs)
    }

    /// Builds the connection configuration for the management controller.
    #[must_use]
    pub fn redfish_config(&self) -> RedfishConfig {
        let mut config = RedfishConfig::new(self.server.clone())
            .with_credentials(self.user.clone(), self.password.clone())
            .with_certificate_verification(self.verify_certificates);

        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "accessory": "IloSwitch",
        "name": "Rack 1",
        "server": "10.0.0.5",
        "user": "admin",
        "password": "secret"
    }"#;

    #[test]
    fn minimal_config_uses_defaults() {
        let config = SwitchConfig::from_json(MINIMAL).unwrap();
        assert_eq!(config.name, "Rack 1");
        assert!(config.port.is_none());
        assert!(!config.verify_certificates);
        assert!(config.settle_window().is_none());

        let redfish = config.redfish_config();
        assert_eq!(redfish.port(), 443);
        assert_eq!(redfish.timeout(), RedfishConfig::DEFAULT_TIMEOUT);
        assert_eq!(
            redfish.credentials().unwrap().authorization_header(),
            "Basic YWRtaW46c2VjcmV0"
        );
    }

    #[test]
    fn optional_keys_are_applied() {
        let config = SwitchConfig::from_json(
            r#"{
                "name": "Rack 2",
                "server": "ilo-2",
                "user": "admin",
                "password": "pw",
                "port": 8443,
                "timeout_secs": 3,
                "verify_certificates": true,
                "settle_window_secs": 20
            }"#,
        )
        .unwrap();

        let redfish = config.redfish_config();
        assert_eq!(redfish.base_url(), "https://ilo-2:8443");
        assert_eq!(redfish.timeout(), Duration::from_secs(3));
        assert!(redfish.verify_certificates());
        assert_eq!(config.settle_window(), Some(Duration::from_secs(20)));
    }

    #[test]
    fn missing_server_is_rejected() {
        let result = SwitchConfig::from_json(r#"{"name": "x", "user": "admin"}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn empty_server_is_rejected() {
        let result =
            SwitchConfig::from_json(r#"{"name": "x", "server": " ", "user": "admin"}"#);
        assert!(matches!(result, Err(ConfigError::MissingField("server"))));
    }

    #[test]
    fn empty_user_is_rejected() {
        let result = SwitchConfig::from_json(r#"{"name": "x", "server": "ilo", "user": ""}"#);
        assert!(matches!(result, Err(ConfigError::MissingField("user"))));
    }

    #[test]
    fn password_defaults_to_empty() {
        let config =
            SwitchConfig::from_json(r#"{"name": "x", "server": "ilo", "user": "admin"}"#).unwrap();
        assert_eq!(config.password, "");
        assert_eq!(
            config.redfish_config().credentials().unwrap().password(),
            ""
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = SwitchConfig::from_file("/nonexistent/ilo-switch.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
