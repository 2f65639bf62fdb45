// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! On/off switch bridge for smart-home hosts.
//!
//! A [`SwitchAccessory`] is what the host's characteristic handlers call:
//! `get_on` when the user opens the app, `set_on` when the toggle is
//! flipped. It keeps no cached on-flag; every read asks the controller.

use crate::config::SwitchConfig;
use crate::controller::{PowerOutcome, PowerStateController};
use crate::error::Error;
use crate::protocol::{ManagementApi, RedfishClient};
use crate::types::PowerIntent;

/// Static accessory information shown by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessoryInformation {
    /// Manufacturer name.
    pub manufacturer: String,
    /// Model name.
    pub model: String,
    /// Serial number.
    pub serial_number: String,
}

impl Default for AccessoryInformation {
    fn default() -> Self {
        Self {
            manufacturer: "HPE".to_string(),
            model: "iLOSwitch".to_string(),
            serial_number: "123-4820-333".to_string(),
        }
    }
}

impl AccessoryInformation {
    fn from_config(config: &SwitchConfig) -> Self {
        let defaults = Self::default();
        Self {
            manufacturer: config
                .manufacturer
                .clone()
                .unwrap_or(defaults.manufacturer),
            model: config.model.clone().unwrap_or(defaults.model),
            serial_number: config
                .serial_number
                .clone()
                .unwrap_or(defaults.serial_number),
        }
    }
}

/// A single power switch backed by a [`PowerStateController`].
///
/// # Examples
///
/// ```no_run
/// use ilo_switch::SwitchAccessory;
/// use ilo_switch::config::SwitchConfig;
///
/// # async fn example() -> ilo_switch::Result<()> {
/// let config = SwitchConfig::from_file("ilo-switch.json")?;
/// let switch = SwitchAccessory::from_config(&config)?;
///
/// if !switch.get_on().await? {
///     switch.set_on(true).await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SwitchAccessory<A: ManagementApi> {
    name: String,
    information: AccessoryInformation,
    controller: PowerStateController<A>,
}

impl SwitchAccessory<RedfishClient> {
    /// Creates a switch talking to the controller named in `config`.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn from_config(config: &SwitchConfig) -> Result<Self, Error> {
        config.validate()?;

        let client = config.redfish_config().into_client()?;
        let mut controller = PowerStateController::new(client);
        if let Some(window) = config.settle_window() {
            controller = controller.with_settle_window(window);
        }

        tracing::debug!(name = %config.name, server = %config.server, "Created switch accessory");

        Ok(Self {
            name: config.name.clone(),
            information: AccessoryInformation::from_config(config),
            controller,
        })
    }
}

impl<A: ManagementApi> SwitchAccessory<A> {
    /// Creates a switch around an existing controller.
    #[must_use]
    pub fn new(name: impl Into<String>, controller: PowerStateController<A>) -> Self {
        Self {
            name: name.into(),
            information: AccessoryInformation::default(),
            controller,
        }
    }

    /// Replaces the accessory information.
    #[must_use]
    pub fn with_information(mut self, information: AccessoryInformation) -> Self {
        self.information = information;
        self
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the accessory information.
    #[must_use]
    pub fn information(&self) -> &AccessoryInformation {
        &self.information
    }

    /// Returns the underlying controller.
    #[must_use]
    pub fn controller(&self) -> &PowerStateController<A> {
        &self.controller
    }

    /// Reads the switch value: `true` unless the chassis reports `"Disabled"`.
    ///
    /// # Errors
    ///
    /// Returns error if the status cannot be fetched or parsed.
    pub async fn get_on(&self) -> Result<bool, Error> {
        let status = self.controller.query_status().await?;
        tracing::info!(name = %self.name, status = %status, "Chassis status read");
        Ok(status.is_on())
    }

    /// Sets the switch value.
    ///
    /// # Errors
    ///
    /// Returns error if the status query or the power action fails.
    pub async fn set_on(&self, on: bool) -> Result<PowerOutcome, Error> {
        tracing::info!(name = %self.name, on, "Switch set");
        self.controller.request_power(PowerIntent::from(on)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::protocol::ActionResponse;
    use crate::types::ChassisStatus;

    struct FixedStatus {
        state: &'static str,
        presses: AtomicUsize,
    }

    impl FixedStatus {
        fn new(state: &'static str) -> Self {
            Self {
                state,
                presses: AtomicUsize::new(0),
            }
        }
    }

    impl std::fmt::Debug for FixedStatus {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("FixedStatus").field("state", &self.state).finish()
        }
    }

    impl ManagementApi for FixedStatus {
        async fn get_chassis_status(&self) -> Result<ChassisStatus, Error> {
            Ok(ChassisStatus::new(self.state))
        }

        async fn dispatch_power_action(&self) -> Result<ActionResponse, Error> {
            self.presses.fetch_add(1, Ordering::SeqCst);
            Ok(ActionResponse::from_body(String::new())?)
        }
    }

    fn switch(state: &'static str) -> SwitchAccessory<FixedStatus> {
        SwitchAccessory::new("Lab", PowerStateController::new(FixedStatus::new(state)))
    }

    #[tokio::test]
    async fn get_on_is_false_when_disabled() {
        assert!(!switch("Disabled").get_on().await.unwrap());
    }

    #[tokio::test]
    async fn get_on_is_true_when_enabled() {
        assert!(switch("Enabled").get_on().await.unwrap());
    }

    #[tokio::test]
    async fn set_on_maps_to_intent() {
        let sw = switch("Disabled");

        assert!(sw.set_on(true).await.unwrap().is_dispatched());
        assert!(!sw.set_on(false).await.unwrap().is_dispatched());
        assert_eq!(sw.controller().api().presses.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn default_information() {
        let info = AccessoryInformation::default();
        assert_eq!(info.manufacturer, "HPE");
        assert_eq!(info.model, "iLOSwitch");
    }

    #[test]
    fn from_config_applies_overrides() {
        let config = SwitchConfig::from_json(
            r#"{
                "name": "Rack",
                "server": "ilo",
                "user": "admin",
                "password": "secret",
                "model": "DL380",
                "settle_window_secs": 0
            }"#,
        )
        .unwrap();

        let sw = SwitchAccessory::from_config(&config).unwrap();
        assert_eq!(sw.name(), "Rack");
        assert_eq!(sw.information().model, "DL380");
        assert_eq!(sw.information().manufacturer, "HPE");
        assert!(sw.controller().settle_window().is_zero());
    }
}
