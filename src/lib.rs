// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ilo_switch` - power control for Redfish management controllers.
//!
//! This library exposes a server's out-of-band management controller (HPE
//! iLO or any Redfish-style API) as a single on/off switch for smart-home
//! hosts.
//!
//! The only power action sent is a momentary power-button press, so every
//! request first reads the chassis status and presses only when the machine
//! is not already in the requested state.
//!
//! # Layers
//!
//! - [`protocol`]: authenticated HTTPS transport ([`RedfishClient`])
//! - [`PowerStateController`]: status check and conditional press
//! - [`SwitchAccessory`]: boolean on/off bridge for a host runtime
//! - [`config`]: accessory configuration as supplied by the host
//!
//! # Quick Start
//!
//! ```no_run
//! use ilo_switch::{PowerStateController, RedfishConfig};
//!
//! #[tokio::main]
//! async fn main() -> ilo_switch::Result<()> {
//!     let client = RedfishConfig::new("ilo.example.lan")
//!         .with_credentials("admin", "secret")
//!         .into_client()?;
//!     let controller = PowerStateController::new(client);
//!
//!     println!("chassis is {}", controller.query_status().await?);
//!
//!     // Presses the power button only if the chassis reports "Disabled"
//!     controller.request_power_on().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
mod controller;
pub mod error;
pub mod protocol;
mod switch;
pub mod types;

pub use config::SwitchConfig;
pub use controller::{PowerOutcome, PowerStateController};
pub use error::{ConfigError, Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{ActionResponse, Credentials, ManagementApi, RedfishClient, RedfishConfig};
pub use switch::{AccessoryInformation, SwitchAccessory};
pub use types::{ChassisStatus, PowerAction, PowerIntent, PowerState};
