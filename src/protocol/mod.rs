// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport to the out-of-band management API.
//!
//! [`RedfishClient`] is the HTTPS implementation of [`ManagementApi`]. It
//! knows how to authenticate, fetch the chassis status and send the
//! power-button action; it makes no decisions about when to press.

mod credentials;
mod redfish;

pub use credentials::Credentials;
pub use redfish::{RedfishClient, RedfishConfig};

use serde_json::Value;

use crate::error::{Error, ParseError};
use crate::types::ChassisStatus;

/// Response returned by the controller after a power action.
///
/// The body is typically an acknowledgment or task object and is not
/// interpreted further.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResponse {
    body: String,
    value: Value,
}

impl ActionResponse {
    /// Parses a raw response body.
    ///
    /// An empty body is accepted and yields [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if a non-empty body is not valid JSON.
    pub fn from_body(body: String) -> Result<Self, ParseError> {
        let value = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body)?
        };
        Ok(Self { body, value })
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the parsed JSON body.
    #[must_use]
    pub fn json(&self) -> &Value {
        &self.value
    }
}

/// Operations the power controller needs from a management API.
#[allow(async_fn_in_trait)]
pub trait ManagementApi {
    /// Fetches the current chassis `Status.State`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the request fails and `Error::Parse` if
    /// the body is not JSON or lacks `Status.State`.
    async fn get_chassis_status(&self) -> Result<ChassisStatus, Error>;

    /// Sends a single power-button press.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the request fails and `Error::Parse` if
    /// the response body is not JSON.
    async fn dispatch_power_action(&self) -> Result<ActionResponse, Error>;
}

impl<T: ManagementApi> ManagementApi for &T {
    async fn get_chassis_status(&self) -> Result<ChassisStatus, Error> {
        (**self).get_chassis_status().await
    }

    async fn dispatch_power_action(&self) -> Result<ActionResponse, Error> {
        (**self).dispatch_power_action().await
    }
}
