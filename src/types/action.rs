// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The power-button action payload.

use serde::Serialize;

/// Request body for a Redfish reset action.
///
/// Only the momentary power-button press is ever sent. Its physical effect
/// depends on the current state of the machine, not on the payload.
///
/// # Examples
///
/// ```
/// use ilo_switch::types::PowerAction;
///
/// let body = serde_json::to_string(&PowerAction::PUSH_POWER_BUTTON).unwrap();
/// assert_eq!(body, r#"{"Action":"Reset","ResetType":"PushPowerButton"}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerAction {
    action: &'static str,
    reset_type: &'static str,
}

impl PowerAction {
    /// A single press of the power button.
    pub const PUSH_POWER_BUTTON: Self = Self {
        action: "Reset",
        reset_type: "PushPowerButton",
    };

    /// Returns the action name.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        self.action
    }

    /// Returns the reset type.
    #[must_use]
    pub const fn reset_type(&self) -> &'static str {
        self.reset_type
    }
}
