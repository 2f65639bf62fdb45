// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Chassis status and the power state derived from it.

use std::fmt;

/// Observed power state of the managed machine.
///
/// The controller reports an open-ended state string; only `"Disabled"` is
/// interpreted as off. Transitional states are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerState {
    /// The chassis reports `"Disabled"`.
    Off,
    /// The chassis reports anything other than `"Disabled"`.
    On,
}

impl PowerState {
    /// Returns a lowercase label for logging.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

/// The `Status.State` value of the chassis resource.
///
/// The string is kept as received; no enumeration is validated.
///
/// # Examples
///
/// ```
/// use ilo_switch::types::{ChassisStatus, PowerState};
///
/// let off = ChassisStatus::new("Disabled");
/// assert!(off.is_disabled());
/// assert_eq!(off.power_state(), PowerState::Off);
///
/// let on = ChassisStatus::new("Enabled");
/// assert!(on.is_on());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChassisStatus(String);

impl ChassisStatus {
    /// The state string reported for a powered-off chassis.
    pub const DISABLED: &'static str = "Disabled";

    /// Wraps a raw state string.
    #[must_use]
    pub fn new(state: impl Into<String>) -> Self {
        Self(state.into())
    }

    /// Returns the raw state string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the state is exactly `"Disabled"`.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.0 == Self::DISABLED
    }

    /// Returns `true` for every state other than `"Disabled"`.
    #[must_use]
    pub fn is_on(&self) -> bool {
        !self.is_disabled()
    }

    /// Classifies the status as on or off.
    #[must_use]
    pub fn power_state(&self) -> PowerState {
        PowerState::from(self.is_on())
    }

    /// Consumes the status and returns the raw string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ChassisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChassisStatus {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ChassisStatus {
    fn from(value: String) -> Self {
        Self(value)
    }
}
