// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Desired power intent.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;
use crate::types::{ChassisStatus, PowerState};

/// The power state a caller wants the machine to reach.
///
/// The only available action is a momentary button press, so an intent is
/// satisfied either by pressing once or by doing nothing.
///
/// # Examples
///
/// ```
/// use ilo_switch::types::{ChassisStatus, PowerIntent};
///
/// let disabled = ChassisStatus::new("Disabled");
/// assert!(PowerIntent::On.requires_action(&disabled));
/// assert!(!PowerIntent::Off.requires_action(&disabled));
///
/// assert_eq!("on".parse::<PowerIntent>().unwrap(), PowerIntent::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerIntent {
    /// Boot the machine.
    On,
    /// Shut the machine down.
    Off,
}

impl PowerIntent {
    /// Returns the power state this intent aims for.
    #[must_use]
    pub const fn target_state(&self) -> PowerState {
        match self {
            Self::On => PowerState::On,
            Self::Off => PowerState::Off,
        }
    }

    /// Returns `true` if a button press is needed to move from `status`
    /// to this intent.
    #[must_use]
    pub fn requires_action(&self, status: &ChassisStatus) -> bool {
        match self {
            Self::On => status.is_disabled(),
            Self::Off => !status.is_disabled(),
        }
    }

    /// Returns a lowercase label for logging.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for PowerIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerIntent {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "on" | "1" | "true" => Ok(Self::On),
            "off" | "0" | "false" => Ok(Self::Off),
            _ => Err(ValueError::InvalidPowerIntent(s.to_string())),
        }
    }
}

impl From<bool> for PowerIntent {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_on_requires_action_only_when_disabled() {
        assert!(PowerIntent::On.requires_action(&ChassisStatus::new("Disabled")));
        assert!(!PowerIntent::On.requires_action(&ChassisStatus::new("Enabled")));
        assert!(!PowerIntent::On.requires_action(&ChassisStatus::new("Starting")));
    }

    #[test]
    fn power_off_requires_action_unless_disabled() {
        assert!(!PowerIntent::Off.requires_action(&ChassisStatus::new("Disabled")));
        assert!(PowerIntent::Off.requires_action(&ChassisStatus::new("Enabled")));
        assert!(PowerIntent::Off.requires_action(&ChassisStatus::new("")));
    }

    #[test]
    fn intent_from_str() {
        assert_eq!("ON".parse::<PowerIntent>().unwrap(), PowerIntent::On);
        assert_eq!("true".parse::<PowerIntent>().unwrap(), PowerIntent::On);
        assert_eq!("Off".parse::<PowerIntent>().unwrap(), PowerIntent::Off);
        assert_eq!("0".parse::<PowerIntent>().unwrap(), PowerIntent::Off);
    }

    #[test]
    fn intent_from_str_invalid() {
        let result = "toggle".parse::<PowerIntent>();
        assert!(matches!(
            result.unwrap_err(),
            ValueError::InvalidPowerIntent(_)
        ));
    }

    #[test]
    fn intent_from_bool() {
        assert_eq!(PowerIntent::from(true), PowerIntent::On);
        assert_eq!(PowerIntent::from(false), PowerIntent::Off);
        assert_eq!(PowerIntent::Off.target_state(), PowerState::Off);
    }
}
