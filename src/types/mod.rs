// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for management controller power control.
//!
//! # Types
//!
//! - [`ChassisStatus`] - The raw `Status.State` string reported by the chassis
//! - [`PowerState`] - The binary On/Off reading derived from a status
//! - [`PowerIntent`] - What the caller wants the machine to be
//! - [`PowerAction`] - The power-button press sent to the controller

mod action;
mod chassis;
mod intent;

pub use action::PowerAction;
pub use chassis::{ChassisStatus, PowerState};
pub use intent::PowerIntent;
