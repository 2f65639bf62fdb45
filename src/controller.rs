// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power-state controller.
//!
//! Turns an on/off intent into zero or one power-button presses. The current
//! chassis status is fetched fresh for every request and compared with the
//! intent; the button is only pressed when the machine is not already in
//! the desired state.
//!
//! Requests on one controller are serialized: the status read and the
//! conditional press of one request complete before the next request reads
//! the status. A press takes a while to show up in the chassis status, so a
//! repeated request with the same intent inside the settle window is
//! reported as [`PowerOutcome::Coalesced`] instead of pressing again.
//!
//! ```no_run
//! use ilo_switch::PowerStateController;
//! use ilo_switch::protocol::RedfishConfig;
//!
//! # async fn example() -> ilo_switch::Result<()> {
//! let client = RedfishConfig::new("ilo.example.lan")
//!     .with_credentials("admin", "secret")
//!     .into_client()?;
//! let controller = PowerStateController::new(client);
//!
//! let outcome = controller.request_power_on().await?;
//! if outcome.is_dispatched() {
//!     println!("power button pressed");
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::Error;
use crate::protocol::{ActionResponse, ManagementApi};
use crate::types::{ChassisStatus, PowerIntent};

/// Result of a power request.
#[derive(Debug, Clone, PartialEq)]
pub enum PowerOutcome {
    /// The power button was pressed.
    Dispatched {
        /// Status observed before the press.
        previous: ChassisStatus,
        /// Body returned by the controller for the action.
        response: ActionResponse,
    },
    /// The machine was already in the requested state; nothing was sent.
    AlreadyInState {
        /// Status observed for the request.
        status: ChassisStatus,
    },
    /// A press for the same intent was sent within the settle window and
    /// the status has not caught up yet; nothing was sent.
    Coalesced {
        /// The intent that was requested.
        intent: PowerIntent,
    },
}

impl PowerOutcome {
    /// Returns `true` if a power action was sent for this request.
    #[must_use]
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched { .. })
    }
}

#[derive(Debug, Clone, Copy)]
struct LastDispatch {
    intent: PowerIntent,
    at: Instant,
}

/// Decides whether a power-button press is needed and sends it.
#[derive(Debug)]
pub struct PowerStateController<A: ManagementApi> {
    api: A,
    settle_window: Duration,
    last_dispatch: Mutex<Option<LastDispatch>>,
}

impl<A: ManagementApi> PowerStateController<A> {
    /// Default time during which a repeated same-intent request is coalesced.
    pub const DEFAULT_SETTLE_WINDOW: Duration = Duration::from_secs(5);

    /// Creates a controller on top of a management API.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            settle_window: Self::DEFAULT_SETTLE_WINDOW,
            last_dispatch: Mutex::new(None),
        }
    }

    /// Sets the settle window. `Duration::ZERO` disables coalescing.
    #[must_use]
    pub fn with_settle_window(mut self, window: Duration) -> Self {
        self.settle_window = window;
        self
    }

    /// Returns the settle window.
    #[must_use]
    pub fn settle_window(&self) -> Duration {
        self.settle_window
    }

    /// Returns the underlying management API.
    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Queries the current chassis status.
    ///
    /// # Errors
    ///
    /// Returns error if the status request fails or cannot be parsed.
    pub async fn query_status(&self) -> Result<ChassisStatus, Error> {
        self.api.get_chassis_status().await
    }

    /// Returns whether the machine is currently powered on.
    ///
    /// # Errors
    ///
    /// Returns error if the status request fails or cannot be parsed.
    pub async fn is_on(&self) -> Result<bool, Error> {
        Ok(self.query_status().await?.is_on())
    }

    /// Powers the machine on if it is off.
    ///
    /// # Errors
    ///
    /// Returns error if the status query or the power action fails.
    pub async fn request_power_on(&self) -> Result<PowerOutcome, Error> {
        self.request_power(PowerIntent::On).await
    }

    /// Powers the machine off if it is on.
    ///
    /// # Errors
    ///
    /// Returns error if the status query or the power action fails.
    pub async fn request_power_off(&self) -> Result<PowerOutcome, Error> {
        self.request_power(PowerIntent::Off).await
    }

    /// Brings the machine to the requested state with at most one press.
    ///
    /// # Errors
    ///
    /// Returns error if the status query or the power action fails. A failed
    /// status query never leads to a press.
    pub async fn request_power(&self, intent: PowerIntent) -> Result<PowerOutcome, Error> {
        let mut last_dispatch = self.last_dispatch.lock().await;

        let status = self.api.get_chassis_status().await?;

        if !intent.requires_action(&status) {
            match intent {
                PowerIntent::On => {
                    tracing::info!(status = %status, "Server already started");
                }
                PowerIntent::Off => {
                    tracing::info!(status = %status, "Server already powered off");
                }
            }
            return Ok(PowerOutcome::AlreadyInState { status });
        }

        if let Some(last) = *last_dispatch
            && last.intent == intent
            && last.at.elapsed() < self.settle_window
        {
            tracing::debug!(
                intent = %intent,
                status = %status,
                elapsed_ms = u64::try_from(last.at.elapsed().as_millis()).unwrap_or(u64::MAX),
                "Power button pressed recently, waiting for status to settle"
            );
            return Ok(PowerOutcome::Coalesced { intent });
        }

        // Recorded before sending: a failed POST may still have pressed.
        *last_dispatch = Some(LastDispatch {
            intent,
            at: Instant::now(),
        });
        let response = self.api.dispatch_power_action().await?;

        tracing::info!(intent = %intent, previous = %status, "Power button pressed");
        Ok(PowerOutcome::Dispatched {
            previous: status,
            response,
        })
    }
}
