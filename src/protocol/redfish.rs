// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTPS implementation of the management API.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;

use crate::error::{Error, ParseError, ProtocolError};
use crate::protocol::{ActionResponse, Credentials, ManagementApi};
use crate::types::{ChassisStatus, PowerAction};

const CHASSIS_PATH: &str = "/redfish/v1/Chassis/1/";
const SYSTEM_PATH: &str = "/redfish/v1/Systems/1/";

// ============================================================================
// RedfishConfig
// ============================================================================

/// Connection parameters for a management controller.
///
/// Certificate verification is off by default: management controllers
/// usually ship self-signed certificates.
///
/// # Examples
///
/// ```
/// use ilo_switch::protocol::RedfishConfig;
/// use std::time::Duration;
///
/// let config = RedfishConfig::new("ilo.example.lan")
///     .with_credentials("admin", "secret")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url(), "https://ilo.example.lan");
/// ```
#[derive(Debug, Clone)]
pub struct RedfishConfig {
    host: String,
    port: u16,
    credentials: Option<Credentials>,
    timeout: Duration,
    connect_timeout: Duration,
    verify_certificates: bool,
}

impl RedfishConfig {
    /// Default HTTPS port.
    pub const DEFAULT_PORT: u16 = 443;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    /// Default TCP/TLS connect timeout.
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Creates a configuration for the given host.
    ///
    /// A host that already carries an `http://` or `https://` scheme is used
    /// verbatim as the base URL.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            credentials: None,
            timeout: Self::DEFAULT_TIMEOUT,
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            verify_certificates: false,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets basic-authentication credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Enables or disables TLS certificate verification.
    #[must_use]
    pub fn with_certificate_verification(mut self, verify: bool) -> Self {
        self.verify_certificates = verify;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the credentials if set.
    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns whether certificates are verified.
    #[must_use]
    pub fn verify_certificates(&self) -> bool {
        self.verify_certificates
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.host.starts_with("http://") || self.host.starts_with("https://") {
            return self.host.trim_end_matches('/').to_string();
        }
        if self.port == Self::DEFAULT_PORT {
            format!("https://{}", self.host)
        } else {
            format!("https://{}:{}", self.host, self.port)
        }
    }

    /// Creates a `RedfishClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the host is empty and
    /// `ProtocolError::Http` if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<RedfishClient, ProtocolError> {
        if self.host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "host is required".to_string(),
            ));
        }

        let base_url = self.base_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .danger_accept_invalid_certs(!self.verify_certificates)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(RedfishClient {
            base_url,
            client,
            credentials: self.credentials,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
        })
    }
}

// ============================================================================
// RedfishClient
// ============================================================================

/// Redfish client bound to one management controller.
///
/// Every call is a single attempt bounded by the configured timeout.
///
/// # Examples
///
/// ```no_run
/// use ilo_switch::protocol::{ManagementApi, RedfishConfig};
///
/// # async fn example() -> ilo_switch::Result<()> {
/// let client = RedfishConfig::new("ilo.example.lan")
///     .with_credentials("admin", "secret")
///     .into_client()?;
///
/// let status = client.get_chassis_status().await?;
/// println!("chassis is {status}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RedfishClient {
    base_url: String,
    client: Client,
    credentials: Option<Credentials>,
    timeout: Duration,
    connect_timeout: Duration,
}

impl RedfishClient {
    /// Returns the base URL of the controller.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some(creds) => request.header(AUTHORIZATION, creds.authorization_header()),
            None => request,
        }
    }

    /// Sends a request and returns the body of a successful response.
    async fn execute(&self, request: RequestBuilder, url: &str) -> Result<String, ProtocolError> {
        let response = self.authorize(request).send().await.map_err(|e| {
            let err = ProtocolError::from_transport(e, self.timeout, self.connect_timeout);
            tracing::warn!(url = %url, error = %err, "Management API request failed");
            err
        })?;

        let status = response.status();
        tracing::debug!(url = %url, status = status.as_u16(), "Received management API response");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ProtocolError::AuthenticationFailed {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            return Err(ProtocolError::UnexpectedStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ProtocolError::from_transport(e, self.timeout, self.connect_timeout))
    }
}

/// Extracts `Status.State` from a chassis resource body.
pub(crate) fn parse_chassis_status(body: &str) -> Result<ChassisStatus, ParseError> {
    let resource: Value = serde_json::from_str(body)?;
    resource
        .pointer("/Status/State")
        .and_then(Value::as_str)
        .map(ChassisStatus::new)
        .ok_or_else(|| ParseError::MissingField("Status.State".to_string()))
}

impl ManagementApi for RedfishClient {
    async fn get_chassis_status(&self) -> Result<ChassisStatus, Error> {
        let url = self.url(CHASSIS_PATH);
        tracing::debug!(url = %url, "Querying chassis status");

        let request = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json");
        let body = self.execute(request, &url).await?;

        let status = parse_chassis_status(&body).inspect_err(|e| {
            tracing::warn!(url = %url, error = %e, "Unexpected chassis resource");
        })?;

        tracing::debug!(status = %status, "Chassis status");
        Ok(status)
    }

    async fn dispatch_power_action(&self) -> Result<ActionResponse, Error> {
        let url = self.url(SYSTEM_PATH);
        let action = PowerAction::PUSH_POWER_BUTTON;
        tracing::debug!(
            url = %url,
            action = action.action(),
            reset_type = action.reset_type(),
            "Dispatching power action"
        );

        let request = self.client.post(&url).json(&action);
        let body = self.execute(request, &url).await?;

        tracing::debug!(body = %body, "Power action acknowledged");
        Ok(ActionResponse::from_body(body)?)
    }
}
