// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Basic-authentication credentials.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Username and password for the management controller.
///
/// The encoded header is built on demand for each request and never stored.
///
/// # Examples
///
/// ```
/// use ilo_switch::protocol::Credentials;
///
/// let creds = Credentials::new("admin", "secret");
/// assert_eq!(creds.authorization_header(), "Basic YWRtaW46c2VjcmV0");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates a new set of credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the `Authorization` header value.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_header_matches_basic_scheme() {
        let creds = Credentials::new("admin", "secret");
        assert_eq!(creds.authorization_header(), "Basic YWRtaW46c2VjcmV0");
    }

    #[test]
    fn authorization_header_keeps_colons_in_password() {
        let creds = Credentials::new("Administrator", "a:b");
        assert_eq!(
            creds.authorization_header(),
            format!("Basic {}", STANDARD.encode("Administrator:a:b"))
        );
    }

    #[test]
    fn debug_hides_password() {
        let output = format!("{:?}", Credentials::new("admin", "hunter2"));
        assert!(output.contains("admin"));
        assert!(!output.contains("hunter2"));
    }
}
