// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use turret_io_core::{utils::Redact, SigningCredential};

/// Credential for the Turret.IO API.
///
/// The secret is kept in its base64 form. It is only decoded when a request
/// is signed, so a malformed secret surfaces as an error at that point.
#[derive(Clone)]
pub struct Credential {
    api_key: String,
    api_secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// API key, sent as is in the `X-Ls-Key` header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Base64 encoded API secret.
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &Redact::from(&self.api_key))
            .field("api_secret", &Redact::from(&self.api_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_accessors() {
        let cred = Credential::new("YWJjMTIz", "ZGVmZ2hp");
        assert_eq!(cred.api_key(), "YWJjMTIz");
        assert_eq!(cred.api_secret(), "ZGVmZ2hp");
        assert!(cred.is_valid());
    }

    #[test]
    fn test_credential_is_not_validated_at_construction() {
        // Malformed base64 is accepted here and rejected at sign time.
        let cred = Credential::new("key", "%%%not-base64%%%");
        assert!(cred.is_valid());

        assert!(!Credential::new("", "ZGVmZ2hp").is_valid());
        assert!(!Credential::new("YWJjMTIz", "").is_valid());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let cred = Credential::new("YWJjMTIz", "c2VjcmV0LXNlY3JldC1zZWNyZXQ=");
        let s = format!("{cred:?}");
        assert!(!s.contains("YWJjMTIz"));
        assert!(!s.contains("c2VjcmV0LXNlY3JldC1zZWNyZXQ="));
    }
}
