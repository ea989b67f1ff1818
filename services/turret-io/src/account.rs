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

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value;
use turret_io_core::{Error, Result};

use crate::client::{resource_path, SendRequest};
use crate::constants::*;
use crate::response::Response;
use crate::sign_request::Payload;

/// OutgoingMethod is the channel the service delivers an account's emails through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutgoingMethod {
    /// Turret.IO's own relay, configured without options.
    TurretIo,
    /// Amazon SES, requires `aws_access_key` and `aws_secret_access_key`.
    Aws,
    /// Any SMTP server, requires `smtp_host`, `smtp_username` and `smtp_password`.
    Smtp,
}

impl OutgoingMethod {
    /// Name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutgoingMethod::TurretIo => "turret.io",
            OutgoingMethod::Aws => "aws",
            OutgoingMethod::Smtp => "smtp",
        }
    }

    /// Option keys that must be present for this method.
    pub fn required_options(&self) -> &'static [&'static str] {
        match self {
            OutgoingMethod::TurretIo => &[],
            OutgoingMethod::Aws => &[AWS_ACCESS_KEY, AWS_SECRET_ACCESS_KEY],
            OutgoingMethod::Smtp => &[SMTP_HOST, SMTP_USERNAME, SMTP_PASSWORD],
        }
    }
}

impl FromStr for OutgoingMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "turret.io" => Ok(OutgoingMethod::TurretIo),
            "aws" => Ok(OutgoingMethod::Aws),
            "smtp" => Ok(OutgoingMethod::Smtp),
            v => Err(Error::request_invalid(format!(
                "invalid outgoing method {v}, must be one of turret.io, aws, smtp"
            ))),
        }
    }
}

impl Display for OutgoingMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account provides API functionality for the account of the authenticated caller.
#[derive(Debug, Clone)]
pub struct Account {
    api: Arc<dyn SendRequest>,
}

impl Account {
    /// Create a new Account facade.
    pub fn new(api: Arc<dyn SendRequest>) -> Self {
        Self { api }
    }

    /// The client this facade sends through.
    pub fn api(&self) -> &dyn SendRequest {
        self.api.as_ref()
    }

    /// Load the account.
    pub async fn get(&self) -> Result<Response> {
        self.api
            .get(&resource_path(ACCOUNT_PATH, &[]), &Payload::new())
            .await
    }

    /// Change the outgoing method of the account.
    ///
    /// | method      | options                                        |
    /// |-------------|------------------------------------------------|
    /// | `turret.io` | none                                           |
    /// | `aws`       | `aws_access_key`, `aws_secret_access_key`      |
    /// | `smtp`      | `smtp_host`, `smtp_username`, `smtp_password`  |
    ///
    /// Invalid input fails with
    /// [`ErrorKind::RequestInvalid`](turret_io_core::ErrorKind::RequestInvalid)
    /// before anything is sent.
    pub async fn set(&self, outgoing_method: &str, options: Option<&Payload>) -> Result<Response> {
        let payload = outgoing_method_payload(outgoing_method, options)?;

        self.api
            .post(&resource_path(ACCOUNT_PATH, &["me"]), &payload)
            .await
    }
}

fn outgoing_method_payload(outgoing_method: &str, options: Option<&Payload>) -> Result<Payload> {
    let method: OutgoingMethod = outgoing_method.parse()?;

    let mut payload = Payload::new();
    payload.insert("type".to_string(), Value::from(method.as_str()));

    match (method, options) {
        (OutgoingMethod::TurretIo, Some(options)) if !options.is_empty() => {
            return Err(Error::request_invalid(
                "outgoing method turret.io doesn't take options",
            ));
        }
        (OutgoingMethod::TurretIo, _) => {}
        (method, None) => {
            return Err(Error::request_invalid(format!(
                "outgoing method {method} requires options"
            )));
        }
        (method, Some(options)) => {
            let missing: Vec<&str> = method
                .required_options()
                .iter()
                .copied()
                .filter(|key| !options.contains_key(*key))
                .collect();
            if !missing.is_empty() {
                return Err(Error::request_invalid(format!(
                    "outgoing method {method} requires options: {}",
                    missing.join(", ")
                )));
            }

            payload.insert("options".to_string(), Value::Object(options.clone()));
        }
    }

    Ok(payload)
}
