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

use bytes::Bytes;
use http::StatusCode;
use log::debug;
use turret_io_core::{Error, Result};

use crate::constants::STATUS_UNAUTHORIZED;
use crate::sign_request::Payload;

/// Response is the decoded reply of the Turret.IO API.
///
/// `body` is `None` only when the service rejected authentication with its
/// plain text `Unauthorized` body.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    body: Option<Payload>,
    status: String,
    status_code: StatusCode,
}

impl Response {
    /// Decode a fully read http response.
    ///
    /// - A JSON object body is returned as is.
    /// - A non-JSON body with status `401 Unauthorized` yields an absent body.
    /// - Any other non-JSON body fails with
    ///   [`ErrorKind::ResponseInvalid`](turret_io_core::ErrorKind::ResponseInvalid).
    pub fn from_http(resp: http::Response<Bytes>) -> Result<Self> {
        let status_code = resp.status();
        let status = status_line(status_code);

        let body = match serde_json::from_slice::<Payload>(resp.body()) {
            Ok(body) => Some(body),
            Err(_) if status == STATUS_UNAUTHORIZED => {
                debug!("response is {status} with a non-json body, treated as no body");
                None
            }
            Err(e) => {
                return Err(Error::response_invalid(format!(
                    "response with status {status} is not a json object"
                ))
                .with_source(e))
            }
        };

        Ok(Self {
            body,
            status,
            status_code,
        })
    }

    /// Decoded JSON body.
    pub fn body(&self) -> Option<&Payload> {
        self.body.as_ref()
    }

    /// Consume the response and return its body.
    pub fn into_body(self) -> Option<Payload> {
        self.body
    }

    /// Status line, like `200 OK` or `401 Unauthorized`.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Status code.
    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Check if the service rejected the request credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status_code == StatusCode::UNAUTHORIZED
    }
}

/// Render the status line as `{code} {reason}`.
fn status_line(code: StatusCode) -> String {
    match code.canonical_reason() {
        Some(reason) => format!("{} {reason}", code.as_str()),
        None => code.as_str().to_string(),
    }
}
