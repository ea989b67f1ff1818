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

//! Turret.IO request signing.

use log::debug;
use serde_json::Value;
use turret_io_core::hash::{base64_decode, base64_hmac_sha512};
use turret_io_core::{Error, Result};

use crate::credential::Credential;

/// Payload is the JSON object sent with every request.
pub type Payload = serde_json::Map<String, Value>;

/// RequestSigner computes the `X-Ls-Auth` signature for Turret.IO requests.
///
/// ## Format
///
/// ```text
/// base64(
///   HMAC-SHA512(
///     key = base64_decode(api_secret),
///     message = Path + JSON(payload) + UnixSeconds
///   )
/// )
/// ```
///
/// `Path` is the request URL with the endpoint removed, query included. The
/// three parts are joined without separators. The signature is a pure
/// function of its inputs: nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    endpoint: String,
}

impl RequestSigner {
    /// Create a signer for urls under the given endpoint.
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// The endpoint stripped from urls before signing.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sign a request to `url` carrying `payload` at `timestamp`.
    ///
    /// Fails with [`ErrorKind::PayloadInvalid`](turret_io_core::ErrorKind::PayloadInvalid)
    /// if the payload can't be serialized, and with
    /// [`ErrorKind::ConfigInvalid`](turret_io_core::ErrorKind::ConfigInvalid) if the
    /// secret is not valid base64.
    pub fn sign(
        &self,
        cred: &Credential,
        url: &str,
        payload: &Payload,
        timestamp: i64,
    ) -> Result<String> {
        let json = canonical_json(payload)?;
        self.sign_json(cred, url, &json, timestamp)
    }

    /// Sign with a payload that has already gone through [`canonical_json`].
    pub(crate) fn sign_json(
        &self,
        cred: &Credential,
        url: &str,
        json: &str,
        timestamp: i64,
    ) -> Result<String> {
        let path = self.strip_endpoint(url);
        let string_to_sign = string_to_sign(path, json, timestamp);

        let key = base64_decode(cred.api_secret()).map_err(|e| {
            Error::config_invalid("api secret is not valid base64").with_source(e)
        })?;

        debug!("signing path {path} at {timestamp}");
        Ok(base64_hmac_sha512(&key, string_to_sign.as_bytes()))
    }

    /// The same path signs identically whichever endpoint it is sent to.
    fn strip_endpoint<'a>(&self, url: &'a str) -> &'a str {
        url.strip_prefix(self.endpoint.as_str()).unwrap_or(url)
    }
}

/// Construct string to sign
///
/// ```text
/// Path + JSON + UnixSeconds
/// ```
fn string_to_sign(path: &str, json: &str, timestamp: i64) -> String {
    let timestamp = timestamp.to_string();

    let mut s = String::with_capacity(path.len() + json.len() + timestamp.len());
    s.push_str(path);
    s.push_str(json);
    s.push_str(&timestamp);
    s
}

/// Serialize payload to JSON with object keys in lexicographic byte order at
/// every level.
///
/// The service verifies the signature against the JSON it receives, so the
/// key order is part of the wire contract. It must not depend on how
/// `serde_json::Map` happens to be backed.
pub fn canonical_json(payload: &Payload) -> Result<String> {
    let value = Value::Object(sorted_object(payload));
    serde_json::to_string(&value)
        .map_err(|e| Error::payload_invalid("payload can't be serialized as json").with_source(e))
}

fn sorted_object(map: &Payload) -> Payload {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    entries
        .into_iter()
        .map(|(k, v)| (k.clone(), sorted_value(v)))
        .collect()
}

fn sorted_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(sorted_object(map)),
        Value::Array(items) => Value::Array(items.iter().map(sorted_value).collect()),
        v => v.clone(),
    }
}
