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

//! Default transport for the turret-io client, backed by [`reqwest`].
//!
//! ```no_run
//! use std::time::Duration;
//! use turret_io_core::Context;
//! use turret_io_http_send_reqwest::ReqwestHttpSend;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Timeouts are the caller's business: configure them on the client.
//! let client = reqwest::Client::builder()
//!     .timeout(Duration::from_secs(30))
//!     .build()?;
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use reqwest::{Client, Request};
use turret_io_core::{Error, HttpSend, Result};

/// ReqwestHttpSend sends requests with a [`reqwest::Client`].
#[derive(Debug, Default)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req).map_err(|e| {
            Error::request_invalid("failed to convert request").with_source(e)
        })?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport("failed to execute request").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport("failed to read response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::mock;
    use turret_io_core::ErrorKind;

    #[tokio::test]
    async fn test_http_send_reads_whole_body() {
        let m = mock("POST", "/latest/account/me")
            .match_header("x-ls-key", "YWJjMTIz")
            .match_body("e30=")
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create();

        let req = http::Request::post(format!("{}/latest/account/me", mockito::server_url()))
            .header("X-Ls-Key", "YWJjMTIz")
            .body(Bytes::from_static(b"e30="))
            .unwrap();

        let resp = ReqwestHttpSend::default().http_send(req).await.unwrap();
        m.assert();

        assert_eq!(resp.status(), http::StatusCode::OK);
        assert_eq!(resp.body().as_ref(), br#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn test_http_send_connection_refused_is_transport_error() {
        // Port 9 (discard) is not expected to be listening on loopback.
        let req = http::Request::get("http://127.0.0.1:9/latest/account")
            .body(Bytes::new())
            .unwrap();

        let err = ReqwestHttpSend::default().http_send(req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
