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

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use log::debug;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use turret_io::{canonical_json, Client, Payload, RequestSigner, DEFAULT_ENDPOINT};
use turret_io_core::hash::base64_decode;
use turret_io_core::time::now;
use turret_io_core::{Context, HttpSend};

use super::{init_test_logger, test_credential, API_KEY};

/// Captures every request and answers `200 OK` with an empty object.
#[derive(Debug, Clone, Default)]
struct CapturingHttpSend {
    requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
}

impl CapturingHttpSend {
    fn take(&self) -> Vec<http::Request<Bytes>> {
        std::mem::take(&mut *self.requests.lock().unwrap())
    }
}

#[async_trait]
impl HttpSend for CapturingHttpSend {
    async fn http_send(
        &self,
        req: http::Request<Bytes>,
    ) -> turret_io_core::Result<http::Response<Bytes>> {
        self.requests.lock().unwrap().push(req);
        Ok(http::Response::builder()
            .status(200)
            .body(Bytes::from_static(b"{}"))?)
    }
}

fn capturing_client() -> (CapturingHttpSend, Client) {
    init_test_logger();

    let http = CapturingHttpSend::default();
    let ctx = Context::new().with_http_send(http.clone());
    (http, Client::new(ctx, test_credential()))
}

/// Verify one captured request against what the service would check.
fn verify(req: &http::Request<Bytes>, method: Method, path: &str, expected: Value) -> Result<()> {
    assert_eq!(req.method(), method);
    assert_eq!(req.uri().to_string(), format!("{DEFAULT_ENDPOINT}{path}"));
    assert_eq!(req.headers()["x-ls-key"], API_KEY);

    let json = String::from_utf8(base64_decode(std::str::from_utf8(req.body())?)?)?;
    assert_eq!(serde_json::from_str::<Value>(&json)?, expected);
    let payload: Payload = serde_json::from_str(&json)?;
    assert_eq!(json, canonical_json(&payload)?, "body must be canonical json");

    let timestamp: i64 = req.headers()["x-ls-time"].to_str()?.parse()?;
    let signature = RequestSigner::new(DEFAULT_ENDPOINT).sign(
        &test_credential(),
        &req.uri().to_string(),
        &payload,
        timestamp,
    )?;
    debug!("verify {method} {path} at {timestamp}");
    assert_eq!(req.headers()["x-ls-auth"], signature.as_str());
    Ok(())
}

#[tokio::test]
async fn test_signed_headers_use_current_time() -> Result<()> {
    let (http, client) = capturing_client();

    let before = now().timestamp();
    client.account().get().await?;
    let after = now().timestamp();

    let reqs = http.take();
    assert_eq!(reqs.len(), 1);
    let timestamp: i64 = reqs[0].headers()["x-ls-time"].to_str()?.parse()?;
    assert!(before <= timestamp && timestamp <= after);

    verify(&reqs[0], Method::GET, "/latest/account", json!({}))
}

#[tokio::test]
async fn test_user_requests() -> Result<()> {
    let (http, client) = capturing_client();
    let user = client.user();

    user.get("test@example.com").await?;
    user.set(
        "test@example.com",
        &HashMap::from([("location".to_string(), "midwest".to_string())]),
        &HashMap::from([("full_name".to_string(), "john smith".to_string())]),
    )
    .await?;

    let reqs = http.take();
    verify(&reqs[0], Method::GET, "/latest/user/test@example.com", json!({}))?;
    verify(
        &reqs[1],
        Method::POST,
        "/latest/user/test@example.com",
        json!({"location": "midwest", "properties": {"full_name": "john smith"}}),
    )
}

#[tokio::test]
async fn test_target_requests() -> Result<()> {
    let (http, client) = capturing_client();
    let target = client.target();

    let attribute: Payload = json!({"name": "location", "op": "eq", "value": "west coast"})
        .as_object()
        .cloned()
        .unwrap_or_default();
    target.get("eastwest").await?;
    target.create("eastwest", &[attribute.clone()]).await?;
    target.update("eastwest", &[attribute]).await?;

    let reqs = http.take();
    let expected = json!({"attributes": [{"name": "location", "op": "eq", "value": "west coast"}]});
    verify(&reqs[0], Method::GET, "/latest/target/eastwest", json!({}))?;
    verify(&reqs[1], Method::POST, "/latest/target/eastwest", expected.clone())?;
    verify(&reqs[2], Method::POST, "/latest/target/eastwest", expected)
}

#[tokio::test]
async fn test_target_email_requests() -> Result<()> {
    let (http, client) = capturing_client();
    let te = client.target_email();

    te.create("eastwest", "Subject", "<p>HTML Body</p>", "Plain body")
        .await?;
    te.send("eastwest", "aec71acea", "test@example.com").await?;
    te.send_test("eastwest", "aec71acea", "test@example.com", "qa@example.com")
        .await?;

    let reqs = http.take();
    verify(
        &reqs[0],
        Method::POST,
        "/latest/target/eastwest/email",
        json!({"subject": "Subject", "html": "<p>HTML Body</p>", "plain": "Plain body"}),
    )?;
    verify(
        &reqs[1],
        Method::POST,
        "/latest/target/eastwest/email/aec71acea/send",
        json!({"email_from": "test@example.com"}),
    )?;
    verify(
        &reqs[2],
        Method::POST,
        "/latest/target/eastwest/email/aec71acea/sendTestEmail",
        json!({"email_from": "test@example.com", "recipient": "qa@example.com"}),
    )
}

#[tokio::test]
async fn test_account_set_requests() -> Result<()> {
    let (http, client) = capturing_client();
    let account = client.account();

    let options: Payload = json!({"aws_access_key": "ak", "aws_secret_access_key": "sk"})
        .as_object()
        .cloned()
        .unwrap_or_default();
    account.set("aws", Some(&options)).await?;
    account.set("turret.io", None).await?;
    assert!(account.set("smtp", Some(&options)).await.is_err());

    let reqs = http.take();
    assert_eq!(reqs.len(), 2);
    verify(
        &reqs[0],
        Method::POST,
        "/latest/account/me",
        json!({"type": "aws", "options": {"aws_access_key": "ak", "aws_secret_access_key": "sk"}}),
    )?;
    verify(
        &reqs[1],
        Method::POST,
        "/latest/account/me",
        json!({"type": "turret.io"}),
    )
}
