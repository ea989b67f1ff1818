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

use anyhow::Result;
use mockito::{mock, Matcher};
use pretty_assertions::assert_eq;
use turret_io::Client;
use turret_io_core::{Context, ErrorKind};
use turret_io_http_send_reqwest::ReqwestHttpSend;

use super::{init_test_logger, test_credential, API_KEY};

fn mock_client() -> Client {
    init_test_logger();

    let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
    Client::new(ctx, test_credential()).with_endpoint(&mockito::server_url())
}

#[tokio::test]
async fn test_json_response() -> Result<()> {
    let m = mock("GET", "/latest/user/json@example.com")
        .match_header("x-ls-key", API_KEY)
        .match_header("x-ls-auth", Matcher::Any)
        .match_header("x-ls-time", Matcher::Regex(r"^\d+$".to_string()))
        .match_body("e30=")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"email":"json@example.com","attributes":{"location":"midwest"}}"#)
        .create();

    let resp = mock_client().user().get("json@example.com").await?;
    m.assert();

    assert_eq!(resp.status(), "200 OK");
    let body = resp.into_body().unwrap_or_default();
    assert_eq!(body["email"], "json@example.com");
    assert_eq!(body["attributes"]["location"], "midwest");
    Ok(())
}

#[tokio::test]
async fn test_unauthorized_response() -> Result<()> {
    let m = mock("GET", "/latest/user/unauthorized@example.com")
        .with_status(401)
        .with_body("Unauthorized")
        .create();

    let resp = mock_client()
        .user()
        .get("unauthorized@example.com")
        .await?;
    m.assert();

    assert_eq!(resp.status(), "401 Unauthorized");
    assert!(resp.is_unauthorized());
    assert!(resp.body().is_none());
    Ok(())
}

#[tokio::test]
async fn test_malformed_response() -> Result<()> {
    let m = mock("GET", "/latest/target/malformed")
        .with_status(200)
        .with_body("{not json")
        .create();

    let err = mock_client().target().get("malformed").await.unwrap_err();
    m.assert();

    assert_eq!(err.kind(), ErrorKind::ResponseInvalid);
    Ok(())
}

#[tokio::test]
async fn test_send_email_body() -> Result<()> {
    // base64 of {"email_from":"test@example.com"}
    let m = mock("POST", "/latest/target/mocked/email/aec71acea/send")
        .match_body("eyJlbWFpbF9mcm9tIjoidGVzdEBleGFtcGxlLmNvbSJ9")
        .with_status(200)
        .with_body(r#"{"success":true}"#)
        .create();

    let resp = mock_client()
        .target_email()
        .send("mocked", "aec71acea", "test@example.com")
        .await?;
    m.assert();

    assert_eq!(resp.body().map(|b| b["success"].clone()), Some(true.into()));
    Ok(())
}

#[tokio::test]
async fn test_user_set_body() -> Result<()> {
    // base64 of {"location":"midwest"}
    let m = mock("POST", "/latest/user/set@example.com")
        .match_body("eyJsb2NhdGlvbiI6Im1pZHdlc3QifQ==")
        .with_status(200)
        .with_body("{}")
        .create();

    let attributes = HashMap::from([("location".to_string(), "midwest".to_string())]);
    mock_client()
        .user()
        .set("set@example.com", &attributes, &HashMap::new())
        .await?;
    m.assert();
    Ok(())
}

#[tokio::test]
async fn test_invalid_account_set_is_not_sent() -> Result<()> {
    let m = mock("POST", "/latest/account/me").expect(0).create();

    let err = mock_client()
        .account()
        .set("invalid_method", None)
        .await
        .unwrap_err();
    m.assert();

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    Ok(())
}
