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

use std::env;

use anyhow::Result;
use log::warn;
use pretty_assertions::assert_eq;
use turret_io::{Client, Config};
use turret_io_core::{Context, OsEnv};
use turret_io_http_send_reqwest::ReqwestHttpSend;

use super::{init_test_logger, API_KEY, API_SECRET};

/// Client for the real service, with keys the service doesn't know.
///
/// Returns `None` unless `TURRET_IO_TEST` is `on`.
async fn init_live_client() -> Result<Option<Client>> {
    init_test_logger();
    let _ = dotenv::dotenv();

    if env::var("TURRET_IO_TEST").unwrap_or_default() != "on" {
        warn!("TURRET_IO_TEST is not set, skipped");
        return Ok(None);
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new()
        .with_api_key(API_KEY)
        .with_api_secret(API_SECRET);

    Ok(Some(Client::from_config(ctx, config).await?))
}

#[tokio::test]
async fn test_live_unknown_credential_is_unauthorized() -> Result<()> {
    let Some(client) = init_live_client().await? else {
        return Ok(());
    };

    let resp = client.user().get("test@example.com").await?;
    assert_eq!(resp.status(), "401 Unauthorized");
    assert!(resp.body().is_none());
    Ok(())
}

#[tokio::test]
async fn test_live_account_get_is_unauthorized() -> Result<()> {
    let Some(client) = init_live_client().await? else {
        return Ok(());
    };

    let resp = client.account().get().await?;
    assert!(resp.is_unauthorized());
    Ok(())
}
