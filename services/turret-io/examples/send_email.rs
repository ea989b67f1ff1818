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
use serde_json::json;
use turret_io::{Client, Config, Payload};
use turret_io_core::{Context, OsEnv};
use turret_io_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for debugging
    let _ = env_logger::builder().is_test(true).try_init();

    // Create context with reqwest HTTP client, reading TURRET_IO_* from env
    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    // Fall back to demo keys, the service will answer 401 Unauthorized
    let config = Config::new().from_env(&ctx);
    let config = if config.api_key.is_none() || config.api_secret.is_none() {
        println!("No Turret.IO credentials found, using demo credentials for example");
        config.with_api_key("YWJjMTIz").with_api_secret("ZGVmZ2hp")
    } else {
        config
    };
    let client = Client::from_config(ctx, config).await?;

    // Example 1: Create or update a user
    println!("Example 1: Setting user attributes");
    let attributes = HashMap::from([("location".to_string(), "west coast".to_string())]);
    let properties = HashMap::from([("full_name".to_string(), "john smith".to_string())]);
    let resp = client
        .user()
        .set("test@example.com", &attributes, &properties)
        .await?;
    println!("Response: {} {:?}", resp.status(), resp.body());

    // Example 2: Create a target matching those users
    println!("\nExample 2: Creating a target");
    let attribute: Payload = json!({"name": "location", "op": "eq", "value": "west coast"})
        .as_object()
        .cloned()
        .unwrap_or_default();
    let resp = client.target().create("westcoast", &[attribute]).await?;
    println!("Response: {} {:?}", resp.status(), resp.body());

    // Example 3: Attach an email to the target and send a test copy
    println!("\nExample 3: Creating and testing an email");
    let te = client.target_email();
    let resp = te
        .create(
            "westcoast",
            "Hello west coast",
            "<p>Hello from the west coast</p>",
            "Hello from the west coast",
        )
        .await?;
    println!("Response: {} {:?}", resp.status(), resp.body());

    match resp.body().and_then(|b| b.get("id")).and_then(|v| v.as_str()) {
        Some(id) => {
            let resp = te
                .send_test("westcoast", id, "test@example.com", "qa@example.com")
                .await?;
            println!("Test email: {}", resp.status());
        }
        None => println!("No email was created, skipping test send"),
    }

    Ok(())
}
