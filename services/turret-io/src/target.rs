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

use std::sync::Arc;

use serde_json::Value;
use turret_io_core::Result;

use crate::client::{resource_path, SendRequest};
use crate::constants::*;
use crate::response::Response;
use crate::sign_request::Payload;

/// Target provides API functionality for targets, the segments users are classified into.
#[derive(Debug, Clone)]
pub struct Target {
    api: Arc<dyn SendRequest>,
}

impl Target {
    /// Create a new Target facade.
    pub fn new(api: Arc<dyn SendRequest>) -> Self {
        Self { api }
    }

    /// The client this facade sends through.
    pub fn api(&self) -> &dyn SendRequest {
        self.api.as_ref()
    }

    /// Load the target named `name`.
    pub async fn get(&self, name: &str) -> Result<Response> {
        self.api
            .get(&resource_path(TARGET_PATH, &[name]), &Payload::new())
            .await
    }

    /// Create a target matching users on `attributes`.
    ///
    /// ```no_run
    /// # async fn example(target: turret_io::Target) -> turret_io_core::Result<()> {
    /// use serde_json::json;
    ///
    /// let attributes = vec![
    ///     json!({"name": "location", "op": "eq", "value": "west coast"})
    ///         .as_object()
    ///         .cloned()
    ///         .unwrap_or_default(),
    /// ];
    /// target.create("new_target", &attributes).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, name: &str, attributes: &[Payload]) -> Result<Response> {
        self.api
            .post(&resource_path(TARGET_PATH, &[name]), &attributes_payload(attributes))
            .await
    }

    /// Replace the attributes of an existing target.
    pub async fn update(&self, name: &str, attributes: &[Payload]) -> Result<Response> {
        self.api
            .post(&resource_path(TARGET_PATH, &[name]), &attributes_payload(attributes))
            .await
    }
}

fn attributes_payload(attributes: &[Payload]) -> Payload {
    let mut payload = Payload::new();
    payload.insert(
        "attributes".to_string(),
        Value::Array(attributes.iter().cloned().map(Value::Object).collect()),
    );
    payload
}
