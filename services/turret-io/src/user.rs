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
use std::sync::Arc;

use serde_json::Value;
use turret_io_core::Result;

use crate::client::{resource_path, SendRequest};
use crate::constants::*;
use crate::response::Response;
use crate::sign_request::Payload;

/// User provides API functionality for users, identified by email address.
#[derive(Debug, Clone)]
pub struct User {
    api: Arc<dyn SendRequest>,
}

impl User {
    /// Create a new User facade.
    pub fn new(api: Arc<dyn SendRequest>) -> Self {
        Self { api }
    }

    /// The client this facade sends through.
    pub fn api(&self) -> &dyn SendRequest {
        self.api.as_ref()
    }

    /// Load a user by email address.
    pub async fn get(&self, email: &str) -> Result<Response> {
        self.api
            .get(&resource_path(USER_PATH, &[email]), &Payload::new())
            .await
    }

    /// Create or update the user with address `email`.
    ///
    /// `attributes` classify the user into targets. `properties` carry extra
    /// data available when drafting emails but not used for classification.
    pub async fn set(
        &self,
        email: &str,
        attributes: &HashMap<String, String>,
        properties: &HashMap<String, String>,
    ) -> Result<Response> {
        let mut payload: Payload = attributes
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
            .collect();
        if !properties.is_empty() {
            payload.insert(
                "properties".to_string(),
                Value::Object(
                    properties
                        .iter()
                        .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
                        .collect(),
                ),
            );
        }

        self.api
            .post(&resource_path(USER_PATH, &[email]), &payload)
            .await
    }
}
