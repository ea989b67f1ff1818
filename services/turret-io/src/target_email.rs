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

/// TargetEmail provides API functionality for the emails attached to a target.
#[derive(Debug, Clone)]
pub struct TargetEmail {
    api: Arc<dyn SendRequest>,
}

impl TargetEmail {
    /// Create a new TargetEmail facade.
    pub fn new(api: Arc<dyn SendRequest>) -> Self {
        Self { api }
    }

    /// The client this facade sends through.
    pub fn api(&self) -> &dyn SendRequest {
        self.api.as_ref()
    }

    /// Load the email `email_id` of target `target_name`.
    pub async fn get(&self, target_name: &str, email_id: &str) -> Result<Response> {
        self.api
            .get(&email_path(target_name, &[email_id]), &Payload::new())
            .await
    }

    /// Add a new email to target `target_name`.
    pub async fn create(
        &self,
        target_name: &str,
        subject: &str,
        html_body: &str,
        plain_body: &str,
    ) -> Result<Response> {
        self.api
            .post(
                &email_path(target_name, &[]),
                &content_payload(subject, html_body, plain_body),
            )
            .await
    }

    /// Replace the content of email `email_id`.
    pub async fn update(
        &self,
        target_name: &str,
        email_id: &str,
        subject: &str,
        html_body: &str,
        plain_body: &str,
    ) -> Result<Response> {
        self.api
            .post(
                &email_path(target_name, &[email_id]),
                &content_payload(subject, html_body, plain_body),
            )
            .await
    }

    /// Send email `email_id` to every user of the target.
    ///
    /// `from_email` must be a verified sender of the account.
    pub async fn send(&self, target_name: &str, email_id: &str, from_email: &str) -> Result<Response> {
        let mut payload = Payload::new();
        payload.insert("email_from".to_string(), Value::from(from_email));

        self.api
            .post(&email_path(target_name, &[email_id, "send"]), &payload)
            .await
    }

    /// Send email `email_id` to `recipient` only.
    ///
    /// `from_email` must be a verified sender of the account.
    pub async fn send_test(
        &self,
        target_name: &str,
        email_id: &str,
        from_email: &str,
        recipient: &str,
    ) -> Result<Response> {
        let mut payload = Payload::new();
        payload.insert("email_from".to_string(), Value::from(from_email));
        payload.insert("recipient".to_string(), Value::from(recipient));

        self.api
            .post(&email_path(target_name, &[email_id, "sendTestEmail"]), &payload)
            .await
    }
}

fn email_path(target_name: &str, rest: &[&str]) -> String {
    let mut segments = vec![target_name, "email"];
    segments.extend_from_slice(rest);
    resource_path(TARGET_PATH, &segments)
}

fn content_payload(subject: &str, html_body: &str, plain_body: &str) -> Payload {
    let mut payload = Payload::new();
    payload.insert("subject".to_string(), Value::from(subject));
    payload.insert("html".to_string(), Value::from(html_body));
    payload.insert("plain".to_string(), Value::from(plain_body));
    payload
}
